use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2"
                role="alert"
            >
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    error
                        .get()
                        .filter(|e| !matches!(e.code.as_str(), "" | "UNKNOWN" | "VALIDATION_ERROR"))
                        .map(|e| view! { <div class="text-xs opacity-75">{"Code: "}{e.code}</div> })
                }}
            </div>
        </Show>
    }
}
