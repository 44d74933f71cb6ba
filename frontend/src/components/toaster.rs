use crate::state::notifications::{use_notifier, Toast, ToastKind, ToastNotifier};
use leptos::*;

#[cfg(target_arch = "wasm32")]
const AUTO_DISMISS_MS: u32 = 5_000;

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => {
            "pointer-events-auto w-80 rounded-md border px-4 py-3 shadow-lg bg-status-success-bg border-status-success-border text-status-success-text"
        }
        ToastKind::Error => {
            "pointer-events-auto w-80 rounded-md border px-4 py-3 shadow-lg bg-status-error-bg border-status-error-border text-status-error-text"
        }
    }
}

#[component]
fn ToastItem(toast: Toast, notifier: ToastNotifier) -> impl IntoView {
    let id = toast.id;
    #[cfg(target_arch = "wasm32")]
    {
        // Dropping the stored timeout with the item cancels it.
        let _timer = store_value(gloo_timers::callback::Timeout::new(AUTO_DISMISS_MS, move || {
            notifier.dismiss(id)
        }));
    }
    let role = match toast.kind {
        ToastKind::Success => "status",
        ToastKind::Error => "alert",
    };

    view! {
        <div class=toast_class(toast.kind) role=role>
            <div class="flex items-start justify-between gap-3">
                <div>
                    <p class="text-sm font-semibold">{toast.title}</p>
                    <p class="text-sm">{toast.description}</p>
                </div>
                <button
                    type="button"
                    aria-label="Dismiss"
                    class="opacity-70 hover:opacity-100"
                    on:click=move |_| notifier.dismiss(id)
                >
                    {"✕"}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="pointer-events-none fixed bottom-4 right-4 z-[80] flex flex-col gap-2" aria-live="polite">
            <For
                each=move || notifier.toasts.get().items().to_vec()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast notifier=notifier/> }
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::notifications::{provide_notifier, Notifier};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn toaster_renders_pending_toasts() {
        let html = render_to_string(move || {
            let notifier = provide_notifier();
            notifier.success("Account has been unlocked", "Successfully unlocked account for Jane Doe");
            notifier.error("Failed to unlock account", "network down");
            view! { <Toaster/> }
        });
        assert!(html.contains("Successfully unlocked account for Jane Doe"));
        assert!(html.contains("network down"));
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("role=\"status\""));
    }
}
