use crate::{
    api::ApiError,
    components::{error::InlineErrorMessage, layout::Layout},
};
use leptos::*;
use leptos_router::use_navigate;

const INVALID_MEMBER_NUMBER: &str =
    "Member numbers may only contain letters, digits, '-', '_' and '.'";

fn is_path_safe(number: &str) -> bool {
    number
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        && number != "."
        && number != ".."
}

/// Path of the account page for a typed member number.
///
/// `Ok(None)` for blank input. Numbers that would not survive as a single
/// path segment are rejected.
pub fn member_path(input: &str) -> Result<Option<String>, ApiError> {
    let number = input.trim();
    if number.is_empty() {
        return Ok(None);
    }
    if !is_path_safe(number) {
        return Err(ApiError::validation(INVALID_MEMBER_NUMBER));
    }
    Ok(Some(format!("/members/{}", number)))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let member_number = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let navigate = use_navigate();

    view! {
        <Layout>
            <div class="max-w-md mx-auto bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <h2 class="text-lg font-semibold text-fg">"Find a member"</h2>
                <form
                    class="flex gap-2"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        match member_path(&member_number.get_untracked()) {
                            Ok(Some(path)) => {
                                error.set(None);
                                navigate(&path, Default::default());
                            }
                            Ok(None) => error.set(None),
                            Err(err) => error.set(Some(err)),
                        }
                    }
                >
                    <input
                        type="text"
                        placeholder="Member number"
                        class="flex-1 rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-form-control-text"
                        prop:value=member_number
                        on:input=move |ev| member_number.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                    >
                        "Open"
                    </button>
                </form>
                <InlineErrorMessage error=error/>
            </div>
        </Layout>
    }
}
