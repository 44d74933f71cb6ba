use crate::{
    api::{ApiClient, ApiError, MemberRef},
    components::{dialog::ModalDialog, error::InlineErrorMessage},
    pages::members::password::{
        actions::submit_password_reset, repository::PasswordManagementRepository,
        utils::ResetPasswordForm,
    },
    state::notifications::use_notifier,
};
use leptos::*;
use std::rc::Rc;

const INPUT_CLASS: &str = "block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-form-control-text placeholder-form-control-placeholder focus:outline-none focus:ring-2 focus:ring-action-primary-focus";

/// Lets an administrator set a new password for a member.
///
/// Visibility is owned by the caller: the dialog only reports wanted changes
/// through `on_open_change`, after a cancel or a successful submit.
#[component]
pub fn ResetPasswordDialog(
    #[prop(into)] open: Signal<bool>,
    on_open_change: Callback<bool>,
    #[prop(into)] member_number: String,
    #[prop(into)] member_name: String,
    #[prop(optional)] on_reset: Option<Callback<()>>,
) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = PasswordManagementRepository::new_with_client(Rc::new(api));
    let notifier = use_notifier();
    let member = MemberRef {
        member_number,
        member_name: member_name.clone(),
    };

    let form = create_rw_signal(ResetPasswordForm::default());
    let validation_error = create_rw_signal(None::<ApiError>);

    let submit_action = create_action(move |submitted: &ResetPasswordForm| {
        let repo = repository.clone();
        let member = member.clone();
        let submitted = submitted.clone();
        async move { submit_password_reset(&repo, &notifier, &member, &submitted).await }
    });
    let pending = submit_action.pending();

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => {
                    form.update(|state| state.reset());
                    validation_error.set(None);
                    on_open_change.call(false);
                    if let Some(on_reset) = on_reset {
                        on_reset.call(());
                    }
                }
                Err(err) if err.code == "VALIDATION_ERROR" => validation_error.set(Some(err)),
                // Backend failures were already surfaced as a notification.
                Err(_) => validation_error.set(None),
            }
        }
    });

    let close = Callback::new(move |_: ()| {
        form.update(|state| state.reset());
        validation_error.set(None);
        on_open_change.call(false);
    });

    let title = format!("Reset password for {}", member_name);

    view! {
        <ModalDialog is_open=open title=title on_close=close>
            <form
                class="space-y-4"
                on:submit=move |ev| {
                    ev.prevent_default();
                    // Enter in a field submits even while the button is disabled.
                    if !pending.get_untracked() {
                        submit_action.dispatch(form.get_untracked());
                    }
                }
            >
                <div class="space-y-1">
                    <label for="reset-new-password" class="text-sm text-fg-muted">"New password"</label>
                    <input
                        id="reset-new-password"
                        type="password"
                        autocomplete="new-password"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|state| state.new_password.clone())
                        on:input=move |ev| {
                            form.update(|state| state.new_password = event_target_value(&ev));
                        }
                    />
                </div>
                <div class="space-y-1">
                    <label for="reset-confirm-password" class="text-sm text-fg-muted">"Confirm password"</label>
                    <input
                        id="reset-confirm-password"
                        type="password"
                        autocomplete="new-password"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|state| state.confirm_password.clone())
                        on:input=move |ev| {
                            form.update(|state| state.confirm_password = event_target_value(&ev));
                        }
                    />
                </div>
                <InlineErrorMessage error=validation_error/>
                <div class="flex justify-end gap-2">
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                        on:click=move |_| close.call(())
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Resetting..." } else { "Reset Password" }}
                    </button>
                </div>
            </form>
        </ModalDialog>
    }
}
