use super::{
    components::{
        magic_link_button::MagicLinkButton, reset_dialog::ResetPasswordDialog,
        status_badges::StatusBadges,
    },
    utils::{failed_attempts_text, unlock_button_label},
    view_model::use_password_management_view_model,
};
use crate::api::MemberCredentialStatus;
use leptos::*;

const OUTLINE_BUTTON_CLASS: &str = "inline-flex items-center rounded-md border border-border px-3 py-1.5 text-sm font-medium text-fg bg-surface-elevated hover:bg-action-ghost-bg-hover disabled:opacity-50";

/// Disabled while an unlock request is in flight.
#[component]
pub fn UnlockButton(
    #[prop(into)] is_unlocking: Signal<bool>,
    on_unlock: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=OUTLINE_BUTTON_CLASS
            data-action="unlock"
            disabled=move || is_unlocking.get()
            on:click=move |_| on_unlock.call(())
        >
            {move || unlock_button_label(is_unlocking.get())}
        </button>
    }
}

/// Password and lock state of one member, with unlock and reset controls.
///
/// The panel never refreshes `status` itself. Pass `on_unlocked` and
/// `on_password_reset` to refetch after a successful change.
#[component]
pub fn PasswordManagementSection(
    status: MemberCredentialStatus,
    #[prop(optional)] on_unlocked: Option<Callback<()>>,
    #[prop(optional)] on_password_reset: Option<Callback<()>>,
) -> impl IntoView {
    let failed_attempts = failed_attempts_text(status.failed_login_attempts);
    let member_number = status.member_number.clone();
    let member_name = status.member_name.clone();

    let vm = use_password_management_view_model(status, on_unlocked);
    let is_locked = vm.is_locked;
    let is_unlocking = vm.is_unlocking;
    let unlock = vm.unlock;
    let show_reset_dialog = vm.show_reset_dialog;

    view! {
        <section class="space-y-4 border-t border-border pt-4" data-section="password-management">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h4 class="text-sm font-medium text-fg">"Password Status"</h4>
                    <StatusBadges badges=vm.badges/>
                </div>
                <div class="flex items-center gap-2">
                    <Show when=move || is_locked.get()>
                        <UnlockButton is_unlocking=is_unlocking on_unlock=unlock/>
                    </Show>
                    <button
                        type="button"
                        class=OUTLINE_BUTTON_CLASS
                        data-action="reset-password"
                        on:click=move |_| show_reset_dialog.set(true)
                    >
                        "Reset Password"
                    </button>
                </div>
            </div>
            {failed_attempts
                .map(|text| {
                    view! {
                        <p class="text-sm text-fg-muted" data-field="failed-login-attempts">
                            {text}
                        </p>
                    }
                })}
            <MagicLinkButton member_number=member_number.clone() member_name=member_name.clone()/>
            <ResetPasswordDialog
                open=show_reset_dialog
                on_open_change=vm.set_reset_dialog_open
                member_number=member_number
                member_name=member_name
                on_reset=on_password_reset.unwrap_or_else(|| Callback::new(|_| {}))
            />
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{locked_member_status, member_status};
    use crate::test_support::ssr::render_to_string;
    use chrono::Duration;

    fn render(status: MemberCredentialStatus) -> String {
        render_to_string(move || view! { <PasswordManagementSection status=status/> })
    }

    #[test]
    fn renders_password_set_without_lock() {
        let html = render(member_status());
        assert!(html.contains("Password Set"));
        assert!(!html.contains("No Password"));
        assert!(!html.contains("data-badge=\"locked\""));
        assert!(!html.contains("data-action=\"unlock\""));
        assert!(!html.contains("Reset Required"));
        assert!(html.contains("Reset Password"));
        assert!(html.contains("Send Magic Link"));
    }

    #[test]
    fn renders_no_password_and_reset_required() {
        let html = render(MemberCredentialStatus {
            password_set_at: None,
            password_reset_required: true,
            ..member_status()
        });
        assert!(html.contains("No Password"));
        assert!(!html.contains("Password Set"));
        assert!(html.contains("Reset Required"));
    }

    #[test]
    fn active_lock_shows_badge_and_unlock_button() {
        let html = render(locked_member_status(Duration::hours(1)));
        assert!(html.contains("data-badge=\"locked\""));
        assert!(html.contains("data-action=\"unlock\""));
        assert!(html.contains("Unlock"));
        assert!(!html.contains("Unlocking..."));
    }

    #[test]
    fn unlock_button_disabled_while_in_flight() {
        let html = render_to_string(|| {
            view! { <UnlockButton is_unlocking=Signal::derive(|| true) on_unlock=Callback::new(|_| {})/> }
        });
        // The class list carries a `disabled:` variant; only look at attributes.
        let attrs = html.replace(OUTLINE_BUTTON_CLASS, "");
        assert!(attrs.contains("disabled"));
        assert!(html.contains("Unlocking..."));

        let html = render_to_string(|| {
            view! { <UnlockButton is_unlocking=Signal::derive(|| false) on_unlock=Callback::new(|_| {})/> }
        });
        assert!(!html.replace(OUTLINE_BUTTON_CLASS, "").contains("disabled"));
        assert!(html.contains("Unlock"));
        assert!(!html.contains("Unlocking..."));
    }

    #[test]
    fn lapsed_lock_hides_badge_and_unlock_button() {
        let html = render(locked_member_status(Duration::seconds(-1)));
        assert!(!html.contains("data-badge=\"locked\""));
        assert!(!html.contains("data-action=\"unlock\""));
    }

    #[test]
    fn failed_attempts_only_when_positive() {
        let html = render(member_status());
        assert!(!html.contains("Failed login attempts"));

        let html = render(MemberCredentialStatus {
            failed_login_attempts: 3,
            ..member_status()
        });
        assert!(html.contains("Failed login attempts: 3"));
    }

    #[test]
    fn reset_dialog_starts_closed() {
        let html = render(member_status());
        assert!(!html.contains("role=\"dialog\""));
    }
}
