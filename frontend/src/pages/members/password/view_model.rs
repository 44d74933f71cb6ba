use super::{
    actions::{unlock_account, UnlockOutcome},
    repository::PasswordManagementRepository,
    utils::{badges_for, is_locked, StatusBadge},
};
use crate::{
    api::{ApiClient, MemberCredentialStatus},
    state::notifications::use_notifier,
    utils::time,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct PasswordManagementViewModel {
    pub show_reset_dialog: RwSignal<bool>,
    pub is_unlocking: RwSignal<bool>,
    /// Bumped when a lock lapses so the derived signals re-read the clock.
    pub expiry_tick: RwSignal<u64>,
    pub badges: Signal<Vec<StatusBadge>>,
    pub is_locked: Signal<bool>,
    pub unlock: Callback<()>,
    pub set_reset_dialog_open: Callback<bool>,
}

pub fn use_password_management_view_model(
    status: MemberCredentialStatus,
    on_unlocked: Option<Callback<()>>,
) -> PasswordManagementViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = PasswordManagementRepository::new_with_client(Rc::new(api));
    let notifier = use_notifier();

    let show_reset_dialog = create_rw_signal(false);
    let is_unlocking = create_rw_signal(false);
    let expiry_tick = create_rw_signal(0u64);

    let member = status.member_ref();
    let locked_until = status.locked_until;
    let status = store_value(status);

    // Both read the wall clock on every evaluation; nothing is cached.
    let badges = Signal::derive(move || {
        let _ = expiry_tick.get();
        status.with_value(|status| badges_for(status, time::now()))
    });
    let locked = Signal::derive(move || {
        let _ = expiry_tick.get();
        is_locked(locked_until, time::now())
    });

    #[cfg(target_arch = "wasm32")]
    {
        use super::utils::lock_expiry_delay_ms;
        use gloo_timers::callback::Timeout;

        let timer = store_value(None::<Timeout>);
        create_effect(move |_| {
            let _ = expiry_tick.get();
            let next = lock_expiry_delay_ms(locked_until, time::now()).map(|delay| {
                Timeout::new(delay, move || {
                    expiry_tick.update(|tick| *tick = tick.wrapping_add(1))
                })
            });
            // Replacing the stored timeout cancels the previous one.
            timer.set_value(next);
        });
    }

    let unlock = Callback::new(move |_: ()| {
        let repo = repository.clone();
        let member = member.clone();
        spawn_local(async move {
            let outcome = unlock_account(&repo, &notifier, &is_unlocking, &member).await;
            if outcome == UnlockOutcome::Unlocked {
                if let Some(on_unlocked) = on_unlocked {
                    on_unlocked.call(());
                }
            }
        });
    });

    let set_reset_dialog_open = Callback::new(move |open: bool| show_reset_dialog.set(open));

    PasswordManagementViewModel {
        show_reset_dialog,
        is_unlocking,
        expiry_tick,
        badges,
        is_locked: locked,
        unlock,
        set_reset_dialog_open,
    }
}
