//! Account actions behind the password management panel.
//!
//! Each action reports its outcome through a [`Notifier`] and never propagates
//! the backend error further. The credential status itself is never touched;
//! callers refetch it when an action succeeds.

use crate::{
    api::{ApiError, MemberRef},
    state::notifications::Notifier,
    utils::time,
};
use leptos::{RwSignal, SignalGetUntracked, SignalSet};
use std::cell::Cell;

pub const UNLOCKED_TITLE: &str = "Account has been unlocked";
pub const UNLOCK_FAILED_TITLE: &str = "Failed to unlock account";
pub const PASSWORD_RESET_TITLE: &str = "Password has been reset";
pub const PASSWORD_RESET_FAILED_TITLE: &str = "Failed to reset password";
pub const MAGIC_LINK_SENT_TITLE: &str = "Magic link sent";
pub const MAGIC_LINK_FAILED_TITLE: &str = "Failed to send magic link";

/// Privileged credential operations offered by the backend.
#[allow(async_fn_in_trait)]
pub trait CredentialAdmin {
    /// Clears the failed-login counter and any lock for the member.
    async fn reset_failed_login(&self, member_number: &str) -> Result<(), ApiError>;

    async fn admin_reset_password(
        &self,
        member_number: &str,
        new_password: &str,
    ) -> Result<(), ApiError>;

    async fn send_magic_link(&self, member_number: &str) -> Result<(), ApiError>;
}

/// Flag that is set for the duration of an unlock request.
pub trait InFlightFlag {
    fn is_in_flight(&self) -> bool;
    fn set_in_flight(&self, value: bool);
}

impl InFlightFlag for Cell<bool> {
    fn is_in_flight(&self) -> bool {
        self.get()
    }

    fn set_in_flight(&self, value: bool) {
        self.set(value);
    }
}

impl InFlightFlag for RwSignal<bool> {
    fn is_in_flight(&self) -> bool {
        self.get_untracked()
    }

    fn set_in_flight(&self, value: bool) {
        self.set(value);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockOutcome {
    Unlocked,
    Failed(ApiError),
    /// A previous request has not resolved yet; nothing was sent.
    AlreadyInFlight,
}

pub async fn unlock_account<A, N, F>(
    admin: &A,
    notifier: &N,
    in_flight: &F,
    member: &MemberRef,
) -> UnlockOutcome
where
    A: CredentialAdmin,
    N: Notifier + ?Sized,
    F: InFlightFlag + ?Sized,
{
    if in_flight.is_in_flight() {
        log::warn!(
            "unlock already in flight member_number={} at={}",
            member.member_number,
            time::now_rfc3339()
        );
        return UnlockOutcome::AlreadyInFlight;
    }

    log::info!(
        "unlocking account member_number={} member_name={} at={}",
        member.member_number,
        member.member_name,
        time::now_rfc3339()
    );
    in_flight.set_in_flight(true);
    let result = admin.reset_failed_login(&member.member_number).await;
    in_flight.set_in_flight(false);

    match result {
        Ok(()) => {
            notifier.success(
                UNLOCKED_TITLE,
                &format!("Successfully unlocked account for {}", member.member_name),
            );
            UnlockOutcome::Unlocked
        }
        Err(err) => {
            log::error!(
                "failed to unlock account member_number={} code={} error={} at={}",
                member.member_number,
                err.code,
                err.error,
                time::now_rfc3339()
            );
            notifier.error(UNLOCK_FAILED_TITLE, &err.error);
            UnlockOutcome::Failed(err)
        }
    }
}

/// Validation failures come back as `VALIDATION_ERROR` without a request or notification.
pub async fn submit_password_reset<A, N>(
    admin: &A,
    notifier: &N,
    member: &MemberRef,
    form: &super::utils::ResetPasswordForm,
) -> Result<(), ApiError>
where
    A: CredentialAdmin,
    N: Notifier + ?Sized,
{
    let new_password = form.validate()?;
    log::info!(
        "resetting password member_number={} at={}",
        member.member_number,
        time::now_rfc3339()
    );
    match admin
        .admin_reset_password(&member.member_number, &new_password)
        .await
    {
        Ok(()) => {
            notifier.success(
                PASSWORD_RESET_TITLE,
                &format!("New password set for {}", member.member_name),
            );
            Ok(())
        }
        Err(err) => {
            log::error!(
                "failed to reset password member_number={} error={} at={}",
                member.member_number,
                err.error,
                time::now_rfc3339()
            );
            notifier.error(PASSWORD_RESET_FAILED_TITLE, &err.error);
            Err(err)
        }
    }
}

pub async fn send_member_magic_link<A, N>(
    admin: &A,
    notifier: &N,
    member: &MemberRef,
) -> Result<(), ApiError>
where
    A: CredentialAdmin,
    N: Notifier + ?Sized,
{
    log::info!(
        "sending magic link member_number={} at={}",
        member.member_number,
        time::now_rfc3339()
    );
    match admin.send_magic_link(&member.member_number).await {
        Ok(()) => {
            notifier.success(
                MAGIC_LINK_SENT_TITLE,
                &format!("A sign-in link was sent to {}", member.member_name),
            );
            Ok(())
        }
        Err(err) => {
            log::error!(
                "failed to send magic link member_number={} error={} at={}",
                member.member_number,
                err.error,
                time::now_rfc3339()
            );
            notifier.error(MAGIC_LINK_FAILED_TITLE, &err.error);
            Err(err)
        }
    }
}
