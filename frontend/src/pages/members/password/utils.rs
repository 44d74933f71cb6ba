use crate::api::{ApiError, MemberCredentialStatus};
use chrono::{DateTime, Utc};

/// Longest delay a browser timer accepts (2^31 - 1 ms).
pub const MAX_TIMER_DELAY_MS: u32 = i32::MAX as u32;
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    PasswordSet,
    NoPassword,
    Locked,
    ResetRequired,
}

impl StatusBadge {
    pub fn label(self) -> &'static str {
        match self {
            StatusBadge::PasswordSet => "Password Set",
            StatusBadge::NoPassword => "No Password",
            StatusBadge::Locked => "Locked",
            StatusBadge::ResetRequired => "Reset Required",
        }
    }

    /// Stable hook for styling and tests.
    pub fn key(self) -> &'static str {
        match self {
            StatusBadge::PasswordSet => "password-set",
            StatusBadge::NoPassword => "no-password",
            StatusBadge::Locked => "locked",
            StatusBadge::ResetRequired => "reset-required",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            StatusBadge::PasswordSet => BadgeTone::Success,
            StatusBadge::NoPassword => BadgeTone::Warning,
            StatusBadge::Locked => BadgeTone::Danger,
            StatusBadge::ResetRequired => BadgeTone::Info,
        }
    }
}

pub fn is_locked(locked_until: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    locked_until.is_some_and(|until| until > now)
}

pub fn derive_badges(
    password_set_at: Option<DateTime<Utc>>,
    locked_until: Option<DateTime<Utc>>,
    password_reset_required: bool,
    now: DateTime<Utc>,
) -> Vec<StatusBadge> {
    let mut badges = Vec::with_capacity(3);
    badges.push(if password_set_at.is_some() {
        StatusBadge::PasswordSet
    } else {
        StatusBadge::NoPassword
    });
    if is_locked(locked_until, now) {
        badges.push(StatusBadge::Locked);
    }
    if password_reset_required {
        badges.push(StatusBadge::ResetRequired);
    }
    badges
}

pub fn badges_for(status: &MemberCredentialStatus, now: DateTime<Utc>) -> Vec<StatusBadge> {
    derive_badges(
        status.password_set_at,
        status.locked_until,
        status.password_reset_required,
        now,
    )
}

pub fn failed_attempts_text(failed_login_attempts: u32) -> Option<String> {
    (failed_login_attempts > 0).then(|| format!("Failed login attempts: {}", failed_login_attempts))
}

pub fn unlock_button_label(is_unlocking: bool) -> &'static str {
    if is_unlocking {
        "Unlocking..."
    } else {
        "Unlock"
    }
}

/// Milliseconds until the lock lapses, plus one so the strict comparison has flipped
/// when the timer fires. `None` when there is nothing to wait for.
pub fn lock_expiry_delay_ms(
    locked_until: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<u32> {
    let until = locked_until.filter(|until| *until > now)?;
    let millis = (until - now).num_milliseconds().saturating_add(1);
    Some(u32::try_from(millis).map_or(MAX_TIMER_DELAY_MS, |ms| ms.min(MAX_TIMER_DELAY_MS)))
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct ResetPasswordForm {
    pub new_password: String,
    pub confirm_password: String,
}

impl ResetPasswordForm {
    /// Returns the password to submit, exactly as typed. Surrounding
    /// whitespace does not count towards the minimum length.
    pub fn validate(&self) -> Result<String, ApiError> {
        let password = self.new_password.trim();
        if password.is_empty() {
            return Err(ApiError::validation("Password is required"));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        if self.new_password != self.confirm_password {
            return Err(ApiError::validation("Passwords do not match"));
        }
        Ok(self.new_password.clone())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
