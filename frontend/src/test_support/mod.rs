#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::MemberCredentialStatus;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    pub fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    pub fn member_status() -> MemberCredentialStatus {
        MemberCredentialStatus {
            member_id: "m-1".into(),
            member_number: "12345".into(),
            member_name: "Jane Doe".into(),
            password_set_at: Some(fixed_now() - Duration::days(30)),
            failed_login_attempts: 0,
            locked_until: None,
            password_reset_required: false,
        }
    }

    /// Status locked relative to the real clock, for rendered views.
    pub fn locked_member_status(lock_for: Duration) -> MemberCredentialStatus {
        MemberCredentialStatus {
            failed_login_attempts: 5,
            locked_until: Some(Utc::now() + lock_for),
            ..member_status()
        }
    }
}
