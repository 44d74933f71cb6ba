use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Nullable columns come back as JSON `null`; read those as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Credential state of one member as held by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberCredentialStatus {
    #[serde(rename = "id")]
    pub member_id: String,
    pub member_number: String,
    #[serde(rename = "full_name")]
    pub member_name: String,
    #[serde(default)]
    pub password_set_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub failed_login_attempts: u32,
    #[serde(default)]
    pub locked_until: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password_reset_required: bool,
}

impl MemberCredentialStatus {
    pub fn member_ref(&self) -> MemberRef {
        MemberRef {
            member_number: self.member_number.clone(),
            member_name: self.member_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRef {
    pub member_number: String,
    pub member_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberNumberParams {
    pub member_number: String,
}

#[derive(Clone, Serialize)]
pub struct AdminResetPasswordParams {
    pub member_number: String,
    pub new_password: String,
}

/// Error body returned by the REST layer.
#[derive(Debug, Clone, Deserialize)]
pub struct RestErrorBody {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<Value>,
    #[serde(default)]
    pub hint: Option<String>,
}

use leptos::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl From<RestErrorBody> for ApiError {
    fn from(body: RestErrorBody) -> Self {
        let details = match (body.details, body.hint) {
            (Some(details), _) => Some(details),
            (None, Some(hint)) => Some(Value::String(hint)),
            (None, None) => None,
        };
        Self {
            error: body.message,
            code: body.code.unwrap_or_else(|| "UNKNOWN".to_string()),
            details,
        }
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn deserialize_member_credential_status() {
        let raw = r#"{
            "id": "m-1",
            "member_number": "12345",
            "full_name": "Jane Doe",
            "password_set_at": "2025-01-02T10:00:00Z",
            "failed_login_attempts": 3,
            "locked_until": null,
            "password_reset_required": true
        }"#;
        let status: MemberCredentialStatus = serde_json::from_str(raw).unwrap();
        assert_eq!(status.member_id, "m-1");
        assert_eq!(status.member_name, "Jane Doe");
        assert_eq!(
            status.password_set_at,
            Some(Utc.with_ymd_and_hms(2025, 1, 2, 10, 0, 0).unwrap())
        );
        assert_eq!(status.failed_login_attempts, 3);
        assert!(status.locked_until.is_none());
        assert!(status.password_reset_required);
    }

    #[test]
    fn missing_optional_columns_use_defaults() {
        let raw = r#"{"id":"m-2","member_number":"7","full_name":"Sam"}"#;
        let status: MemberCredentialStatus = serde_json::from_str(raw).unwrap();
        assert!(status.password_set_at.is_none());
        assert_eq!(status.failed_login_attempts, 0);
        assert!(!status.password_reset_required);
        assert_eq!(
            status.member_ref(),
            MemberRef {
                member_number: "7".into(),
                member_name: "Sam".into(),
            }
        );
    }

    #[test]
    fn null_columns_read_as_defaults() {
        let raw = r#"{
            "id": "m-3",
            "member_number": "99",
            "full_name": "Ada",
            "password_set_at": null,
            "failed_login_attempts": null,
            "locked_until": null,
            "password_reset_required": null
        }"#;
        let status: MemberCredentialStatus = serde_json::from_str(raw).unwrap();
        assert_eq!(status.failed_login_attempts, 0);
        assert!(!status.password_reset_required);
        assert!(status.password_set_at.is_none());
        assert!(status.locked_until.is_none());
    }

    #[test]
    fn rest_error_body_maps_to_api_error() {
        let body: RestErrorBody = serde_json::from_str(
            r#"{"message":"member not found","code":"P0002","details":null,"hint":"check the number"}"#,
        )
        .unwrap();
        let error = ApiError::from(body);
        assert_eq!(error.error, "member not found");
        assert_eq!(error.code, "P0002");
        assert_eq!(error.details, Some(Value::String("check the number".into())));
        assert_eq!(error.to_string(), "member not found");
    }
}
