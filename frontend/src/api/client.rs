use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client, RequestBuilder, Response,
};
use serde::Serialize;

use crate::{api::types::*, config, utils::storage as storage_utils};

const MEMBER_CREDENTIAL_COLUMNS: &str = "id,member_number,full_name,password_set_at,failed_login_attempts,locked_until,password_reset_required";
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    anon_key: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            anon_key: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            anon_key: None,
        }
    }

    pub fn with_anon_key(mut self, anon_key: impl Into<String>) -> Self {
        self.anon_key = Some(anon_key.into());
        self
    }

    async fn resolved_endpoint(&self) -> (String, String) {
        match (&self.base_url, &self.anon_key) {
            (Some(base), Some(key)) => (base.clone(), key.clone()),
            (base, key) => {
                let cfg = config::resolved().await;
                (
                    base.clone().unwrap_or(cfg.api_base_url),
                    key.clone().unwrap_or(cfg.anon_key),
                )
            }
        }
    }

    fn auth_headers(anon_key: &str) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        let bearer = storage_utils::access_token().unwrap_or_else(|| anon_key.to_string());

        headers.insert(
            "apikey",
            HeaderValue::from_str(anon_key)
                .map_err(|_| ApiError::unknown("Invalid API key format"))?,
        );
        headers.insert(
            AUTHORIZATION,
            format!("Bearer {}", bearer)
                .parse()
                .map_err(|_| ApiError::unknown("Invalid token format"))?,
        );
        Ok(headers)
    }

    async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
        request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    async fn error_from_response(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<RestErrorBody>(&body) {
            Ok(parsed) => parsed.into(),
            Err(_) => ApiError::unknown(format!("Request failed with status {}", status)),
        }
    }

    /// Invokes a stored procedure that returns no payload.
    pub async fn rpc<P: Serialize + ?Sized>(&self, name: &str, params: &P) -> Result<(), ApiError> {
        let (base_url, anon_key) = self.resolved_endpoint().await;
        let headers = Self::auth_headers(&anon_key)?;
        let response = Self::send(
            self.client
                .post(format!("{}/rpc/{}", base_url, name))
                .headers(headers)
                .json(params),
        )
        .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn fetch_member_credentials(
        &self,
        member_number: &str,
    ) -> Result<MemberCredentialStatus, ApiError> {
        let (base_url, anon_key) = self.resolved_endpoint().await;
        let headers = Self::auth_headers(&anon_key)?;
        let response = Self::send(
            self.client
                .get(format!("{}/members", base_url))
                .headers(headers)
                .header(ACCEPT, SINGLE_OBJECT)
                .query(&[
                    ("member_number", format!("eq.{}", member_number)),
                    ("select", MEMBER_CREDENTIAL_COLUMNS.to_string()),
                ]),
        )
        .await?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn reset_failed_login(&self, member_number: &str) -> Result<(), ApiError> {
        self.rpc(
            "reset_failed_login",
            &MemberNumberParams {
                member_number: member_number.to_string(),
            },
        )
        .await
    }

    pub async fn admin_reset_password(
        &self,
        member_number: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        self.rpc(
            "admin_reset_password",
            &AdminResetPasswordParams {
                member_number: member_number.to_string(),
                new_password: new_password.to_string(),
            },
        )
        .await
    }

    pub async fn send_magic_link(&self, member_number: &str) -> Result<(), ApiError> {
        self.rpc(
            "send_magic_link",
            &MemberNumberParams {
                member_number: member_number.to_string(),
            },
        )
        .await
    }
}
