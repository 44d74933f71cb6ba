use crate::api::{ApiClient, ApiError, MemberCredentialStatus};
use std::rc::Rc;

#[derive(Clone)]
pub struct MemberAccountRepository {
    client: Rc<ApiClient>,
}

impl MemberAccountRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_credential_status(
        &self,
        member_number: &str,
    ) -> Result<MemberCredentialStatus, ApiError> {
        let member_number = member_number.trim();
        if member_number.is_empty() {
            return Err(ApiError::validation("Member number is required"));
        }
        self.client.fetch_member_credentials(member_number).await
    }
}
