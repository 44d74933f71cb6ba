use super::actions::CredentialAdmin;
use crate::api::{ApiClient, ApiError};
use std::rc::Rc;

#[derive(Clone)]
pub struct PasswordManagementRepository {
    client: Rc<ApiClient>,
}

impl PasswordManagementRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }
}

impl CredentialAdmin for PasswordManagementRepository {
    async fn reset_failed_login(&self, member_number: &str) -> Result<(), ApiError> {
        self.client.reset_failed_login(member_number).await
    }

    async fn admin_reset_password(
        &self,
        member_number: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        self.client
            .admin_reset_password(member_number, new_password)
            .await
    }

    async fn send_magic_link(&self, member_number: &str) -> Result<(), ApiError> {
        self.client.send_magic_link(member_number).await
    }
}
