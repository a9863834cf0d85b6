use pos_telemetry::log_event;
use pos_types::{MessageResponse, SellerDraft, User, UserId};

use crate::{ApiClient, ApiError};

/// Seller accounts. Admin only.
pub struct UserService<'a> {
    api: &'a ApiClient,
}

impl<'a> UserService<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list_sellers(&self) -> Result<Vec<User>, ApiError> {
        self.api.require_admin("list sellers")?;
        self.api.get("/user/vendedores").await
    }

    /// Register a seller. Without a password the backend generates one.
    pub async fn register_seller(&self, draft: &SellerDraft) -> Result<MessageResponse, ApiError> {
        self.api.require_admin("register seller")?;
        let data = draft.validate()?;
        let response: MessageResponse = self.api.post("/user/register-vendedor", &data).await?;
        log_event!(info, "users", "Seller registered", username = %data.username);
        Ok(response)
    }

    /// Block an active seller or unblock a blocked one.
    pub async fn toggle_block(&self, id: UserId) -> Result<MessageResponse, ApiError> {
        self.api.require_admin("block seller")?;
        let response: MessageResponse = self
            .api
            .put_empty(&format!("/user/vendedor/toggle-block/{id}"))
            .await?;
        log_event!(info, "users", "Seller block toggled", id);
        Ok(response)
    }

    pub async fn reset_password(&self, id: UserId) -> Result<MessageResponse, ApiError> {
        self.api.require_admin("reset seller password")?;
        let response: MessageResponse = self
            .api
            .put_empty(&format!("/user/vendedor/reset-password/{id}"))
            .await?;
        log_event!(info, "users", "Seller password reset", id);
        Ok(response)
    }
}
