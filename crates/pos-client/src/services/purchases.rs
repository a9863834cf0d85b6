use pos_telemetry::log_event;
use pos_types::{MessageResponse, PurchaseData, PurchaseResponse};

use crate::{ApiClient, ApiError};

/// Stock purchases from providers. Admin only.
pub struct PurchaseService<'a> {
    api: &'a ApiClient,
}

impl<'a> PurchaseService<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn create(&self, purchase: &PurchaseData) -> Result<MessageResponse, ApiError> {
        self.api.require_admin("register purchase")?;
        let response: MessageResponse = self.api.post("/purchase/purchases", purchase).await?;
        log_event!(
            info,
            "purchases",
            "Purchase registered",
            provider_id = purchase.provider_id,
            lines = purchase.items.len()
        );
        Ok(response)
    }

    pub async fn list(&self) -> Result<Vec<PurchaseResponse>, ApiError> {
        self.api.require_admin("list purchases")?;
        self.api.get("/purchase/purchases").await
    }
}
