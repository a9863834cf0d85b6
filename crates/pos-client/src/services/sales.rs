use pos_telemetry::log_event;
use pos_types::{MessageResponse, SaleData, SaleResponse};

use crate::guard::View;
use crate::{ApiClient, ApiError};

/// Sales. Every logged-in role may sell.
pub struct SaleService<'a> {
    api: &'a ApiClient,
}

impl<'a> SaleService<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Register a sale. The backend decrements stock and books the cash
    /// movement.
    pub async fn create(&self, sale: &SaleData) -> Result<MessageResponse, ApiError> {
        self.api.require_view(View::Sales)?;
        let response: MessageResponse = self.api.post("/sale/sales", sale).await?;
        log_event!(
            info,
            "sales",
            "Sale registered",
            lines = sale.items.len(),
            total = sale.total(),
            payment = %sale.payment_method
        );
        Ok(response)
    }

    /// Sale history as returned by the backend. Use
    /// `pos_reports::visible_sales` to narrow it to what the viewer may see.
    pub async fn list(&self) -> Result<Vec<SaleResponse>, ApiError> {
        self.api.get("/sale/sales").await
    }

    pub async fn get(&self, id: i64) -> Result<SaleResponse, ApiError> {
        self.api.get(&format!("/sale/sales/{id}")).await
    }
}
