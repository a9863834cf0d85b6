use chrono::NaiveDate;
use pos_telemetry::log_event;
use pos_types::{Amount, CashBalance, CashMovement, ExtractionDraft, MessageResponse};
use serde::Serialize;

use crate::{ApiClient, ApiError};

#[derive(Serialize)]
struct MovementsQuery {
    from_date: String,
}

/// Cash drawer: extractions, movements and balance. Admin only.
pub struct CashService<'a> {
    api: &'a ApiClient,
}

impl<'a> CashService<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Take money out of the drawer.
    pub async fn extract(&self, draft: &ExtractionDraft) -> Result<MessageResponse, ApiError> {
        self.api.require_admin("register extraction")?;
        let data = draft.validate()?;
        let response: MessageResponse = self.api.post("/cash/extraction", &data).await?;
        log_event!(
            info,
            "cash",
            "Extraction registered",
            amount = data.amount,
            person = %data.person
        );
        Ok(response)
    }

    /// Movements since `from` (inclusive), or the whole history.
    pub async fn movements(&self, from: Option<NaiveDate>) -> Result<Vec<CashMovement>, ApiError> {
        self.api.require_admin("view cash movements")?;
        match from {
            Some(date) => {
                let query = MovementsQuery {
                    from_date: date.format("%Y-%m-%d").to_string(),
                };
                self.api.get_with_query("/cash/movements", &query).await
            }
            None => self.api.get("/cash/movements").await,
        }
    }

    pub async fn balance(&self) -> Result<Amount, ApiError> {
        self.api.require_admin("view cash balance")?;
        let balance: CashBalance = self.api.get("/cash/balance").await?;
        Ok(balance.balance)
    }
}
