//! Cash drawer movements.

use serde::{Deserialize, Serialize};

use crate::{Amount, PaymentMethod};

/// Origin of a cash movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CashMovementType {
    #[serde(rename = "VENTA")]
    Sale,
    #[serde(rename = "COMPRA")]
    Purchase,
    #[serde(rename = "EXTRACCION")]
    Extraction,
    #[serde(rename = "INGRESO_MANUAL")]
    ManualIncome,
    /// Any type this client does not know yet.
    #[serde(other)]
    Other,
}

impl CashMovementType {
    pub fn label(&self) -> &'static str {
        match self {
            CashMovementType::Sale => "Venta",
            CashMovementType::Purchase => "Compra",
            CashMovementType::Extraction => "Extracción",
            CashMovementType::ManualIncome => "Ingreso manual",
            CashMovementType::Other => "Otro",
        }
    }
}

/// A single entry of the cash ledger. Positive amounts enter the drawer,
/// negative amounts leave it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashMovement {
    pub id: i64,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: CashMovementType,
    pub amount: Amount,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sale_id: Option<i64>,
    #[serde(default)]
    pub purchase_id: Option<i64>,
}

/// Body of `POST /cash/extraction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionData {
    pub amount: Amount,
    pub reason: String,
    pub person: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

/// Response of `GET /cash/balance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashBalance {
    pub balance: Amount,
}
