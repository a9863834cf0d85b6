//! Sales and payment methods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Amount, ArticleId, UserId};

/// How the customer (or the shop, for purchases) paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Cash, moves the drawer balance.
    #[serde(rename = "EFECTIVO")]
    Cash,
    /// Bank transfer.
    #[serde(rename = "TRANSFERENCIA")]
    Transfer,
}

impl PaymentMethod {
    /// All methods in picker order.
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Cash, PaymentMethod::Transfer];

    /// Wire spelling.
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "EFECTIVO",
            PaymentMethod::Transfer => "TRANSFERENCIA",
        }
    }

    /// Human label.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Efectivo",
            PaymentMethod::Transfer => "Transferencia",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "efectivo" | "cash" => Ok(PaymentMethod::Cash),
            "transferencia" | "transfer" => Ok(PaymentMethod::Transfer),
            other => Err(format!("unknown payment method: {other}")),
        }
    }
}

/// A line of a sale being registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleItem {
    pub article_id: ArticleId,
    pub title: String,
    pub units: u32,
    /// Final selling price per unit.
    pub unit_price: Amount,
}

impl SaleItem {
    /// `units * unit_price`, `None` on overflow.
    pub fn subtotal(&self) -> Option<Amount> {
        self.unit_price.checked_mul(Amount::from(self.units))
    }
}

/// Body of `POST /sale/sales`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    pub payment_method: PaymentMethod,
    pub items: Vec<SaleItem>,
}

impl SaleData {
    /// Sum of line subtotals, saturating.
    pub fn total(&self) -> Amount {
        self.items
            .iter()
            .map(|item| item.subtotal().unwrap_or(Amount::MAX))
            .fold(0, Amount::saturating_add)
    }
}

/// A recorded line of a past sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleDetail {
    pub id: i64,
    pub article_title: String,
    pub units: u32,
    pub unit_price: Amount,
    pub subtotal: Amount,
}

/// A recorded sale as returned by the history endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleResponse {
    pub id: i64,
    pub date: String,
    #[serde(default)]
    pub client_name: Option<String>,
    pub total: Amount,
    pub user_id: UserId,
    #[serde(default)]
    pub seller_name: String,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub details: Vec<SaleDetail>,
}
