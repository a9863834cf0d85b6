//! Purchases from providers.

use serde::{Deserialize, Serialize};

use crate::{Amount, ArticleId, PaymentMethod, ProviderId};

/// A line of a purchase being registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub article_id: ArticleId,
    pub title: String,
    pub units: u32,
    /// Cost per unit paid to the provider.
    pub unit_price: Amount,
    pub profit_margin: i64,
    /// Selling price derived from cost and margin.
    pub final_price: Amount,
}

impl ShoppingItem {
    /// `units * unit_price`, `None` on overflow.
    pub fn subtotal(&self) -> Option<Amount> {
        self.unit_price.checked_mul(Amount::from(self.units))
    }
}

/// Body of `POST /purchase/purchases`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseData {
    pub provider_id: ProviderId,
    pub items: Vec<ShoppingItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    /// `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// A recorded line of a past purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseDetail {
    pub id: i64,
    pub article_title: String,
    pub units: u32,
    pub unit_price: Amount,
    pub subtotal: Amount,
}

/// A recorded purchase as returned by the history endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseResponse {
    pub id: i64,
    pub date: String,
    pub provider_name: String,
    pub total: Amount,
    #[serde(default)]
    pub details: Vec<PurchaseDetail>,
}
