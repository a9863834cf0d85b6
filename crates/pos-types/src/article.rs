//! Catalog articles.

use serde::{Deserialize, Serialize};

use crate::{Amount, ArticleId, Category, CategoryId, Provider, ProviderId};

/// A product in the shop catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Cost paid to the provider.
    #[serde(default)]
    pub unit_price: Amount,
    /// Margin over cost, in percent (20 means +20%).
    #[serde(default)]
    pub profit_margin: i64,
    /// Selling price shown to customers.
    #[serde(default)]
    pub final_price: Amount,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub created_at: String,
    pub category_id: CategoryId,
    pub provider_id: ProviderId,
    /// Present when the backend eager-loads the relation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Present when the backend eager-loads the relation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
}

impl Article {
    /// Whether at least one unit can be sold.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Selection label used by pickers: `Title | Stock: N | $price`.
    pub fn picker_label(&self) -> String {
        format!(
            "{} | Stock: {} | {}",
            self.title,
            self.stock,
            crate::money::format_currency(self.final_price)
        )
    }
}

/// Body sent on article create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticlePayload {
    pub title: String,
    pub content: String,
    pub unit_price: Amount,
    pub profit_margin: i64,
    pub final_price: Amount,
    pub stock: i64,
    pub category_id: CategoryId,
    pub provider_id: ProviderId,
}
