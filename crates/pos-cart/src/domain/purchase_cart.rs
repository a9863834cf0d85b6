//! Purchase cart.

use chrono::NaiveDate;
use pos_types::pricing::final_price;
use pos_types::{Amount, Article, PaymentMethod, ProviderId, PurchaseData, ShoppingItem};

use super::checked_total;
use super::errors::CartError;

/// Lines of a provider invoice being entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseCart {
    lines: Vec<ShoppingItem>,
}

impl PurchaseCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[ShoppingItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Add units of an article bought at `unit_cost` (the article's current
    /// cost when `None`).
    ///
    /// Fewer than one unit counts as one. Re-adding an article merges the
    /// units into its line; the newest cost replaces the old one and the
    /// selling price is derived again from it and the article's margin.
    pub fn add(
        &mut self,
        article: &Article,
        units: u32,
        unit_cost: Option<Amount>,
    ) -> Result<(), CartError> {
        let units = units.max(1);
        let cost = unit_cost.unwrap_or(article.unit_price);
        if cost < 0 {
            return Err(CartError::NegativeCost);
        }
        let price = final_price(cost, article.profit_margin);

        let mut next = self.lines.clone();
        match next.iter_mut().find(|line| line.article_id == article.id) {
            Some(line) => {
                line.units = line.units.checked_add(units).ok_or(CartError::Overflow)?;
                line.unit_price = cost;
                line.profit_margin = article.profit_margin;
                line.final_price = price;
            }
            None => next.push(ShoppingItem {
                article_id: article.id,
                title: article.title.clone(),
                units,
                unit_price: cost,
                profit_margin: article.profit_margin,
                final_price: price,
            }),
        }

        checked_total(next.iter().map(|l| (l.units, l.unit_price))).ok_or(CartError::Overflow)?;
        self.lines = next;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<ShoppingItem, CartError> {
        if index >= self.lines.len() {
            return Err(CartError::LineNotFound(index));
        }
        Ok(self.lines.remove(index))
    }

    /// Invoice total at cost.
    pub fn total(&self) -> Amount {
        checked_total(self.lines.iter().map(|l| (l.units, l.unit_price))).unwrap_or(Amount::MAX)
    }

    /// Build the request body for `POST /purchase/purchases`.
    pub fn checkout(
        &self,
        provider_id: Option<ProviderId>,
        payment_method: Option<PaymentMethod>,
        date: Option<NaiveDate>,
    ) -> Result<PurchaseData, CartError> {
        if self.lines.is_empty() {
            return Err(CartError::Empty);
        }
        let provider_id = provider_id.ok_or(CartError::MissingProvider)?;
        let payment_method = payment_method.ok_or(CartError::MissingPaymentMethod)?;

        Ok(PurchaseData {
            provider_id,
            items: self.lines.clone(),
            payment_method: Some(payment_method),
            date: date.map(|d| d.format("%Y-%m-%d").to_string()),
        })
    }
}
