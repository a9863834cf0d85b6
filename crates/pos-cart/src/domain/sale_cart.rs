//! Sale cart.

use pos_types::{Amount, Article, ArticleId, PaymentMethod, SaleData, SaleItem};
use tracing::debug;

use super::checked_total;
use super::errors::CartError;

/// Change applied to a line by [`SaleCart::reconcile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockAdjustment {
    /// The article vanished from the catalog or has no stock left.
    Dropped { article_id: ArticleId, title: String },
    /// The line asked for more units than the refreshed stock.
    Clamped {
        article_id: ArticleId,
        title: String,
        from: u32,
        to: u32,
    },
}

/// Lines of a sale being assembled at the counter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleCart {
    lines: Vec<SaleItem>,
}

impl SaleCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[SaleItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Units of `article_id` already reserved by the cart.
    pub fn units_in_cart(&self, article_id: ArticleId) -> u32 {
        self.lines
            .iter()
            .filter(|line| line.article_id == article_id)
            .fold(0u32, |acc, line| acc.saturating_add(line.units))
    }

    /// Stock left for this article once the cart's reservation is taken out.
    pub fn available_for(&self, article: &Article) -> u32 {
        let remaining = article.stock - i64::from(self.units_in_cart(article.id));
        u32::try_from(remaining.max(0)).unwrap_or(u32::MAX)
    }

    /// Add units of an article, merging with its existing line.
    ///
    /// Fails without touching the cart when the request exceeds the
    /// remaining stock.
    pub fn add(&mut self, article: &Article, units: u32) -> Result<(), CartError> {
        if units == 0 {
            return Err(CartError::InvalidQuantity);
        }
        if !article.in_stock() {
            return Err(CartError::OutOfStock {
                article_id: article.id,
            });
        }
        let available = self.available_for(article);
        if units > available {
            return Err(CartError::InsufficientStock {
                article_id: article.id,
                requested: units,
                available,
            });
        }
        self.merge(article, units)
    }

    /// Like [`SaleCart::add`] but takes as many units as remain instead of
    /// refusing. Returns the units actually added.
    pub fn add_clamped(&mut self, article: &Article, units: u32) -> Result<u32, CartError> {
        if units == 0 {
            return Err(CartError::InvalidQuantity);
        }
        if !article.in_stock() {
            return Err(CartError::OutOfStock {
                article_id: article.id,
            });
        }
        let available = self.available_for(article);
        if available == 0 {
            return Err(CartError::InsufficientStock {
                article_id: article.id,
                requested: units,
                available,
            });
        }
        let taken = units.min(available);
        self.merge(article, taken)?;
        Ok(taken)
    }

    /// Replace the units of the article's line. Zero removes the line.
    pub fn set_units(&mut self, article: &Article, units: u32) -> Result<(), CartError> {
        if units == 0 {
            self.lines.retain(|line| line.article_id != article.id);
            return Ok(());
        }
        let stock = u32::try_from(article.stock.max(0)).unwrap_or(u32::MAX);
        if units > stock {
            return Err(CartError::InsufficientStock {
                article_id: article.id,
                requested: units,
                available: stock,
            });
        }

        let mut next = self.lines.clone();
        match next.iter_mut().find(|line| line.article_id == article.id) {
            Some(line) => line.units = units,
            None => next.push(line_for(article, units)),
        }
        self.commit(next)
    }

    /// Remove the line at `index`.
    pub fn remove(&mut self, index: usize) -> Result<SaleItem, CartError> {
        if index >= self.lines.len() {
            return Err(CartError::LineNotFound(index));
        }
        Ok(self.lines.remove(index))
    }

    /// Sum of `units * unit_price` over all lines.
    pub fn total(&self) -> Amount {
        checked_total(self.lines.iter().map(|l| (l.units, l.unit_price))).unwrap_or(Amount::MAX)
    }

    /// Bring the cart in line with a freshly loaded catalog.
    pub fn reconcile(&mut self, articles: &[Article]) -> Vec<StockAdjustment> {
        let mut adjustments = Vec::new();

        self.lines.retain_mut(|line| {
            let stock = articles
                .iter()
                .find(|a| a.id == line.article_id)
                .map(|a| a.stock)
                .unwrap_or(0);

            if stock <= 0 {
                adjustments.push(StockAdjustment::Dropped {
                    article_id: line.article_id,
                    title: line.title.clone(),
                });
                return false;
            }

            let stock = u32::try_from(stock).unwrap_or(u32::MAX);
            if line.units > stock {
                adjustments.push(StockAdjustment::Clamped {
                    article_id: line.article_id,
                    title: line.title.clone(),
                    from: line.units,
                    to: stock,
                });
                line.units = stock;
            }
            true
        });

        if !adjustments.is_empty() {
            debug!(count = adjustments.len(), "Sale cart reconciled against catalog");
        }
        adjustments
    }

    /// Build the request body for `POST /sale/sales`.
    ///
    /// A blank client name is sent as absent (final consumer).
    pub fn checkout(
        &self,
        client_name: &str,
        payment_method: Option<PaymentMethod>,
    ) -> Result<SaleData, CartError> {
        if self.lines.is_empty() {
            return Err(CartError::Empty);
        }
        let payment_method = payment_method.ok_or(CartError::MissingPaymentMethod)?;
        let client_name = client_name.trim();

        Ok(SaleData {
            client_name: (!client_name.is_empty()).then(|| client_name.to_string()),
            payment_method,
            items: self.lines.clone(),
        })
    }

    fn merge(&mut self, article: &Article, units: u32) -> Result<(), CartError> {
        let mut next = self.lines.clone();
        match next.iter_mut().find(|line| line.article_id == article.id) {
            Some(line) => {
                line.units = line.units.checked_add(units).ok_or(CartError::Overflow)?;
            }
            None => next.push(line_for(article, units)),
        }
        self.commit(next)
    }

    fn commit(&mut self, next: Vec<SaleItem>) -> Result<(), CartError> {
        checked_total(next.iter().map(|l| (l.units, l.unit_price))).ok_or(CartError::Overflow)?;
        self.lines = next;
        Ok(())
    }
}

fn line_for(article: &Article, units: u32) -> SaleItem {
    SaleItem {
        article_id: article.id,
        title: article.title.clone(),
        units,
        unit_price: article.final_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: ArticleId, stock: i64, price: Amount) -> Article {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Articulo {id}"),
            "unit_price": price / 2,
            "profit_margin": 100,
            "final_price": price,
            "stock": stock,
            "category_id": 1,
            "provider_id": 1
        }))
        .unwrap()
    }

    #[test]
    fn test_add_merges_duplicate_lines() {
        let vela = article(1, 10, 500);
        let mut cart = SaleCart::new();
        cart.add(&vela, 2).unwrap();
        cart.add(&vela, 3).unwrap();
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].units, 5);
        assert_eq!(cart.total(), 2500);
    }

    #[test]
    fn test_add_respects_remaining_stock() {
        let vela = article(1, 4, 500);
        let mut cart = SaleCart::new();
        cart.add(&vela, 3).unwrap();
        assert_eq!(cart.available_for(&vela), 1);
        let err = cart.add(&vela, 2).unwrap_err();
        assert_eq!(
            err,
            CartError::InsufficientStock {
                article_id: 1,
                requested: 2,
                available: 1
            }
        );
        assert_eq!(cart.units_in_cart(1), 3);
    }

    #[test]
    fn test_add_rejects_zero_and_out_of_stock() {
        let empty = article(2, 0, 100);
        let mut cart = SaleCart::new();
        assert_eq!(cart.add(&empty, 1), Err(CartError::OutOfStock { article_id: 2 }));
        let vela = article(1, 5, 100);
        assert_eq!(cart.add(&vela, 0), Err(CartError::InvalidQuantity));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_clamped_takes_what_is_left() {
        let vela = article(1, 5, 100);
        let mut cart = SaleCart::new();
        assert_eq!(cart.add_clamped(&vela, 3), Ok(3));
        assert_eq!(cart.add_clamped(&vela, 10), Ok(2));
        assert_eq!(cart.units_in_cart(1), 5);
        assert!(matches!(
            cart.add_clamped(&vela, 1),
            Err(CartError::InsufficientStock { available: 0, .. })
        ));
    }

    #[test]
    fn test_set_units_checks_full_stock() {
        let vela = article(1, 5, 100);
        let mut cart = SaleCart::new();
        cart.add(&vela, 4).unwrap();
        cart.set_units(&vela, 5).unwrap();
        assert_eq!(cart.units_in_cart(1), 5);
        assert!(cart.set_units(&vela, 6).is_err());
        cart.set_units(&vela, 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_by_index() {
        let mut cart = SaleCart::new();
        cart.add(&article(1, 5, 100), 1).unwrap();
        cart.add(&article(2, 5, 300), 1).unwrap();
        let removed = cart.remove(0).unwrap();
        assert_eq!(removed.article_id, 1);
        assert_eq!(cart.total(), 300);
        assert_eq!(cart.remove(5), Err(CartError::LineNotFound(5)));
    }

    #[test]
    fn test_reconcile_clamps_and_drops() {
        let mut cart = SaleCart::new();
        cart.add(&article(1, 10, 100), 8).unwrap();
        cart.add(&article(2, 10, 100), 2).unwrap();
        cart.add(&article(3, 10, 100), 1).unwrap();

        let refreshed = vec![article(1, 5, 100), article(2, 0, 100)];
        let adjustments = cart.reconcile(&refreshed);

        assert_eq!(adjustments.len(), 3);
        assert!(adjustments.contains(&StockAdjustment::Clamped {
            article_id: 1,
            title: "Articulo 1".into(),
            from: 8,
            to: 5
        }));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.units_in_cart(1), 5);
    }

    #[test]
    fn test_checkout_requirements() {
        let mut cart = SaleCart::new();
        assert_eq!(
            cart.checkout("", Some(PaymentMethod::Cash)),
            Err(CartError::Empty)
        );
        cart.add(&article(1, 5, 100), 2).unwrap();
        assert_eq!(cart.checkout("", None), Err(CartError::MissingPaymentMethod));

        let sale = cart.checkout("   ", Some(PaymentMethod::Transfer)).unwrap();
        assert_eq!(sale.client_name, None);
        assert_eq!(sale.total(), 200);

        let sale = cart.checkout(" Rosa ", Some(PaymentMethod::Cash)).unwrap();
        assert_eq!(sale.client_name.as_deref(), Some("Rosa"));
    }

    #[test]
    fn test_overflow_is_refused() {
        let mut cart = SaleCart::new();
        let pricey = article(1, i64::MAX, Amount::MAX / 2);
        cart.add(&pricey, 2).unwrap();
        assert_eq!(cart.add(&pricey, 1), Err(CartError::Overflow));
        assert_eq!(cart.units_in_cart(1), 2);
    }
}
