//! Cart errors.

use pos_types::ArticleId;
use thiserror::Error;

/// Why a cart operation was refused. The cart is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Zero units requested.
    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    /// The article has no stock at all.
    #[error("Article {article_id} is out of stock")]
    OutOfStock { article_id: ArticleId },

    /// More units requested than remain after what is already in the cart.
    #[error("Only {available} units of article {article_id} available, {requested} requested")]
    InsufficientStock {
        article_id: ArticleId,
        requested: u32,
        available: u32,
    },

    #[error("Unit cost cannot be negative")]
    NegativeCost,

    #[error("No cart line at position {0}")]
    LineNotFound(usize),

    #[error("The cart is empty")]
    Empty,

    #[error("A payment method must be selected")]
    MissingPaymentMethod,

    #[error("A provider must be selected")]
    MissingProvider,

    /// Units or totals beyond what the integer types hold.
    #[error("Cart total overflow")]
    Overflow,
}
