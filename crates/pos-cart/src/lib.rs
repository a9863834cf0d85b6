//! # Cart reducers
//!
//! In-memory carts behind the "new sale" and "new purchase" flows.
//!
//! ## Architecture
//!
//! - **SaleCart**: one line per article, quantities bounded by the stock the
//!   cart knows about, price frozen at the article's final price.
//! - **PurchaseCart**: one line per article, cost editable, selling price
//!   derived from cost and the article's margin.
//! - **Reconciliation**: after the catalog is refreshed, sale lines are
//!   clamped to the new stock or dropped.
//!
//! Carts never talk to the backend; `checkout` produces the request body and
//! the caller decides when to send it and clear the cart.

pub mod domain;

pub use domain::errors::CartError;
pub use domain::purchase_cart::PurchaseCart;
pub use domain::sale_cart::{SaleCart, StockAdjustment};
