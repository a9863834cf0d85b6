//! # Reports
//!
//! Read-side helpers over data fetched from the backend:
//!
//! - `stats`: time windows for the cash ledger and income/expense summaries
//! - `history`: role-aware sale history and free-text search
//! - `ticket`: sale receipt as an 80 mm PDF plus a text preview

pub mod history;
pub mod stats;
pub mod ticket;

pub use history::{search_purchases, search_sales, visible_sales};
pub use stats::{extractions, CashSummary, Window};
pub use ticket::{Ticket, TicketConfig, TicketError};
