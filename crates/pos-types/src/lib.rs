//! # POS Types Crate
//!
//! Domain entities and payloads for the Santería point-of-sale client.
//!
//! ## Design Principles
//!
//! - **Backend is authoritative**: field names and enum spellings mirror the
//!   backend JSON (`EFECTIVO`, `vendedor`, `EXTRACCION`, ...).
//! - **Whole pesos**: every amount is an `i64` number of pesos.
//! - **Drafts validate into payloads**: form state lives in `*Draft` types and
//!   only a successful `validate()` produces something the client can send.

pub mod article;
pub mod cash;
pub mod catalog;
pub mod errors;
pub mod forms;
pub mod money;
pub mod pricing;
pub mod purchase;
pub mod sale;
pub mod time;
pub mod user;

pub use article::*;
pub use cash::*;
pub use catalog::*;
pub use errors::*;
pub use forms::*;
pub use purchase::*;
pub use sale::*;
pub use user::*;

/// Amount of money in whole pesos.
pub type Amount = i64;

/// Backend identifier of an article.
pub type ArticleId = i64;

/// Backend identifier of a category.
pub type CategoryId = i64;

/// Backend identifier of a provider.
pub type ProviderId = i64;

/// Backend identifier of a user.
pub type UserId = i64;
