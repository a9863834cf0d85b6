//! One service per backend resource.
//!
//! Services borrow the [`ApiClient`](crate::ApiClient) and are obtained from
//! it (`client.articles()`, `client.cash()`, ...). Mutations take form drafts
//! and validate them before anything is sent.

mod articles;
mod auth;
mod cash;
mod catalog;
mod purchases;
mod sales;
mod users;

pub use articles::ArticleService;
pub use auth::AuthService;
pub use cash::CashService;
pub use catalog::{CategoryService, ProviderService};
pub use purchases::PurchaseService;
pub use sales::SaleService;
pub use users::UserService;
