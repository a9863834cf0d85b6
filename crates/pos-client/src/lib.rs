//! # POS Client
//!
//! Typed REST client for the Santería backend.
//!
//! ## Overview
//!
//! - [`ClientConfig`]: backend URL, timeouts and session file (TOML,
//!   `SANTERIA_API_URL` override).
//! - [`SessionStore`]: where the bearer token lives between runs.
//! - [`ApiClient`]: attaches the token, maps failures to [`ApiError`] and
//!   drops the session on HTTP 401.
//! - `services`: one wrapper per backend resource.
//! - [`guard`]: which role may open which route or section.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut config = ClientConfig::default().with_env_overrides();
//! config.validate()?;
//! let store = Arc::new(FileSessionStore::new(&config.session_file));
//! let client = ApiClient::new(&config, store)?;
//!
//! client.auth().login("admin", "secret").await?;
//! let articles = client.articles().list().await?;
//! ```

mod api;
mod config;
mod error;
pub mod guard;
mod services;
mod session;

pub use api::ApiClient;
pub use config::{default_session_path, ClientConfig, ConfigError, API_URL_ENV, DEFAULT_API_URL};
pub use error::{ApiError, DEFAULT_ERROR_MESSAGE};
pub use guard::{Access, AccessError, Route, View};
pub use services::{
    ArticleService, AuthService, CashService, CategoryService, ProviderService, PurchaseService,
    SaleService, UserService,
};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionError, SessionStore};
