//! # Santería POS Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── backend.rs        # In-process shop backend (axum)
//! └── integration/      # Cross-crate flows
//!     ├── sale_flow.rs      # cart -> sale -> ticket -> history
//!     ├── admin_flow.rs     # purchases, extractions, statistics
//!     └── dashboard_flow.rs # dashboard refresh per role
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pos-tests
//! cargo test -p pos-tests integration::sale_flow
//! ```

pub mod backend;
pub mod integration;
