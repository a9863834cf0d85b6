//! POS-Admin: Santería point of sale admin panel
//!
//! One binary with two faces:
//!
//! - one-shot subcommands (`pos-admin sales new ...`) for every change to the
//!   shop: sales, purchases, extractions, catalog and seller accounts;
//! - `pos-admin dashboard`, a read-only terminal view of the same data.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  POS-ADMIN  admin (admin)                                       │
//! ├────────────────────────┬────────────────────────────────────────┤
//! │  SECCIONES             │  SECTION TABLE                         │
//! │  [1] Artículos         │                                        │
//! │  [4] Ventas            │                                        │
//! │  ...                   │                                        │
//! ├────────────────────────┤                                        │
//! │  SESIÓN                │                                        │
//! │  Caja: $12.500         │                                        │
//! └────────────────────────┴────────────────────────────────────────┘
//! ```
//!
//! Sellers only ever see the articles and sales sections.

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod ui;

pub use domain::{App, AppState};
