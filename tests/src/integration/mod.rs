//! Cross-crate flows against [`crate::backend`].

mod admin_flow;
mod dashboard_flow;
mod sale_flow;
