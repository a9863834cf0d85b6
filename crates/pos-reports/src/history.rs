//! Sale and purchase history filters.

use pos_types::time::date_label;
use pos_types::{PurchaseResponse, Role, SaleResponse, User};

/// Sales the viewer may see: admins see every sale, sellers only their own.
pub fn visible_sales<'a>(sales: &'a [SaleResponse], viewer: &User) -> Vec<&'a SaleResponse> {
    sales
        .iter()
        .filter(|sale| viewer.role == Role::Admin || sale.user_id == viewer.id)
        .collect()
}

/// Visible sales whose client name or `dd/mm/yyyy` date contains `term`
/// (case-insensitive). An empty term keeps everything.
pub fn search_sales<'a>(
    sales: &'a [SaleResponse],
    viewer: &User,
    term: &str,
) -> Vec<&'a SaleResponse> {
    let term = term.trim().to_lowercase();
    visible_sales(sales, viewer)
        .into_iter()
        .filter(|sale| {
            term.is_empty()
                || sale
                    .client_name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&term))
                || date_label(&sale.date).contains(&term)
        })
        .collect()
}

/// Purchases whose provider name or date contains `term`.
pub fn search_purchases<'a>(purchases: &'a [PurchaseResponse], term: &str) -> Vec<&'a PurchaseResponse> {
    let term = term.trim().to_lowercase();
    purchases
        .iter()
        .filter(|purchase| {
            term.is_empty()
                || purchase.provider_name.to_lowercase().contains(&term)
                || date_label(&purchase.date).contains(&term)
        })
        .collect()
}
