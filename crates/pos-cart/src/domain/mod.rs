//! Domain module for the carts.

pub mod errors;
pub mod purchase_cart;
pub mod sale_cart;

use pos_types::Amount;

/// Sum of `units * price` over all lines, `None` on overflow.
pub(crate) fn checked_total<I>(lines: I) -> Option<Amount>
where
    I: IntoIterator<Item = (u32, Amount)>,
{
    lines.into_iter().try_fold(0 as Amount, |acc, (units, price)| {
        price
            .checked_mul(Amount::from(units))
            .and_then(|subtotal| acc.checked_add(subtotal))
    })
}
