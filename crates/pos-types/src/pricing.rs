//! Selling price derived from cost and margin.

use crate::Amount;

/// `round(cost * (1 + margin / 100))`, halves rounded up.
///
/// Computed in integer arithmetic so that e.g. a cost of 15 with a 10%
/// margin yields 17 (16.5 rounded up) without float drift. Results outside
/// the `i64` range saturate.
pub fn final_price(cost: Amount, margin_percent: i64) -> Amount {
    let scaled = i128::from(cost) * (100 + i128::from(margin_percent));
    let rounded = (scaled + 50).div_euclid(100);
    Amount::try_from(rounded).unwrap_or(if rounded < 0 { Amount::MIN } else { Amount::MAX })
}
