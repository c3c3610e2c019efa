//! Pricing

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};

/// Converts a decimal amount into money at a hundred minor units per major
/// unit, the scale of every currency this crate deals in.
///
/// Midpoints round away from zero, so `4.975` becomes `4.98`. Returns
/// `None` when the amount does not fit the minor-unit range.
pub fn to_money(amount: Decimal, currency: &Currency) -> Option<Money<'_, Currency>> {
    let minor = amount
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()?;

    Some(Money::from_minor(minor, currency))
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;

    use super::*;

    #[test]
    fn exact_amounts_convert_losslessly() {
        assert_eq!(
            to_money(Decimal::new(199, 2), GBP),
            Some(Money::from_minor(199, GBP))
        );
    }

    #[test]
    fn sub_minor_precision_rounds_away_from_zero() {
        assert_eq!(
            to_money(Decimal::new(4975, 3), GBP),
            Some(Money::from_minor(498, GBP))
        );

        assert_eq!(
            to_money(Decimal::new(-4975, 4), GBP),
            Some(Money::from_minor(-50, GBP))
        );
    }

    #[test]
    fn out_of_range_amounts_return_none() {
        assert_eq!(to_money(Decimal::MAX, GBP), None);
    }
}
