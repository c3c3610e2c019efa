//! Price formatting

use rust_decimal::{Decimal, RoundingStrategy};

/// Separator conventions for rendering prices inside discount descriptions.
///
/// The locale is an explicit value threaded to wherever a price is turned
/// into text; there is no process-wide formatting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceFormat {
    decimal_separator: char,
    group_separator: char,
}

impl PriceFormat {
    /// English (United Kingdom) separators: `1,234.56`.
    pub const EN_GB: Self = PriceFormat {
        decimal_separator: '.',
        group_separator: ',',
    };

    /// Creates a format with the given separators.
    #[must_use]
    pub const fn new(decimal_separator: char, group_separator: char) -> Self {
        PriceFormat {
            decimal_separator,
            group_separator,
        }
    }

    /// Renders an amount with exactly two decimals and grouped thousands.
    ///
    /// Midpoints round away from zero, so `0.125` prints as `0.13`.
    pub fn price(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let fixed = format!("{:.2}", rounded.abs());

        let (integral, fraction) = match fixed.split_once('.') {
            Some((integral, fraction)) => (integral.to_owned(), fraction.to_owned()),
            None => (fixed, "00".to_owned()),
        };

        let digits = integral.chars().count();
        let mut grouped = String::with_capacity(digits + digits / 3 + 3);

        for (idx, digit) in integral.chars().enumerate() {
            if idx > 0 && (digits - idx) % 3 == 0 {
                grouped.push(self.group_separator);
            }

            grouped.push(digit);
        }

        let sign = if rounded.is_sign_negative() { "-" } else { "" };

        format!("{sign}{grouped}{}{fraction}", self.decimal_separator)
    }
}

impl Default for PriceFormat {
    fn default() -> Self {
        PriceFormat::EN_GB
    }
}
