//! Discounts

use rusty_money::{Money, iso::Currency};

use crate::products::Product;

/// A computed price reduction line on a receipt.
///
/// The amount is negative for a reduction; receipt totalling simply adds
/// it. Discounts are created only by offer evaluation and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Discount<'a> {
    product: Product,
    description: String,
    amount: Money<'a, Currency>,
}

impl<'a> Discount<'a> {
    /// Creates a new discount line.
    #[must_use]
    pub fn new(product: Product, description: String, amount: Money<'a, Currency>) -> Self {
        Discount {
            product,
            description,
            amount,
        }
    }

    /// Returns the product the discount applies to.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the human-readable description, e.g. `3 for 2`.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the signed discount amount.
    pub fn amount(&self) -> Money<'a, Currency> {
        self.amount
    }
}
