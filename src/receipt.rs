//! Receipt

use rust_decimal::Decimal;
use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{discounts::Discount, products::Product};

/// Errors that can occur when totalling a receipt.
#[derive(Debug, Error, PartialEq)]
pub enum ReceiptError {
    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// One priced line on a receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine<'a> {
    /// Product the line prices
    pub product: Product,

    /// Quantity purchased
    pub quantity: Decimal,

    /// Unit price at the time of checkout
    pub price: Money<'a, Currency>,

    /// Line total (unit price times quantity)
    pub total: Money<'a, Currency>,
}

/// The priced outcome of one checkout.
///
/// Line items and discounts keep their insertion order. The receipt is
/// built by checkout logic and read-only afterward.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    items: SmallVec<[ReceiptLine<'a>; 8]>,
    discounts: SmallVec<[Discount<'a>; 4]>,
    currency: &'static Currency,
}

impl<'a> Receipt<'a> {
    /// Creates an empty receipt denominated in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Receipt {
            items: SmallVec::new(),
            discounts: SmallVec::new(),
            currency,
        }
    }

    /// Appends a priced line item.
    pub fn add_product(
        &mut self,
        product: Product,
        quantity: Decimal,
        price: Money<'a, Currency>,
        total: Money<'a, Currency>,
    ) {
        self.items.push(ReceiptLine {
            product,
            quantity,
            price,
            total,
        });
    }

    /// Appends a discount line.
    pub fn add_discount(&mut self, discount: Discount<'a>) {
        self.discounts.push(discount);
    }

    /// Sum of all line totals plus all discount amounts.
    ///
    /// Discount amounts are negative, so applying them is a plain addition.
    /// An empty receipt totals to zero in the receipt currency.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError::Money`] if money arithmetic fails, for
    /// example when a line was priced in a different currency.
    pub fn total_price(&self) -> Result<Money<'a, Currency>, ReceiptError> {
        let subtotal = self
            .items
            .iter()
            .try_fold(Money::from_minor(0, self.currency), |acc, line| {
                acc.add(line.total)
            })?;

        let total = self
            .discounts
            .iter()
            .try_fold(subtotal, |acc, discount| acc.add(discount.amount()))?;

        Ok(total)
    }

    /// Returns an independent copy of the ordered line items.
    pub fn items(&self) -> Vec<ReceiptLine<'a>> {
        self.items.to_vec()
    }

    /// Returns an independent copy of the ordered discounts.
    pub fn discounts(&self) -> Vec<Discount<'a>> {
        self.discounts.to_vec()
    }

    /// Currency the receipt is denominated in.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
