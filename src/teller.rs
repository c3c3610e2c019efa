//! Teller

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    cart::{OfferError, ShoppingCart},
    catalog::Catalog,
    format::PriceFormat,
    offers::{Offer, SpecialOfferType},
    pricing::to_money,
    products::Product,
    receipt::Receipt,
};

/// Errors that can occur while checking out a cart.
#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    /// A cart entry's product has no registered unit price.
    #[error("no unit price registered for {0}")]
    MissingPrice(Product),

    /// A line total does not fit the minor-unit range.
    #[error("line total for {0} is out of range")]
    AmountRange(Product),

    /// Error bubbled up from offer evaluation.
    #[error(transparent)]
    Offer(#[from] OfferError),
}

/// Prices a cart against a catalog and the offers currently on.
///
/// The teller holds the offer registry for one pricing calculation: at most
/// one offer per product, later registrations replacing earlier ones.
#[derive(Debug)]
pub struct Teller<'c, C> {
    catalog: &'c C,
    offers: FxHashMap<Product, Offer>,
    format: PriceFormat,
}

impl<'c, C> Teller<'c, C> {
    /// Creates a teller working against the given catalog.
    #[must_use]
    pub fn new(catalog: &'c C) -> Self {
        Teller::with_format(catalog, PriceFormat::default())
    }

    /// Creates a teller that renders discount descriptions with the given
    /// price format.
    #[must_use]
    pub fn with_format(catalog: &'c C, format: PriceFormat) -> Self {
        Teller {
            catalog,
            offers: FxHashMap::default(),
            format,
        }
    }

    /// Puts an offer on a product, replacing any offer already on it.
    pub fn add_special_offer(
        &mut self,
        offer_type: SpecialOfferType,
        product: Product,
        argument: Decimal,
    ) {
        self.offers
            .insert(product.clone(), Offer::new(offer_type, product, argument));
    }

    /// Prices every cart entry and evaluates the offers on the result.
    ///
    /// Line items appear in cart insertion order, each totalled as unit
    /// price times entry quantity; discount lines follow from offer
    /// evaluation.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::MissingPrice`]: a cart entry's product is not in
    ///   the catalog.
    /// - [`CheckoutError::AmountRange`]: a line total does not fit the
    ///   minor-unit range.
    /// - [`CheckoutError::Offer`]: offer evaluation failed.
    pub fn checks_out_articles_from<'m>(
        &self,
        cart: &ShoppingCart,
    ) -> Result<Receipt<'m>, CheckoutError>
    where
        C: Catalog<'m>,
    {
        let mut receipt = Receipt::new(self.catalog.currency());

        for entry in cart.entries() {
            let price = self
                .catalog
                .unit_price(entry.product())
                .ok_or_else(|| CheckoutError::MissingPrice(entry.product().clone()))?;

            let total = price
                .amount()
                .checked_mul(entry.quantity())
                .and_then(|gross| to_money(gross, price.currency()))
                .ok_or_else(|| CheckoutError::AmountRange(entry.product().clone()))?;

            receipt.add_product(entry.product().clone(), entry.quantity(), price, total);
        }

        cart.handle_offers(&mut receipt, &self.offers, self.catalog, &self.format)?;

        Ok(receipt)
    }
}
