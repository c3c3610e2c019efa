//! Shopping cart

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    catalog::Catalog,
    discounts::Discount,
    format::PriceFormat,
    offers::{Offer, SpecialOfferType},
    pricing::to_money,
    products::{Product, ProductQuantity},
    receipt::Receipt,
};

/// Errors specific to offer evaluation.
#[derive(Debug, Error, PartialEq)]
pub enum OfferError {
    /// A product under offer has no registered unit price.
    #[error("no unit price registered for {0}")]
    MissingPrice(Product),

    /// A cumulative quantity is too large to count bundles for.
    #[error("quantity for {0} is out of counting range")]
    QuantityRange(Product),

    /// A computed discount amount does not fit the minor-unit range.
    #[error("discount amount for {0} is out of range")]
    AmountRange(Product),
}

/// Accumulates requested products and quantities for one checkout.
///
/// The cart keeps every `add` call as its own ordered entry and maintains a
/// derived cumulative quantity per product. Entries are never removed.
#[derive(Debug, Default)]
pub struct ShoppingCart {
    items: Vec<ProductQuantity>,
    quantities: FxHashMap<Product, Decimal>,
}

impl ShoppingCart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        ShoppingCart::default()
    }

    /// Adds a single unit of a product.
    pub fn add_item(&mut self, product: Product) {
        self.add_item_quantity(product, Decimal::ONE);
    }

    /// Adds a quantity of a product.
    ///
    /// The quantity may be fractional for weighed products. Zero and
    /// negative quantities are accepted as-is and simply flow into the
    /// cumulative total.
    pub fn add_item_quantity(&mut self, product: Product, quantity: Decimal) {
        *self.quantities.entry(product.clone()).or_default() += quantity;
        self.items.push(ProductQuantity::new(product, quantity));
    }

    /// Returns an independent copy of the ordered entry list.
    pub fn items(&self) -> Vec<ProductQuantity> {
        self.items.clone()
    }

    /// Returns the ordered entries without copying.
    pub fn entries(&self) -> &[ProductQuantity] {
        &self.items
    }

    /// Cumulative quantity of a product across all entries.
    pub fn quantity_of(&self, product: &Product) -> Decimal {
        self.quantities.get(product).copied().unwrap_or_default()
    }

    /// Number of entries in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Evaluates the given offers against the cart and appends the
    /// resulting discount lines to the receipt.
    ///
    /// Products are visited in cumulative-map order, which is unspecified;
    /// callers must not rely on the ordering of discount lines. An offer
    /// whose eligibility guard is not met contributes nothing, silently.
    ///
    /// # Errors
    ///
    /// - [`OfferError::MissingPrice`]: a product under offer is not
    ///   registered in the catalog.
    /// - [`OfferError::QuantityRange`]: a cumulative quantity cannot be
    ///   truncated to a bundle count.
    /// - [`OfferError::AmountRange`]: a computed discount amount does not
    ///   fit the minor-unit range.
    pub fn handle_offers<'a, C>(
        &self,
        receipt: &mut Receipt<'a>,
        offers: &FxHashMap<Product, Offer>,
        catalog: &C,
        format: &PriceFormat,
    ) -> Result<(), OfferError>
    where
        C: Catalog<'a>,
    {
        for (product, &quantity) in &self.quantities {
            let Some(offer) = offers.get(product) else {
                continue;
            };

            let unit_price = catalog
                .unit_price(product)
                .ok_or_else(|| OfferError::MissingPrice(product.clone()))?;

            let unit_amount = *unit_price.amount();

            let whole = quantity
                .trunc()
                .to_i64()
                .ok_or_else(|| OfferError::QuantityRange(product.clone()))?;

            let bundle_size = offer.offer_type().bundle_size();
            let bundles = Decimal::from(whole / bundle_size);
            let remainder = Decimal::from(whole % bundle_size);

            // Bundle counts come from the truncated whole quantity; the
            // price base keeps the full fractional quantity.
            let discount_amount = match offer.offer_type() {
                SpecialOfferType::TwoForAmount if whole >= 2 => {
                    unit_amount * quantity
                        - (offer.argument() * bundles + remainder * unit_amount)
                }
                SpecialOfferType::ThreeForTwo if whole > 2 => {
                    quantity * unit_amount
                        - (bundles * Decimal::TWO * unit_amount + remainder * unit_amount)
                }
                SpecialOfferType::TenPercentDiscount => {
                    Percentage::from(offer.argument() / Decimal::ONE_HUNDRED)
                        * (quantity * unit_amount)
                }
                SpecialOfferType::FiveForAmount if whole >= 5 => {
                    unit_amount * quantity
                        - (offer.argument() * bundles + remainder * unit_amount)
                }
                // Eligibility guard not met: no reduction.
                _ => Decimal::ZERO,
            };

            if discount_amount.is_zero() {
                continue;
            }

            let description = match offer.offer_type() {
                SpecialOfferType::TwoForAmount => {
                    format!("2 for {}", format.price(offer.argument()))
                }
                SpecialOfferType::ThreeForTwo => "3 for 2".to_owned(),
                SpecialOfferType::TenPercentDiscount => {
                    format!("{}% off", offer.argument().normalize())
                }
                SpecialOfferType::FiveForAmount => {
                    format!("5 for {}", format.price(offer.argument()))
                }
            };

            let amount = to_money(-discount_amount, unit_price.currency())
                .ok_or_else(|| OfferError::AmountRange(product.clone()))?;

            receipt.add_discount(Discount::new(product.clone(), description, amount));
        }

        Ok(())
    }
}
