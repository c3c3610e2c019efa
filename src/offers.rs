//! Offers

use rust_decimal::Decimal;

use crate::products::Product;

/// The promotional rules a store can attach to a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialOfferType {
    /// Buy three, pay for two.
    ThreeForTwo,

    /// A percentage off the whole quantity; the offer argument carries the
    /// percentage in percent points (`10` means 10% off).
    TenPercentDiscount,

    /// Two units for a fixed bundle price carried in the offer argument.
    TwoForAmount,

    /// Five units for a fixed bundle price carried in the offer argument.
    FiveForAmount,
}

impl SpecialOfferType {
    /// Number of units needed to trigger one instance of the offer.
    ///
    /// Offer types that are not quantity-bundled count single units.
    pub fn bundle_size(self) -> i64 {
        match self {
            SpecialOfferType::ThreeForTwo => 3,
            SpecialOfferType::TwoForAmount => 2,
            SpecialOfferType::FiveForAmount => 5,
            _ => 1,
        }
    }
}

/// One promotional rule bound to a product.
///
/// The argument is a percentage in percent points for
/// [`SpecialOfferType::TenPercentDiscount`] and a fixed bundle price for
/// every other type. Offers are created by store configuration and live for
/// the duration of one pricing calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    offer_type: SpecialOfferType,
    product: Product,
    argument: Decimal,
}

impl Offer {
    /// Creates a new offer for the given product.
    #[must_use]
    pub fn new(offer_type: SpecialOfferType, product: Product, argument: Decimal) -> Self {
        Offer {
            offer_type,
            product,
            argument,
        }
    }

    /// Returns the type of the offer.
    pub fn offer_type(&self) -> SpecialOfferType {
        self.offer_type
    }

    /// Returns the product the offer is bound to.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the offer argument.
    pub fn argument(&self) -> Decimal {
        self.argument
    }
}
