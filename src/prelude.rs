//! Tally prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{OfferError, ShoppingCart},
    catalog::{Catalog, InMemoryCatalog},
    discounts::Discount,
    fixtures::{Fixture, FixtureError},
    format::PriceFormat,
    offers::{Offer, SpecialOfferType},
    printer::{PrinterError, ReceiptPrinter},
    products::{Product, ProductQuantity, ProductUnit},
    receipt::{Receipt, ReceiptError, ReceiptLine},
    teller::{CheckoutError, Teller},
};
