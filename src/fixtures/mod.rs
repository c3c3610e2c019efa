//! Fixtures
//!
//! YAML-declared catalog, offer and cart sets used by the demo example and
//! the integration tests.

use std::{fs, path::Path};

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    cart::ShoppingCart,
    catalog::{Catalog, InMemoryCatalog},
    offers::{Offer, SpecialOfferType},
    pricing::to_money,
    products::{Product, ProductUnit},
};

/// Fixture parsing errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unknown currency code
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A product price does not fit the minor-unit range
    #[error("invalid price for product: {0}")]
    InvalidPrice(String),

    /// A cart entry or offer references a product the set does not declare
    #[error("product not found: {0}")]
    ProductNotFound(String),
}

#[derive(Debug, Deserialize)]
struct FixtureFile {
    currency: String,
    products: Vec<ProductEntry>,

    #[serde(default)]
    offers: Vec<OfferEntry>,

    #[serde(default)]
    cart: Vec<CartEntry>,
}

#[derive(Debug, Deserialize)]
struct ProductEntry {
    name: String,
    unit: UnitEntry,
    price: Decimal,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum UnitEntry {
    Each,
    Kilo,
}

impl From<UnitEntry> for ProductUnit {
    fn from(unit: UnitEntry) -> Self {
        match unit {
            UnitEntry::Each => ProductUnit::Each,
            UnitEntry::Kilo => ProductUnit::Kilo,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OfferEntry {
    product: String,

    #[serde(rename = "type")]
    offer_type: OfferTypeEntry,

    #[serde(default)]
    argument: Decimal,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum OfferTypeEntry {
    ThreeForTwo,
    TenPercentDiscount,
    TwoForAmount,
    FiveForAmount,
}

impl From<OfferTypeEntry> for SpecialOfferType {
    fn from(offer_type: OfferTypeEntry) -> Self {
        match offer_type {
            OfferTypeEntry::ThreeForTwo => SpecialOfferType::ThreeForTwo,
            OfferTypeEntry::TenPercentDiscount => SpecialOfferType::TenPercentDiscount,
            OfferTypeEntry::TwoForAmount => SpecialOfferType::TwoForAmount,
            OfferTypeEntry::FiveForAmount => SpecialOfferType::FiveForAmount,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CartEntry {
    product: String,
    quantity: Decimal,
}

/// A parsed fixture set: a priced catalog, the offers that are on, and a
/// pre-filled cart.
#[derive(Debug)]
pub struct Fixture {
    currency: &'static Currency,
    catalog: InMemoryCatalog<'static>,
    offers: FxHashMap<Product, Offer>,
    cart: ShoppingCart,
}

impl Fixture {
    /// Loads the named fixture set from the crate's `fixtures/` directory.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed.
    pub fn from_set(set: &str) -> Result<Self, FixtureError> {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join(format!("{set}.yaml"));

        Fixture::from_path(path)
    }

    /// Loads a fixture set from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed, the
    /// currency code is unknown, or an offer or cart entry references an
    /// undeclared product.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let raw: FixtureFile = serde_norway::from_str(&fs::read_to_string(path)?)?;

        let currency = match raw.currency.as_str() {
            "GBP" => GBP,
            "USD" => USD,
            "EUR" => EUR,
            other => return Err(FixtureError::UnknownCurrency(other.to_string())),
        };

        let mut by_name: FxHashMap<String, Product> = FxHashMap::default();
        let mut catalog = InMemoryCatalog::new(currency);

        for entry in raw.products {
            let product = Product::new(entry.name.clone(), entry.unit.into());

            let price = to_money(entry.price, currency)
                .ok_or_else(|| FixtureError::InvalidPrice(entry.name.clone()))?;

            catalog.add_product(product.clone(), price);
            by_name.insert(entry.name, product);
        }

        let mut offers = FxHashMap::default();

        for entry in raw.offers {
            let product = by_name
                .get(&entry.product)
                .ok_or(FixtureError::ProductNotFound(entry.product))?;

            offers.insert(
                product.clone(),
                Offer::new(entry.offer_type.into(), product.clone(), entry.argument),
            );
        }

        let mut cart = ShoppingCart::new();

        for entry in raw.cart {
            let product = by_name
                .get(&entry.product)
                .ok_or(FixtureError::ProductNotFound(entry.product))?;

            cart.add_item_quantity(product.clone(), entry.quantity);
        }

        Ok(Fixture {
            currency,
            catalog,
            offers,
            cart,
        })
    }

    /// Currency of the fixture set.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// The priced catalog.
    pub fn catalog(&self) -> &InMemoryCatalog<'static> {
        &self.catalog
    }

    /// The offers that are on, keyed by product.
    pub fn offers(&self) -> &FxHashMap<Product, Offer> {
        &self.offers
    }

    /// The pre-filled cart.
    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }
}
