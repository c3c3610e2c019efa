//! Catalog

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};

use crate::products::Product;

/// Read-only unit-price lookup backed by the store's price administration.
///
/// Registering prices is an administrative operation; nothing in a pricing
/// calculation mutates the catalog. Lookups for unregistered products
/// return `None`, and callers surface that as a typed error.
pub trait Catalog<'a> {
    /// Currency every price in this catalog is denominated in.
    fn currency(&self) -> &'static Currency;

    /// Returns the unit price of a registered product.
    fn unit_price(&self, product: &Product) -> Option<Money<'a, Currency>>;

    /// Registers a product's unit price, replacing any previous price.
    fn add_product(&mut self, product: Product, price: Money<'a, Currency>);
}

/// Catalog held entirely in memory.
#[derive(Debug)]
pub struct InMemoryCatalog<'a> {
    currency: &'static Currency,
    prices: FxHashMap<Product, Money<'a, Currency>>,
}

impl InMemoryCatalog<'_> {
    /// Creates an empty catalog for the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        InMemoryCatalog {
            currency,
            prices: FxHashMap::default(),
        }
    }
}

impl<'a> Catalog<'a> for InMemoryCatalog<'a> {
    fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn unit_price(&self, product: &Product) -> Option<Money<'a, Currency>> {
        self.prices.get(product).copied()
    }

    fn add_product(&mut self, product: Product, price: Money<'a, Currency>) {
        self.prices.insert(product, price);
    }
}
