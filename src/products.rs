//! Products

use std::fmt;

use rust_decimal::Decimal;

/// How a product is measured at the till.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductUnit {
    /// Sold per piece.
    Each,

    /// Sold by weight.
    Kilo,
}

/// A sellable item.
///
/// Two products are the same product when their name and unit match; every
/// map in this crate keys on that structural equality, so clones of a
/// product are interchangeable with the original.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Product {
    /// Product name
    pub name: String,

    /// Unit the product is sold in
    pub unit: ProductUnit,
}

impl Product {
    /// Creates a new product.
    #[must_use]
    pub fn new(name: impl Into<String>, unit: ProductUnit) -> Self {
        Product {
            name: name.into(),
            unit,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A product together with the quantity requested in one cart entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuantity {
    product: Product,
    quantity: Decimal,
}

impl ProductQuantity {
    /// Creates a new entry for the given product and quantity.
    #[must_use]
    pub fn new(product: Product, quantity: Decimal) -> Self {
        ProductQuantity { product, quantity }
    }

    /// Returns the product of the entry.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the quantity of the entry.
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }
}
