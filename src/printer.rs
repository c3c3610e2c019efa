//! Receipt printer

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    products::ProductUnit,
    receipt::{Receipt, ReceiptError, ReceiptLine},
};

/// Errors that can occur while rendering a receipt.
#[derive(Debug, Error)]
pub enum PrinterError {
    /// Failed to write to the output sink.
    #[error("failed to write receipt")]
    Io(#[from] io::Error),

    /// The receipt could not be totalled.
    #[error(transparent)]
    Receipt(#[from] ReceiptError),
}

/// Renders receipts as a text table.
///
/// Reads line items, discounts and the total; never mutates the receipt.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReceiptPrinter;

impl ReceiptPrinter {
    /// Creates a printer.
    #[must_use]
    pub fn new() -> Self {
        ReceiptPrinter
    }

    /// Writes the receipt table and total to the given sink.
    ///
    /// # Errors
    ///
    /// Returns a [`PrinterError`] if the sink cannot be written to or the
    /// receipt cannot be totalled.
    pub fn write_to(
        &self,
        mut out: impl io::Write,
        receipt: &Receipt<'_>,
    ) -> Result<(), PrinterError> {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Qty", "Price", "Total"]);

        let items = receipt.items();

        for line in &items {
            builder.push_record([
                line.product.name.clone(),
                quantity_cell(line),
                line.price.to_string(),
                line.total.to_string(),
            ]);
        }

        let discounts = receipt.discounts();

        for discount in &discounts {
            builder.push_record([
                format!("{} ({})", discount.description(), discount.product()),
                String::new(),
                String::new(),
                discount.amount().to_string(),
            ]);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());
        let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(1, separator);

        if !discounts.is_empty() {
            // Keep the discount block visually apart from the line items.
            theme.insert_horizontal_line(items.len() + 1, separator);
        }

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(1..4), Alignment::right());

        writeln!(out, "{table}")?;
        writeln!(out, "\n Total: {}", receipt.total_price()?)?;

        Ok(())
    }
}

/// Quantity column contents: whole counts for per-piece products, three
/// decimals for weighed ones.
fn quantity_cell(line: &ReceiptLine<'_>) -> String {
    match line.product.unit {
        ProductUnit::Each => line.quantity.normalize().to_string(),
        ProductUnit::Kilo => format!("{:.3}", line.quantity),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::{Money, iso::GBP};
    use testresult::TestResult;

    use crate::{discounts::Discount, products::Product};

    use super::*;

    fn sample_receipt() -> Receipt<'static> {
        let toothbrush = Product::new("toothbrush", ProductUnit::Each);
        let apples = Product::new("apples", ProductUnit::Kilo);

        let mut receipt = Receipt::new(GBP);

        receipt.add_product(
            toothbrush.clone(),
            Decimal::from(3),
            Money::from_minor(99, GBP),
            Money::from_minor(297, GBP),
        );

        receipt.add_product(
            apples,
            Decimal::new(25, 1),
            Money::from_minor(199, GBP),
            Money::from_minor(498, GBP),
        );

        receipt.add_discount(Discount::new(
            toothbrush,
            "3 for 2".to_owned(),
            Money::from_minor(-99, GBP),
        ));

        receipt
    }

    #[test]
    fn renders_items_discounts_and_total() -> TestResult {
        let receipt = sample_receipt();

        let mut out = Vec::new();
        ReceiptPrinter::new().write_to(&mut out, &receipt)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("toothbrush"), "item names should render");
        assert!(output.contains("apples"), "item names should render");
        assert!(
            output.contains("3 for 2 (toothbrush)"),
            "discount rows should carry description and product"
        );
        assert!(output.contains("Total:"), "footer should render");

        Ok(())
    }

    #[test]
    fn weighed_quantities_render_with_three_decimals() -> TestResult {
        let receipt = sample_receipt();

        let mut out = Vec::new();
        ReceiptPrinter::new().write_to(&mut out, &receipt)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("2.500"), "kilo quantities use three decimals");

        Ok(())
    }

    #[test]
    fn renders_an_empty_receipt() -> TestResult {
        let receipt = Receipt::new(GBP);

        let mut out = Vec::new();
        ReceiptPrinter::new().write_to(&mut out, &receipt)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("Item"), "header should render");
        assert!(output.contains("Total:"), "footer should render");

        Ok(())
    }
}
