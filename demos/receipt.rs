//! Receipt demo
//!
//! Loads a fixture set, checks the cart out against its catalog and offers,
//! and prints the receipt.
//!
//! Use `-f` to load a fixture set by name from the `fixtures/` directory.

use std::io;

use anyhow::Result;
use clap::Parser;

use tally::{fixtures::Fixture, printer::ReceiptPrinter, teller::Teller, utils::DemoArgs};

/// Receipt demo
#[expect(clippy::print_stdout, reason = "Example code")]
fn main() -> Result<()> {
    let args = DemoArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;

    let mut teller = Teller::new(fixture.catalog());

    for offer in fixture.offers().values() {
        teller.add_special_offer(offer.offer_type(), offer.product().clone(), offer.argument());
    }

    let receipt = teller.checks_out_articles_from(fixture.cart())?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    ReceiptPrinter::new().write_to(&mut handle, &receipt)?;

    println!("\n{} discount line(s) applied", receipt.discounts().len());

    Ok(())
}
