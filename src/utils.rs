//! Utils

use clap::Parser;

/// Arguments for the receipt demo
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Fixture set to use for the catalog, offers and cart
    #[clap(short, long, default_value = "market")]
    pub fixture: String,
}
