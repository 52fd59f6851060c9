use clap::{Parser, Subcommand};

use crate::models::PricePreference;

/// PackPicker: picks grocery products and pack combinations that fulfill
/// requested ingredient quantities.
#[derive(Parser, Debug)]
#[command(name = "pack_picker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Select products for a single ingredient.
    Select {
        /// Path to the catalog file (JSON or CSV).
        #[arg(short, long)]
        catalog: String,

        /// Ingredient to fulfill; prompts interactively when omitted.
        #[arg(short, long)]
        ingredient: Option<String>,

        /// Required quantity, e.g. "2 kg" or "6 pieces".
        #[arg(short, long)]
        quantity: Option<String>,

        /// Price preference: budget, value, or premium.
        #[arg(long, default_value = "value")]
        prefer: PricePreference,

        /// Free-text preference (brand, pack size, "organic"); repeatable.
        #[arg(short, long = "preference")]
        preferences: Vec<String>,
    },

    /// Process a multi-line cart against one catalog.
    Cart {
        /// Path to the catalog file (JSON or CSV).
        #[arg(short, long)]
        catalog: String,

        /// Path to the cart JSON file.
        #[arg(long)]
        cart: String,
    },

    /// Compare cart prices across several platform catalogs.
    Compare {
        /// Platform catalog as NAME=PATH; repeatable.
        #[arg(short, long = "catalog", value_name = "NAME=PATH")]
        catalogs: Vec<String>,

        /// Path to the cart JSON file.
        #[arg(long)]
        cart: String,
    },
}
