use clap::Parser;

use pack_picker_rs::cart::{load_cart, process_cart};
use pack_picker_rs::catalog::load_catalog;
use pack_picker_rs::cli::{Cli, Command};
use pack_picker_rs::compare::{compare_prices, PlatformCatalog};
use pack_picker_rs::error::{Result, SelectError};
use pack_picker_rs::interface::{
    collect_criteria, display_cart_report, display_comparison, display_recommendations,
};
use pack_picker_rs::models::{PricePreference, SelectionCriteria};
use pack_picker_rs::selector::select_products;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Select {
            catalog,
            ingredient,
            quantity,
            prefer,
            preferences,
        } => cmd_select(&catalog, ingredient, quantity, prefer, preferences),
        Command::Cart { catalog, cart } => cmd_cart(&catalog, &cart),
        Command::Compare { catalogs, cart } => cmd_compare(&catalogs, &cart),
    }
}

/// Select products for a single ingredient.
fn cmd_select(
    catalog_path: &str,
    ingredient: Option<String>,
    quantity: Option<String>,
    prefer: PricePreference,
    preferences: Vec<String>,
) -> Result<()> {
    let products = load_catalog(catalog_path)?;
    println!("Loaded {} products from {}", products.len(), catalog_path);

    let criteria = match (ingredient, quantity) {
        (Some(ingredient), Some(quantity)) => SelectionCriteria {
            ingredient,
            required_quantity: quantity,
            price_preference: prefer,
            preferences,
        },
        _ => {
            let available: Vec<_> = products.iter().filter(|p| p.available).collect();
            collect_criteria(&available)?
        }
    };

    let recommendations = select_products(&products, &criteria)?;
    display_recommendations(&products, &criteria.ingredient, &recommendations);
    Ok(())
}

/// Process a multi-line cart against one catalog.
fn cmd_cart(catalog_path: &str, cart_path: &str) -> Result<()> {
    let products = load_catalog(catalog_path)?;
    let items = load_cart(cart_path)?;

    if items.is_empty() {
        println!("Cart file has no items.");
        return Ok(());
    }
    println!(
        "Processing {} cart lines against {} products",
        items.len(),
        products.len()
    );

    let results = process_cart(&products, &items);
    display_cart_report(&products, &results);
    Ok(())
}

/// Compare cart prices across several platform catalogs.
fn cmd_compare(catalog_args: &[String], cart_path: &str) -> Result<()> {
    if catalog_args.len() < 2 {
        return Err(SelectError::InvalidInput(
            "compare needs at least two --catalog NAME=PATH entries".to_string(),
        ));
    }

    let mut platforms = Vec::with_capacity(catalog_args.len());
    for arg in catalog_args {
        let (name, path) = arg.split_once('=').ok_or_else(|| {
            SelectError::InvalidInput(format!("expected NAME=PATH, got '{arg}'"))
        })?;
        platforms.push(PlatformCatalog {
            name: name.to_string(),
            products: load_catalog(path)?,
        });
    }

    let items = load_cart(cart_path)?;
    if items.is_empty() {
        println!("Cart file has no items.");
        return Ok(());
    }

    let comparisons = compare_prices(&platforms, &items);
    display_comparison(&comparisons);
    Ok(())
}
