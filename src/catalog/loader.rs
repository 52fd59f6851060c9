use std::fs;
use std::path::Path;

use crate::catalog::ProductCatalog;
use crate::error::Result;
use crate::models::Product;

/// Load a vendor catalog from a JSON or CSV file (dispatched on
/// extension; anything that is not `.csv` is treated as JSON).
///
/// Records violating product invariants (empty identity, negative price,
/// price above MRP) are dropped with a warning rather than failing the
/// whole catalog. Repeated ids are deduplicated, last occurrence winning.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let products = if is_csv {
        load_csv(path)?
    } else {
        load_json(path)?
    };

    let total = products.len();
    let valid: Vec<Product> = products
        .into_iter()
        .filter(|p| {
            let ok = p.is_valid();
            if !ok {
                log::warn!("dropping invalid catalog record id={} name={}", p.id, p.name);
            }
            ok
        })
        .collect();

    if valid.len() < total {
        log::warn!(
            "{} of {} records in {} failed validation",
            total - valid.len(),
            total,
            path.display()
        );
    }

    Ok(ProductCatalog::new(valid).into_products())
}

fn load_json(path: &Path) -> Result<Vec<Product>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn load_csv(path: &Path) -> Result<Vec<Product>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut products = Vec::new();
    for record in reader.deserialize() {
        products.push(record?);
    }
    Ok(products)
}
