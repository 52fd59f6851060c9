use crate::cart::CartItem;
use crate::models::Product;
use crate::selector::select_products;

/// One vendor's catalog, tagged with its platform name.
#[derive(Debug)]
pub struct PlatformCatalog {
    pub name: String,
    pub products: Vec<Product>,
}

/// What one platform offers for one cart line.
#[derive(Debug, Clone)]
pub struct Quote {
    pub product_name: String,
    pub brand: Option<String>,
    pub pack_size: String,
    /// Total packs across the combination.
    pub count: u32,
    /// Total price for the full combination.
    pub total_price: f64,
}

/// A platform paired with its quote, or `None` when selection failed
/// there (no match, nothing feasible).
#[derive(Debug, Clone)]
pub struct PlatformQuote {
    pub platform: String,
    pub quote: Option<Quote>,
}

/// Per-ingredient comparison across all platforms.
#[derive(Debug, Clone)]
pub struct ItemComparison {
    pub ingredient: String,
    pub quotes: Vec<PlatformQuote>,
}

/// Compare what each platform charges to fulfill every cart line.
///
/// Platforms where a line cannot be fulfilled get a `None` quote; one
/// platform's failure never hides another's price.
pub fn compare_prices(platforms: &[PlatformCatalog], cart: &[CartItem]) -> Vec<ItemComparison> {
    cart.iter()
        .map(|item| {
            let quotes = platforms
                .iter()
                .map(|platform| PlatformQuote {
                    platform: platform.name.clone(),
                    quote: quote_for(platform, item),
                })
                .collect();
            ItemComparison {
                ingredient: item.ingredient.clone(),
                quotes,
            }
        })
        .collect()
}

fn quote_for(platform: &PlatformCatalog, item: &CartItem) -> Option<Quote> {
    let recommendations = match select_products(&platform.products, &item.criteria()) {
        Ok(recommendations) => recommendations,
        Err(e) => {
            log::debug!(
                "no quote on {} for '{}': {}",
                platform.name,
                item.ingredient,
                e
            );
            return None;
        }
    };

    // The first line names the quoted product; price and count cover the
    // whole combination.
    let first = recommendations.first()?;
    let product = platform.products.iter().find(|p| p.id == first.product_id)?;

    Some(Quote {
        product_name: product.name.clone(),
        brand: product.brand.clone(),
        pack_size: product.pack_size.clone(),
        count: recommendations.iter().map(|r| r.count).sum(),
        total_price: recommendations.iter().map(|r| r.price).sum(),
    })
}
