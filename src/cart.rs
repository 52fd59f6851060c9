use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{PricePreference, Product, Recommendation, SelectionCriteria};
use crate::selector::select_products;

/// One line of a shopping cart, as provided by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub ingredient: String,

    pub required_quantity: String,

    #[serde(default)]
    pub preference: Option<String>,

    #[serde(default)]
    pub price_preference: Option<PricePreference>,
}

impl CartItem {
    pub fn criteria(&self) -> SelectionCriteria {
        let mut criteria =
            SelectionCriteria::new(self.ingredient.clone(), self.required_quantity.clone());
        if let Some(preference) = &self.preference {
            criteria = criteria.with_preference(preference.clone());
        }
        if let Some(price_preference) = self.price_preference {
            criteria = criteria.with_price_preference(price_preference);
        }
        criteria
    }
}

/// Outcome of one cart line.
#[derive(Debug, Clone)]
pub enum LineOutcome {
    Fulfilled(Vec<Recommendation>),
    Failed(String),
}

/// A cart line paired with its selection outcome.
#[derive(Debug, Clone)]
pub struct CartLineResult {
    pub item: CartItem,
    pub outcome: LineOutcome,
}

impl CartLineResult {
    pub fn is_fulfilled(&self) -> bool {
        matches!(self.outcome, LineOutcome::Fulfilled(_))
    }
}

/// Run the selector for every cart line against one catalog.
///
/// A failed line records its error text and never aborts the rest of the
/// cart.
pub fn process_cart(catalog: &[Product], items: &[CartItem]) -> Vec<CartLineResult> {
    items
        .iter()
        .map(|item| {
            let outcome = match select_products(catalog, &item.criteria()) {
                Ok(recommendations) => LineOutcome::Fulfilled(recommendations),
                Err(e) => {
                    log::debug!("cart line '{}' failed: {}", item.ingredient, e);
                    LineOutcome::Failed(e.to_string())
                }
            };
            CartLineResult {
                item: item.clone(),
                outcome,
            }
        })
        .collect()
}

/// Load a cart from a JSON file.
pub fn load_cart<P: AsRef<Path>>(path: P) -> Result<Vec<CartItem>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
