use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How price breaks ties between otherwise equal selections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricePreference {
    /// Cheapest option that meets the quantity requirement.
    Budget,
    /// Best balance between price and quality.
    #[default]
    Value,
    /// Highest quality regardless of price.
    Premium,
}

impl fmt::Display for PricePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PricePreference::Budget => "budget",
            PricePreference::Value => "value",
            PricePreference::Premium => "premium",
        };
        write!(f, "{label}")
    }
}

impl FromStr for PricePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "budget" => Ok(PricePreference::Budget),
            "value" => Ok(PricePreference::Value),
            "premium" => Ok(PricePreference::Premium),
            other => Err(format!(
                "unknown price preference '{other}' (expected budget, value, or premium)"
            )),
        }
    }
}

/// What the caller wants fulfilled. Immutable per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionCriteria {
    /// Base ingredient to match, e.g. "onion".
    pub ingredient: String,

    /// Free-text required quantity, e.g. "2 kg", "500", "6 pieces".
    pub required_quantity: String,

    #[serde(default)]
    pub price_preference: PricePreference,

    /// Free-text preferences: brand names, pack-size hints, "organic".
    #[serde(default)]
    pub preferences: Vec<String>,
}

impl SelectionCriteria {
    pub fn new(ingredient: impl Into<String>, required_quantity: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            required_quantity: required_quantity.into(),
            price_preference: PricePreference::default(),
            preferences: Vec::new(),
        }
    }

    pub fn with_preference(mut self, preference: impl Into<String>) -> Self {
        self.preferences.push(preference.into());
        self
    }

    pub fn with_price_preference(mut self, price_preference: PricePreference) -> Self {
        self.price_preference = price_preference;
        self
    }
}
