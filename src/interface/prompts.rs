use dialoguer::{Input, Select};
use strsim::jaro_winkler;

use crate::error::{Result, SelectError};
use crate::models::{PricePreference, Product, SelectionCriteria};
use crate::quantity::parse_quantity;

/// Prompt for the ingredient, with fuzzy suggestions from the catalog.
pub fn prompt_ingredient(products: &[&Product]) -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("Which ingredient do you need?")
            .interact_text()?;

        let input = input.trim().to_string();
        if input.is_empty() {
            continue;
        }

        // Exact name in the catalog: no need to confirm
        let exact = products
            .iter()
            .any(|p| p.name.to_lowercase() == input.to_lowercase());
        if exact {
            return Ok(input);
        }

        // Suggest close catalog names, but allow free text: the matcher
        // works on tokens, not exact names
        let mut candidates: Vec<(&str, f64)> = products
            .iter()
            .map(|p| {
                (
                    p.name.as_str(),
                    jaro_winkler(&p.name.to_lowercase(), &input.to_lowercase()),
                )
            })
            .filter(|(_, score)| *score > 0.7)
            .collect();
        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            return Ok(input);
        }

        let mut options: Vec<String> = candidates
            .iter()
            .take(5)
            .map(|(name, _)| name.to_string())
            .collect();
        options.push(format!("Keep '{input}'"));

        let selection = Select::new()
            .with_prompt("Did you mean one of these?")
            .items(&options)
            .default(0)
            .interact()?;

        if selection < options.len() - 1 {
            return Ok(options.swap_remove(selection));
        }
        return Ok(input);
    }
}

/// Prompt for the required quantity until it parses.
pub fn prompt_quantity() -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("Required quantity (e.g. '2 kg', '500 g', '6 pieces')")
            .interact_text()?;

        match parse_quantity(&input) {
            Ok(_) => return Ok(input.trim().to_string()),
            Err(e) => println!("{e}"),
        }
    }
}

/// Prompt for the price preference.
pub fn prompt_price_preference() -> Result<PricePreference> {
    let options = ["budget", "value", "premium"];
    let selection = Select::new()
        .with_prompt("Price preference")
        .items(&options)
        .default(1) // value
        .interact()?;

    options
        .get(selection)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| SelectError::InvalidInput("invalid price preference".to_string()))
}

/// Collect free-text preferences (brand, pack size, organic) until an
/// empty line.
pub fn prompt_preferences() -> Result<Vec<String>> {
    let mut preferences = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Preference (brand, pack size, 'organic'; Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }
        preferences.push(input.to_string());
    }

    Ok(preferences)
}

/// Collect a full selection criteria interactively.
pub fn collect_criteria(products: &[&Product]) -> Result<SelectionCriteria> {
    let ingredient = prompt_ingredient(products)?;
    let required_quantity = prompt_quantity()?;
    let price_preference = prompt_price_preference()?;
    let preferences = prompt_preferences()?;

    Ok(SelectionCriteria {
        ingredient,
        required_quantity,
        price_preference,
        preferences,
    })
}
