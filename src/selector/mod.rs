pub mod constants;
pub mod filter;
pub mod solver;
pub mod tiebreak;

pub use filter::Candidate;
pub use solver::{CombinationLine, PackCombination};

use crate::error::{Result, SelectError};
use crate::models::{Product, Recommendation, SelectionCriteria};
use crate::quantity::{parse_quantity, Quantity};

/// Select the best product/pack combination for one ingredient request.
///
/// Pure and idempotent: identical catalog and criteria always produce an
/// identical result. Pipeline: parse the required quantity, filter and
/// rank candidates, restrict to the best-matched family, solve for pack
/// combinations within the tolerance band, tie-break, and emit one
/// recommendation per combination line (1 or 2).
pub fn select_products(
    catalog: &[Product],
    criteria: &SelectionCriteria,
) -> Result<Vec<Recommendation>> {
    let required = parse_quantity(&criteria.required_quantity)?;
    let candidates = filter::rank_candidates(catalog, criteria, required.dimension())?;
    let family = filter::best_family(&candidates);

    let combinations = solver::feasible_combinations(&family, &required);
    if combinations.is_empty() {
        return Err(SelectError::NoFeasibleCombination {
            ingredient: criteria.ingredient.clone(),
            required_quantity: criteria.required_quantity.clone(),
        });
    }

    let best = tiebreak::pick_best(combinations, criteria.price_preference, &criteria.ingredient)?;
    Ok(to_recommendations(&best, &required))
}

fn to_recommendations(combination: &PackCombination<'_>, required: &Quantity) -> Vec<Recommendation> {
    let summary = format!(
        "combination totals {} {} ({:.0}% of requested {})",
        combination.total_quantity,
        required.dimension().base_label(),
        combination.ratio * 100.0,
        required
    );

    combination
        .lines
        .iter()
        .map(|line| {
            let reasoning = format!(
                "{} x {} ({}); {}",
                line.count, line.product.name, line.product.pack_size, summary
            );
            Recommendation::new(
                line.product.id.clone(),
                line.count,
                line.product.price * f64::from(line.count),
                reasoning,
            )
        })
        .collect()
}
