use std::cmp::Ordering;

use crate::error::{Result, SelectError};
use crate::models::PricePreference;
use crate::selector::constants::{PRICE_EPSILON, RATIO_EPSILON};
use crate::selector::solver::PackCombination;

/// Primary order: closest ratio to 1.0 (within epsilon ratios count as
/// equal), then fewest total packs, then fewest distinct SKUs.
fn compare_primary(a: &PackCombination<'_>, b: &PackCombination<'_>) -> Ordering {
    let dist_a = (a.ratio - 1.0).abs();
    let dist_b = (b.ratio - 1.0).abs();
    if (dist_a - dist_b).abs() > RATIO_EPSILON {
        return dist_a.partial_cmp(&dist_b).unwrap_or(Ordering::Equal);
    }
    match a.pack_count().cmp(&b.pack_count()) {
        Ordering::Equal => a.lines.len().cmp(&b.lines.len()),
        ord => ord,
    }
}

/// Keep the combinations whose key is minimal under `key_of` (within
/// `epsilon`).
fn retain_minimal<'a>(
    combos: Vec<PackCombination<'a>>,
    epsilon: f64,
    key_of: impl Fn(&PackCombination<'a>) -> f64,
) -> Vec<PackCombination<'a>> {
    let best = combos.iter().map(&key_of).fold(f64::INFINITY, f64::min);
    combos
        .into_iter()
        .filter(|c| key_of(c) <= best + epsilon)
        .collect()
}

/// Rank index of each combination under `key_of` ascending; equal keys
/// (within epsilon) share a rank.
fn ranks(combos: &[PackCombination<'_>], key_of: impl Fn(&PackCombination<'_>) -> f64) -> Vec<usize> {
    combos
        .iter()
        .map(|c| {
            let key = key_of(c);
            combos
                .iter()
                .filter(|other| key_of(other) < key - PRICE_EPSILON)
                .count()
        })
        .collect()
}

/// Apply the price-preference rule to combinations already equal on SKU
/// count and ratio.
fn apply_preference<'a>(
    combos: Vec<PackCombination<'a>>,
    preference: PricePreference,
) -> Vec<PackCombination<'a>> {
    match preference {
        PricePreference::Budget => retain_minimal(combos, PRICE_EPSILON, |c| c.total_price),
        PricePreference::Premium => retain_minimal(combos, PRICE_EPSILON, |c| -c.quality()),
        PricePreference::Value => {
            // Balanced: minimize the gap between price rank (cheap = 0)
            // and quality rank (best = 0)
            let price_ranks = ranks(&combos, |c| c.total_price);
            let quality_ranks = ranks(&combos, |c| -c.quality());
            let gaps: Vec<usize> = price_ranks
                .iter()
                .zip(&quality_ranks)
                .map(|(p, q)| p.abs_diff(*q))
                .collect();
            let best = gaps.iter().copied().min().unwrap_or(0);
            combos
                .into_iter()
                .zip(gaps)
                .filter(|(_, gap)| *gap == best)
                .map(|(c, _)| c)
                .collect()
        }
    }
}

/// Pick the single best combination.
///
/// Order: closest ratio to 1.0, fewest total packs, fewest distinct SKUs,
/// then the price-preference rule, then lowest total price. Two distinct
/// combinations surviving every rule violate the total order and are
/// reported as an ambiguous selection rather than resolved arbitrarily.
pub fn pick_best<'a>(
    mut combos: Vec<PackCombination<'a>>,
    preference: PricePreference,
    ingredient: &str,
) -> Result<PackCombination<'a>> {
    debug_assert!(!combos.is_empty());

    combos.sort_by(compare_primary);
    let Some(top) = combos.first().cloned() else {
        return Err(SelectError::AmbiguousSelection(ingredient.to_string()));
    };

    let tied: Vec<PackCombination<'a>> = combos
        .into_iter()
        .take_while(|c| compare_primary(c, &top) == Ordering::Equal)
        .collect();

    let mut survivors = apply_preference(tied, preference);
    if survivors.len() > 1 {
        survivors = retain_minimal(survivors, PRICE_EPSILON, |c| c.total_price);
    }

    if survivors.len() > 1 {
        return Err(SelectError::AmbiguousSelection(ingredient.to_string()));
    }
    survivors
        .into_iter()
        .next()
        .ok_or_else(|| SelectError::AmbiguousSelection(ingredient.to_string()))
}
