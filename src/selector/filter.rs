use std::cmp::Ordering;

use strsim::jaro_winkler;

use crate::error::{Result, SelectError};
use crate::models::{PricePreference, Product, SelectionCriteria};
use crate::quantity::{parse_pack_size, Dimension, Unit};
use crate::selector::constants::{
    BRAND_SIM_THRESHOLD, INGREDIENT_SIM_THRESHOLD, PACK_HINT_TOLERANCE, PREFERENCE_WEIGHT,
    PRICE_EPSILON, SPECIFICITY_WEIGHT, VARIANT_MODIFIERS,
};

/// Candidate product with its computed ranking scores.
#[derive(Debug)]
pub struct Candidate<'a> {
    pub product: &'a Product,
    pub preference_hits: u32,
    pub specificity: f64,
    pub rank_score: f64,
}

/// Lowercase word tokens of a product or ingredient name.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Name tokens that describe the product itself, excluding pack-size
/// noise (numbers, unit tokens, filler words).
fn informative_tokens(name: &str) -> Vec<String> {
    tokenize(name)
        .into_iter()
        .filter(|t| t.parse::<f64>().is_err())
        .filter(|t| Unit::from_token(t).is_none())
        .filter(|t| t != "of" && t != "x" && t != "approx")
        .collect()
}

/// Whether a product name matches the requested base ingredient.
///
/// Every ingredient token must appear in the name (exact or above the
/// Jaro-Winkler threshold, to absorb spelling variants), and the name must
/// not carry a variant modifier the request itself does not name:
/// "onion" must not match "spring onion".
pub fn matches_ingredient(name: &str, ingredient: &str) -> bool {
    let ingredient_tokens = tokenize(ingredient);
    if ingredient_tokens.is_empty() {
        return false;
    }
    let name_tokens = tokenize(name);

    let all_present = ingredient_tokens.iter().all(|ing| {
        name_tokens
            .iter()
            .any(|t| t == ing || jaro_winkler(t, ing) >= INGREDIENT_SIM_THRESHOLD)
    });
    if !all_present {
        return false;
    }

    name_tokens
        .iter()
        .filter(|t| VARIANT_MODIFIERS.contains(&t.as_str()))
        .all(|modifier| ingredient_tokens.contains(modifier))
}

/// Share of the product name explained by the ingredient: an exact-name
/// product outranks one whose name carries extra descriptors.
fn specificity(name: &str, ingredient: &str) -> f64 {
    let informative = informative_tokens(name);
    if informative.is_empty() {
        return 0.0;
    }
    let ingredient_tokens = tokenize(ingredient);
    let matched = informative
        .iter()
        .filter(|t| {
            ingredient_tokens
                .iter()
                .any(|ing| *t == ing || jaro_winkler(t, ing) >= INGREDIENT_SIM_THRESHOLD)
        })
        .count();
    matched as f64 / informative.len() as f64
}

/// Whether a single free-text preference matches a product.
///
/// A preference is one of: an "organic" keyword, a pack-size hint
/// ("1000ml packet"), a brand name, or a plain keyword found in the name.
fn preference_matches(product: &Product, preference: &str) -> bool {
    let preference = preference.trim();
    if preference.is_empty() {
        return false;
    }
    let lowered = preference.to_lowercase();
    let name_tokens = tokenize(&product.name);

    if lowered.contains("organic") {
        return name_tokens.iter().any(|t| t == "organic");
    }

    if let Some(hint) = parse_pack_size(preference) {
        let Some(pack) = product.normalized_pack(hint.dimension()) else {
            return false;
        };
        return (pack - hint.base_amount()).abs() <= hint.base_amount() * PACK_HINT_TOLERANCE;
    }

    if let Some(brand) = &product.brand {
        if jaro_winkler(&brand.to_lowercase(), &lowered) >= BRAND_SIM_THRESHOLD {
            return true;
        }
    }

    tokenize(preference)
        .iter()
        .all(|t| name_tokens.contains(t))
}

/// Filter the catalog to available ingredient matches and rank them.
///
/// Rank order: preference hits, then match specificity, then the
/// price-preference mode (budget: cheapest; premium: best quality per
/// unit; value: smallest gap between price rank and quality rank), then
/// id for a stable total order.
pub fn rank_candidates<'a>(
    catalog: &'a [Product],
    criteria: &SelectionCriteria,
    dimension: Dimension,
) -> Result<Vec<Candidate<'a>>> {
    let mut candidates: Vec<Candidate<'a>> = catalog
        .iter()
        .filter(|p| p.available)
        .filter(|p| matches_ingredient(&p.name, &criteria.ingredient))
        .map(|product| {
            let preference_hits = criteria
                .preferences
                .iter()
                .filter(|pref| preference_matches(product, pref))
                .count() as u32;
            let specificity = specificity(&product.name, &criteria.ingredient);
            let rank_score =
                preference_hits as f64 * PREFERENCE_WEIGHT + specificity * SPECIFICITY_WEIGHT;

            Candidate {
                product,
                preference_hits,
                specificity,
                rank_score,
            }
        })
        .collect();

    if candidates.is_empty() {
        return Err(SelectError::NoCandidate(criteria.ingredient.clone()));
    }

    // Value mode balances price against quality via shared rank indices
    // (cheap = 0, best quality = 0), mirroring the combination tiebreak
    let quality_of =
        |c: &Candidate<'_>| c.product.quality_per_base(dimension).unwrap_or(0.0);
    let gaps: Vec<usize> = candidates
        .iter()
        .map(|c| {
            let price_rank = candidates
                .iter()
                .filter(|o| o.product.price < c.product.price - PRICE_EPSILON)
                .count();
            let quality_rank = candidates
                .iter()
                .filter(|o| quality_of(o) > quality_of(c) + PRICE_EPSILON)
                .count();
            price_rank.abs_diff(quality_rank)
        })
        .collect();

    let mut ranked: Vec<(Candidate<'a>, usize)> = candidates.into_iter().zip(gaps).collect();
    ranked.sort_by(|(a, gap_a), (b, gap_b)| {
        match b
            .rank_score
            .partial_cmp(&a.rank_score)
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Equal => {}
            ord => return ord,
        }

        let by_price = |a: &Candidate<'_>, b: &Candidate<'_>| {
            a.product
                .price
                .partial_cmp(&b.product.price)
                .unwrap_or(Ordering::Equal)
        };
        let price_order = match criteria.price_preference {
            PricePreference::Budget => by_price(a, b),
            PricePreference::Value => match gap_a.cmp(gap_b) {
                Ordering::Equal => by_price(a, b),
                ord => ord,
            },
            PricePreference::Premium => {
                let qa = a.product.quality_per_base(dimension).unwrap_or(0.0);
                let qb = b.product.quality_per_base(dimension).unwrap_or(0.0);
                qb.partial_cmp(&qa).unwrap_or(Ordering::Equal)
            }
        };
        match price_order {
            Ordering::Equal => a.product.id.cmp(&b.product.id),
            ord => ord,
        }
    });
    let candidates: Vec<Candidate<'a>> = ranked.into_iter().map(|(c, _)| c).collect();

    log::debug!(
        "{} of {} catalog products are candidates for '{}'",
        candidates.len(),
        catalog.len(),
        criteria.ingredient
    );

    Ok(candidates)
}

/// Family key: same brand plus same core name (pack-size tokens stripped).
///
/// Vendors list each pack size of one product as a separate SKU; the family
/// groups those SKUs back together for the solver.
fn family_key(product: &Product) -> (String, String) {
    let brand = product
        .brand
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    (brand, informative_tokens(&product.name).join(" "))
}

/// Restrict ranked candidates to the single best-matched product family.
pub fn best_family<'a>(candidates: &[Candidate<'a>]) -> Vec<&'a Product> {
    let Some(top) = candidates.first() else {
        return Vec::new();
    };
    let key = family_key(top.product);
    candidates
        .iter()
        .filter(|c| family_key(c.product) == key)
        .map(|c| c.product)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, brand: Option<&str>, pack: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            brand: brand.map(str::to_string),
            pack_size: pack.to_string(),
            pack_desc: None,
            price,
            mrp: None,
            available: true,
        }
    }

    #[test]
    fn test_matches_ingredient_rejects_variants() {
        assert!(matches_ingredient("Onion", "onion"));
        assert!(matches_ingredient("Fresho Onion 1 kg", "onion"));
        assert!(!matches_ingredient("Spring Onion", "onion"));
        assert!(!matches_ingredient("Onion Powder", "onion"));
        assert!(matches_ingredient("Spring Onion", "spring onion"));
    }

    #[test]
    fn test_matches_ingredient_multiword() {
        assert!(matches_ingredient("Extra Virgin Olive Oil", "olive oil"));
        assert!(!matches_ingredient("Sunflower Oil", "olive oil"));
    }

    #[test]
    fn test_specificity_prefers_exact_names() {
        let exact = specificity("Onion", "onion");
        let descriptive = specificity("Fresho Premium Red Onion", "onion");
        assert!(exact > descriptive);
        assert_eq!(exact, 1.0);
    }

    #[test]
    fn test_preference_brand_match() {
        let p = product("1", "Onion", Some("Fresho"), "500 g", 25.0);
        assert!(preference_matches(&p, "Fresho"));
        assert!(preference_matches(&p, "fresho"));
        assert!(!preference_matches(&p, "Tata"));
    }

    #[test]
    fn test_preference_organic_keyword() {
        let organic = product("1", "Organic Onion", None, "500 g", 40.0);
        let plain = product("2", "Onion", None, "500 g", 25.0);
        assert!(preference_matches(&organic, "organic"));
        assert!(!preference_matches(&plain, "organic"));
    }

    #[test]
    fn test_preference_pack_size_hint() {
        let litre = product("1", "Milk", Some("Amul"), "1 l", 70.0);
        let half = product("2", "Milk", Some("Amul"), "500 ml", 38.0);
        assert!(preference_matches(&litre, "1000ml packet"));
        assert!(!preference_matches(&half, "1000ml packet"));
    }

    #[test]
    fn test_rank_candidates_filters_unavailable() {
        let mut unavailable = product("1", "Onion", None, "500 g", 25.0);
        unavailable.available = false;
        let catalog = vec![unavailable, product("2", "Onion", None, "1 kg", 45.0)];

        let criteria = SelectionCriteria::new("onion", "1 kg");
        let ranked = rank_candidates(&catalog, &criteria, Dimension::Mass).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].product.id, "2");
    }

    #[test]
    fn test_rank_candidates_no_match_errors() {
        let catalog = vec![product("1", "Tomato", None, "500 g", 20.0)];
        let criteria = SelectionCriteria::new("onion", "1 kg");
        assert!(matches!(
            rank_candidates(&catalog, &criteria, Dimension::Mass),
            Err(SelectError::NoCandidate(_))
        ));
    }

    #[test]
    fn test_rank_candidates_preference_first() {
        let catalog = vec![
            product("1", "Onion", Some("Local"), "1 kg", 30.0),
            product("2", "Onion", Some("Fresho"), "1 kg", 45.0),
        ];
        let criteria = SelectionCriteria::new("onion", "1 kg").with_preference("Fresho");
        let ranked = rank_candidates(&catalog, &criteria, Dimension::Mass).unwrap();
        assert_eq!(ranked[0].product.id, "2");
    }

    #[test]
    fn test_rank_candidates_value_prefers_balanced() {
        let mut budget = product("a", "Onion", Some("Local"), "500 g", 20.0);
        budget.mrp = Some(20.0);
        let mut mid = product("b", "Onion", Some("Farmside"), "500 g", 35.0);
        mid.mrp = Some(50.0);
        let mut premium = product("c", "Onion", Some("Gourmet"), "500 g", 60.0);
        premium.mrp = Some(90.0);
        let catalog = vec![budget, mid, premium];

        // price ranks: a=0 b=1 c=2; quality ranks: c=0 b=1 a=2.
        // Value puts the balanced brand first, not the cheapest.
        let criteria = SelectionCriteria::new("onion", "500 g");
        let ranked = rank_candidates(&catalog, &criteria, Dimension::Mass).unwrap();
        assert_eq!(ranked[0].product.id, "b");

        let budget_criteria = SelectionCriteria::new("onion", "500 g")
            .with_price_preference(PricePreference::Budget);
        let ranked = rank_candidates(&catalog, &budget_criteria, Dimension::Mass).unwrap();
        assert_eq!(ranked[0].product.id, "a");
    }

    #[test]
    fn test_best_family_groups_pack_sizes() {
        let catalog = vec![
            product("1", "Onion", Some("Fresho"), "500 g", 25.0),
            product("2", "Onion", Some("Fresho"), "1 kg", 45.0),
            product("3", "Onion", Some("Local"), "1 kg", 30.0),
        ];
        let criteria = SelectionCriteria::new("onion", "1 kg").with_preference("Fresho");
        let ranked = rank_candidates(&catalog, &criteria, Dimension::Mass).unwrap();
        let family = best_family(&ranked);

        assert_eq!(family.len(), 2);
        assert!(family.iter().all(|p| p.brand.as_deref() == Some("Fresho")));
    }
}
