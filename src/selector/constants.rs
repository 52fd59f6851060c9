/// Lower bound of the fulfillment tolerance band (inclusive).
pub const TOLERANCE_MIN: f64 = 0.85;

/// Upper bound of the fulfillment tolerance band (inclusive).
pub const TOLERANCE_MAX: f64 = 1.15;

/// Maximum distinct SKUs per combination.
pub const MAX_DISTINCT_SKUS: usize = 2;

/// Jaro-Winkler threshold for a product-name token to count as the
/// ingredient token (catches spelling variants, not different words).
pub const INGREDIENT_SIM_THRESHOLD: f64 = 0.92;

/// Jaro-Winkler threshold for a preference string to match a brand.
pub const BRAND_SIM_THRESHOLD: f64 = 0.88;

/// Relative tolerance for a pack-size-hint preference to count as matched.
pub const PACK_HINT_TOLERANCE: f64 = 0.10;

/// Rank weight of one matched preference.
pub const PREFERENCE_WEIGHT: f64 = 10.0;

/// Rank weight of full match specificity.
pub const SPECIFICITY_WEIGHT: f64 = 4.0;

/// Quantity ratios closer than this count as equal when ordering
/// combinations.
pub const RATIO_EPSILON: f64 = 1e-9;

/// Prices closer than this count as equal when tie-breaking.
pub const PRICE_EPSILON: f64 = 1e-6;

/// Modifier words that mark a named variant of a base ingredient.
///
/// A product whose name carries one of these words does not match the base
/// ingredient unless the request itself names the modifier ("onion" must
/// not select "spring onion"; "spring onion" still can).
pub static VARIANT_MODIFIERS: &[&str] = &[
    "spring",
    "sambar",
    "baby",
    "pearl",
    "pickled",
    "dried",
    "dehydrated",
    "fried",
    "roasted",
    "powder",
    "powdered",
    "paste",
    "puree",
    "juice",
    "flakes",
    "seeds",
    "sprouts",
    "chips",
    "masala",
    "pickle",
];
