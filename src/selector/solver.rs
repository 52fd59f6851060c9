use crate::models::Product;
use crate::quantity::Quantity;
use crate::selector::constants::{RATIO_EPSILON, TOLERANCE_MAX, TOLERANCE_MIN};

/// One line of a combination: `count` packs of one SKU.
#[derive(Debug, Clone)]
pub struct CombinationLine<'a> {
    pub product: &'a Product,
    pub count: u32,
}

/// A feasible way to fulfill the requested quantity with 1-2 SKUs.
#[derive(Debug, Clone)]
pub struct PackCombination<'a> {
    pub lines: Vec<CombinationLine<'a>>,

    /// Summed quantity in the base unit of the requested dimension.
    pub total_quantity: f64,

    /// total_quantity / required, always within the tolerance band.
    pub ratio: f64,

    /// Summed selling price over all lines.
    pub total_price: f64,
}

impl<'a> PackCombination<'a> {
    fn new(lines: Vec<(&'a Product, f64, u32)>, required_base: f64) -> Self {
        let total_quantity: f64 = lines.iter().map(|(_, pack, count)| pack * f64::from(*count)).sum();
        let total_price: f64 = lines
            .iter()
            .map(|(product, _, count)| product.price * f64::from(*count))
            .sum();
        Self {
            lines: lines
                .into_iter()
                .map(|(product, _, count)| CombinationLine { product, count })
                .collect(),
            total_quantity,
            ratio: total_quantity / required_base,
            total_price,
        }
    }

    /// Total packs across all lines.
    pub fn pack_count(&self) -> u32 {
        self.lines.iter().map(|l| l.count).sum()
    }

    /// MRP (selling price when absent) per base unit: the quality proxy
    /// used by the premium tiebreaker.
    pub fn quality(&self) -> f64 {
        if self.total_quantity <= 0.0 {
            return 0.0;
        }
        let listed: f64 = self
            .lines
            .iter()
            .map(|l| l.product.mrp.unwrap_or(l.product.price) * f64::from(l.count))
            .sum();
        listed / self.total_quantity
    }
}

fn within_band(total: f64, required: f64) -> bool {
    let ratio = total / required;
    ratio >= TOLERANCE_MIN - RATIO_EPSILON && ratio <= TOLERANCE_MAX + RATIO_EPSILON
}

/// Enumerate every combination of 1-2 distinct SKUs from the family whose
/// total normalized quantity lands within the tolerance band.
///
/// Family members whose pack size cannot be normalized to the requested
/// dimension are skipped. An empty result means no feasible combination.
pub fn feasible_combinations<'a>(
    family: &[&'a Product],
    required: &Quantity,
) -> Vec<PackCombination<'a>> {
    let required_base = required.base_amount();
    if required_base <= 0.0 {
        return Vec::new();
    }
    let dimension = required.dimension();

    let options: Vec<(&Product, f64)> = family
        .iter()
        .filter_map(|p| {
            let pack = p.normalized_pack(dimension)?;
            (pack > 0.0).then_some((*p, pack))
        })
        .collect();

    if options.len() < family.len() {
        log::debug!(
            "{} of {} family SKUs have no pack size in the requested dimension",
            family.len() - options.len(),
            family.len()
        );
    }

    let band_low = TOLERANCE_MIN * required_base;
    let band_high = TOLERANCE_MAX * required_base;

    // Counts of `pack` that can land `already + count * pack` inside the
    // band. Epsilon keeps both boundaries inclusive; the range is empty
    // when even one pack overshoots. Iterating the window directly (rather
    // than every count up to the cap) keeps small-pack catalogs tractable.
    let count_window = |pack: f64, already: f64| {
        let low = (((band_low - already) / pack) - RATIO_EPSILON).ceil().max(1.0) as u32;
        let high = (((band_high - already) / pack) + RATIO_EPSILON).floor() as u32;
        low..=high
    };

    let mut combinations = Vec::new();

    // Single-SKU combinations
    for &(product, pack) in &options {
        for count in count_window(pack, 0.0) {
            let total = pack * f64::from(count);
            if within_band(total, required_base) {
                combinations.push(PackCombination::new(
                    vec![(product, pack, count)],
                    required_base,
                ));
            }
        }
    }

    // Two-SKU combinations
    for (i, &(product_a, pack_a)) in options.iter().enumerate() {
        for &(product_b, pack_b) in options.iter().skip(i + 1) {
            // count_a must leave room for at least one pack of b
            let max_a = (((band_high - pack_b) / pack_a) + RATIO_EPSILON).floor() as u32;
            for count_a in 1..=max_a {
                let already = pack_a * f64::from(count_a);
                for count_b in count_window(pack_b, already) {
                    let total = already + pack_b * f64::from(count_b);
                    if within_band(total, required_base) {
                        combinations.push(PackCombination::new(
                            vec![(product_a, pack_a, count_a), (product_b, pack_b, count_b)],
                            required_base,
                        ));
                    }
                }
            }
        }
    }

    combinations
}
