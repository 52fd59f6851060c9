use serde::{Deserialize, Serialize};

/// One line of a selection result: buy `count` packs of `product_id`.
///
/// `price` is the total for the line (count times unit selling price); the
/// total-price convention is applied uniformly across vendors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub product_id: String,

    pub count: u32,

    /// Total price for this line.
    pub price: f64,

    /// Why this product and count were chosen.
    pub reasoning: String,
}

impl Recommendation {
    pub fn new(product_id: impl Into<String>, count: u32, price: f64, reasoning: String) -> Self {
        Self {
            product_id: product_id.into(),
            count,
            price,
            reasoning,
        }
    }
}
