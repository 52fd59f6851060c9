use serde::{Deserialize, Serialize};

use crate::quantity::{parse_pack_size, Dimension, Quantity};

/// A sellable product as reported by a vendor catalog.
///
/// `pack_size` keeps the vendor's own spelling ("500 g", "1 kg", "pack of 2")
/// since representations differ per vendor; normalization happens on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub brand: Option<String>,

    pub pack_size: String,

    /// Longer pack description, when the vendor provides one. Used to
    /// recover an approximate weight for piece-style packs.
    #[serde(default)]
    pub pack_desc: Option<String>,

    /// Selling price for one pack.
    pub price: f64,

    /// Maximum retail price, when reported.
    #[serde(default)]
    pub mrp: Option<f64>,

    pub available: bool,
}

impl Product {
    /// Basic validation: non-empty identity, non-negative price, and
    /// price <= mrp when both are present.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty()
            && !self.name.is_empty()
            && self.price >= 0.0
            && self.mrp.is_none_or(|mrp| self.price <= mrp)
    }

    /// Parse the vendor pack-size string.
    pub fn pack_quantity(&self) -> Option<Quantity> {
        parse_pack_size(&self.pack_size)
    }

    /// Pack content in the base unit of the requested dimension.
    ///
    /// When the pack-size dimension does not match (e.g. a "pack of 1" SKU
    /// requested by weight), falls back to the pack description to recover
    /// an approximate amount. Returns `None` when no bridge exists.
    pub fn normalized_pack(&self, dimension: Dimension) -> Option<f64> {
        if let Some(quantity) = self.pack_quantity() {
            if quantity.dimension() == dimension {
                return Some(quantity.base_amount());
            }
        }

        let desc = self.pack_desc.as_deref()?;
        let quantity = parse_pack_size(desc)?;
        if quantity.dimension() == dimension {
            Some(quantity.base_amount())
        } else {
            None
        }
    }

    /// Quality proxy: MRP per base unit of the given dimension, falling
    /// back to selling price when MRP is absent.
    pub fn quality_per_base(&self, dimension: Dimension) -> Option<f64> {
        let pack = self.normalized_pack(dimension)?;
        if pack <= 0.0 {
            return None;
        }
        Some(self.mrp.unwrap_or(self.price) / pack)
    }
}
