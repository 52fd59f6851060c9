use std::fmt;

use serde::{Deserialize, Serialize};

/// Physical dimension of a quantity.
///
/// Mass and volume never interconvert; count covers piece-style packs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Mass,
    Volume,
    Count,
}

impl Dimension {
    /// Label of the base unit for this dimension.
    pub fn base_label(self) -> &'static str {
        match self {
            Dimension::Mass => "g",
            Dimension::Volume => "ml",
            Dimension::Count => "piece",
        }
    }
}

/// A unit of measure as vendors spell it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Milligram,
    Gram,
    Kilogram,
    Millilitre,
    Centilitre,
    Litre,
    Piece,
    Pack,
    Dozen,
}

impl Unit {
    /// Resolve a unit token (case-insensitive, vendor spelling variants).
    ///
    /// Returns `None` for tokens outside the known unit list; callers
    /// default those to piece.
    pub fn from_token(token: &str) -> Option<Unit> {
        let token = token.trim().to_lowercase();
        let unit = match token.as_str() {
            "mg" | "milligram" | "milligrams" => Unit::Milligram,
            "g" | "gm" | "gms" | "gram" | "grams" | "gramme" | "grammes" => Unit::Gram,
            "kg" | "kgs" | "kilo" | "kilos" | "kilogram" | "kilograms" => Unit::Kilogram,
            "ml" | "millilitre" | "millilitres" | "milliliter" | "milliliters" => Unit::Millilitre,
            "cl" => Unit::Centilitre,
            "l" | "ltr" | "lt" | "litre" | "litres" | "liter" | "liters" => Unit::Litre,
            "pc" | "pcs" | "piece" | "pieces" | "unit" | "units" | "nos" | "no" => Unit::Piece,
            "pack" | "packs" | "packet" | "packets" | "combo" => Unit::Pack,
            "dozen" | "dozens" | "dz" => Unit::Dozen,
            _ => return None,
        };
        Some(unit)
    }

    /// Dimension this unit measures.
    pub fn dimension(self) -> Dimension {
        match self {
            Unit::Milligram | Unit::Gram | Unit::Kilogram => Dimension::Mass,
            Unit::Millilitre | Unit::Centilitre | Unit::Litre => Dimension::Volume,
            Unit::Piece | Unit::Pack | Unit::Dozen => Dimension::Count,
        }
    }

    /// Conversion factor to the base unit of the dimension (g, ml, piece).
    pub fn base_factor(self) -> f64 {
        match self {
            Unit::Milligram => 0.001,
            Unit::Gram => 1.0,
            Unit::Kilogram => 1000.0,
            Unit::Millilitre => 1.0,
            Unit::Centilitre => 10.0,
            Unit::Litre => 1000.0,
            Unit::Piece | Unit::Pack => 1.0,
            Unit::Dozen => 12.0,
        }
    }

    /// Canonical short label.
    pub fn label(self) -> &'static str {
        match self {
            Unit::Milligram => "mg",
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Millilitre => "ml",
            Unit::Centilitre => "cl",
            Unit::Litre => "l",
            Unit::Piece => "piece",
            Unit::Pack => "pack",
            Unit::Dozen => "dozen",
        }
    }
}

/// A parsed quantity: numeric value plus unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Amount expressed in the base unit of its dimension.
    pub fn base_amount(&self) -> f64 {
        self.value * self.unit.base_factor()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.label())
    }
}
