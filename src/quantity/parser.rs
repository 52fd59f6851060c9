use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SelectError};
use crate::quantity::units::{Quantity, Unit};

/// Numeric value with an optional trailing unit token.
///
/// Accepts decimals ("1.5 kg", ".5 l") as well as integers, so fractional
/// requests are not silently dropped.
static QUANTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+\.\d+|\.\d+|\d+)\s*([a-z]+)?")
        .expect("quantity pattern should be valid")
});

/// Multiplier pack descriptions like "2 x 250 g" or "4×90g".
static MULTIPLIER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*[x×*]\s*(\d+\.\d+|\.\d+|\d+)\s*([a-z]+)?")
        .expect("multiplier pattern should be valid")
});

/// Counted pack descriptions like "pack of 6" or "combo of 2".
static PACK_OF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:pack|packet|combo|set|box)\s+of\s+(\d+)")
        .expect("pack-of pattern should be valid")
});

/// Parse a free-text quantity requirement into a numeric value and unit.
///
/// Unit tokens outside the known list (and missing units) default to piece.
/// Fails with [`SelectError::ParseError`] when no numeric token is present.
pub fn parse_quantity(text: &str) -> Result<Quantity> {
    let captures = QUANTITY_REGEX
        .captures(text)
        .ok_or_else(|| SelectError::ParseError(text.to_string()))?;

    let value: f64 = captures
        .get(1)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| SelectError::ParseError(text.to_string()))?;

    let unit = captures
        .get(2)
        .and_then(|m| Unit::from_token(m.as_str()))
        .unwrap_or(Unit::Piece);

    Ok(Quantity::new(value, unit))
}

/// Parse a vendor pack-size or pack-description string.
///
/// Handles multipliers ("2 x 250 g" -> 500 g) and counted packs
/// ("pack of 6" -> 6 pieces) before falling back to a plain quantity.
/// Returns `None` when nothing numeric can be recovered.
pub fn parse_pack_size(text: &str) -> Option<Quantity> {
    if let Some(captures) = MULTIPLIER_REGEX.captures(text) {
        let count: f64 = captures.get(1)?.as_str().parse().ok()?;
        let each: f64 = captures.get(2)?.as_str().parse().ok()?;
        let unit = captures
            .get(3)
            .and_then(|m| Unit::from_token(m.as_str()))
            .unwrap_or(Unit::Piece);
        return Some(Quantity::new(count * each, unit));
    }

    if let Some(captures) = PACK_OF_REGEX.captures(text) {
        let count: f64 = captures.get(1)?.as_str().parse().ok()?;
        return Some(Quantity::new(count, Unit::Piece));
    }

    parse_quantity(text).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::units::Dimension;

    #[test]
    fn test_parse_simple_quantities() {
        let q = parse_quantity("2 kg").unwrap();
        assert_eq!(q.value, 2.0);
        assert_eq!(q.unit, Unit::Kilogram);

        let q = parse_quantity("500g").unwrap();
        assert_eq!(q.value, 500.0);
        assert_eq!(q.unit, Unit::Gram);

        let q = parse_quantity("6 pieces").unwrap();
        assert_eq!(q.value, 6.0);
        assert_eq!(q.unit, Unit::Piece);
    }

    #[test]
    fn test_parse_accepts_decimals() {
        let q = parse_quantity("1.5 kg").unwrap();
        assert_eq!(q.value, 1.5);
        assert_eq!(q.unit, Unit::Kilogram);

        let q = parse_quantity(".5 l").unwrap();
        assert_eq!(q.value, 0.5);
        assert_eq!(q.unit, Unit::Litre);
    }

    #[test]
    fn test_parse_defaults_to_piece() {
        // Bare number
        let q = parse_quantity("500").unwrap();
        assert_eq!(q.unit, Unit::Piece);

        // Unknown unit token
        let q = parse_quantity("3 bunches").unwrap();
        assert_eq!(q.value, 3.0);
        assert_eq!(q.unit, Unit::Piece);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(parse_quantity("some onions").is_err());
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("kg").is_err());
    }

    #[test]
    fn test_pack_size_multiplier() {
        let q = parse_pack_size("2 x 250 g").unwrap();
        assert_eq!(q.base_amount(), 500.0);
        assert_eq!(q.dimension(), Dimension::Mass);

        let q = parse_pack_size("4×90g").unwrap();
        assert_eq!(q.base_amount(), 360.0);
    }

    #[test]
    fn test_pack_size_pack_of() {
        let q = parse_pack_size("Pack of 6").unwrap();
        assert_eq!(q.value, 6.0);
        assert_eq!(q.unit, Unit::Piece);
        assert_eq!(q.dimension(), Dimension::Count);
    }

    #[test]
    fn test_pack_size_plain_and_unparseable() {
        let q = parse_pack_size("1 kg").unwrap();
        assert_eq!(q.base_amount(), 1000.0);

        assert!(parse_pack_size("approx weight varies").is_none());
    }
}
