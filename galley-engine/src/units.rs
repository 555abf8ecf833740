//! Unit conversion
//!
//! Converts a quantity between units of the same physical dimension. The
//! table is closed: kg↔g, l↔ml, and the identity for every unit. Any
//! other pair is a `DimensionMismatch`; callers must never fall back to a
//! silent 1:1 factor.

use shared::error::{CostingError, CostingResult};
use shared::models::Unit;

/// Grams per kilogram, millilitres per litre.
const METRIC_FACTOR: f64 = 1000.0;

pub fn convert(quantity: f64, from: Unit, to: Unit) -> CostingResult<f64> {
    if from == to {
        return Ok(quantity);
    }
    match (from, to) {
        (Unit::Kg, Unit::G) | (Unit::L, Unit::Ml) => Ok(quantity * METRIC_FACTOR),
        (Unit::G, Unit::Kg) | (Unit::Ml, Unit::L) => Ok(quantity / METRIC_FACTOR),
        _ => Err(CostingError::DimensionMismatch { from, to }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_for_every_unit() {
        for unit in [Unit::Kg, Unit::G, Unit::L, Unit::Ml, Unit::Un] {
            assert_eq!(convert(2.5, unit, unit).unwrap(), 2.5);
        }
    }

    #[test]
    fn test_metric_pairs() {
        assert_eq!(convert(1.5, Unit::Kg, Unit::G).unwrap(), 1500.0);
        assert_eq!(convert(250.0, Unit::G, Unit::Kg).unwrap(), 0.25);
        assert_eq!(convert(0.75, Unit::L, Unit::Ml).unwrap(), 750.0);
        assert_eq!(convert(330.0, Unit::Ml, Unit::L).unwrap(), 0.33);
    }

    #[test]
    fn test_round_trip() {
        let x = 3.37;
        let back = convert(convert(x, Unit::Kg, Unit::G).unwrap(), Unit::G, Unit::Kg).unwrap();
        assert!((back - x).abs() < 1e-12);
    }

    #[test]
    fn test_cross_dimension_is_an_error() {
        for (from, to) in [
            (Unit::Kg, Unit::Un),
            (Unit::Un, Unit::Ml),
            (Unit::Kg, Unit::L),
            (Unit::Ml, Unit::G),
        ] {
            let err = convert(1.0, from, to).unwrap_err();
            assert_eq!(err, CostingError::DimensionMismatch { from, to });
        }
    }
}
