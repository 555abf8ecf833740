//! Measurement units
//!
//! The closed set of units an ingredient can be purchased and consumed in.
//! Anything outside this enum is rejected at deserialization time, which
//! turns cross-dimension conversion bugs into a compile-time-checkable
//! class instead of a stringly-typed one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical dimension of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Mass,
    Volume,
    Count,
}

/// Measurement unit for purchasing and recipes
///
/// `un` counts indivisible pieces (eggs, buns); it never converts to mass
/// or volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kg,
    G,
    L,
    Ml,
    Un,
}

impl Unit {
    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Kg | Unit::G => Dimension::Mass,
            Unit::L | Unit::Ml => Dimension::Volume,
            Unit::Un => Dimension::Count,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::G => "g",
            Unit::L => "l",
            Unit::Ml => "ml",
            Unit::Un => "un",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kg" => Ok(Unit::Kg),
            "g" => Ok(Unit::G),
            "l" => Ok(Unit::L),
            "ml" => Ok(Unit::Ml),
            "un" => Ok(Unit::Un),
            other => Err(format!("unknown unit: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_grouping() {
        assert_eq!(Unit::Kg.dimension(), Dimension::Mass);
        assert_eq!(Unit::G.dimension(), Dimension::Mass);
        assert_eq!(Unit::L.dimension(), Dimension::Volume);
        assert_eq!(Unit::Ml.dimension(), Dimension::Volume);
        assert_eq!(Unit::Un.dimension(), Dimension::Count);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Unit::Kg).unwrap(), "\"kg\"");
        let unit: Unit = serde_json::from_str("\"ml\"").unwrap();
        assert_eq!(unit, Unit::Ml);
    }

    #[test]
    fn test_serde_rejects_unknown_unit() {
        let result: Result<Unit, _> = serde_json::from_str("\"oz\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_str_round_trip() {
        for unit in [Unit::Kg, Unit::G, Unit::L, Unit::Ml, Unit::Un] {
            assert_eq!(unit.as_str().parse::<Unit>().unwrap(), unit);
        }
        assert!("litre".parse::<Unit>().is_err());
    }
}
