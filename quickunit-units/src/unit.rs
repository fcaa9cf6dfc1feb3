//! Unit identifiers and conversion errors

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use quickunit_core::{ErrorReport, format_plain};
use crate::Category;

/// A unit the converter knows about
///
/// Identifiers are matched exactly: "inches", not "in" or "Inches".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    // length
    Inches,
    Cm,
    Feet,
    Meters,
    // area
    Sqft,
    Sqm,
    Acres,
    Hectares,
    // volume
    Liters,
    Gallons,
    Ml,
    // temperature
    Celsius,
    Fahrenheit,
    Kelvin,
    // mass
    Kg,
    Pounds,
    Grams,
}

impl Unit {
    pub const ALL: [Unit; 17] = [
        Unit::Inches, Unit::Cm, Unit::Feet, Unit::Meters,
        Unit::Sqft, Unit::Sqm, Unit::Acres, Unit::Hectares,
        Unit::Liters, Unit::Gallons, Unit::Ml,
        Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin,
        Unit::Kg, Unit::Pounds, Unit::Grams,
    ];

    /// Identifier used by callers and in formatted results
    pub fn id(&self) -> &'static str {
        match self {
            Unit::Inches => "inches",
            Unit::Cm => "cm",
            Unit::Feet => "feet",
            Unit::Meters => "meters",
            Unit::Sqft => "sqft",
            Unit::Sqm => "sqm",
            Unit::Acres => "acres",
            Unit::Hectares => "hectares",
            Unit::Liters => "liters",
            Unit::Gallons => "gallons",
            Unit::Ml => "ml",
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
            Unit::Kelvin => "kelvin",
            Unit::Kg => "kg",
            Unit::Pounds => "pounds",
            Unit::Grams => "grams",
        }
    }

    /// Singular display name
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Inches => "inch",
            Unit::Cm => "centimeter",
            Unit::Feet => "foot",
            Unit::Meters => "meter",
            Unit::Sqft => "square foot",
            Unit::Sqm => "square meter",
            Unit::Acres => "acre",
            Unit::Hectares => "hectare",
            Unit::Liters => "liter",
            Unit::Gallons => "US gallon",
            Unit::Ml => "milliliter",
            Unit::Celsius => "degree Celsius",
            Unit::Fahrenheit => "degree Fahrenheit",
            Unit::Kelvin => "kelvin",
            Unit::Kg => "kilogram",
            Unit::Pounds => "pound",
            Unit::Grams => "gram",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Unit::Inches | Unit::Cm | Unit::Feet | Unit::Meters => Category::Length,
            Unit::Sqft | Unit::Sqm | Unit::Acres | Unit::Hectares => Category::Area,
            Unit::Liters | Unit::Gallons | Unit::Ml => Category::Volume,
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Category::Temperature,
            Unit::Kg | Unit::Pounds | Unit::Grams => Category::Mass,
        }
    }

    /// Look up a unit by its exact identifier
    pub fn parse(s: &str) -> Option<Unit> {
        Self::ALL.into_iter().find(|u| u.id() == s)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Value is missing, non-numeric or not finite
    #[error("invalid input: {input:?} is not a finite number")]
    InvalidInput { input: String },

    /// No formula is registered for the ordered pair in this scope
    #[error("unsupported conversion: {from} -> {to}")]
    UnsupportedPair {
        from: String,
        to: String,
        category: Option<String>,
    },
}

impl ConversionError {
    pub fn invalid_value(value: f64) -> Self {
        ConversionError::InvalidInput { input: format_plain(value) }
    }

    pub fn invalid_text(text: &str) -> Self {
        ConversionError::InvalidInput { input: text.to_string() }
    }

    pub fn unsupported(from: &str, to: &str, category: Option<&str>) -> Self {
        ConversionError::UnsupportedPair {
            from: from.to_string(),
            to: to.to_string(),
            category: category.map(str::to_string),
        }
    }

    /// Structured report for clients; `table` names the table that was searched
    pub fn report(&self, table: &str) -> ErrorReport {
        match self {
            ConversionError::InvalidInput { input } => ErrorReport::invalid_input(input),
            ConversionError::UnsupportedPair { from, to, category } => {
                let scope = match category {
                    Some(c) => format!("category '{}' of the {} table", c, table),
                    None => format!("the {} table", table),
                };
                ErrorReport::unsupported_pair(from, to, Some(&scope))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickunit_core::codes;

    #[test]
    fn test_parse_exact_ids() {
        assert_eq!(Unit::parse("inches"), Some(Unit::Inches));
        assert_eq!(Unit::parse("ml"), Some(Unit::Ml));
        assert_eq!(Unit::parse("in"), None);
        assert_eq!(Unit::parse("Celsius"), None);
        assert_eq!(Unit::parse(""), None);
    }

    #[test]
    fn test_ids_round_trip() {
        for unit in Unit::ALL {
            assert_eq!(Unit::parse(unit.id()), Some(unit));
            assert_eq!(format!("{}", unit), unit.id());
        }
    }

    #[test]
    fn test_ids_have_no_separator() {
        for unit in Unit::ALL {
            assert!(!unit.id().contains('-'), "{} contains a hyphen", unit);
        }
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&Unit::Fahrenheit).unwrap();
        assert_eq!(json, "\"fahrenheit\"");
        let back: Unit = serde_json::from_str("\"sqft\"").unwrap();
        assert_eq!(back, Unit::Sqft);
    }

    #[test]
    fn test_category_membership() {
        assert_eq!(Unit::Acres.category(), Category::Area);
        assert_eq!(Unit::Kelvin.category(), Category::Temperature);
        assert_eq!(Unit::Grams.category(), Category::Mass);
    }

    #[test]
    fn test_error_display() {
        let err = ConversionError::unsupported("celsius", "celsius", None);
        assert_eq!(format!("{}", err), "unsupported conversion: celsius -> celsius");

        let err = ConversionError::invalid_value(f64::NAN);
        assert_eq!(format!("{}", err), "invalid input: \"NaN\" is not a finite number");
    }

    #[test]
    fn test_report() {
        let err = ConversionError::unsupported("acres", "hectares", Some("area"));
        let report = err.report("quick");
        assert_eq!(report.code, codes::UNSUPPORTED_PAIR);
        assert!(report.message.contains("category 'area' of the quick table"));

        let report = ConversionError::invalid_text("abc").report("mini");
        assert_eq!(report.code, codes::INVALID_INPUT);
    }
}
