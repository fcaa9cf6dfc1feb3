//! Conversion formulas, one catalogue per category
//!
//! Each formula is evaluated left to right exactly as written in its
//! expression, so `value × 9/5 + 32` is `((value * 9) / 5) + 32`.

use std::fmt;
use crate::{Category, Unit};

/// A pure conversion from one unit's value to another's
#[derive(Clone, Copy)]
pub struct Formula {
    expr: &'static str,
    apply: fn(f64) -> f64,
}

impl Formula {
    pub const fn new(expr: &'static str, apply: fn(f64) -> f64) -> Self {
        Formula { expr, apply }
    }

    /// Human-readable expression, e.g. "value × 2.54"
    pub fn expr(&self) -> &'static str {
        self.expr
    }

    pub fn apply(&self, value: f64) -> f64 {
        (self.apply)(value)
    }
}

impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Formula").field(&self.expr).finish()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

type Entry = (Unit, Unit, Formula);

static LENGTH: [Entry; 8] = [
    (Unit::Inches, Unit::Cm, Formula::new("value × 2.54", |v| v * 2.54)),
    (Unit::Cm, Unit::Inches, Formula::new("value ÷ 2.54", |v| v / 2.54)),
    (Unit::Feet, Unit::Meters, Formula::new("value × 0.3048", |v| v * 0.3048)),
    (Unit::Meters, Unit::Feet, Formula::new("value ÷ 0.3048", |v| v / 0.3048)),
    (Unit::Inches, Unit::Feet, Formula::new("value ÷ 12", |v| v / 12.0)),
    (Unit::Feet, Unit::Inches, Formula::new("value × 12", |v| v * 12.0)),
    (Unit::Cm, Unit::Meters, Formula::new("value ÷ 100", |v| v / 100.0)),
    (Unit::Meters, Unit::Cm, Formula::new("value × 100", |v| v * 100.0)),
];

static AREA: [Entry; 4] = [
    (Unit::Sqft, Unit::Sqm, Formula::new("value × 0.092903", |v| v * 0.092903)),
    (Unit::Sqm, Unit::Sqft, Formula::new("value ÷ 0.092903", |v| v / 0.092903)),
    (Unit::Acres, Unit::Hectares, Formula::new("value × 0.404686", |v| v * 0.404686)),
    (Unit::Hectares, Unit::Acres, Formula::new("value ÷ 0.404686", |v| v / 0.404686)),
];

static VOLUME: [Entry; 4] = [
    (Unit::Liters, Unit::Gallons, Formula::new("value × 0.264172", |v| v * 0.264172)),
    (Unit::Gallons, Unit::Liters, Formula::new("value ÷ 0.264172", |v| v / 0.264172)),
    (Unit::Ml, Unit::Liters, Formula::new("value ÷ 1000", |v| v / 1000.0)),
    (Unit::Liters, Unit::Ml, Formula::new("value × 1000", |v| v * 1000.0)),
];

static TEMPERATURE: [Entry; 6] = [
    (Unit::Celsius, Unit::Fahrenheit, Formula::new("value × 9/5 + 32", |v| v * 9.0 / 5.0 + 32.0)),
    (Unit::Fahrenheit, Unit::Celsius, Formula::new("(value − 32) × 5/9", |v| (v - 32.0) * 5.0 / 9.0)),
    (Unit::Celsius, Unit::Kelvin, Formula::new("value + 273.15", |v| v + 273.15)),
    (Unit::Kelvin, Unit::Celsius, Formula::new("value − 273.15", |v| v - 273.15)),
    (Unit::Fahrenheit, Unit::Kelvin, Formula::new("(value − 32) × 5/9 + 273.15", |v| (v - 32.0) * 5.0 / 9.0 + 273.15)),
    (Unit::Kelvin, Unit::Fahrenheit, Formula::new("(value − 273.15) × 9/5 + 32", |v| (v - 273.15) * 9.0 / 5.0 + 32.0)),
];

static MASS: [Entry; 4] = [
    (Unit::Kg, Unit::Pounds, Formula::new("value × 2.20462", |v| v * 2.20462)),
    (Unit::Pounds, Unit::Kg, Formula::new("value ÷ 2.20462", |v| v / 2.20462)),
    (Unit::Grams, Unit::Kg, Formula::new("value ÷ 1000", |v| v / 1000.0)),
    (Unit::Kg, Unit::Grams, Formula::new("value × 1000", |v| v * 1000.0)),
];

/// Every known formula of a category
pub fn catalogue(category: Category) -> &'static [(Unit, Unit, Formula)] {
    match category {
        Category::Length => &LENGTH,
        Category::Area => &AREA,
        Category::Volume => &VOLUME,
        Category::Temperature => &TEMPERATURE,
        Category::Mass => &MASS,
    }
}

/// Find the catalogue formula for an ordered pair
pub fn find(category: Category, from: Unit, to: Unit) -> Option<Formula> {
    catalogue(category)
        .iter()
        .find(|(f, t, _)| *f == from && *t == to)
        .map(|(_, _, formula)| *formula)
}
