//! quickunit Units - Fixed-table Unit Conversion
//!
//! Converts values between a fixed set of units using one formula per
//! ordered unit pair. Results are rounded to 4 decimal places.
//!
//! Categories:
//! - Length (inches, cm, feet, meters)
//! - Area (sqft, sqm, acres, hectares)
//! - Volume (liters, gallons, ml)
//! - Temperature (celsius, fahrenheit, kelvin)
//! - Mass (kg, pounds, grams)
//!
//! Two tables are available. `QUICK` holds length and temperature only;
//! `MINI` holds a few pairs of every category and is always consulted
//! category first. Identity pairs (`celsius -> celsius`) are in neither.

mod category;
mod unit;
mod formulas;
mod tables;
mod convert;
mod widget;

pub use category::Category;
pub use unit::{Unit, ConversionError};
pub use formulas::Formula;
pub use tables::{ConversionTable, PairKey, QUICK, MINI, table_by_name};
pub use convert::{Conversion, quick_convert, quick_convert_in, mini_convert};
pub use widget::{Widget, Outcome, Status};
