//! The conversion operation and its entry points

use std::fmt;
use serde::Serialize;
use quickunit_core::{DECIMAL_PLACES, format_plain, round_half_away, to_fixed};
use crate::tables::{ConversionTable, MINI, QUICK};
use crate::{Category, ConversionError, Unit};

/// A successful conversion, result already rounded
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    pub value: f64,
    pub category: Category,
    pub from: Unit,
    pub to: Unit,
    pub result: f64,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {} {}",
            format_plain(self.value),
            self.from,
            to_fixed(self.result, DECIMAL_PLACES),
            self.to
        )
    }
}

impl ConversionTable {
    /// Convert `value` and return the rounded number
    pub fn convert(
        &self,
        value: f64,
        from: &str,
        to: &str,
        category: Option<&str>,
    ) -> Result<f64, ConversionError> {
        self.describe(value, from, to, category).map(|c| c.result)
    }

    /// Convert `value` and return the full record for display
    pub fn describe(
        &self,
        value: f64,
        from: &str,
        to: &str,
        category: Option<&str>,
    ) -> Result<Conversion, ConversionError> {
        if !value.is_finite() {
            return Err(ConversionError::invalid_value(value));
        }

        let (key, formula) = self.resolve(from, to, category)?;

        let raw = formula.apply(value);
        if !raw.is_finite() {
            tracing::debug!(table = self.name(), from, to, value, "result overflowed");
            return Err(ConversionError::invalid_value(value));
        }

        let result = round_half_away(raw, DECIMAL_PLACES);
        tracing::trace!(table = self.name(), from, to, value, result, "converted");

        Ok(Conversion {
            value,
            category: key.category,
            from: key.from,
            to: key.to,
            result,
        })
    }
}

/// Convert with the quick table (length and temperature only)
pub fn quick_convert(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    QUICK.convert(value, from, to, None)
}

/// Convert with the quick table, scoped to a category
pub fn quick_convert_in(
    value: f64,
    from: &str,
    to: &str,
    category: &str,
) -> Result<f64, ConversionError> {
    QUICK.convert(value, from, to, Some(category))
}

/// Convert with the mini table: category first, then the pair within it
pub fn mini_convert(
    value: f64,
    category: &str,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    MINI.convert(value, from, to, Some(category))
}
