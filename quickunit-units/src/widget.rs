//! Widget entry points
//!
//! The quick-convert box and the mini converters take raw text from an
//! input field and show either the formatted conversion or a fixed message.
//! Each widget has its own wording for the two failure kinds.

use serde::{Serialize, Deserialize};
use quickunit_core::parse_finite;
use crate::tables::{ConversionTable, MINI, QUICK};
use crate::{Conversion, ConversionError};

/// Which converter widget a request comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Widget {
    Quick,
    Mini,
}

/// Outcome kind shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    InvalidInput,
    UnsupportedPair,
}

/// What the widget displays after a conversion attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion: Option<Conversion>,
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

impl Widget {
    pub fn table(&self) -> &'static ConversionTable {
        match self {
            Widget::Quick => &QUICK,
            Widget::Mini => &MINI,
        }
    }

    pub fn invalid_input_message(&self) -> &'static str {
        match self {
            Widget::Quick => "Please enter a valid number",
            Widget::Mini => "Enter a valid number",
        }
    }

    pub fn unsupported_message(&self) -> &'static str {
        match self {
            Widget::Quick => "Please use dedicated converter for this conversion",
            Widget::Mini => "Select different units",
        }
    }

    /// Parse the input field and convert against this widget's table
    pub fn convert_text(
        &self,
        input: &str,
        from: &str,
        to: &str,
        category: Option<&str>,
    ) -> Result<Conversion, ConversionError> {
        match parse_finite(input) {
            Ok(value) => self.table().describe(value, from, to, category),
            Err(_) => Err(ConversionError::invalid_text(input)),
        }
    }

    /// Convert the input field and produce what the widget shows
    pub fn run(&self, input: &str, from: &str, to: &str, category: Option<&str>) -> Outcome {
        self.outcome(&self.convert_text(input, from, to, category))
    }

    /// Turn a conversion result into what this widget shows
    pub fn outcome(&self, result: &Result<Conversion, ConversionError>) -> Outcome {
        match result {
            Ok(conversion) => Outcome {
                status: Status::Ok,
                message: conversion.to_string(),
                conversion: Some(*conversion),
            },
            Err(ConversionError::InvalidInput { .. }) => Outcome {
                status: Status::InvalidInput,
                message: self.invalid_input_message().to_string(),
                conversion: None,
            },
            Err(ConversionError::UnsupportedPair { .. }) => Outcome {
                status: Status::UnsupportedPair,
                message: self.unsupported_message().to_string(),
                conversion: None,
            },
        }
    }
}
