//! Measurement categories
//!
//! Every unit belongs to exactly one category, and a conversion never
//! crosses categories.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::Unit;

/// Physical domain a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Area,
    Volume,
    Temperature,
    Mass,
}

impl Category {
    /// All categories in declaration order
    pub const ALL: [Category; 5] = [
        Category::Length,
        Category::Area,
        Category::Volume,
        Category::Temperature,
        Category::Mass,
    ];

    /// Identifier used by callers ("length", "area", ...)
    pub fn id(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Area => "area",
            Category::Volume => "volume",
            Category::Temperature => "temperature",
            Category::Mass => "mass",
        }
    }

    /// Look up a category by its exact identifier
    pub fn parse(s: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.id() == s)
    }

    /// Units measuring this category
    pub fn units(&self) -> Vec<Unit> {
        Unit::ALL.into_iter().filter(|u| u.category() == *self).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
