//! Conversion tables
//!
//! Two process-wide tables exist, both built once on first use and never
//! mutated afterwards:
//! - `QUICK`: the quick-convert box. Length and temperature only.
//! - `MINI`: the per-category mini converters. Every category, but only the
//!   pairs each mini panel offers.

use std::collections::HashMap;
use std::sync::LazyLock;
use serde::Serialize;
use crate::formulas::{self, Formula};
use crate::{Category, ConversionError, Unit};

/// Global quick-convert table
pub static QUICK: LazyLock<ConversionTable> = LazyLock::new(ConversionTable::quick);

/// Global per-category mini-convert table
pub static MINI: LazyLock<ConversionTable> = LazyLock::new(ConversionTable::mini);

/// Select a table by name ("quick" or "mini")
pub fn table_by_name(name: &str) -> Option<&'static ConversionTable> {
    match name {
        "quick" => Some(&*QUICK),
        "mini" => Some(&*MINI),
        _ => None,
    }
}

/// Lookup key: an ordered pair of units within one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PairKey {
    pub category: Category,
    pub from: Unit,
    pub to: Unit,
}

/// Immutable mapping from unit pair to formula
pub struct ConversionTable {
    name: &'static str,
    formulas: HashMap<PairKey, Formula>,
}

impl ConversionTable {
    fn empty(name: &'static str) -> Self {
        ConversionTable {
            name,
            formulas: HashMap::new(),
        }
    }

    /// Length and temperature, every pair of each
    pub fn quick() -> Self {
        let mut table = Self::empty("quick");
        table.register_category(Category::Length);
        table.register_category(Category::Temperature);
        table
    }

    /// One sub-table per category, limited to the pairs each panel offers
    pub fn mini() -> Self {
        use Unit::*;

        let mut table = Self::empty("mini");
        table.register_pairs(Category::Length, &[
            (Inches, Cm), (Cm, Inches),
            (Feet, Meters), (Meters, Feet),
        ]);
        table.register_category(Category::Area);
        table.register_category(Category::Volume);
        table.register_pairs(Category::Temperature, &[
            (Celsius, Fahrenheit), (Fahrenheit, Celsius),
            (Celsius, Kelvin), (Kelvin, Celsius),
        ]);
        table.register_category(Category::Mass);
        table
    }

    fn register(&mut self, category: Category, from: Unit, to: Unit, formula: Formula) {
        debug_assert!(from != to, "identity pairs are not registered");
        debug_assert!(from.category() == category && to.category() == category);
        self.formulas.insert(PairKey { category, from, to }, formula);
    }

    fn register_category(&mut self, category: Category) {
        for (from, to, formula) in formulas::catalogue(category) {
            self.register(category, *from, *to, *formula);
        }
    }

    fn register_pairs(&mut self, category: Category, pairs: &[(Unit, Unit)]) {
        for &(from, to) in pairs {
            if let Some(formula) = formulas::find(category, from, to) {
                self.register(category, from, to, formula);
            }
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// Formula for an ordered pair. Without a category the pair is looked
    /// up under the source unit's own category.
    pub fn lookup(&self, from: Unit, to: Unit, category: Option<Category>) -> Option<&Formula> {
        let category = category.unwrap_or_else(|| from.category());
        self.formulas.get(&PairKey { category, from, to })
    }

    /// Resolve caller-supplied identifiers to a registered key and formula
    pub(crate) fn resolve(
        &self,
        from: &str,
        to: &str,
        category: Option<&str>,
    ) -> Result<(PairKey, Formula), ConversionError> {
        let unsupported = || ConversionError::unsupported(from, to, category);

        let from_unit = Unit::parse(from).ok_or_else(unsupported)?;
        let to_unit = Unit::parse(to).ok_or_else(unsupported)?;
        let scope = match category {
            Some(c) => Some(Category::parse(c).ok_or_else(unsupported)?),
            None => None,
        };

        match self.lookup(from_unit, to_unit, scope) {
            Some(formula) => {
                let category = scope.unwrap_or_else(|| from_unit.category());
                Ok((PairKey { category, from: from_unit, to: to_unit }, *formula))
            }
            None => {
                tracing::debug!(table = self.name, from, to, ?category, "no formula registered");
                Err(unsupported())
            }
        }
    }

    /// Whether `convert` would find a formula for these identifiers
    pub fn supports(&self, from: &str, to: &str, category: Option<&str>) -> bool {
        self.resolve(from, to, category).is_ok()
    }

    /// Categories present in this table, in declaration order
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.formulas.keys().any(|k| k.category == *c))
            .collect()
    }

    /// Registered pairs of one category, ordered by unit
    pub fn pairs(&self, category: Category) -> Vec<(PairKey, Formula)> {
        let mut pairs: Vec<_> = self.formulas
            .iter()
            .filter(|(k, _)| k.category == category)
            .map(|(k, f)| (*k, *f))
            .collect();
        pairs.sort_by_key(|(k, _)| *k);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_partition() {
        assert_eq!(QUICK.name(), "quick");
        assert_eq!(QUICK.categories(), vec![Category::Length, Category::Temperature]);
        assert_eq!(QUICK.pairs(Category::Length).len(), 8);
        assert_eq!(QUICK.pairs(Category::Temperature).len(), 6);
        assert_eq!(QUICK.len(), 14);
        assert!(QUICK.pairs(Category::Area).is_empty());
    }

    #[test]
    fn test_mini_partition() {
        assert_eq!(MINI.name(), "mini");
        assert_eq!(MINI.categories(), Category::ALL.to_vec());
        for category in Category::ALL {
            assert_eq!(MINI.pairs(category).len(), 4, "{}", category);
        }
        assert_eq!(MINI.len(), 20);
    }

    #[test]
    fn test_mini_panels_omit_some_pairs() {
        assert!(MINI.lookup(Unit::Inches, Unit::Feet, Some(Category::Length)).is_none());
        assert!(MINI.lookup(Unit::Cm, Unit::Meters, Some(Category::Length)).is_none());
        assert!(MINI.lookup(Unit::Fahrenheit, Unit::Kelvin, Some(Category::Temperature)).is_none());
        assert!(QUICK.lookup(Unit::Inches, Unit::Feet, None).is_some());
        assert!(QUICK.lookup(Unit::Fahrenheit, Unit::Kelvin, None).is_some());
    }

    #[test]
    fn test_keys_are_within_one_category() {
        for table in [&*QUICK, &*MINI] {
            for category in table.categories() {
                for (key, _) in table.pairs(category) {
                    assert_eq!(key.category, category);
                    assert_eq!(key.from.category(), category);
                    assert_eq!(key.to.category(), category);
                    assert_ne!(key.from, key.to);
                }
            }
        }
    }

    #[test]
    fn test_lookup_respects_category_scope() {
        assert!(MINI.lookup(Unit::Acres, Unit::Hectares, Some(Category::Area)).is_some());
        assert!(MINI.lookup(Unit::Acres, Unit::Hectares, Some(Category::Mass)).is_none());
        assert!(MINI.lookup(Unit::Acres, Unit::Hectares, None).is_some());
        assert!(QUICK.lookup(Unit::Acres, Unit::Hectares, Some(Category::Area)).is_none());
    }

    #[test]
    fn test_no_identity_entries() {
        for unit in Unit::ALL {
            assert!(QUICK.lookup(unit, unit, None).is_none());
            assert!(MINI.lookup(unit, unit, None).is_none());
        }
    }

    #[test]
    fn test_resolve_unknown_identifiers() {
        assert!(!QUICK.supports("in", "cm", None));
        assert!(!QUICK.supports("inches", "centimeters", None));
        assert!(!MINI.supports("kg", "pounds", Some("weight")));
        assert!(MINI.supports("kg", "pounds", Some("mass")));
        assert!(QUICK.supports("kelvin", "fahrenheit", Some("temperature")));
    }

    #[test]
    fn test_resolve_cross_category() {
        assert!(!QUICK.supports("meters", "celsius", None));
        assert!(!MINI.supports("liters", "kg", None));
    }

    #[test]
    fn test_pairs_ordered() {
        let pairs = MINI.pairs(Category::Mass);
        let keys: Vec<_> = pairs.iter().map(|(k, _)| (k.from, k.to)).collect();
        assert_eq!(keys, vec![
            (Unit::Kg, Unit::Pounds),
            (Unit::Kg, Unit::Grams),
            (Unit::Pounds, Unit::Kg),
            (Unit::Grams, Unit::Kg),
        ]);
    }

    #[test]
    fn test_table_by_name() {
        assert_eq!(table_by_name("quick").map(|t| t.name()), Some("quick"));
        assert_eq!(table_by_name("mini").map(|t| t.name()), Some("mini"));
        assert!(table_by_name("full").is_none());
    }
}
