//! Conversion session - the one piece of runtime state
//!
//! Owns the selected category and the pending input text. Every input
//! or category change runs one complete parse -> accumulate -> expand
//! pass; switching categories re-parses the pending text under the new
//! vocabulary, never carrying a base value across.

use serde::Serialize;

use crate::catalog::{Category, CATALOG};
use crate::convert::{expand, Conversion};
use crate::parse::parse_to_base;

/// Result of one conversion pass, ready for rendering
#[derive(Debug, Clone, Serialize)]
pub struct Readout {
    pub category: &'static str,
    /// Aggregate of the parsed input, in the category's base unit
    pub base_value: f64,
    /// Per-unit display values in catalog order; the first is primary
    pub entries: Vec<Conversion>,
}

/// Interactive conversion state for one user session
pub struct ConvertSession {
    category: &'static Category,
    input: String,
}

impl ConvertSession {
    pub fn new() -> Self {
        Self {
            category: CATALOG.default_category(),
            input: String::new(),
        }
    }

    pub fn category(&self) -> &'static Category {
        self.category
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the pending input and recompute the readout.
    pub fn set_input(&mut self, text: impl Into<String>) -> Readout {
        self.input = text.into();
        self.readout()
    }

    /// Switch the active category. Pending input is immediately
    /// re-parsed under the new vocabulary. Returns `None` (and leaves
    /// the session untouched) when the name is unknown.
    pub fn switch_category(&mut self, name: &str) -> Option<Readout> {
        self.category = CATALOG.get(name)?;
        Some(self.readout())
    }

    /// Run one complete parse -> expand pass over the pending input.
    pub fn readout(&self) -> Readout {
        let base_value = parse_to_base(self.category, &self.input);
        Readout {
            category: self.category.name,
            base_value,
            entries: expand(self.category, base_value),
        }
    }
}

impl Default for ConvertSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_starts_on_length_with_empty_input() {
        let session = ConvertSession::new();
        assert_eq!(session.category().name, "Length");
        let readout = session.readout();
        assert_eq!(readout.base_value, 0.0);
        assert!(readout.entries.iter().all(|e| e.display == "0"));
    }

    #[test]
    fn test_set_input_recomputes() {
        let mut session = ConvertSession::new();
        let readout = session.set_input("1m 50cm");
        assert!(approx_eq(readout.base_value, 1500.0));
        assert_eq!(readout.entries[0].unit, "mm");
        assert_eq!(readout.entries[0].display, "1500");
    }

    #[test]
    fn test_switch_reparses_pending_input() {
        let mut session = ConvertSession::new();
        session.set_input("5kg");
        // "kg" is not a length unit: the scan skips it
        assert_eq!(session.readout().base_value, 0.0);

        let readout = session.switch_category("Mass").unwrap();
        assert!(approx_eq(readout.base_value, 5000.0));
    }

    #[test]
    fn test_switch_unknown_category_is_rejected() {
        let mut session = ConvertSession::new();
        assert!(session.switch_category("Plasma").is_none());
        assert_eq!(session.category().name, "Length");
    }

    #[test]
    fn test_no_base_value_carry_over() {
        let mut session = ConvertSession::new();
        session.set_input("1000");
        assert!(approx_eq(session.readout().base_value, 1000.0));

        // Same bare number re-parses under the new category's base unit
        let readout = session.switch_category("Temperature").unwrap();
        assert!(approx_eq(readout.base_value, 1000.0));
        let f = readout.entries.iter().find(|e| e.unit == "f").unwrap();
        assert!(approx_eq(f.value, 1832.0));
    }
}
