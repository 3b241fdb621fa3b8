//! Expansion of a base-unit value into every unit of a category

use serde::Serialize;

use crate::catalog::Category;
use crate::format::format_value;

/// One unit's share of a readout
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub unit: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub value: f64,
    pub display: String,
    /// First-listed unit of the category, emphasized when rendered
    pub primary: bool,
}

/// Expand a base-unit value into display values for every unit in the
/// category, preserving catalog order.
///
/// Factors express how many base units one instance of a unit equals,
/// so the inverse direction divides. Temperature uses the forward
/// formulas instead: Celsius passes through, Fahrenheit and Kelvin are
/// offset from it.
pub fn expand(category: &Category, base: f64) -> Vec<Conversion> {
    category
        .units()
        .iter()
        .enumerate()
        .map(|(index, unit)| {
            let value = if category.special {
                from_celsius(unit.id, base)
            } else {
                base / unit.factor
            };
            Conversion {
                unit: unit.id,
                label: unit.label,
                icon: unit.icon,
                value,
                display: format_value(value),
                primary: index == 0,
            }
        })
        .collect()
}

fn from_celsius(unit: &str, celsius: f64) -> f64 {
    match unit {
        "f" => celsius * 9.0 / 5.0 + 32.0,
        "k" => celsius + 273.15,
        _ => celsius,
    }
}
