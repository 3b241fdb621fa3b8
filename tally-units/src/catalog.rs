//! Category and unit definitions - the static measurement catalog

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Global measurement catalog
pub static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::new);

/// A single unit within a category
#[derive(Debug, Clone, Serialize)]
pub struct UnitDef {
    /// Canonical identifier (e.g. "mm")
    pub id: &'static str,
    /// How many base units one instance of this unit equals.
    /// Ignored for special categories (temperature).
    pub factor: f64,
    /// Human-readable label (e.g. "Millimeters")
    pub label: &'static str,
    /// Display icon
    pub icon: &'static str,
    /// Alternative spellings accepted during parsing
    pub aliases: &'static [&'static str],
}

/// A measurement domain (Length, Mass, ...) with its ordered units
/// and a precomputed parsing vocabulary.
pub struct Category {
    pub name: &'static str,
    pub icon: &'static str,
    /// Identifier of the unit with factor 1
    pub base: &'static str,
    /// Non-linear conversions (temperature only)
    pub special: bool,
    /// Example input shown in prompts
    pub example: &'static str,
    units: Vec<UnitDef>,
    /// Every accepted textual form (id or alias, lowercase) mapped to
    /// the canonical identifier
    vocabulary: HashMap<&'static str, &'static str>,
    /// `(number)(unit-token)` scanner, alternation ordered longest
    /// token first so "inch" wins over "in"
    pattern: Regex,
}

impl Category {
    fn new(
        name: &'static str,
        icon: &'static str,
        base: &'static str,
        special: bool,
        example: &'static str,
        units: Vec<UnitDef>,
    ) -> Self {
        let mut vocabulary: HashMap<&'static str, &'static str> = HashMap::new();
        for unit in &units {
            let prev = vocabulary.insert(unit.id, unit.id);
            debug_assert!(prev.is_none(), "duplicate unit id {} in {}", unit.id, name);
            for alias in unit.aliases.iter().copied() {
                let prev = vocabulary.insert(alias, unit.id);
                debug_assert!(prev.is_none(), "duplicate alias {} in {}", alias, name);
            }
        }

        let pattern = if special {
            // Single value, unit given as trailing letters
            Regex::new(r"([-\d.]+)\s*([a-z]+)").expect("temperature pattern")
        } else {
            let mut tokens: Vec<&str> = vocabulary.keys().copied().collect();
            tokens.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
            let alternation = tokens
                .iter()
                .map(|t| regex::escape(t))
                .collect::<Vec<_>>()
                .join("|");
            Regex::new(&format!(r"([\d.]+)\s*({alternation})")).expect("unit pattern")
        };

        Category { name, icon, base, special, example, units, vocabulary, pattern }
    }

    /// Units in catalog order; the first one is the primary display unit.
    pub fn units(&self) -> &[UnitDef] {
        &self.units
    }

    /// First-listed unit, emphasized by the presentation layer.
    pub fn primary_unit(&self) -> &UnitDef {
        &self.units[0]
    }

    /// Look up a unit definition by canonical identifier.
    pub fn unit(&self, id: &str) -> Option<&UnitDef> {
        self.units.iter().find(|u| u.id == id)
    }

    /// Resolve a raw token (canonical id or alias, case-insensitive) to
    /// the canonical unit identifier.
    pub fn resolve(&self, token: &str) -> Option<&'static str> {
        let token = token.to_lowercase();
        self.vocabulary.get(token.as_str()).copied()
    }

    pub(crate) fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

/// Registry of all categories, in display order
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    fn new() -> Self {
        let mut catalog = Catalog { categories: Vec::new() };
        catalog.register_length();
        catalog.register_mass();
        catalog.register_area();
        catalog.register_volume();
        catalog.register_speed();
        catalog.register_pressure();
        catalog.register_force();
        catalog.register_temperature();
        catalog
    }

    /// Categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by name, case-insensitive
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// The category selected at startup
    pub fn default_category(&self) -> &Category {
        &self.categories[0]
    }

    fn register(
        &mut self,
        name: &'static str,
        icon: &'static str,
        base: &'static str,
        example: &'static str,
        units: Vec<UnitDef>,
    ) {
        self.categories.push(Category::new(name, icon, base, false, example, units));
    }

    fn register_length(&mut self) {
        self.register("Length", "\u{1F4CF}", "mm", "e.g. 5inch 3mm", vec![
            unit("mm", 1.0, "Millimeters", "\u{1F3AF}"),
            unit("cm", 10.0, "Centimeters", "\u{1F4CF}"),
            unit("m", 1000.0, "Meters", "\u{1F3D7}\u{FE0F}"),
            unit("km", 1_000_000.0, "Kilometers", "\u{1F6E3}\u{FE0F}"),
            unit("um", 0.001, "Micrometers", "\u{1F52C}"),
            unit("nm", 0.000001, "Nanometers", "\u{1F9EC}"),
            unit_aliases("inch", 25.4, "Inches", "\u{1F4CF}", &["in", "\""]),
            unit_aliases("feet", 304.8, "Feet", "\u{1F9B6}", &["ft", "'"]),
            unit_aliases("yard", 914.4, "Yards", "\u{26F3}", &["yd"]),
            unit_aliases("mile", 1_609_344.0, "Miles", "\u{1F697}", &["mi"]),
            unit_aliases("soot", 3.175, "Soot", "\u{1F41C}", &["s"]),
        ]);
    }

    fn register_mass(&mut self) {
        self.register("Mass", "\u{2696}\u{FE0F}", "g", "e.g. 5kg 500g", vec![
            unit("mg", 0.001, "Milligrams", "\u{1F48A}"),
            unit("g", 1.0, "Grams", "\u{2696}\u{FE0F}"),
            unit("kg", 1000.0, "Kilograms", "\u{1F3CB}\u{FE0F}"),
            unit("t", 1_000_000.0, "Metric Ton", "\u{1F69B}"),
            unit("oz", 28.3495, "Ounces", "\u{1F964}"),
            unit("lb", 453.592, "Pounds", "\u{1F354}"),
            unit("stone", 6350.29, "Stone", "\u{1FAA8}"),
            unit("tola", 11.6638, "Tola", "\u{2696}\u{FE0F}"),
        ]);
    }

    fn register_area(&mut self) {
        self.register("Area", "\u{2B1C}", "sqm", "e.g. 10sqmm", vec![
            unit("sqmm", 0.000001, "Sq Millimeters", "\u{1F90F}"),
            unit("sqcm", 0.0001, "Sq Centimeters", "\u{1F7E6}"),
            unit("sqm", 1.0, "Sq Meters", "\u{1F3E0}"),
            unit("ha", 10_000.0, "Hectares", "\u{1F333}"),
            unit("sqkm", 1_000_000.0, "Sq Kilometers", "\u{1F5FA}\u{FE0F}"),
            unit("sqin", 0.00064516, "Sq Inches", "\u{1F533}"),
            unit("sqft", 0.092903, "Sq Feet", "\u{1F9B6}"),
            unit("ac", 4046.86, "Acres", "\u{1F3DE}\u{FE0F}"),
            unit("sqmi", 2_589_988.0, "Sq Miles", "\u{1F30D}"),
        ]);
    }

    fn register_volume(&mut self) {
        self.register("Volume", "\u{1F9CA}", "l", "e.g. 10ml", vec![
            unit("ml", 0.001, "Milliliters", "\u{1F9EA}"),
            unit("l", 1.0, "Liters", "\u{1F95B}"),
            unit("cm3", 0.001, "Cubic CM", "\u{1F9CA}"),
            unit("m3", 1000.0, "Cubic Meters", "\u{1F4E6}"),
            unit("floz", 0.0295735, "Fluid Oz (US)", "\u{1F964}"),
            unit("gal", 3.78541, "Gallons (US)", "\u{26FD}"),
            unit("pt", 0.473176, "Pints (US)", "\u{1F37A}"),
        ]);
    }

    fn register_speed(&mut self) {
        self.register("Speed", "\u{1F680}", "mps", "e.g. 10mps", vec![
            unit("mps", 1.0, "Metre/Sec", "\u{1F3C3}"),
            unit("kmh", 0.277778, "Km/Hour", "\u{1F697}"),
            unit("mph", 0.44704, "Miles/Hour", "\u{1F3CE}\u{FE0F}"),
            unit("kn", 0.514444, "Knots", "\u{26F5}"),
            unit("ftps", 0.3048, "Feet/Sec", "\u{1F45F}"),
        ]);
    }

    fn register_pressure(&mut self) {
        self.register("Pressure", "\u{1F529}", "pa", "e.g. 10pa", vec![
            unit("pa", 1.0, "Pascals", "\u{1F388}"),
            unit("kpa", 1000.0, "Kilopascals", "\u{1F4A8}"),
            unit("bar", 100_000.0, "Bar", "\u{1F4CA}"),
            unit("psi", 6894.76, "PSI", "\u{2699}\u{FE0F}"),
            unit("atm", 101_325.0, "Atmosphere", "\u{1F30D}"),
        ]);
    }

    fn register_force(&mut self) {
        self.register("Force", "\u{1F4AA}", "n", "e.g. 10n", vec![
            unit("n", 1.0, "Newtons", "\u{1F34F}"),
            unit("kn", 1000.0, "Kilonewtons", "\u{1F3D7}\u{FE0F}"),
            unit("lbf", 4.44822, "Pound-force", "\u{2696}\u{FE0F}"),
            unit("kgf", 9.80665, "Kilogram-force", "\u{1F3CB}\u{FE0F}"),
        ]);
    }

    fn register_temperature(&mut self) {
        self.categories.push(Category::new(
            "Temperature",
            "\u{1F321}\u{FE0F}",
            "c",
            true,
            "e.g. 30c",
            vec![
                unit("c", 1.0, "Celsius", "\u{2744}\u{FE0F}"),
                unit("f", 1.0, "Fahrenheit", "\u{1F525}"),
                unit("k", 1.0, "Kelvin", "\u{1F9EA}"),
            ],
        ));
    }
}

fn unit(id: &'static str, factor: f64, label: &'static str, icon: &'static str) -> UnitDef {
    UnitDef { id, factor, label, icon, aliases: &[] }
}

fn unit_aliases(
    id: &'static str,
    factor: f64,
    label: &'static str,
    icon: &'static str,
    aliases: &'static [&'static str],
) -> UnitDef {
    UnitDef { id, factor, label, icon, aliases }
}
