//! Tally Units - free-form unit conversion
//!
//! Parses text like "5inch 3mm" against a selected measurement
//! category, accumulates it into the category's base unit, and expands
//! the total into display values for every unit of the category.
//!
//! Categories:
//! - Length (mm, cm, m, km, inch, feet, ...)
//! - Mass (mg, g, kg, oz, lb, ...)
//! - Area (sqmm ... sqmi)
//! - Volume (ml, l, gal, ...)
//! - Speed (mps, kmh, mph, kn, ftps)
//! - Pressure (pa, kpa, bar, psi, atm)
//! - Force (n, kn, lbf, kgf)
//! - Temperature (c, f, k - non-linear)
//!
//! Parsing is deliberately lenient: unknown tokens are skipped, empty
//! input yields 0, and no operation here can fail.

mod catalog;
mod convert;
mod format;
mod parse;
mod session;

pub use catalog::{Catalog, Category, UnitDef, CATALOG};
pub use convert::{expand, Conversion};
pub use format::format_value;
pub use parse::parse_to_base;
pub use session::{ConvertSession, Readout};
