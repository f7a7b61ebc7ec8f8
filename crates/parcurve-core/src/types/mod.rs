//! Curve and table types.
//!
//! All yields are annualized decimal fractions (`0.045` for 4.5%).

mod curve;
mod table;

pub use curve::DailyCurve;
pub use table::YearlyTable;
