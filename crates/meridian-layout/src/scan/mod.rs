//! Range scan planning over the physical key space.
//!
//! [`plan_scan`] resolves textual or physical [`ScanBound`]s into a
//! half-open [`ScanRange`], per the table's row-key encoding.

mod planner;
mod range;

pub use planner::plan_scan;
pub use range::{ScanBound, ScanRange};
