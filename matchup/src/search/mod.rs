//! Move coverage search
//!
//! Brute force over attack-type combinations, deduplicated by canonical key.

mod combinations;
mod coverage;

pub use coverage::{CoverageBest, CoverageReport, CoverageSearch, MAX_ADDITIONAL_SLOTS};
