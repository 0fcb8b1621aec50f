//! Type matchup arithmetic and move coverage search.
//!
//! This crate derives multipliers from the raw lists in `typecov-chart` and
//! aggregates them into scores.
//!
//! # Overview
//!
//! ```text
//! typecov-chart (MatchupTable)
//!        │
//!        ▼
//! typecov-matchup ← THIS CRATE
//!        │
//!        └─> typecov-cli (reports)
//! ```
//!
//! # Main Types
//!
//! - [`TypeProfile`] - defensive and offensive multipliers of one type in one era
//! - [`Attack`] - a named move carrying its type's offensive table
//! - [`CreatureTyping`] - one or two types composed multiplicatively, plus up to
//!   four equipped attacks composed by per-target maximum
//! - [`CoverageSearch`] - best additional attack types for a creature
//! - [`query`] - matchup helpers, per-type verdicts and the defensive survey
//!
//! # Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use typecov_chart::{ElementType, Era, MatchupTable};
//! use typecov_matchup::{CoverageSearch, CreatureTyping};
//!
//! let table = Arc::new(MatchupTable::builtin().unwrap());
//! let mut tyranitar = CreatureTyping::new(
//!     table,
//!     Some("Tyranitar".to_string()),
//!     [Some(ElementType::Rock), Some(ElementType::Dark)],
//!     Era::Gen6,
//! )
//! .unwrap();
//!
//! assert_eq!(tyranitar.defense_against(ElementType::Fighting), Some(4.0));
//!
//! let report = CoverageSearch::new(2)
//!     .baseline([ElementType::Rock])
//!     .run(&mut tyranitar)
//!     .unwrap();
//! assert_eq!(report.best_for(1).unwrap().combinations, vec![vec![ElementType::Dark]]);
//! ```

use thiserror::Error;
use typecov_chart::{ChartError, ElementType};

pub mod query;
pub mod search;
pub mod types;

pub use search::{CoverageBest, CoverageReport, CoverageSearch, MAX_ADDITIONAL_SLOTS};
pub use types::{
    Attack, CreatureTyping, DefenseBuckets, DefenseClass, DefenseWeights, MAX_ATTACKS,
    OffenseBuckets, OffenseClass, Outcome, TypeProfile,
};

// Re-export the data layer types every caller needs
pub use typecov_chart::{Era, MatchupTable};

#[derive(Error, Debug)]
pub enum MatchupError {
    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("A creature has at most 2 types, {0} given")]
    TooManyTypes(usize),

    #[error("Multiplier {value} against {ty} does not map to a {kind} class")]
    UnclassifiedMultiplier {
        ty: ElementType,
        value: f32,
        kind: &'static str,
    },

    #[error("Coverage search supports at most {max} additional slots, {requested} requested")]
    UnsupportedSlotCount { requested: usize, max: usize },

    #[error("Coverage search cancelled")]
    Cancelled,
}
