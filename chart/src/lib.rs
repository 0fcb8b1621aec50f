//! Elemental type matchup tables.
//!
//! This crate is the data layer: the fixed set of [`ElementType`]s, the
//! generation → [`Era`] normalization, and the immutable per-era
//! [`MatchupTable`] of raw weakness/resistance/immunity and
//! advantage/disadvantage/no-effect lists.
//!
//! ```text
//! chart/data/*.tsv (tabular source)
//!        │
//!        ▼
//! typecov-chart (MatchupTable) ← THIS CRATE
//!        │
//!        ▼
//! typecov-matchup (profiles, creatures, coverage search)
//! ```
//!
//! The table performs no computation; it is built once and then shared by
//! reference with everything that derives multipliers from it.
//!
//! ```
//! use typecov_chart::{ElementType, Era, MatchupTable};
//!
//! let table = MatchupTable::builtin().unwrap();
//! let fire = table.defense(ElementType::Fire, Era::Gen6).unwrap();
//! assert!(fire.weaknesses.contains(&ElementType::Water));
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub mod element;
pub mod era;
pub mod parse;
pub mod table;

pub use element::{ElementType, join_types};
pub use era::Era;
pub use parse::{parse_defensive, parse_offensive};
pub use table::{DefensiveEntry, EraChart, MatchupTable, OffensiveEntry, TableKind};

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Generation '{0}' not recognized")]
    InvalidGeneration(String),

    #[error("Type '{0}' not recognized")]
    UnrecognizedType(String),

    #[error("No {kind} entry for {ty} in {era}")]
    UnknownType {
        ty: ElementType,
        era: Era,
        kind: TableKind,
    },

    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("{kind} table for {era} is missing a row for {ty}")]
    MissingRow {
        ty: ElementType,
        era: Era,
        kind: TableKind,
    },

    #[error("{kind} table for {era} has more than one row for {ty}")]
    DuplicateRow {
        ty: ElementType,
        era: Era,
        kind: TableKind,
    },

    #[error("{kind} table for {era} mentions {ty}, which does not exist in that era")]
    OutOfEra {
        ty: ElementType,
        era: Era,
        kind: TableKind,
    },

    #[error("{kind} row for {ty} in {era} lists {other} in more than one column")]
    OverlappingColumns {
        ty: ElementType,
        other: ElementType,
        era: Era,
        kind: TableKind,
    },

    #[error("No chart supplied for {0}")]
    MissingEra(Era),

    #[error("More than one chart supplied for {0}")]
    DuplicateEra(Era),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
