//! Query helpers for presentation layers
//!
//! Flattened defensive lists over a creature's buckets, per-type verdicts,
//! and the defensive survey of all dual typings sharing one type.

mod matchup;
mod survey;
mod verdict;

pub use matchup::{immunities, resistances, weaknesses};
pub use survey::{SurveyColumn, SurveyRow, SurveyStats, defensive_survey, survey_stats};
pub use verdict::{Verdict, verdicts};
