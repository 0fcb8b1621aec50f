//! Defensive survey of every typing that shares one type
//!
//! For a partner type P, each type X recognized in the era is paired into a
//! creature `[X, P]` (mono-typed when X is P or there is no partner), and the
//! resulting defensive figures are tabulated and summarized.

use std::fmt;
use std::sync::Arc;

use typecov_chart::{ElementType, Era, MatchupTable};

use crate::MatchupError;
use crate::types::{CreatureTyping, DefenseClass, DefenseWeights};

/// Defensive figures for one typing
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SurveyRow {
    pub ty: ElementType,
    pub def_score: f32,
    pub def_attribute: f32,
    pub double_weaknesses: usize,
    pub weaknesses: usize,
    pub neutral: usize,
    pub resistances: usize,
    pub double_resistances: usize,
    pub immunities: usize,
}

impl SurveyRow {
    fn of(ty: ElementType, creature: &CreatureTyping, weights: &DefenseWeights) -> Self {
        let count = |class| creature.def_buckets().get(class).len();
        Self {
            ty,
            def_score: creature.def_score(),
            def_attribute: creature.defensive_attribute(weights),
            double_weaknesses: count(DefenseClass::DoubleWeak),
            weaknesses: count(DefenseClass::Weak),
            neutral: count(DefenseClass::Neutral),
            resistances: count(DefenseClass::Resist),
            double_resistances: count(DefenseClass::DoubleResist),
            immunities: count(DefenseClass::Immune),
        }
    }
}

/// Numeric column of a [`SurveyRow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurveyColumn {
    DefScore,
    DefAttribute,
    DoubleWeaknesses,
    Weaknesses,
    Neutral,
    Resistances,
    DoubleResistances,
    Immunities,
}

impl SurveyColumn {
    pub const ALL: [SurveyColumn; 8] = [
        SurveyColumn::DefScore,
        SurveyColumn::DefAttribute,
        SurveyColumn::DoubleWeaknesses,
        SurveyColumn::Weaknesses,
        SurveyColumn::Neutral,
        SurveyColumn::Resistances,
        SurveyColumn::DoubleResistances,
        SurveyColumn::Immunities,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SurveyColumn::DefScore => "Defensive Score",
            SurveyColumn::DefAttribute => "Defensive Attribute",
            SurveyColumn::DoubleWeaknesses => "Double Weaknesses",
            SurveyColumn::Weaknesses => "Weaknesses",
            SurveyColumn::Neutral => "Defensive Neutralities",
            SurveyColumn::Resistances => "Resistances",
            SurveyColumn::DoubleResistances => "Double Resistances",
            SurveyColumn::Immunities => "Immunities",
        }
    }

    pub fn value(&self, row: &SurveyRow) -> f32 {
        match self {
            SurveyColumn::DefScore => row.def_score,
            SurveyColumn::DefAttribute => row.def_attribute,
            SurveyColumn::DoubleWeaknesses => row.double_weaknesses as f32,
            SurveyColumn::Weaknesses => row.weaknesses as f32,
            SurveyColumn::Neutral => row.neutral as f32,
            SurveyColumn::Resistances => row.resistances as f32,
            SurveyColumn::DoubleResistances => row.double_resistances as f32,
            SurveyColumn::Immunities => row.immunities as f32,
        }
    }
}

impl fmt::Display for SurveyColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tabulate every typing `[X, partner]` over the era's recognized types
pub fn defensive_survey(
    table: &Arc<MatchupTable>,
    partner: Option<ElementType>,
    era: Era,
    weights: &DefenseWeights,
) -> Result<Vec<SurveyRow>, MatchupError> {
    era.recognized()
        .iter()
        .map(|ty| {
            let creature = CreatureTyping::new(Arc::clone(table), None, [Some(*ty), partner], era)?;
            Ok(SurveyRow::of(*ty, &creature, weights))
        })
        .collect()
}

/// Summary statistics of one column, every figure rounded to 2 decimals
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SurveyStats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
    pub median: f32,
    /// Sample standard deviation; needs at least two values
    pub std_dev: Option<f32>,
    /// Every most frequent value, ascending
    pub modes: Vec<f32>,
}

impl SurveyStats {
    /// `None` for an empty slice
    pub fn of(values: &[f32]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted: Vec<f64> = values.iter().map(|v| f64::from(*v)).collect();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        };
        let std_dev = (n > 1).then(|| {
            let variance =
                sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            round2(variance.sqrt())
        });

        Some(Self {
            min: round2(sorted[0]),
            max: round2(sorted[n - 1]),
            mean: round2(mean),
            median: round2(median),
            std_dev,
            modes: modes(&sorted).into_iter().map(round2).collect(),
        })
    }
}

/// Statistics for every column of a survey
pub fn survey_stats(rows: &[SurveyRow]) -> Vec<(SurveyColumn, Option<SurveyStats>)> {
    SurveyColumn::ALL
        .iter()
        .map(|column| {
            let values: Vec<f32> = rows.iter().map(|row| column.value(row)).collect();
            (*column, SurveyStats::of(&values))
        })
        .collect()
}

fn round2(value: f64) -> f32 {
    ((value * 100.0).round() / 100.0) as f32
}

// Expects sorted input, so equal values are adjacent
fn modes(sorted: &[f64]) -> Vec<f64> {
    let mut runs: Vec<(f64, usize)> = Vec::new();
    for value in sorted {
        match runs.last_mut() {
            Some((last, count)) if *last == *value => *count += 1,
            _ => runs.push((*value, 1)),
        }
    }
    let top = runs.iter().map(|(_, count)| *count).max().unwrap_or(0);
    runs.into_iter()
        .filter(|(_, count)| *count == top)
        .map(|(value, _)| value)
        .collect()
}
