//! Best additional attack types for a creature

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use typecov_chart::ElementType;

use super::combinations::{Tuples, canonical_key};
use crate::MatchupError;
use crate::types::CreatureTyping;

/// Largest number of additional slots the search enumerates
pub const MAX_ADDITIONAL_SLOTS: usize = 4;

/// Highest score for one combination size, with every combination reaching it
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CoverageBest {
    pub score: f32,
    /// In discovery order; ties are all kept
    pub combinations: Vec<Vec<ElementType>>,
}

/// Outcome of a [`CoverageSearch`]
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CoverageReport {
    /// The fixed attack types and their score on their own
    pub baseline: Option<(Vec<ElementType>, f32)>,
    /// Keyed by the number of distinct additional types
    pub best: BTreeMap<usize, CoverageBest>,
    /// Distinct combinations scored
    pub evaluated: usize,
}

impl CoverageReport {
    pub fn best_for(&self, size: usize) -> Option<&CoverageBest> {
        self.best.get(&size)
    }

    /// Highest score over all sizes; the smallest size wins a tie
    pub fn overall(&self) -> Option<(usize, &CoverageBest)> {
        self.best
            .iter()
            .fold(None, |acc: Option<(usize, &CoverageBest)>, (size, best)| match acc {
                Some((_, current)) if current.score >= best.score => acc,
                _ => Some((*size, best)),
            })
    }

    fn record(&mut self, key: Vec<ElementType>, score: f32) {
        let size = key.len();
        match self.best.get_mut(&size) {
            None => {
                self.best.insert(
                    size,
                    CoverageBest {
                        score,
                        combinations: vec![key],
                    },
                );
            }
            Some(best) if score > best.score => {
                tracing::trace!(size, score, combination = ?key, "new best coverage");
                best.score = score;
                best.combinations = vec![key];
            }
            Some(best) if score == best.score => best.combinations.push(key),
            Some(_) => {}
        }
    }
}

/// Search over attack-type combinations that maximize offensive score
///
/// With `moves` total slots and a baseline of fixed types, every combination
/// of up to `moves - baseline.len()` additional types is scored once. The
/// creature ends with exactly the baseline attacks equipped.
#[derive(Debug, Clone)]
pub struct CoverageSearch {
    moves: usize,
    baseline: Vec<ElementType>,
    same_type_bonus: bool,
    cancel: Option<Arc<AtomicBool>>,
}

impl CoverageSearch {
    pub fn new(moves: usize) -> Self {
        Self {
            moves,
            baseline: Vec::new(),
            same_type_bonus: true,
            cancel: None,
        }
    }

    /// Attack types that are always part of the move set
    pub fn baseline(mut self, types: impl IntoIterator<Item = ElementType>) -> Self {
        self.baseline = types.into_iter().collect();
        self
    }

    pub fn same_type_bonus(mut self, enabled: bool) -> Self {
        self.same_type_bonus = enabled;
        self
    }

    /// Abort with [`MatchupError::Cancelled`] once the flag is set
    pub fn cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn additional_slots(&self) -> usize {
        self.moves.saturating_sub(self.baseline.len())
    }

    pub fn run(&self, creature: &mut CreatureTyping) -> Result<CoverageReport, MatchupError> {
        let slots = self.additional_slots();
        if slots > MAX_ADDITIONAL_SLOTS {
            return Err(MatchupError::UnsupportedSlotCount {
                requested: slots,
                max: MAX_ADDITIONAL_SLOTS,
            });
        }

        let bonus = creature.same_type_bonus();
        let result = self.search(creature, slots);
        // restore with the creature's own bonus setting, not the search's
        let restored = creature.set_attacks_by_type(&self.baseline, bonus, None);

        let report = result?;
        restored?;
        Ok(report)
    }

    fn search(
        &self,
        creature: &mut CreatureTyping,
        slots: usize,
    ) -> Result<CoverageReport, MatchupError> {
        let mut report = CoverageReport::default();

        if !self.baseline.is_empty() {
            let score =
                creature.set_attacks_by_type(&self.baseline, self.same_type_bonus, None)?;
            report.baseline = Some((self.baseline.clone(), score));
        }

        let candidates = creature.era().recognized();
        let mut seen: HashSet<Vec<ElementType>> = HashSet::new();
        let mut typing = Vec::with_capacity(self.baseline.len() + slots);

        for tuple in Tuples::new(candidates.len(), slots) {
            let key = canonical_key(candidates, &tuple);
            if seen.contains(&key) {
                continue;
            }
            if self.is_cancelled() {
                tracing::debug!(evaluated = report.evaluated, "coverage search cancelled");
                return Err(MatchupError::Cancelled);
            }

            typing.clear();
            typing.extend_from_slice(&self.baseline);
            typing.extend_from_slice(&key);
            let score = creature.set_attacks_by_type(&typing, self.same_type_bonus, None)?;

            report.evaluated += 1;
            seen.insert(key.clone());
            report.record(key, score);
        }

        for (size, best) in &report.best {
            tracing::debug!(
                size,
                score = best.score,
                ties = best.combinations.len(),
                "best coverage for size"
            );
        }
        tracing::debug!(
            creature = %creature.name(),
            slots,
            evaluated = report.evaluated,
            "coverage search finished"
        );
        Ok(report)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
