//! Head-to-head ranking of types and creatures
//!
//! Direct: whoever takes the smaller multiplier from the other's type wins.
//! Indirect (the tie-break): whoever has the lower defensive score wins.

use typecov_chart::ElementType;

use super::creature::CreatureTyping;
use super::profile::TypeProfile;

/// Result of a comparison, with a human-readable verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<W> {
    /// `None` on a tie
    pub winner: Option<W>,
    pub message: String,
}

impl TypeProfile {
    /// Compare by the multiplier each side takes from the other's type
    pub fn direct(&self, other: &TypeProfile) -> Outcome<ElementType> {
        let mine = self.defense_against(other.element()).unwrap_or(1.0);
        let theirs = other.defense_against(self.element()).unwrap_or(1.0);

        if mine < theirs {
            Outcome {
                winner: Some(self.element()),
                message: format!("{} won against {}.", self.element(), other.element()),
            }
        } else if mine > theirs {
            Outcome {
                winner: Some(other.element()),
                message: format!("{} lost against {}.", self.element(), other.element()),
            }
        } else {
            self.indirect(other)
        }
    }

    /// Compare by total defensive score
    pub fn indirect(&self, other: &TypeProfile) -> Outcome<ElementType> {
        let (a, b) = (self.element(), other.element());
        by_score(a, b, self.def_score(), other.def_score())
    }
}

impl CreatureTyping {
    /// Compare by the worst multiplier each side takes from the other's types
    ///
    /// A creature without types poses no threat, so it contributes 0.
    pub fn direct(&self, other: &CreatureTyping) -> Outcome<String> {
        let mine = worst_against(self, other.types());
        let theirs = worst_against(other, self.types());

        if mine < theirs {
            Outcome {
                winner: Some(self.name()),
                message: format!("{} won against {}.", self.name(), other.name()),
            }
        } else if mine > theirs {
            Outcome {
                winner: Some(other.name()),
                message: format!("{} lost against {}.", self.name(), other.name()),
            }
        } else {
            self.indirect(other)
        }
    }

    /// Compare by composite defensive score
    pub fn indirect(&self, other: &CreatureTyping) -> Outcome<String> {
        by_score(self.name(), other.name(), self.def_score(), other.def_score())
    }
}

fn worst_against(defender: &CreatureTyping, attackers: &[ElementType]) -> f32 {
    attackers
        .iter()
        .map(|ty| defender.defense_against(*ty).unwrap_or(1.0))
        .fold(0.0, f32::max)
}

fn by_score<W: std::fmt::Display>(a: W, b: W, score_a: f32, score_b: f32) -> Outcome<W> {
    if score_a < score_b {
        Outcome {
            message: format!("{} won against {} with {} to {}.", a, b, score_a, score_b),
            winner: Some(a),
        }
    } else if score_a > score_b {
        Outcome {
            message: format!("{} lost against {} with {} to {}.", a, b, score_a, score_b),
            winner: Some(b),
        }
    } else {
        Outcome {
            message: format!("Tie between {} and {} with {} each.", a, b, score_a),
            winner: None,
        }
    }
}
