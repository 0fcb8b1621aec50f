//! Per-type matchup verdicts

use std::fmt;

use typecov_chart::ElementType;

use crate::types::CreatureTyping;

/// How a creature fares against a single type
///
/// Derived from the difference between the best unboosted multiplier the
/// creature deals and the multiplier it takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    Hard,
    Unfavoured,
    Even,
    Favoured,
    Easy,
}

impl Verdict {
    pub fn from_difference(diff: f32) -> Self {
        if diff <= -1.0 {
            Verdict::Hard
        } else if diff < 0.0 {
            Verdict::Unfavoured
        } else if diff == 0.0 {
            Verdict::Even
        } else if diff <= 1.0 {
            Verdict::Favoured
        } else {
            Verdict::Easy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Hard => "Hard",
            Verdict::Unfavoured => "Unfavoured",
            Verdict::Even => "Even",
            Verdict::Favoured => "Favoured",
            Verdict::Easy => "Easy",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict against every type recognized in the creature's era, master order
///
/// The same-type bonus is left out of the offensive side.
pub fn verdicts(creature: &CreatureTyping) -> Vec<(ElementType, Verdict)> {
    creature
        .era()
        .recognized()
        .iter()
        .map(|ty| {
            let dealt = creature.offense_multiplier(*ty, false);
            let taken = creature.defense_against(*ty).unwrap_or(1.0);
            (*ty, Verdict::from_difference(dealt - taken))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use ElementType::*;
    use typecov_chart::{Era, MatchupTable};

    fn tyranitar(era: Era) -> CreatureTyping {
        CreatureTyping::new(
            Arc::new(MatchupTable::builtin().unwrap()),
            Some("Tyranitar".to_string()),
            [Some(Rock), Some(Dark)],
            era,
        )
        .unwrap()
    }

    fn verdict_for(list: &[(ElementType, Verdict)], ty: ElementType) -> Verdict {
        list.iter().find(|(t, _)| *t == ty).map(|(_, v)| *v).unwrap()
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(Verdict::from_difference(-3.5), Verdict::Hard);
        assert_eq!(Verdict::from_difference(-1.0), Verdict::Hard);
        assert_eq!(Verdict::from_difference(-0.5), Verdict::Unfavoured);
        assert_eq!(Verdict::from_difference(0.0), Verdict::Even);
        assert_eq!(Verdict::from_difference(1.0), Verdict::Favoured);
        assert_eq!(Verdict::from_difference(1.5), Verdict::Easy);
    }

    #[test]
    fn test_without_attacks() {
        let list = verdicts(&tyranitar(Era::Gen6));
        assert_eq!(list.len(), 18);
        assert_eq!(verdict_for(&list, Fighting), Verdict::Hard);
        assert_eq!(verdict_for(&list, Normal), Verdict::Unfavoured);
        assert_eq!(verdict_for(&list, Psychic), Verdict::Even);
    }

    #[test]
    fn test_with_rock_attack() {
        let mut creature = tyranitar(Era::Gen6);
        creature.set_attacks_by_type(&[Rock], true, None).unwrap();
        let list = verdicts(&creature);

        assert_eq!(verdict_for(&list, Fire), Verdict::Easy);
        assert_eq!(verdict_for(&list, Ice), Verdict::Favoured);
        assert_eq!(verdict_for(&list, Bug), Verdict::Even);
        assert_eq!(verdict_for(&list, Water), Verdict::Hard);
    }

    #[test]
    fn test_only_recognized_types() {
        let list = verdicts(&tyranitar(Era::Gen2));
        assert_eq!(list.len(), 17);
        assert!(list.iter().all(|(t, _)| *t != Fairy));
    }
}
