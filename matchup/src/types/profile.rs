//! Single-type defensive and offensive profile

use std::fmt;

use typecov_chart::{ElementType, Era, MatchupTable, join_types};

use crate::MatchupError;

/// Multipliers of one type against every type its era recognizes
///
/// The defensive table holds the damage multiplier this type takes from each
/// attacking type; the offensive table holds the multiplier its attacks deal
/// to each defending type. Both are in master order with exactly one entry per
/// recognized type, and each score is the plain sum of its table.
#[derive(Debug, Clone)]
pub struct TypeProfile {
    ty: ElementType,
    era: Era,
    future: bool,

    weaknesses: Vec<ElementType>,
    resistances: Vec<ElementType>,
    immunities: Vec<ElementType>,
    def_neutral: Vec<ElementType>,
    def_table: Vec<(ElementType, f32)>,
    def_score: f32,

    advantages: Vec<ElementType>,
    disadvantages: Vec<ElementType>,
    unsusceptibles: Vec<ElementType>,
    off_neutral: Vec<ElementType>,
    off_table: Vec<(ElementType, f32)>,
    off_score: f32,
}

impl TypeProfile {
    /// Derive the profile of `ty` in `era`
    ///
    /// A type the era predates is neutral to everything defensively and deals
    /// no meaningful damage, so every recognized type is unsusceptible to it.
    pub fn build(table: &MatchupTable, ty: ElementType, era: Era) -> Result<Self, MatchupError> {
        if !era.recognizes(ty) {
            return Ok(Self::future(ty, era));
        }

        let recognized = era.recognized();
        let def = table.defense(ty, era)?;
        let off = table.offense(ty, era)?;

        let def_table: Vec<(ElementType, f32)> = recognized
            .iter()
            .map(|t| {
                let multiplier = if def.immunities.contains(t) {
                    0.0
                } else if def.resistances.contains(t) {
                    0.5
                } else if def.weaknesses.contains(t) {
                    2.0
                } else {
                    1.0
                };
                (*t, multiplier)
            })
            .collect();

        let off_table: Vec<(ElementType, f32)> = recognized
            .iter()
            .map(|t| {
                let multiplier = if off.unsusceptibles.contains(t) {
                    0.0
                } else if off.disadvantages.contains(t) {
                    0.5
                } else if off.advantages.contains(t) {
                    2.0
                } else {
                    1.0
                };
                (*t, multiplier)
            })
            .collect();

        Ok(Self {
            ty,
            era,
            future: false,
            weaknesses: def.weaknesses.clone(),
            resistances: def.resistances.clone(),
            immunities: def.immunities.clone(),
            def_neutral: neutral_of(&def_table),
            def_score: def_table.iter().map(|(_, m)| m).sum(),
            def_table,
            advantages: off.advantages.clone(),
            disadvantages: off.disadvantages.clone(),
            unsusceptibles: off.unsusceptibles.clone(),
            off_neutral: neutral_of(&off_table),
            off_score: off_table.iter().map(|(_, m)| m).sum(),
            off_table,
        })
    }

    /// Validate a type name and generation number, then build
    pub fn from_name(
        table: &MatchupTable,
        name: &str,
        generation: i64,
    ) -> Result<Self, MatchupError> {
        let era = Era::normalize(generation)?;
        let ty: ElementType = name.parse()?;
        Self::build(table, ty, era)
    }

    fn future(ty: ElementType, era: Era) -> Self {
        let recognized = era.recognized();
        let def_table: Vec<(ElementType, f32)> = recognized.iter().map(|t| (*t, 1.0)).collect();
        let off_table: Vec<(ElementType, f32)> = recognized.iter().map(|t| (*t, 0.0)).collect();

        Self {
            ty,
            era,
            future: true,
            weaknesses: Vec::new(),
            resistances: Vec::new(),
            immunities: Vec::new(),
            def_neutral: recognized.to_vec(),
            def_score: recognized.len() as f32,
            def_table,
            advantages: Vec::new(),
            disadvantages: Vec::new(),
            unsusceptibles: recognized.to_vec(),
            off_neutral: Vec::new(),
            off_score: 0.0,
            off_table,
        }
    }

    pub fn element(&self) -> ElementType {
        self.ty
    }

    pub fn era(&self) -> Era {
        self.era
    }

    /// Whether the era predates this type (the neutral fallback)
    pub fn is_future(&self) -> bool {
        self.future
    }

    pub fn weaknesses(&self) -> &[ElementType] {
        &self.weaknesses
    }

    pub fn resistances(&self) -> &[ElementType] {
        &self.resistances
    }

    pub fn immunities(&self) -> &[ElementType] {
        &self.immunities
    }

    pub fn def_neutral(&self) -> &[ElementType] {
        &self.def_neutral
    }

    pub fn def_table(&self) -> &[(ElementType, f32)] {
        &self.def_table
    }

    pub fn def_score(&self) -> f32 {
        self.def_score
    }

    pub fn advantages(&self) -> &[ElementType] {
        &self.advantages
    }

    pub fn disadvantages(&self) -> &[ElementType] {
        &self.disadvantages
    }

    pub fn unsusceptibles(&self) -> &[ElementType] {
        &self.unsusceptibles
    }

    pub fn off_neutral(&self) -> &[ElementType] {
        &self.off_neutral
    }

    pub fn off_table(&self) -> &[(ElementType, f32)] {
        &self.off_table
    }

    pub fn off_score(&self) -> f32 {
        self.off_score
    }

    /// Multiplier this type takes from `attacker`, if the era knows it
    pub fn defense_against(&self, attacker: ElementType) -> Option<f32> {
        lookup(&self.def_table, attacker)
    }

    /// Multiplier this type's attacks deal to `defender`, if the era knows it
    pub fn offense_against(&self, defender: ElementType) -> Option<f32> {
        lookup(&self.off_table, defender)
    }
}

/// Tables are master-order prefixes, so the type index is the row index
pub(crate) fn lookup(table: &[(ElementType, f32)], ty: ElementType) -> Option<f32> {
    table.get(ty.index()).map(|(_, m)| *m)
}

fn neutral_of(table: &[(ElementType, f32)]) -> Vec<ElementType> {
    table
        .iter()
        .filter(|(_, m)| *m == 1.0)
        .map(|(t, _)| *t)
        .collect()
}

impl fmt::Display for TypeProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type: {}\nWeaknesses: {}", self.ty, join_types(&self.weaknesses))?;
        if !self.resistances.is_empty() {
            write!(f, "\nResistances: {}", join_types(&self.resistances))?;
        }
        if !self.immunities.is_empty() {
            write!(f, "\nImmunities: {}", join_types(&self.immunities))?;
        }
        Ok(())
    }
}

/// Equal when the type and its defensive lists match, whatever the era
impl PartialEq for TypeProfile {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty
            && self.weaknesses == other.weaknesses
            && self.resistances == other.resistances
            && self.immunities == other.immunities
    }
}

impl Eq for TypeProfile {}

#[cfg(test)]
mod tests {
    use super::*;
    use ElementType::*;
    use typecov_chart::ChartError;

    fn table() -> MatchupTable {
        MatchupTable::builtin().unwrap()
    }

    fn profile(ty: ElementType, era: Era) -> TypeProfile {
        TypeProfile::build(&table(), ty, era).unwrap()
    }

    #[test]
    fn test_gen0_rejected() {
        let err = TypeProfile::from_name(&table(), "Fairy", 0).unwrap_err();
        assert!(matches!(
            err,
            MatchupError::Chart(ChartError::InvalidGeneration(_))
        ));
    }

    #[test]
    fn test_unrecognized_type() {
        let err = TypeProfile::from_name(&table(), "Sound", 6).unwrap_err();
        assert!(matches!(
            err,
            MatchupError::Chart(ChartError::UnrecognizedType(_))
        ));
    }

    #[test]
    fn test_generation_aliases() {
        let table = table();
        assert_eq!(TypeProfile::from_name(&table, "Dark", 4).unwrap().era(), Era::Gen2);
        assert_eq!(TypeProfile::from_name(&table, "Fairy", 8).unwrap().era(), Era::Gen6);
    }

    #[test]
    fn test_scores_are_table_sums() {
        let table = table();
        for era in Era::ALL {
            for ty in ElementType::all() {
                let p = TypeProfile::build(&table, *ty, era).unwrap();
                assert_eq!(p.def_table().len(), era.type_count());
                assert_eq!(p.off_table().len(), era.type_count());
                let def: f32 = p.def_table().iter().map(|(_, m)| m).sum();
                let off: f32 = p.off_table().iter().map(|(_, m)| m).sum();
                assert_eq!(def, p.def_score());
                assert_eq!(off, p.off_score());
            }
        }
    }

    #[test]
    fn test_build_is_idempotent() {
        let first = profile(Steel, Era::Gen2);
        let second = profile(Steel, Era::Gen2);
        assert_eq!(first.weaknesses(), second.weaknesses());
        assert_eq!(first.resistances(), second.resistances());
        assert_eq!(first.advantages(), second.advantages());
        assert_eq!(first.def_score(), second.def_score());
        assert_eq!(first.off_score(), second.off_score());
    }

    #[test]
    fn test_future_steel_gen1() {
        let steel = profile(Steel, Era::Gen1);
        assert!(steel.is_future());
        assert_eq!(steel.def_neutral(), Era::Gen1.recognized());
        assert_eq!(steel.unsusceptibles(), Era::Gen1.recognized());
        assert!(steel.off_table().iter().all(|(_, m)| *m == 0.0));
        assert!(steel.def_table().iter().all(|(_, m)| *m == 1.0));
        assert_eq!(steel.def_score(), 15.0);
        assert_eq!(steel.off_score(), 0.0);
    }

    #[test]
    fn test_future_fairy_gen2() {
        let fairy = profile(Fairy, Era::Gen2);
        assert_eq!(fairy.def_neutral(), Era::Gen2.recognized());
        assert!(fairy.weaknesses().is_empty());
    }

    #[test]
    fn test_normal() {
        let normal = profile(Normal, Era::Gen6);
        assert!(normal.advantages().is_empty());
        assert_eq!(normal.weaknesses(), &[Fighting]);
    }

    #[test]
    fn test_ghost_resistances() {
        assert_eq!(profile(Ghost, Era::Gen6).resistances(), &[Bug, Poison]);
    }

    #[test]
    fn test_flying_def_score() {
        assert_eq!(profile(Flying, Era::Gen6).def_score(), 18.5);
    }

    #[test]
    fn test_dark_off_score() {
        assert_eq!(profile(Dark, Era::Gen6).off_score(), 18.5);
    }

    #[test]
    fn test_gen1_dragon_hits_everything_neutrally() {
        let dragon = profile(Dragon, Era::Gen1);
        assert_eq!(dragon.off_neutral(), Era::Gen1.recognized());
    }

    #[test]
    fn test_gen1_lists() {
        assert_eq!(profile(Psychic, Era::Gen1).immunities(), &[Ghost]);
        assert_eq!(profile(Poison, Era::Gen1).advantages(), &[Bug, Grass]);
        assert_eq!(profile(Bug, Era::Gen1).advantages(), &[Grass, Poison, Psychic]);
        assert_eq!(profile(Fire, Era::Gen1).resistances(), &[Bug, Fire, Grass]);
        assert_eq!(profile(Water, Era::Gen1).resistances(), &[Fire, Ice, Water]);
        assert_eq!(profile(Fighting, Era::Gen1).advantages(), &[Ice, Normal, Rock]);
    }

    #[test]
    fn test_gen2_lists() {
        assert!(profile(Psychic, Era::Gen2).immunities().is_empty());
        assert_eq!(profile(Steel, Era::Gen2).advantages(), &[Ice, Rock]);
        assert_eq!(
            profile(Fire, Era::Gen2).resistances(),
            &[Bug, Fire, Grass, Ice, Steel]
        );
    }

    #[test]
    fn test_gen6_lists() {
        // Fire resists itself in every era of the built-in charts
        assert_eq!(
            profile(Fire, Era::Gen6).resistances(),
            &[Bug, Fairy, Fire, Grass, Ice, Steel]
        );
        assert_eq!(profile(Fairy, Era::Gen6).immunities(), &[Dragon]);
        assert_eq!(
            profile(Poison, Era::Gen6).resistances(),
            &[Bug, Fairy, Fighting, Grass, Poison]
        );
    }

    #[test]
    fn test_multiplier_lookup() {
        let ground = profile(Ground, Era::Gen6);
        assert_eq!(ground.defense_against(Electric), Some(0.0));
        assert_eq!(ground.defense_against(Water), Some(2.0));
        assert_eq!(ground.offense_against(Flying), Some(0.0));

        let gen1 = profile(Ground, Era::Gen1);
        assert_eq!(gen1.defense_against(Fairy), None);
    }

    #[test]
    fn test_equality_is_defensive_identity() {
        assert_eq!(profile(Dragon, Era::Gen6), profile(Dragon, Era::Gen6));
        assert_ne!(profile(Grass, Era::Gen6), profile(Bug, Era::Gen6));
        assert_ne!(profile(Electric, Era::Gen1), profile(Electric, Era::Gen2));
        assert_eq!(profile(Normal, Era::Gen1), profile(Normal, Era::Gen6));
        assert_ne!(profile(Steel, Era::Gen2), profile(Steel, Era::Gen6));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            profile(Normal, Era::Gen6).to_string(),
            "Type: Normal\nWeaknesses: Fighting\nImmunities: Ghost"
        );
        assert_eq!(
            profile(Ghost, Era::Gen6).to_string(),
            "Type: Ghost\nWeaknesses: Dark, Ghost\nResistances: Bug, Poison\nImmunities: Fighting, Normal"
        );
    }
}
