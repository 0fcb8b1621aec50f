//! Creature typing: composite defense and attack coverage

use std::collections::BTreeSet;
use std::sync::Arc;

use typecov_chart::{ElementType, Era, MatchupTable, join_types};

use super::attack::Attack;
use super::bucket::{DefenseBuckets, DefenseClass, OffenseBuckets, OffenseClass};
use super::profile::{TypeProfile, lookup};
use crate::MatchupError;

/// Attack slots a creature can fill
pub const MAX_ATTACKS: usize = 4;

/// A creature has one or two types
const MAX_TYPES: usize = 2;

/// Same-type attack bonus factor
const SAME_TYPE_BONUS: f32 = 1.5;

/// Per-category weights for [`CreatureTyping::defensive_attribute`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefenseWeights {
    pub double_weak: f32,
    pub weak: f32,
    pub neutral: f32,
    pub resist: f32,
    pub double_resist: f32,
    pub immune: f32,
}

impl Default for DefenseWeights {
    fn default() -> Self {
        Self {
            double_weak: 1.0,
            weak: 1.0,
            neutral: 1.0,
            resist: 1.0,
            double_resist: 1.0,
            immune: 1.0,
        }
    }
}

/// Read-only view of a creature's composite defense
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DefenseSnapshot {
    pub era: Era,
    pub types: Vec<ElementType>,
    pub table: Vec<(ElementType, f32)>,
    pub buckets: DefenseBuckets,
    pub score: f32,
}

/// Read-only view of a creature's composite offense
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OffenseSnapshot {
    pub era: Era,
    pub attacks: Vec<ElementType>,
    pub same_type_bonus: bool,
    pub table: Vec<(ElementType, f32)>,
    pub buckets: OffenseBuckets,
    pub score: f32,
}

/// One or two types, their combined defense, and up to four attacks
///
/// Derived tables are recomputed in full after every mutation.
#[derive(Debug, Clone)]
pub struct CreatureTyping {
    table: Arc<MatchupTable>,
    species: Option<String>,
    era: Era,

    /// Distinct types in master order
    types: Vec<ElementType>,
    profiles: Vec<TypeProfile>,
    attacks: Vec<Attack>,
    same_type_bonus: bool,

    def_table: Vec<(ElementType, f32)>,
    def_buckets: DefenseBuckets,
    def_score: f32,

    off_table: Vec<(ElementType, f32)>,
    off_buckets: OffenseBuckets,
    off_score: f32,
}

impl CreatureTyping {
    /// Build a creature from its typing slots
    ///
    /// Duplicate types collapse and `None` slots are dropped, so `[X, X]`
    /// behaves exactly like `[X]`. No attacks are equipped.
    pub fn new(
        table: Arc<MatchupTable>,
        species: Option<String>,
        types: impl IntoIterator<Item = Option<ElementType>>,
        era: Era,
    ) -> Result<Self, MatchupError> {
        let types: Vec<ElementType> = types
            .into_iter()
            .flatten()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if types.len() > MAX_TYPES {
            return Err(MatchupError::TooManyTypes(types.len()));
        }

        let profiles = types
            .iter()
            .map(|ty| TypeProfile::build(&table, *ty, era))
            .collect::<Result<Vec<_>, _>>()?;

        let mut creature = Self {
            table,
            species,
            era,
            types,
            profiles,
            attacks: Vec::new(),
            same_type_bonus: true,
            def_table: Vec::new(),
            def_buckets: DefenseBuckets::default(),
            def_score: 0.0,
            off_table: Vec::new(),
            off_buckets: OffenseBuckets::default(),
            off_score: 0.0,
        };
        creature.recompute_defense()?;
        creature.recompute_offense(true)?;
        Ok(creature)
    }

    /// Parse typing names (`"None"` allowed) and a generation number, then build
    pub fn from_names(
        table: Arc<MatchupTable>,
        species: Option<String>,
        names: &[&str],
        generation: i64,
    ) -> Result<Self, MatchupError> {
        let era = Era::normalize(generation)?;
        let types = names
            .iter()
            .map(|name| ElementType::parse_optional(name))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(table, species, types, era)
    }

    /// Recompute the composite defensive table, buckets and score
    ///
    /// Each entry is the product of the component types' multipliers; the
    /// score is centered, so neutral entries contribute nothing.
    pub fn recompute_defense(&mut self) -> Result<(), MatchupError> {
        let mut table = Vec::with_capacity(self.era.type_count());
        let mut buckets = DefenseBuckets::default();

        for attacker in self.era.recognized() {
            let multiplier: f32 = self
                .profiles
                .iter()
                .map(|p| p.defense_against(*attacker).unwrap_or(1.0))
                .product();
            let class = DefenseClass::classify(multiplier).ok_or(
                MatchupError::UnclassifiedMultiplier {
                    ty: *attacker,
                    value: multiplier,
                    kind: "defensive",
                },
            )?;
            buckets.push(class, *attacker);
            table.push((*attacker, multiplier));
        }

        self.def_score = table.iter().map(|(_, m)| m - 1.0).sum();
        self.def_table = table;
        self.def_buckets = buckets;
        Ok(())
    }

    /// Recompute the composite offensive table, buckets and score
    ///
    /// Each entry is the best equipped attack against that type, boosted by
    /// 1.5 when `same_type_bonus` is on and the attack shares a creature type.
    /// The score is the plain sum; with no attacks every entry is 0.
    pub fn recompute_offense(&mut self, same_type_bonus: bool) -> Result<f32, MatchupError> {
        self.same_type_bonus = same_type_bonus;

        let mut table = Vec::with_capacity(self.era.type_count());
        let mut classes = Vec::with_capacity(self.era.type_count());

        for defender in self.era.recognized() {
            let multiplier = self.offense_multiplier(*defender, same_type_bonus);
            let class = OffenseClass::classify(multiplier).ok_or(
                MatchupError::UnclassifiedMultiplier {
                    ty: *defender,
                    value: multiplier,
                    kind: "offensive",
                },
            )?;
            classes.push((*defender, class));
            table.push((*defender, multiplier));
        }

        self.off_score = table.iter().map(|(_, m)| m).sum();
        self.off_table = table;
        self.off_buckets = OffenseBuckets::from_classes(&classes);
        Ok(self.off_score)
    }

    /// Best equipped multiplier against `defender`, without touching state
    pub(crate) fn offense_multiplier(&self, defender: ElementType, same_type_bonus: bool) -> f32 {
        self.attacks
            .iter()
            .map(|attack| {
                let factor = if same_type_bonus && self.types.contains(&attack.element()) {
                    SAME_TYPE_BONUS
                } else {
                    1.0
                };
                factor * attack.offense_against(defender)
            })
            .fold(0.0, f32::max)
    }

    /// Append attacks up to the slot limit; extra attacks are dropped
    ///
    /// Offense is recomputed after each append.
    pub fn equip_attacks(
        &mut self,
        attacks: impl IntoIterator<Item = Attack>,
    ) -> Result<(), MatchupError> {
        for attack in attacks {
            if self.attacks.len() >= MAX_ATTACKS {
                tracing::debug!(attack = %attack.name(), "attack slots full, dropping");
                continue;
            }
            self.attacks.push(attack);
            self.recompute_offense(self.same_type_bonus)?;
        }
        Ok(())
    }

    /// Replace the attacks with one generic attack per type and return the
    /// resulting offensive score
    ///
    /// Attacks are built in `era`, or the creature's era when `None`. This
    /// models hypothetical move sets and is not held to the slot limit.
    pub fn set_attacks_by_type(
        &mut self,
        types: &[ElementType],
        same_type_bonus: bool,
        era: Option<Era>,
    ) -> Result<f32, MatchupError> {
        let era = era.unwrap_or(self.era);
        self.attacks = types
            .iter()
            .map(|ty| Attack::generic(&self.table, *ty, era))
            .collect::<Result<Vec<_>, _>>()?;
        self.recompute_offense(same_type_bonus)
    }

    /// Unequip every attack
    pub fn reset_attacks(&mut self) -> Result<(), MatchupError> {
        self.attacks.clear();
        self.recompute_offense(self.same_type_bonus)?;
        Ok(())
    }

    /// Move the creature and its attacks to another era
    pub fn set_era(&mut self, era: Era) -> Result<(), MatchupError> {
        let profiles = self
            .types
            .iter()
            .map(|ty| TypeProfile::build(&self.table, *ty, era))
            .collect::<Result<Vec<_>, _>>()?;
        let attacks = self
            .attacks
            .iter()
            .map(|attack| attack.rebuild(&self.table, era))
            .collect::<Result<Vec<_>, _>>()?;

        self.era = era;
        self.profiles = profiles;
        self.attacks = attacks;
        self.recompute_defense()?;
        self.recompute_offense(self.same_type_bonus)?;
        Ok(())
    }

    /// Weighted count of defensive categories
    ///
    /// Weaknesses and neutral entries add, resistances and immunities
    /// subtract.
    pub fn defensive_attribute(&self, weights: &DefenseWeights) -> f32 {
        let count = |class: DefenseClass| self.def_buckets.get(class).len() as f32;

        weights.double_weak * count(DefenseClass::DoubleWeak)
            + weights.weak * count(DefenseClass::Weak)
            + weights.neutral * count(DefenseClass::Neutral)
            - weights.resist * count(DefenseClass::Resist)
            - weights.double_resist * count(DefenseClass::DoubleResist)
            - weights.immune * count(DefenseClass::Immune)
    }

    pub fn table(&self) -> &Arc<MatchupTable> {
        &self.table
    }

    pub fn species(&self) -> Option<&str> {
        self.species.as_deref()
    }

    /// Species name, or the typing when unnamed
    pub fn name(&self) -> String {
        match &self.species {
            Some(species) => species.clone(),
            None if self.types.is_empty() => "Typeless".to_string(),
            None => join_types(&self.types).replace(", ", "/"),
        }
    }

    pub fn era(&self) -> Era {
        self.era
    }

    pub fn types(&self) -> &[ElementType] {
        &self.types
    }

    pub fn profiles(&self) -> &[TypeProfile] {
        &self.profiles
    }

    pub fn attacks(&self) -> &[Attack] {
        &self.attacks
    }

    pub fn same_type_bonus(&self) -> bool {
        self.same_type_bonus
    }

    pub fn def_table(&self) -> &[(ElementType, f32)] {
        &self.def_table
    }

    pub fn def_buckets(&self) -> &DefenseBuckets {
        &self.def_buckets
    }

    pub fn def_score(&self) -> f32 {
        self.def_score
    }

    pub fn off_table(&self) -> &[(ElementType, f32)] {
        &self.off_table
    }

    pub fn off_buckets(&self) -> &OffenseBuckets {
        &self.off_buckets
    }

    pub fn off_score(&self) -> f32 {
        self.off_score
    }

    /// Composite multiplier taken from `attacker`, if the era knows it
    pub fn defense_against(&self, attacker: ElementType) -> Option<f32> {
        lookup(&self.def_table, attacker)
    }

    /// Composite multiplier dealt to `defender`, if the era knows it
    pub fn offense_against(&self, defender: ElementType) -> Option<f32> {
        lookup(&self.off_table, defender)
    }

    pub fn defense_snapshot(&self) -> DefenseSnapshot {
        DefenseSnapshot {
            era: self.era,
            types: self.types.clone(),
            table: self.def_table.clone(),
            buckets: self.def_buckets.clone(),
            score: self.def_score,
        }
    }

    pub fn offense_snapshot(&self) -> OffenseSnapshot {
        OffenseSnapshot {
            era: self.era,
            attacks: self.attacks.iter().map(Attack::element).collect(),
            same_type_bonus: self.same_type_bonus,
            table: self.off_table.clone(),
            buckets: self.off_buckets.clone(),
            score: self.off_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ElementType::*;

    fn table() -> Arc<MatchupTable> {
        Arc::new(MatchupTable::builtin().unwrap())
    }

    fn creature(types: &[ElementType], era: Era) -> CreatureTyping {
        CreatureTyping::new(table(), None, types.iter().copied().map(Some), era).unwrap()
    }

    #[test]
    fn test_duplicate_types_never_stack() {
        for era in Era::ALL {
            for ty in era.recognized() {
                let doubled = creature(&[*ty, *ty], era);
                assert_eq!(doubled.types(), &[*ty]);
                assert!(doubled.def_buckets().double_weaknesses.is_empty());
                assert!(doubled.def_buckets().double_resistances.is_empty());
            }
        }
    }

    #[test]
    fn test_rock_rock_gen1() {
        let rock = CreatureTyping::from_names(table(), None, &["Rock", "Rock"], 1).unwrap();
        assert!(rock.def_buckets().double_weaknesses.is_empty());
    }

    #[test]
    fn test_steel_steel_gen5() {
        let steel = CreatureTyping::from_names(table(), None, &["Steel", "Steel"], 5).unwrap();
        assert_eq!(steel.era(), Era::Gen2);
        assert!(steel.def_buckets().double_weaknesses.is_empty());
    }

    #[test]
    fn test_none_slots_dropped() {
        let fire = CreatureTyping::from_names(table(), None, &["Fire", "None"], 6).unwrap();
        assert_eq!(fire.types(), &[Fire]);

        let blank = CreatureTyping::new(table(), None, [None, None], Era::Gen6).unwrap();
        assert!(blank.types().is_empty());
        assert_eq!(blank.def_score(), 0.0);
        assert_eq!(blank.def_buckets().neutral.len(), 18);
    }

    #[test]
    fn test_canonical_order() {
        let a = creature(&[Dark, Rock], Era::Gen6);
        let b = creature(&[Rock, Dark], Era::Gen6);
        assert_eq!(a.types(), &[Rock, Dark]);
        assert_eq!(a.def_table(), b.def_table());
    }

    #[test]
    fn test_three_types_rejected() {
        let err = CreatureTyping::new(table(), None, [Some(Fire), Some(Water), Some(Grass)], Era::Gen6)
            .unwrap_err();
        assert!(matches!(err, MatchupError::TooManyTypes(3)));
    }

    #[test]
    fn test_defense_is_product_of_components() {
        let table = table();
        for era in Era::ALL {
            for x in era.recognized() {
                for y in era.recognized() {
                    if x == y {
                        continue;
                    }
                    let px = TypeProfile::build(&table, *x, era).unwrap();
                    let py = TypeProfile::build(&table, *y, era).unwrap();
                    let dual =
                        CreatureTyping::new(table.clone(), None, [Some(*x), Some(*y)], era).unwrap();
                    for z in era.recognized() {
                        assert_eq!(
                            dual.defense_against(*z),
                            Some(px.defense_against(*z).unwrap() * py.defense_against(*z).unwrap())
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_water_ground_buckets() {
        let swampert = creature(&[Water, Ground], Era::Gen6);
        let buckets = swampert.def_buckets();
        assert_eq!(buckets.double_weaknesses, vec![Grass]);
        assert!(buckets.weaknesses.is_empty());
        assert_eq!(buckets.immunities, vec![Electric]);
        assert_eq!(buckets.resistances, vec![Fire, Poison, Rock, Steel]);
        assert_eq!(swampert.def_score(), 0.0);
    }

    #[test]
    fn test_steel_fairy_score() {
        let klefki = creature(&[Steel, Fairy], Era::Gen6);
        assert_eq!(klefki.def_buckets().double_resistances, vec![Bug]);
        assert_eq!(klefki.def_buckets().immunities, vec![Poison, Dragon]);
        assert_eq!(klefki.def_score(), -4.75);
    }

    #[test]
    fn test_rock_dark_defense() {
        let tyranitar = creature(&[Rock, Dark], Era::Gen6);
        assert_eq!(tyranitar.def_buckets().double_weaknesses, vec![Fighting]);
        assert_eq!(tyranitar.def_buckets().immunities, vec![Psychic]);
        assert_eq!(tyranitar.def_score(), 5.0);
    }

    #[test]
    fn test_no_attacks_means_no_offense() {
        let tyranitar = creature(&[Rock, Dark], Era::Gen6);
        assert!(tyranitar.attacks().is_empty());
        assert!(tyranitar.off_table().iter().all(|(_, m)| *m == 0.0));
        assert_eq!(tyranitar.off_score(), 0.0);
        assert_eq!(tyranitar.off_buckets().unsusceptibles.len(), 18);
    }

    #[test]
    fn test_same_type_bonus() {
        let mut charizard = creature(&[Fire, Flying], Era::Gen6);
        let score = charizard.set_attacks_by_type(&[Fire], true, None).unwrap();
        assert_eq!(score, 30.0);
        assert_eq!(charizard.offense_against(Grass), Some(3.0));
        assert_eq!(charizard.offense_against(Water), Some(0.75));
        assert_eq!(charizard.off_buckets().advantages, vec![Grass, Bug, Ice, Steel]);

        let plain = charizard.set_attacks_by_type(&[Fire], false, None).unwrap();
        assert_eq!(plain, 20.0);
        assert_eq!(charizard.offense_against(Grass), Some(2.0));
    }

    #[test]
    fn test_offense_takes_best_attack() {
        let mut tyranitar = creature(&[Rock, Dark], Era::Gen6);
        let rock_only = tyranitar.set_attacks_by_type(&[Rock], true, None).unwrap();
        assert_eq!(rock_only, 30.75);

        tyranitar.set_attacks_by_type(&[Rock, Ground], true, None).unwrap();
        assert_eq!(tyranitar.offense_against(Steel), Some(2.0));
        assert_eq!(tyranitar.offense_against(Fire), Some(3.0));
    }

    #[test]
    fn test_equip_attacks_caps_slots() {
        let table = table();
        let mut mew = creature(&[Psychic], Era::Gen6);
        let attacks: Vec<Attack> = [Psychic, Fire, Water, Grass, Ice, Ground]
            .iter()
            .map(|ty| Attack::generic(&table, *ty, Era::Gen6).unwrap())
            .collect();

        mew.equip_attacks(attacks).unwrap();
        assert_eq!(mew.attacks().len(), MAX_ATTACKS);
        assert_eq!(mew.attacks()[3].element(), Grass);
    }

    #[test]
    fn test_equip_matches_set_by_type() {
        let table = table();
        let mut equipped = creature(&[Water], Era::Gen6);
        let mut by_type = equipped.clone();

        equipped
            .equip_attacks([
                Attack::generic(&table, Water, Era::Gen6).unwrap(),
                Attack::generic(&table, Ice, Era::Gen6).unwrap(),
            ])
            .unwrap();
        let score = by_type.set_attacks_by_type(&[Water, Ice], true, None).unwrap();

        assert_eq!(equipped.off_table(), by_type.off_table());
        assert_eq!(equipped.off_score(), score);
    }

    #[test]
    fn test_disabled_bonus_applies_to_later_equips() {
        let table = table();
        let mut charizard = creature(&[Fire, Flying], Era::Gen6);
        let empty = charizard.recompute_offense(false).unwrap();
        assert_eq!(empty, 0.0);
        assert!(!charizard.same_type_bonus());

        charizard
            .equip_attacks([Attack::generic(&table, Fire, Era::Gen6).unwrap()])
            .unwrap();
        assert_eq!(charizard.offense_against(Grass), Some(2.0));
        assert_eq!(charizard.off_score(), 20.0);
    }

    #[test]
    fn test_reset_attacks() {
        let mut gyarados = creature(&[Water, Flying], Era::Gen6);
        gyarados.set_attacks_by_type(&[Water], true, None).unwrap();
        gyarados.reset_attacks().unwrap();
        assert!(gyarados.attacks().is_empty());
        assert_eq!(gyarados.off_score(), 0.0);
    }

    #[test]
    fn test_set_era() {
        let mut scizor = creature(&[Bug, Steel], Era::Gen6);
        scizor.set_attacks_by_type(&[Steel], true, None).unwrap();
        scizor.set_era(Era::Gen1).unwrap();

        assert_eq!(scizor.era(), Era::Gen1);
        assert_eq!(scizor.def_table().len(), 15);
        assert_eq!(scizor.off_score(), 0.0);
        assert!(scizor.profiles()[1].is_future());
    }

    #[test]
    fn test_defensive_attribute() {
        let swampert = creature(&[Water, Ground], Era::Gen6);
        // 1 double weakness + 12 neutral - 4 resistances - 1 immunity
        assert_eq!(swampert.defensive_attribute(&DefenseWeights::default()), 8.0);

        let weights = DefenseWeights {
            double_weak: 4.0,
            neutral: 0.0,
            ..DefenseWeights::default()
        };
        assert_eq!(swampert.defensive_attribute(&weights), -1.0);
    }

    #[test]
    fn test_name() {
        let named = CreatureTyping::new(table(), Some("Tyranitar".into()), [Some(Rock)], Era::Gen6)
            .unwrap();
        assert_eq!(named.name(), "Tyranitar");
        assert_eq!(creature(&[Dark, Rock], Era::Gen6).name(), "Rock/Dark");
        assert_eq!(creature(&[], Era::Gen6).name(), "Typeless");
    }

    #[test]
    fn test_snapshots() {
        let mut lapras = creature(&[Water, Ice], Era::Gen6);
        lapras.set_attacks_by_type(&[Ice], true, None).unwrap();

        let def = lapras.defense_snapshot();
        assert_eq!(def.types, vec![Water, Ice]);
        assert_eq!(def.score, lapras.def_score());

        let off = lapras.offense_snapshot();
        assert_eq!(off.attacks, vec![Ice]);
        assert!(off.same_type_bonus);
        assert_eq!(off.table.len(), 18);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_snapshot_serializes() {
        let lapras = creature(&[Water, Ice], Era::Gen6);
        let json = serde_json::to_value(lapras.defense_snapshot()).unwrap();
        assert_eq!(json["era"], "Gen6");
        assert_eq!(json["types"][0], "Water");
    }
}
