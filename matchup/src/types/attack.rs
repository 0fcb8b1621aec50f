//! Attacks and their offensive tables

use std::fmt;

use typecov_chart::{ElementType, Era, MatchupTable};

use super::profile::TypeProfile;
use crate::MatchupError;

/// Placeholder power for synthetic attacks
pub const GENERIC_POWER: u32 = 90;

/// Placeholder PP for synthetic attacks
pub const GENERIC_PP: u32 = 10;

/// A move with one type
///
/// Carries the offensive side of its type's profile. Same-type bonus is not
/// applied here; that depends on who uses the attack.
#[derive(Debug, Clone)]
pub struct Attack {
    name: String,
    power: u32,
    pp: u32,
    profile: TypeProfile,
}

impl Attack {
    pub fn new(
        table: &MatchupTable,
        name: impl Into<String>,
        ty: ElementType,
        era: Era,
        power: u32,
        pp: u32,
    ) -> Result<Self, MatchupError> {
        Ok(Self {
            name: name.into(),
            power,
            pp,
            profile: TypeProfile::build(table, ty, era)?,
        })
    }

    /// Stand-in attack used when only the type matters
    pub fn generic(table: &MatchupTable, ty: ElementType, era: Era) -> Result<Self, MatchupError> {
        Self::new(
            table,
            format!("generic {} move", ty),
            ty,
            era,
            GENERIC_POWER,
            GENERIC_PP,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self) -> ElementType {
        self.profile.element()
    }

    pub fn era(&self) -> Era {
        self.profile.era()
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    pub fn pp(&self) -> u32 {
        self.pp
    }

    pub fn advantages(&self) -> &[ElementType] {
        self.profile.advantages()
    }

    pub fn disadvantages(&self) -> &[ElementType] {
        self.profile.disadvantages()
    }

    pub fn unsusceptibles(&self) -> &[ElementType] {
        self.profile.unsusceptibles()
    }

    pub fn off_table(&self) -> &[(ElementType, f32)] {
        self.profile.off_table()
    }

    pub fn off_score(&self) -> f32 {
        self.profile.off_score()
    }

    /// Base multiplier against `defender`
    ///
    /// A defender the attack's era has no entry for counts as neutral.
    pub fn offense_against(&self, defender: ElementType) -> f32 {
        self.profile.offense_against(defender).unwrap_or(1.0)
    }

    /// Same attack rebuilt under another era's table
    pub(crate) fn rebuild(&self, table: &MatchupTable, era: Era) -> Result<Self, MatchupError> {
        Self::new(table, self.name.clone(), self.element(), era, self.power, self.pp)
    }
}

impl fmt::Display for Attack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: type = {}, power = {}, pp = {}",
            self.name,
            self.element(),
            self.power,
            self.pp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> MatchupTable {
        MatchupTable::builtin().unwrap()
    }

    #[test]
    fn test_display() {
        let table = table();
        let earthquake =
            Attack::new(&table, "Earthquake", ElementType::Ground, Era::Gen6, 100, 10).unwrap();
        let flamethrower =
            Attack::new(&table, "Flamethrower", ElementType::Fire, Era::Gen6, 90, 15).unwrap();

        assert_eq!(earthquake.to_string(), "Earthquake: type = Ground, power = 100, pp = 10");
        assert_eq!(flamethrower.to_string(), "Flamethrower: type = Fire, power = 90, pp = 15");
    }

    #[test]
    fn test_generic() {
        let surf = Attack::generic(&table(), ElementType::Water, Era::Gen6).unwrap();
        assert_eq!(surf.name(), "generic Water move");
        assert_eq!(surf.power(), GENERIC_POWER);
        assert_eq!(surf.pp(), GENERIC_PP);
    }

    #[test]
    fn test_offense_matches_profile() {
        let table = table();
        let thunderbolt = Attack::generic(&table, ElementType::Electric, Era::Gen6).unwrap();
        let profile = TypeProfile::build(&table, ElementType::Electric, Era::Gen6).unwrap();

        assert_eq!(thunderbolt.off_table(), profile.off_table());
        assert_eq!(thunderbolt.offense_against(ElementType::Ground), 0.0);
        assert_eq!(thunderbolt.offense_against(ElementType::Water), 2.0);
        assert_eq!(thunderbolt.advantages(), &[ElementType::Flying, ElementType::Water]);
    }

    #[test]
    fn test_future_attack_deals_nothing() {
        let moonblast = Attack::generic(&table(), ElementType::Fairy, Era::Gen2).unwrap();
        assert_eq!(moonblast.off_score(), 0.0);
        assert_eq!(moonblast.offense_against(ElementType::Dragon), 0.0);
    }

    #[test]
    fn test_missing_target_is_neutral() {
        let ember = Attack::generic(&table(), ElementType::Fire, Era::Gen1).unwrap();
        assert_eq!(ember.offense_against(ElementType::Steel), 1.0);
    }

    #[test]
    fn test_rebuild_keeps_identity() {
        let table = table();
        let bite = Attack::new(&table, "Bite", ElementType::Normal, Era::Gen1, 60, 25).unwrap();
        let rebuilt = bite.rebuild(&table, Era::Gen6).unwrap();

        assert_eq!(rebuilt.name(), "Bite");
        assert_eq!(rebuilt.era(), Era::Gen6);
        assert_eq!(rebuilt.power(), 60);
        assert_eq!(rebuilt.off_table().len(), 18);
    }
}
