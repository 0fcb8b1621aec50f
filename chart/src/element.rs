//! Elemental types and their fixed master order

use std::str::FromStr;

use crate::ChartError;

/// Elemental types (18 as of Gen 6+)
///
/// Declaration order is the master order: it fixes table column order and the
/// per-era prefix (`ALL[..era.type_count()]`). Earlier eras recognize only a
/// prefix, so the late-added Steel, Dark and Fairy come last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ElementType {
    Grass = 0,
    Fire = 1,
    Water = 2,
    Bug = 3,
    Poison = 4,
    Normal = 5,
    Flying = 6,
    Electric = 7,
    Ground = 8,
    Fighting = 9,
    Psychic = 10,
    Rock = 11,
    Ice = 12,
    Ghost = 13,
    Dragon = 14,
    Steel = 15,
    Dark = 16,
    Fairy = 17,
}

impl ElementType {
    /// All 18 types in master order
    pub const ALL: [ElementType; 18] = [
        ElementType::Grass,
        ElementType::Fire,
        ElementType::Water,
        ElementType::Bug,
        ElementType::Poison,
        ElementType::Normal,
        ElementType::Flying,
        ElementType::Electric,
        ElementType::Ground,
        ElementType::Fighting,
        ElementType::Psychic,
        ElementType::Rock,
        ElementType::Ice,
        ElementType::Ghost,
        ElementType::Dragon,
        ElementType::Steel,
        ElementType::Dark,
        ElementType::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [ElementType] {
        &Self::ALL
    }

    /// Position in the master order
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Steel, Dark and Fairy: types some eras predate
    pub fn is_late_added(&self) -> bool {
        matches!(
            self,
            ElementType::Steel | ElementType::Dark | ElementType::Fairy
        )
    }

    /// Parse a type name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "grass" => Some(ElementType::Grass),
            "fire" => Some(ElementType::Fire),
            "water" => Some(ElementType::Water),
            "bug" => Some(ElementType::Bug),
            "poison" => Some(ElementType::Poison),
            "normal" => Some(ElementType::Normal),
            "flying" => Some(ElementType::Flying),
            "electric" => Some(ElementType::Electric),
            "ground" => Some(ElementType::Ground),
            "fighting" => Some(ElementType::Fighting),
            "psychic" => Some(ElementType::Psychic),
            "rock" => Some(ElementType::Rock),
            "ice" => Some(ElementType::Ice),
            "ghost" => Some(ElementType::Ghost),
            "dragon" => Some(ElementType::Dragon),
            "steel" => Some(ElementType::Steel),
            "dark" => Some(ElementType::Dark),
            "fairy" => Some(ElementType::Fairy),
            _ => None,
        }
    }

    /// Parse a typing slot where `"None"` or an empty string means no type
    pub fn parse_optional(s: &str) -> Result<Option<Self>, ChartError> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }

    /// Convert to canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Grass => "Grass",
            ElementType::Fire => "Fire",
            ElementType::Water => "Water",
            ElementType::Bug => "Bug",
            ElementType::Poison => "Poison",
            ElementType::Normal => "Normal",
            ElementType::Flying => "Flying",
            ElementType::Electric => "Electric",
            ElementType::Ground => "Ground",
            ElementType::Fighting => "Fighting",
            ElementType::Psychic => "Psychic",
            ElementType::Rock => "Rock",
            ElementType::Ice => "Ice",
            ElementType::Ghost => "Ghost",
            ElementType::Dragon => "Dragon",
            ElementType::Steel => "Steel",
            ElementType::Dark => "Dark",
            ElementType::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ChartError::UnrecognizedType(s.trim().to_string()))
    }
}

/// Join type names with `", "`, the list format used by the tables
pub fn join_types(types: &[ElementType]) -> String {
    types
        .iter()
        .map(ElementType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
