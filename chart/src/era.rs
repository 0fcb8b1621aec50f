//! Generation normalization
//!
//! Only three rule sets differ in type matchups: Gen 1, Gens 2-5 and Gen 6+.
//! Any other generation number is decremented until it lands on one of them.

use std::str::FromStr;

use crate::ChartError;
use crate::element::ElementType;

/// A distinct type-matchup rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Era {
    Gen1,
    Gen2,
    #[default]
    Gen6,
}

impl Era {
    /// All eras, oldest first
    pub const ALL: [Era; 3] = [Era::Gen1, Era::Gen2, Era::Gen6];

    /// Normalize a generation number to its era
    ///
    /// Generations below 1 are rejected; anything above 6 aliases to Gen 6.
    pub fn normalize(generation: i64) -> Result<Self, ChartError> {
        match generation {
            i64::MIN..=0 => Err(ChartError::InvalidGeneration(generation.to_string())),
            1 => Ok(Era::Gen1),
            2..=5 => Ok(Era::Gen2),
            _ => Ok(Era::Gen6),
        }
    }

    /// The generation number that names this era
    pub fn number(&self) -> u8 {
        match self {
            Era::Gen1 => 1,
            Era::Gen2 => 2,
            Era::Gen6 => 6,
        }
    }

    /// How many types of the master order exist in this era
    pub fn type_count(&self) -> usize {
        match self {
            Era::Gen1 => 15,
            Era::Gen2 => 17,
            Era::Gen6 => 18,
        }
    }

    /// Types recognized in this era, in master order
    pub fn recognized(&self) -> &'static [ElementType] {
        &ElementType::ALL[..self.type_count()]
    }

    /// Whether the type exists in this era
    pub fn recognizes(&self, ty: ElementType) -> bool {
        ty.index() < self.type_count()
    }

    pub(crate) fn slot(&self) -> usize {
        match self {
            Era::Gen1 => 0,
            Era::Gen2 => 1,
            Era::Gen6 => 2,
        }
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gen{}", self.number())
    }
}

impl FromStr for Era {
    type Err = ChartError;

    /// Parse an integer generation; `"4.5"` and other non-integers are rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let generation: i64 = trimmed
            .parse()
            .map_err(|_| ChartError::InvalidGeneration(trimmed.to_string()))?;
        Self::normalize(generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_supported() {
        assert_eq!(Era::normalize(1).unwrap(), Era::Gen1);
        assert_eq!(Era::normalize(2).unwrap(), Era::Gen2);
        assert_eq!(Era::normalize(6).unwrap(), Era::Gen6);
    }

    #[test]
    fn test_gen4_is_gen2() {
        assert_eq!(Era::normalize(4).unwrap(), Era::Gen2);
        assert_eq!(Era::normalize(5).unwrap(), Era::Gen2);
    }

    #[test]
    fn test_gen8_is_gen6() {
        assert_eq!(Era::normalize(8).unwrap(), Era::Gen6);
        assert_eq!(Era::normalize(1000).unwrap(), Era::Gen6);
    }

    #[test]
    fn test_normalize_is_stable() {
        for generation in 1..=12 {
            let era = Era::normalize(generation).unwrap();
            assert_eq!(Era::normalize(era.number() as i64).unwrap(), era);
        }
    }

    #[test]
    fn test_gen0_rejected() {
        assert!(matches!(
            Era::normalize(0),
            Err(ChartError::InvalidGeneration(_))
        ));
        assert!(matches!(
            Era::normalize(-3),
            Err(ChartError::InvalidGeneration(_))
        ));
    }

    #[test]
    fn test_parse_non_integer_rejected() {
        assert!(matches!(
            "4.5".parse::<Era>(),
            Err(ChartError::InvalidGeneration(ref s)) if s == "4.5"
        ));
        assert!("six".parse::<Era>().is_err());
        assert_eq!("7".parse::<Era>().unwrap(), Era::Gen6);
    }

    #[test]
    fn test_recognized_prefix() {
        assert_eq!(Era::Gen1.recognized().len(), 15);
        assert_eq!(Era::Gen1.recognized().last(), Some(&ElementType::Dragon));
        assert_eq!(Era::Gen2.recognized().len(), 17);
        assert!(!Era::Gen2.recognizes(ElementType::Fairy));
        assert!(Era::Gen2.recognizes(ElementType::Dark));
        assert!(!Era::Gen1.recognizes(ElementType::Steel));
        assert_eq!(Era::Gen6.recognized(), ElementType::all());
    }

    #[test]
    fn test_default_is_gen6() {
        assert_eq!(Era::default(), Era::Gen6);
        assert_eq!(Era::Gen2.to_string(), "gen2");
    }
}
