//! Classification of composite multipliers into categories

use typecov_chart::ElementType;

/// Defensive category of a composite multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefenseClass {
    DoubleWeak,
    Weak,
    Neutral,
    Resist,
    DoubleResist,
    Immune,
}

impl DefenseClass {
    pub const ALL: [DefenseClass; 6] = [
        DefenseClass::DoubleWeak,
        DefenseClass::Weak,
        DefenseClass::Neutral,
        DefenseClass::Resist,
        DefenseClass::DoubleResist,
        DefenseClass::Immune,
    ];

    /// Exact match against 4, 2, 1, 0.5, 0.25 and 0
    pub fn classify(multiplier: f32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|class| class.multiplier() == multiplier)
    }

    pub fn multiplier(&self) -> f32 {
        match self {
            DefenseClass::DoubleWeak => 4.0,
            DefenseClass::Weak => 2.0,
            DefenseClass::Neutral => 1.0,
            DefenseClass::Resist => 0.5,
            DefenseClass::DoubleResist => 0.25,
            DefenseClass::Immune => 0.0,
        }
    }
}

/// Offensive category of a composite multiplier
///
/// The `1.5`, `3` and `0.75` variants only arise from the same-type bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OffenseClass {
    Advantage3x,
    Advantage2x,
    Neutral1_5x,
    Neutral1x,
    Disadvantage0_75x,
    Disadvantage0_5x,
    Unsusceptible,
}

impl OffenseClass {
    pub const ALL: [OffenseClass; 7] = [
        OffenseClass::Advantage3x,
        OffenseClass::Advantage2x,
        OffenseClass::Neutral1_5x,
        OffenseClass::Neutral1x,
        OffenseClass::Disadvantage0_75x,
        OffenseClass::Disadvantage0_5x,
        OffenseClass::Unsusceptible,
    ];

    /// Exact match against 3, 2, 1.5, 1, 0.75, 0.5 and 0
    pub fn classify(multiplier: f32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|class| class.multiplier() == multiplier)
    }

    pub fn multiplier(&self) -> f32 {
        match self {
            OffenseClass::Advantage3x => 3.0,
            OffenseClass::Advantage2x => 2.0,
            OffenseClass::Neutral1_5x => 1.5,
            OffenseClass::Neutral1x => 1.0,
            OffenseClass::Disadvantage0_75x => 0.75,
            OffenseClass::Disadvantage0_5x => 0.5,
            OffenseClass::Unsusceptible => 0.0,
        }
    }

    pub fn is_advantage(&self) -> bool {
        matches!(self, OffenseClass::Advantage3x | OffenseClass::Advantage2x)
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, OffenseClass::Neutral1_5x | OffenseClass::Neutral1x)
    }

    pub fn is_disadvantage(&self) -> bool {
        matches!(
            self,
            OffenseClass::Disadvantage0_75x | OffenseClass::Disadvantage0_5x
        )
    }
}

/// Types grouped by defensive category, each list in master order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DefenseBuckets {
    pub double_weaknesses: Vec<ElementType>,
    pub weaknesses: Vec<ElementType>,
    pub neutral: Vec<ElementType>,
    pub resistances: Vec<ElementType>,
    pub double_resistances: Vec<ElementType>,
    pub immunities: Vec<ElementType>,
}

impl DefenseBuckets {
    pub fn get(&self, class: DefenseClass) -> &[ElementType] {
        match class {
            DefenseClass::DoubleWeak => &self.double_weaknesses,
            DefenseClass::Weak => &self.weaknesses,
            DefenseClass::Neutral => &self.neutral,
            DefenseClass::Resist => &self.resistances,
            DefenseClass::DoubleResist => &self.double_resistances,
            DefenseClass::Immune => &self.immunities,
        }
    }

    pub(crate) fn push(&mut self, class: DefenseClass, ty: ElementType) {
        let bucket = match class {
            DefenseClass::DoubleWeak => &mut self.double_weaknesses,
            DefenseClass::Weak => &mut self.weaknesses,
            DefenseClass::Neutral => &mut self.neutral,
            DefenseClass::Resist => &mut self.resistances,
            DefenseClass::DoubleResist => &mut self.double_resistances,
            DefenseClass::Immune => &mut self.immunities,
        };
        bucket.push(ty);
    }
}

/// Types grouped by offensive category
///
/// Each coarse group lists its plain entries first, then the boosted ones:
/// `advantages` holds 2x then 3x, `neutral` 1x then 1.5x, `disadvantages`
/// 0.5x then 0.75x.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OffenseBuckets {
    pub advantages: Vec<ElementType>,
    pub neutral: Vec<ElementType>,
    pub disadvantages: Vec<ElementType>,
    pub unsusceptibles: Vec<ElementType>,
}

impl OffenseBuckets {
    /// Group classified targets, given in master order
    pub(crate) fn from_classes(classes: &[(ElementType, OffenseClass)]) -> Self {
        let of = |class: OffenseClass| {
            classes
                .iter()
                .filter(move |(_, c)| *c == class)
                .map(|(ty, _)| *ty)
        };

        Self {
            advantages: of(OffenseClass::Advantage2x)
                .chain(of(OffenseClass::Advantage3x))
                .collect(),
            neutral: of(OffenseClass::Neutral1x)
                .chain(of(OffenseClass::Neutral1_5x))
                .collect(),
            disadvantages: of(OffenseClass::Disadvantage0_5x)
                .chain(of(OffenseClass::Disadvantage0_75x))
                .collect(),
            unsusceptibles: of(OffenseClass::Unsusceptible).collect(),
        }
    }
}
