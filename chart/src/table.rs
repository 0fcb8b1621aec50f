//! Per-era matchup table
//!
//! Raw lists only: which types a type resists, is weak or immune to, and
//! which types its attacks hit hard, softly or not at all. Multipliers are
//! derived elsewhere.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::ChartError;
use crate::element::ElementType;
use crate::era::Era;
use crate::parse::{parse_defensive, parse_offensive};

/// Which of the two logical tables an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableKind {
    Defensive,
    Offensive,
}

impl TableKind {
    /// Column names in entry-field order
    pub fn columns(&self) -> [&'static str; 3] {
        match self {
            TableKind::Defensive => ["Resistances", "Weaknesses", "Immunities"],
            TableKind::Offensive => ["Advantages", "Disadvantages", "Unsusceptibles"],
        }
    }

    /// File stem used for this table, e.g. `defensive_gen6`
    pub fn file_stem(&self, era: Era) -> String {
        match self {
            TableKind::Defensive => format!("defensive_gen{}", era.number()),
            TableKind::Offensive => format!("offensive_gen{}", era.number()),
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Defensive => write!(f, "defensive"),
            TableKind::Offensive => write!(f, "offensive"),
        }
    }
}

/// How a type fares when attacked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefensiveEntry {
    pub resistances: Vec<ElementType>,
    pub weaknesses: Vec<ElementType>,
    pub immunities: Vec<ElementType>,
}

impl DefensiveEntry {
    fn columns(&self) -> [&[ElementType]; 3] {
        [&self.resistances, &self.weaknesses, &self.immunities]
    }
}

/// How a type's attacks fare
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffensiveEntry {
    pub advantages: Vec<ElementType>,
    pub disadvantages: Vec<ElementType>,
    pub unsusceptibles: Vec<ElementType>,
}

impl OffensiveEntry {
    fn columns(&self) -> [&[ElementType]; 3] {
        [&self.advantages, &self.disadvantages, &self.unsusceptibles]
    }
}

/// Both tables for one era, validated to cover exactly its recognized types
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EraChart {
    era: Era,
    defense: BTreeMap<ElementType, DefensiveEntry>,
    offense: BTreeMap<ElementType, OffensiveEntry>,
}

impl EraChart {
    /// Build a chart from rows, checking completeness and consistency
    pub fn new(
        era: Era,
        defense: impl IntoIterator<Item = (ElementType, DefensiveEntry)>,
        offense: impl IntoIterator<Item = (ElementType, OffensiveEntry)>,
    ) -> Result<Self, ChartError> {
        let defense = collect_rows(era, TableKind::Defensive, defense, |e| e.columns())?;
        let offense = collect_rows(era, TableKind::Offensive, offense, |e| e.columns())?;
        Ok(Self {
            era,
            defense,
            offense,
        })
    }

    /// Parse both tables from their tab-separated text
    pub fn from_tsv(era: Era, defensive: &str, offensive: &str) -> Result<Self, ChartError> {
        Self::new(era, parse_defensive(defensive)?, parse_offensive(offensive)?)
    }

    pub fn era(&self) -> Era {
        self.era
    }

    pub fn defense(&self, ty: ElementType) -> Option<&DefensiveEntry> {
        self.defense.get(&ty)
    }

    pub fn offense(&self, ty: ElementType) -> Option<&OffensiveEntry> {
        self.offense.get(&ty)
    }
}

fn collect_rows<E>(
    era: Era,
    kind: TableKind,
    rows: impl IntoIterator<Item = (ElementType, E)>,
    columns: impl Fn(&E) -> [&[ElementType]; 3],
) -> Result<BTreeMap<ElementType, E>, ChartError> {
    let mut map = BTreeMap::new();

    for (ty, entry) in rows {
        if !era.recognizes(ty) {
            return Err(ChartError::OutOfEra { ty, era, kind });
        }

        let mut listed = [false; 18];
        for cell in columns(&entry) {
            for other in cell {
                if !era.recognizes(*other) {
                    return Err(ChartError::OutOfEra {
                        ty: *other,
                        era,
                        kind,
                    });
                }
                if listed[other.index()] {
                    return Err(ChartError::OverlappingColumns {
                        ty,
                        other: *other,
                        era,
                        kind,
                    });
                }
                listed[other.index()] = true;
            }
        }

        if map.insert(ty, entry).is_some() {
            return Err(ChartError::DuplicateRow { ty, era, kind });
        }
    }

    if let Some(ty) = era.recognized().iter().find(|ty| !map.contains_key(ty)) {
        return Err(ChartError::MissingRow { ty: *ty, era, kind });
    }

    Ok(map)
}

/// Built-in tables, one `(era, defensive, offensive)` triple per era
const BUILTIN: [(Era, &str, &str); 3] = [
    (
        Era::Gen1,
        include_str!("../data/defensive_gen1.tsv"),
        include_str!("../data/offensive_gen1.tsv"),
    ),
    (
        Era::Gen2,
        include_str!("../data/defensive_gen2.tsv"),
        include_str!("../data/offensive_gen2.tsv"),
    ),
    (
        Era::Gen6,
        include_str!("../data/defensive_gen6.tsv"),
        include_str!("../data/offensive_gen6.tsv"),
    ),
];

/// Immutable matchup data for every era
///
/// Build it once at startup and hand out references (or an `Arc`); nothing
/// mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatchupTable {
    charts: [EraChart; 3],
}

impl MatchupTable {
    /// Tables shipped with the crate
    pub fn builtin() -> Result<Self, ChartError> {
        let charts = BUILTIN
            .iter()
            .map(|(era, def, off)| EraChart::from_tsv(*era, def, off))
            .collect::<Result<Vec<_>, _>>()?;
        let table = Self::from_charts(charts)?;
        tracing::debug!(eras = table.charts.len(), "loaded built-in matchup tables");
        Ok(table)
    }

    /// Read `defensive_genN.tsv` / `offensive_genN.tsv` for N in 1, 2, 6
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, ChartError> {
        let dir = dir.as_ref();
        let read = |kind: TableKind, era: Era| {
            let path = dir.join(format!("{}.tsv", kind.file_stem(era)));
            std::fs::read_to_string(&path).map_err(|source| ChartError::Io { path, source })
        };

        let mut charts = Vec::with_capacity(Era::ALL.len());
        for era in Era::ALL {
            let defensive = read(TableKind::Defensive, era)?;
            let offensive = read(TableKind::Offensive, era)?;
            charts.push(EraChart::from_tsv(era, &defensive, &offensive)?);
        }

        let table = Self::from_charts(charts)?;
        tracing::debug!(dir = %dir.display(), "loaded matchup tables from directory");
        Ok(table)
    }

    /// Assemble from exactly one chart per era, in any order
    pub fn from_charts(charts: impl IntoIterator<Item = EraChart>) -> Result<Self, ChartError> {
        let mut slots: [Option<EraChart>; 3] = [None, None, None];
        for chart in charts {
            let slot = &mut slots[chart.era().slot()];
            if slot.is_some() {
                return Err(ChartError::DuplicateEra(chart.era()));
            }
            *slot = Some(chart);
        }

        let [gen1, gen2, gen6] = slots;
        Ok(Self {
            charts: [
                gen1.ok_or(ChartError::MissingEra(Era::Gen1))?,
                gen2.ok_or(ChartError::MissingEra(Era::Gen2))?,
                gen6.ok_or(ChartError::MissingEra(Era::Gen6))?,
            ],
        })
    }

    pub fn chart(&self, era: Era) -> &EraChart {
        &self.charts[era.slot()]
    }

    /// Resistances, weaknesses and immunities of `ty` in `era`
    pub fn defense(&self, ty: ElementType, era: Era) -> Result<&DefensiveEntry, ChartError> {
        self.chart(era)
            .defense(ty)
            .ok_or(ChartError::UnknownType {
                ty,
                era,
                kind: TableKind::Defensive,
            })
    }

    /// Advantages, disadvantages and no-effect targets of `ty` in `era`
    pub fn offense(&self, ty: ElementType, era: Era) -> Result<&OffensiveEntry, ChartError> {
        self.chart(era)
            .offense(ty)
            .ok_or(ChartError::UnknownType {
                ty,
                era,
                kind: TableKind::Offensive,
            })
    }
}
