//! Text and JSON rendering of command results
//!
//! Each report borrows already-computed results; `Display` gives the text
//! form and [`Report::to_json`] the `--json` form.

use std::fmt;

use serde_json::{Value, json};
use typecov_chart::{ElementType, join_types};
use typecov_matchup::query::{
    SurveyRow, SurveyStats, Verdict, immunities, resistances, survey_stats, weaknesses,
};
use typecov_matchup::{CoverageReport, CreatureTyping, DefenseClass, Outcome, TypeProfile};

pub trait Report: fmt::Display {
    fn to_json(&self) -> Value;
}

fn list(types: &[ElementType]) -> String {
    if types.is_empty() {
        "None".to_string()
    } else {
        join_types(types)
    }
}

pub struct ProfileReport<'a>(pub &'a TypeProfile);

impl fmt::Display for ProfileReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.0;
        writeln!(f, "{}", profile)?;
        writeln!(f, "Advantages: {}", list(profile.advantages()))?;
        writeln!(f, "Disadvantages: {}", list(profile.disadvantages()))?;
        writeln!(f, "Unsusceptibles: {}", list(profile.unsusceptibles()))?;
        writeln!(
            f,
            "Defensive score: {}, offensive score: {}",
            profile.def_score(),
            profile.off_score()
        )
    }
}

impl Report for ProfileReport<'_> {
    fn to_json(&self) -> Value {
        let profile = self.0;
        json!({
            "type": profile.element(),
            "era": profile.era(),
            "future": profile.is_future(),
            "weaknesses": profile.weaknesses(),
            "resistances": profile.resistances(),
            "immunities": profile.immunities(),
            "def_neutral": profile.def_neutral(),
            "def_score": profile.def_score(),
            "advantages": profile.advantages(),
            "disadvantages": profile.disadvantages(),
            "unsusceptibles": profile.unsusceptibles(),
            "off_neutral": profile.off_neutral(),
            "off_score": profile.off_score(),
        })
    }
}

pub struct OutcomeReport<'a, W>(pub &'a Outcome<W>);

impl<W> fmt::Display for OutcomeReport<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.0.message)
    }
}

impl<W: serde::Serialize> Report for OutcomeReport<'_, W> {
    fn to_json(&self) -> Value {
        json!({
            "winner": self.0.winner,
            "message": self.0.message,
        })
    }
}

const DEFENSE_ROWS: [(DefenseClass, &str); 6] = [
    (DefenseClass::DoubleWeak, "4x"),
    (DefenseClass::Weak, "2x"),
    (DefenseClass::Neutral, "1x"),
    (DefenseClass::Resist, "0.5x"),
    (DefenseClass::DoubleResist, "0.25x"),
    (DefenseClass::Immune, "0x"),
];

pub struct CreatureReport<'a> {
    pub creature: &'a CreatureTyping,
    pub verdicts: &'a [(ElementType, Verdict)],
}

impl fmt::Display for CreatureReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let creature = self.creature;
        writeln!(
            f,
            "{} ({}), {}",
            creature.name(),
            list(creature.types()),
            creature.era()
        )?;

        writeln!(f, "\nDefense (score {}):", creature.def_score())?;
        for (class, label) in DEFENSE_ROWS {
            let types = creature.def_buckets().get(class);
            if !types.is_empty() {
                writeln!(f, "  {:>5}  {}", label, join_types(types))?;
            }
        }
        writeln!(
            f,
            "  {} weaknesses, {} resistances, {} immunities",
            weaknesses(creature).len(),
            resistances(creature).len(),
            immunities(creature).len()
        )?;

        if !creature.attacks().is_empty() {
            writeln!(f, "\nAttacks:")?;
            for attack in creature.attacks() {
                writeln!(f, "  {}", attack)?;
            }
            let buckets = creature.off_buckets();
            writeln!(
                f,
                "\nOffense (score {}, same-type bonus {}):",
                creature.off_score(),
                if creature.same_type_bonus() { "on" } else { "off" }
            )?;
            writeln!(f, "  advantages      {}", list(&buckets.advantages))?;
            writeln!(f, "  neutral         {}", list(&buckets.neutral))?;
            writeln!(f, "  disadvantages   {}", list(&buckets.disadvantages))?;
            writeln!(f, "  unsusceptibles  {}", list(&buckets.unsusceptibles))?;
        }

        writeln!(f, "\nMatchups:")?;
        for (ty, verdict) in self.verdicts {
            writeln!(f, "  {:<9} {}", ty.as_str(), verdict)?;
        }
        Ok(())
    }
}

impl Report for CreatureReport<'_> {
    fn to_json(&self) -> Value {
        let creature = self.creature;
        let attacks: Vec<Value> = creature
            .attacks()
            .iter()
            .map(|attack| {
                json!({
                    "name": attack.name(),
                    "type": attack.element(),
                    "power": attack.power(),
                    "pp": attack.pp(),
                })
            })
            .collect();
        let matchups: Vec<Value> = self
            .verdicts
            .iter()
            .map(|(ty, verdict)| json!({ "type": ty, "verdict": verdict }))
            .collect();

        json!({
            "name": creature.name(),
            "weaknesses": weaknesses(creature),
            "resistances": resistances(creature),
            "immunities": immunities(creature),
            "defense": creature.defense_snapshot(),
            "offense": creature.offense_snapshot(),
            "attacks": attacks,
            "matchups": matchups,
        })
    }
}

pub struct CoverageSummary<'a> {
    pub creature: &'a CreatureTyping,
    pub report: &'a CoverageReport,
}

impl fmt::Display for CoverageSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        writeln!(
            f,
            "Coverage for {} ({}), {} combinations evaluated",
            self.creature.name(),
            self.creature.era(),
            report.evaluated
        )?;
        if let Some((types, score)) = &report.baseline {
            writeln!(f, "Baseline {}: {}", join_types(types), score)?;
        }
        for (size, best) in &report.best {
            writeln!(f, "\n{} additional type(s), score {}:", size, best.score)?;
            for combination in &best.combinations {
                writeln!(f, "  {}", join_types(combination))?;
            }
        }
        if let Some((size, best)) = report.overall() {
            writeln!(f, "\nBest overall: {} type(s) at {}", size, best.score)?;
        }
        Ok(())
    }
}

impl Report for CoverageSummary<'_> {
    fn to_json(&self) -> Value {
        json!({
            "name": self.creature.name(),
            "era": self.creature.era(),
            "report": self.report,
        })
    }
}

const SURVEY_HEADER: &str = "Type       Score   Attr  4x  2x  1x  .5x .25x  0x";

pub struct SurveyReport<'a> {
    pub partner: Option<ElementType>,
    pub rows: &'a [SurveyRow],
}

impl fmt::Display for SurveyReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.partner {
            Some(partner) => writeln!(f, "Typings sharing {}:", partner)?,
            None => writeln!(f, "Mono typings:")?,
        }
        writeln!(f, "{}", SURVEY_HEADER)?;
        for row in self.rows {
            writeln!(
                f,
                "{:<9} {:>6} {:>6} {:>3} {:>3} {:>3} {:>4} {:>4} {:>3}",
                row.ty.as_str(),
                row.def_score,
                row.def_attribute,
                row.double_weaknesses,
                row.weaknesses,
                row.neutral,
                row.resistances,
                row.double_resistances,
                row.immunities,
            )?;
        }

        writeln!(f)?;
        for (column, stats) in survey_stats(self.rows) {
            if let Some(stats) = stats {
                writeln!(f, "{}: {}", column, StatsLine(&stats))?;
            }
        }
        Ok(())
    }
}

impl Report for SurveyReport<'_> {
    fn to_json(&self) -> Value {
        let stats: Vec<Value> = survey_stats(self.rows)
            .into_iter()
            .map(|(column, stats)| json!({ "column": column.label(), "stats": stats }))
            .collect();
        json!({
            "partner": self.partner,
            "rows": self.rows,
            "stats": stats,
        })
    }
}

struct StatsLine<'a>(&'a SurveyStats);

impl fmt::Display for StatsLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.0;
        write!(
            f,
            "min = {}, max = {}, mean = {}, median = {}, mode = ",
            stats.min, stats.max, stats.mean, stats.median
        )?;
        match stats.modes.as_slice() {
            [single] => write!(f, "{}", single)?,
            many => write!(f, "{:?}", many)?,
        }
        match stats.std_dev {
            Some(std_dev) => write!(f, ", std = {}", std_dev),
            None => write!(f, ", std = n/a"),
        }
    }
}
