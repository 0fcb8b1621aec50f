//! typecov: type matchup reports and move coverage search
//!
//! # Commands
//!
//! - `profile <TYPE>`: single-type weaknesses, resistances and scores
//! - `rank <A> <B>`: head-to-head comparison of two types
//! - `creature <TYPE> [TYPE]`: composite defense, attacks and per-type verdicts
//! - `coverage <TYPE> [TYPE]`: best additional attack types
//! - `survey [PARTNER]`: defensive figures of every typing sharing a type

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use typecov_chart::{ElementType, Era, MatchupTable};
use typecov_matchup::query::{defensive_survey, verdicts};
use typecov_matchup::{Attack, CoverageSearch, CreatureTyping, DefenseWeights, TypeProfile};

mod cli;
mod report;

use cli::{Cli, Commands};
use report::{
    CoverageSummary, CreatureReport, OutcomeReport, ProfileReport, Report, SurveyReport,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let table = Arc::new(load_table(&cli)?);
    run(&cli, table)
}

fn load_table(cli: &Cli) -> Result<MatchupTable> {
    match &cli.chart_dir {
        Some(dir) => MatchupTable::load_dir(dir)
            .with_context(|| format!("Failed to load type charts from {}", dir.display())),
        None => MatchupTable::builtin().context("Failed to load built-in type charts"),
    }
}

fn run(cli: &Cli, table: Arc<MatchupTable>) -> Result<()> {
    let era = cli.era;

    match &cli.command {
        Commands::Profile { ty } => {
            let profile = TypeProfile::build(&table, *ty, era)
                .with_context(|| format!("Failed to build profile for {}", ty))?;
            emit(cli, &ProfileReport(&profile))
        }

        Commands::Rank {
            first,
            second,
            indirect,
        } => {
            let a = TypeProfile::build(&table, *first, era)?;
            let b = TypeProfile::build(&table, *second, era)?;
            let outcome = if *indirect { a.indirect(&b) } else { a.direct(&b) };
            emit(cli, &OutcomeReport(&outcome))
        }

        Commands::Creature {
            types,
            name,
            attacks,
            no_stab,
        } => {
            let mut creature = build_creature(&table, types, name.clone(), era)?;
            creature.recompute_offense(!*no_stab)?;
            if !attacks.is_empty() {
                let equipped = attacks
                    .iter()
                    .map(|ty| Attack::generic(&table, *ty, era))
                    .collect::<Result<Vec<_>, _>>()?;
                creature
                    .equip_attacks(equipped)
                    .context("Failed to equip attacks")?;
            }
            let verdicts = verdicts(&creature);
            emit(
                cli,
                &CreatureReport {
                    creature: &creature,
                    verdicts: &verdicts,
                },
            )
        }

        Commands::Coverage {
            types,
            moves,
            given,
            no_stab,
        } => {
            let mut creature = build_creature(&table, types, None, era)?;
            let search = CoverageSearch::new(*moves)
                .baseline(given.iter().copied())
                .same_type_bonus(!*no_stab);
            tracing::debug!(
                creature = %creature.name(),
                slots = search.additional_slots(),
                "starting coverage search"
            );
            let coverage = search
                .run(&mut creature)
                .with_context(|| format!("Coverage search for {} failed", creature.name()))?;
            emit(
                cli,
                &CoverageSummary {
                    creature: &creature,
                    report: &coverage,
                },
            )
        }

        Commands::Survey { partner } => {
            let rows = defensive_survey(&table, *partner, era, &DefenseWeights::default())
                .context("Failed to build defensive survey")?;
            emit(
                cli,
                &SurveyReport {
                    partner: *partner,
                    rows: &rows,
                },
            )
        }
    }
}

fn build_creature(
    table: &Arc<MatchupTable>,
    types: &[ElementType],
    name: Option<String>,
    era: Era,
) -> Result<CreatureTyping> {
    CreatureTyping::new(Arc::clone(table), name, types.iter().copied().map(Some), era)
        .context("Failed to build creature")
}

fn emit(cli: &Cli, report: &dyn Report) -> Result<()> {
    if cli.json {
        let rendered =
            serde_json::to_string_pretty(&report.to_json()).context("Failed to render JSON")?;
        println!("{}", rendered);
    } else {
        print!("{}", report);
    }
    Ok(())
}
