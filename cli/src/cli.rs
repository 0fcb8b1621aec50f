//! Command line definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use typecov_chart::{ElementType, Era};

#[derive(Parser)]
#[command(name = "typecov")]
#[command(about = "Type matchup reports and move coverage search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Generation ruleset; 2 to 5 share one chart, 6 and later another
    #[arg(short = 'g', long = "gen", env = "TYPECOV_GEN", default_value = "6", global = true)]
    pub era: Era,

    /// Directory with defensive_genN.tsv and offensive_genN.tsv tables
    /// (built-in tables when not provided)
    #[arg(long, env = "TYPECOV_CHART_DIR", global = true)]
    pub chart_dir: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Weaknesses, resistances and immunities of a single type
    #[command(visible_alias = "p")]
    Profile {
        /// Type name, case-insensitive
        ty: ElementType,
    },

    /// Compare two types head to head
    #[command(visible_alias = "r")]
    Rank {
        first: ElementType,
        second: ElementType,

        /// Only compare defensive scores
        #[arg(long)]
        indirect: bool,
    },

    /// Composite defense and attack coverage of a one- or two-type creature
    #[command(visible_alias = "c")]
    Creature {
        /// One or two types
        #[arg(required = true, num_args = 1..=2)]
        types: Vec<ElementType>,

        /// Species name shown in reports
        #[arg(short, long)]
        name: Option<String>,

        /// Attack types to equip (up to 4)
        #[arg(short, long = "attack", num_args = 1..)]
        attacks: Vec<ElementType>,

        /// Disable the same-type attack bonus
        #[arg(long)]
        no_stab: bool,
    },

    /// Best additional attack types for a creature
    #[command(visible_alias = "cov")]
    Coverage {
        /// One or two types
        #[arg(required = true, num_args = 1..=2)]
        types: Vec<ElementType>,

        /// Total number of move slots
        #[arg(short, long, default_value_t = 4)]
        moves: usize,

        /// Attack types that are always part of the move set
        #[arg(long, num_args = 1..)]
        given: Vec<ElementType>,

        /// Disable the same-type attack bonus
        #[arg(long)]
        no_stab: bool,
    },

    /// Defensive figures of every typing that shares a type
    #[command(visible_alias = "s")]
    Survey {
        /// Shared type; mono types when omitted
        partner: Option<ElementType>,
    },
}
