//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Build balanced soccer teams from a roster CSV and generate practice paperwork
#[derive(Parser, Debug)]
#[command(name = "teamforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// League config file (default: ./league.toml)
    #[arg(short, long, global = true, env = "TEAMFORGE_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Balance teams and write rosters and letters
    Run {
        /// Roster CSV (overrides config)
        #[arg(value_hint = ValueHint::FilePath)]
        roster: Option<PathBuf>,

        /// Output directory for generated files
        #[arg(short, long, value_hint = ValueHint::DirPath)]
        output_dir: Option<PathBuf>,
    },

    /// Balance teams and print the assignment (no files written)
    Preview {
        /// Roster CSV (overrides config)
        #[arg(value_hint = ValueHint::FilePath)]
        roster: Option<PathBuf>,
    },

    /// Validate the roster CSV and show counts
    Check {
        /// Roster CSV (overrides config)
        #[arg(value_hint = ValueHint::FilePath)]
        roster: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}
