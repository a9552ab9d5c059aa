use crate::core::numbers::TrailingTokenPolicy;
use crate::display::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "textops")]
#[command(about = "Small text utilities: sum of squares, line reversal and substring checks")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// Output format for command results
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sum the squares of every number in a string
    SumSquares {
        /// Text containing digit runs, e.g. "1, 2, 3"
        input: String,
        /// What to do with a number that ends the input
        #[arg(long, value_enum)]
        trailing: Option<TrailingArg>,
    },
    /// Reverse the characters of every line of a file
    Reverse {
        /// Source file (defaults to the configured input, input.txt)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Destination file (defaults to the configured output, output.txt)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Check whether one string contains another
    Contains {
        haystack: String,
        needle: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key: input, output or trailing
        key: String,
        /// Configuration value
        value: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingArg {
    Flush,
    Drop,
}

impl From<TrailingArg> for TrailingTokenPolicy {
    fn from(arg: TrailingArg) -> Self {
        match arg {
            TrailingArg::Flush => TrailingTokenPolicy::Flush,
            TrailingArg::Drop => TrailingTokenPolicy::Drop,
        }
    }
}
