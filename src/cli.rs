/// CLI argument definitions for the `fc` command.
///
/// Defines all subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::cli_help;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "fc", version, about = "Design-option explorer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Common arguments shared by every analysis command.
#[derive(Args)]
pub struct CommonArgs {
    /// Path to the options workbook (default: workbook.path from fivec.toml)
    pub workbook: Option<PathBuf>,

    /// Load the workbook from an HTTP(S) URL instead of a file
    #[arg(long, conflicts_with = "workbook")]
    pub url: Option<String>,

    /// Config file (default: ./fivec.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// List design options with display values and classifications
    #[command(long_about = cli_help::OPTIONS)]
    Options {
        #[command(flatten)]
        common: CommonArgs,

        /// Read this sheet instead of the configured dataset sheet
        #[arg(long)]
        sheet: Option<String>,

        /// Sort by metric: cost, carbon, or circularity (default: cost)
        #[arg(long, default_value = "cost", value_parser = ["cost", "carbon", "circularity"])]
        sort_by: String,

        /// Show only the top N options (default: 20)
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// Score every option on the five dimensions and assign categories
    #[command(long_about = cli_help::SCORE)]
    Score {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Emit the scatter figure descriptor for one view
    #[command(long_about = cli_help::SCATTER)]
    Scatter {
        #[command(flatten)]
        common: CommonArgs,

        /// Chart view driving colors, zoom window, and icon visibility
        #[arg(long, default_value = "cost", value_parser = ["cost", "carbon", "comfort", "compliance", "circularity"])]
        view: String,

        /// Seed for the sample shuffle (default: sampling.seed from fivec.toml)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Emit the radar figure descriptor for the sampled subset
    #[command(long_about = cli_help::RADAR)]
    Radar {
        #[command(flatten)]
        common: CommonArgs,

        /// Seed for the sample shuffle (default: sampling.seed from fivec.toml)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate a comprehensive report for the workbook
    #[command(long_about = cli_help::REPORT)]
    Report {
        #[command(flatten)]
        common: CommonArgs,

        /// Seed for the sample shuffle (default: sampling.seed from fivec.toml)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Write a standalone HTML page with the scatter and radar figures
    #[command(long_about = cli_help::HTML)]
    Html {
        #[command(flatten)]
        common: CommonArgs,

        /// Output file path
        #[arg(short, long)]
        out: PathBuf,

        /// Scatter view for the page (default: cost)
        #[arg(long, default_value = "cost", value_parser = ["cost", "carbon", "comfort", "compliance", "circularity"])]
        view: String,

        /// Seed for the sample shuffle (default: sampling.seed from fivec.toml)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
