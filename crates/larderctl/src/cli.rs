//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Larder recipe finder CLI
#[derive(Parser, Debug)]
#[command(name = "larderctl")]
#[command(about = "Larder - find recipes from what is in your cupboard", long_about = None)]
#[command(version = env!("LARDER_VERSION"))]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Recipe dataset (overrides $LARDER_DATASET and config)
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Config file (overrides $LARDER_CONFIG and defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand (if not provided, starts the interactive session)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick one matching recipe per cuisine
    Find {
        /// Cuisine to search (repeatable, in priority order)
        #[arg(long = "cuisine", short = 'c')]
        cuisines: Vec<String>,

        /// Comma-separated ingredients you have
        #[arg(long, short = 'i', default_value = "")]
        ingredients: String,

        /// Comma-separated ingredients to avoid (exact names)
        #[arg(long, short = 'a', default_value = "")]
        allergies: String,

        /// Seed the random choice for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Show one recipe chosen at random
    Random {
        /// Seed the random choice for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// List the cupboard staples
    Staples,

    /// List the cuisines present in the dataset
    Cuisines,

    /// Load the dataset strictly and report problems
    Check,
}
