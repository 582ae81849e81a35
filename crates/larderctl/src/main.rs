//! Larder Control - CLI for the Larder recipe finder
//!
//! Without a subcommand, starts the interactive session on stdin/stdout.

use anyhow::{Context, Result};
use clap::Parser;
use larder_common::{logging, LarderConfig, Query};
use larderctl::cli::{Cli, Commands};
use larderctl::commands;
use larderctl::display::Renderer;
use larderctl::errors::{EXIT_GENERAL_ERROR, EXIT_SUCCESS};
use larderctl::session::{Session, SessionSettings};
use std::io::{self, Write};
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    logging::init(if cli.verbose { "debug" } else { "warn" });

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_GENERAL_ERROR
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let config = LarderConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    debug!(?config, "Configuration loaded");

    let settings = SessionSettings {
        dataset: cli.dataset.unwrap_or(config.dataset.path),
        renderer: Renderer::from_mode(config.output.color, cli.no_color),
        carry_staples: config.finder.carry_staples,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let code = match cli.command {
        None => {
            let stdin = io::stdin();
            let mut session = Session::new(stdin.lock(), &mut out, settings, commands::make_rng(None));
            session.run()?;
            EXIT_SUCCESS
        }
        Some(Commands::Find {
            cuisines,
            ingredients,
            allergies,
            seed,
            json,
        }) => {
            let query = Query::from_raw(cuisines, &ingredients, &allergies);
            commands::find(&settings, &query, seed, json, &mut out)?
        }
        Some(Commands::Random { seed, json }) => commands::random(&settings, seed, json, &mut out)?,
        Some(Commands::Staples) => commands::staples(&settings, &mut out)?,
        Some(Commands::Cuisines) => commands::cuisines(&settings, &mut out)?,
        Some(Commands::Check) => commands::check(&settings, &mut out, &mut io::stderr())?,
    };

    out.flush().context("Failed to flush output")?;
    Ok(code)
}
