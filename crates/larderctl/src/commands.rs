//! One-shot commands
//!
//! Each command loads the dataset once, renders to the given writer, and
//! returns the process exit code.

use anyhow::{Context, Result};
use larder_common::dataset::{load_recipes, try_load_recipes};
use larder_common::recipe::cuisine_options;
use larder_common::selection::{random_recipe, select_per_cuisine};
use larder_common::staples::CUPBOARD_STAPLES;
use larder_common::Query;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

use crate::errors::{EXIT_INVALID_DATASET, EXIT_SUCCESS};
use crate::session::SessionSettings;

/// Seeded when asked, otherwise from OS entropy
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn find<W: Write>(
    settings: &SessionSettings,
    query: &Query,
    seed: Option<u64>,
    json: bool,
    out: &mut W,
) -> Result<i32> {
    let recipes = load_recipes(&settings.dataset);
    let chosen = select_per_cuisine(&recipes, query, &mut make_rng(seed));

    if json {
        write_json(out, &chosen)?;
    } else {
        write!(out, "{}", settings.renderer.finder_results(&chosen))?;
    }
    Ok(EXIT_SUCCESS)
}

pub fn random<W: Write>(
    settings: &SessionSettings,
    seed: Option<u64>,
    json: bool,
    out: &mut W,
) -> Result<i32> {
    let recipes = load_recipes(&settings.dataset);
    let chosen = random_recipe(&recipes, &mut make_rng(seed));

    if json {
        write_json(out, &chosen)?;
    } else {
        write!(out, "{}", settings.renderer.random_result(chosen))?;
    }
    Ok(EXIT_SUCCESS)
}

pub fn staples<W: Write>(settings: &SessionSettings, out: &mut W) -> Result<i32> {
    let renderer = settings.renderer;
    write!(
        out,
        "{}{}",
        renderer.heading("Cupboard staples:"),
        renderer.numbered(&CUPBOARD_STAPLES)
    )?;
    Ok(EXIT_SUCCESS)
}

pub fn cuisines<W: Write>(settings: &SessionSettings, out: &mut W) -> Result<i32> {
    let recipes = load_recipes(&settings.dataset);
    let options = cuisine_options(&recipes);
    if options.is_empty() {
        write!(out, "{}", settings.renderer.warning("No recipes found in the database."))?;
    } else {
        write!(out, "{}", settings.renderer.numbered(&options))?;
    }
    Ok(EXIT_SUCCESS)
}

/// Strict load; the only command that treats a bad dataset as failure.
/// The summary goes to `out`, the load error to `err`.
pub fn check<W: Write, E: Write>(settings: &SessionSettings, out: &mut W, err: &mut E) -> Result<i32> {
    match try_load_recipes(&settings.dataset) {
        Ok(recipes) => {
            let empty = recipes.iter().filter(|r| r.ingredients.is_empty()).count();
            writeln!(
                out,
                "{}: {} recipes, {} cuisines, {} without ingredients",
                settings.dataset.display(),
                recipes.len(),
                cuisine_options(&recipes).len(),
                empty
            )?;
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            write!(err, "{}", settings.renderer.warning(&e.to_string()))?;
            Ok(EXIT_INVALID_DATASET)
        }
    }
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize recipes")?;
    writeln!(out, "{}", text)?;
    Ok(())
}
