//! Dataset loader
//!
//! Reads the recipe collection from a JSON array on disk. Callers reload
//! on every view visit; nothing here is cached.

use crate::error::DatasetError;
use crate::recipe::Recipe;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Default dataset file, relative to the working directory
pub const DEFAULT_DATASET: &str = "train.json";

/// Strict load - surfaces read and parse failures
pub fn try_load_recipes(path: &Path) -> Result<Vec<Recipe>, DatasetError> {
    let contents = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Lenient load - a missing or malformed dataset degrades to no recipes
pub fn load_recipes(path: &Path) -> Vec<Recipe> {
    match try_load_recipes(path) {
        Ok(recipes) => {
            info!(count = recipes.len(), path = %path.display(), "Recipes loaded");
            recipes
        }
        Err(e) => {
            warn!("Error loading recipes: {}", e);
            Vec::new()
        }
    }
}
