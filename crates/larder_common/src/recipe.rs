//! Recipe data model
//!
//! Records are read-only once loaded. Missing fields deserialize to
//! empty values so a sparse dataset never fails a whole load.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Recipe identifier - datasets use either integers or strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeId::Int(n) => write!(f, "{}", n),
            RecipeId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A single recipe record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display-only identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecipeId>,

    /// Free-text cuisine label, compared case-insensitively
    #[serde(default)]
    pub cuisine: String,

    /// Ingredient names in dataset order
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new(id: i64, cuisine: impl Into<String>, ingredients: &[&str]) -> Self {
        Self {
            id: Some(RecipeId::Int(id)),
            cuisine: cuisine.into(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Case-insensitive cuisine comparison
    pub fn cuisine_matches(&self, cuisine: &str) -> bool {
        self.cuisine.to_lowercase() == cuisine.to_lowercase()
    }

    pub fn display_id(&self) -> String {
        self.id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "Unknown ID".to_string())
    }

    pub fn display_cuisine(&self) -> &str {
        if self.cuisine.is_empty() {
            "Unknown cuisine"
        } else {
            &self.cuisine
        }
    }
}

/// Sorted, de-duplicated cuisine labels offered to the finder, capitalized.
/// Recipes without a cuisine are not offered.
pub fn cuisine_options(recipes: &[Recipe]) -> Vec<String> {
    recipes
        .iter()
        .filter(|r| !r.cuisine.is_empty())
        .map(|r| capitalize(&r.cuisine))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}
