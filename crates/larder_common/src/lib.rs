//! Larder Common - recipe data, matching engine, and configuration
//!
//! Everything here is synchronous and free of process-wide state: the
//! dataset is passed in, results are returned.

pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod query;
pub mod recipe;
pub mod selection;
pub mod similarity;
pub mod staples;

pub use config::LarderConfig;
pub use error::{ConfigError, DatasetError};
pub use query::Query;
pub use recipe::{Recipe, RecipeId};
