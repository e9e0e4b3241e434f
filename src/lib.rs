//! Career recommender library

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod processing;
pub mod shortener;

pub use catalog::{Catalog, CatalogEntry, Education, Experience, Profile};
pub use config::Config;
pub use error::{RecommenderError, Result};
pub use processing::scorer::{initialize, recommend, ScoredEntry, Scorer, ScorerHandle};
