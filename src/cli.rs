//! CLI interface for the career recommender

use crate::catalog::{Education, Experience};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "career-recommender")]
#[command(about = "Career path recommendation from your skills profile")]
#[command(long_about = "Rank careers against a skills profile using a random forest over the \
    catalog plus skill similarity, and generate short codes for URLs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Get the top 3 recommended careers for a profile
    Recommend {
        /// Your skills, comma separated
        #[arg(short, long, default_value = "")]
        skills: String,

        /// Highest education level
        #[arg(short, long, value_enum, default_value_t = Education::Highschool)]
        education: Education,

        /// Your interests, comma separated
        #[arg(short, long, default_value = "")]
        interests: String,

        /// Your experience level
        #[arg(short = 'x', long, value_enum, default_value_t = Experience::Entry)]
        experience: Experience,

        /// Catalog file (TOML or JSON) to rank instead of the built-in table
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Seed for the classifier (overrides the configured seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Show component scores and run metadata
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// List the careers in the catalog
    Catalog {
        /// Catalog file (TOML or JSON) instead of the built-in table
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Explain how recommendations are computed
    Explain,

    /// Generate a short code for a URL
    Shorten {
        /// URL to shorten
        url: String,

        /// Number of code characters (1-44)
        #[arg(short, long)]
        length: Option<usize>,

        /// Also print the SHA-256 digest
        #[arg(long)]
        show_digest: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

pub const EXPLANATION: &str = "\
How it works
- Text features (skills, education, interests, experience) are combined.
- A Random Forest model predicts possible career matches.
- Skill similarity (cosine similarity) improves accuracy.
- Final ranking = 70% ML model + 30% skill similarity.
";
