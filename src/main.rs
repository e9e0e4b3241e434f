//! career-recommender: career path recommendations and URL short codes

use anyhow::Context;
use career_recommender::catalog::{Catalog, Profile};
use career_recommender::cli::{self, Cli, Commands, ConfigAction};
use career_recommender::config::Config;
use career_recommender::output::formatter::{
    parse_output_format, save_report_to_file, ConsoleFormatter, ReportGenerator,
};
use career_recommender::output::report::RecommendationReport;
use career_recommender::processing::scorer::Scorer;
use career_recommender::shortener;
use clap::Parser;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration from {}: {}", config_path.display(), e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path) {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config, config_path: &Path) -> anyhow::Result<()> {
    match command {
        Commands::Recommend {
            skills,
            education,
            interests,
            experience,
            catalog,
            seed,
            output,
            detailed,
            save,
        } => {
            let format = match output {
                Some(format) => parse_output_format(&format)?,
                None => config.output.format,
            };
            let catalog = load_catalog(catalog.as_ref().or(config.catalog.path.as_ref()))?;
            let seed = seed.unwrap_or(config.model.seed);

            let start = Instant::now();
            let scorer = Scorer::with_options(catalog, seed, &config.forest_options())
                .context("Failed to initialize scorer")?;

            let profile = Profile::new(&skills, education, &interests, experience);
            let recommendations = scorer.recommend(&profile);
            let elapsed = start.elapsed().as_millis() as u64;
            info!("Ranked {} careers in {}ms", scorer.catalog().len(), elapsed);

            let report = RecommendationReport::new(profile, recommendations, &scorer, elapsed);
            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Catalog { catalog } => {
            let catalog = load_catalog(catalog.as_ref().or(config.catalog.path.as_ref()))?;
            let formatter = ConsoleFormatter::new(config.output.color_output, false);
            println!("{}", formatter.format_catalog(&catalog));
        }

        Commands::Explain => {
            println!("{}", cli::EXPLANATION);
        }

        Commands::Shorten {
            url,
            length,
            show_digest,
        } => {
            let length = length.unwrap_or(config.shortener.length);
            if show_digest {
                println!("{}", shortener::digest_hex(&url));
            }
            println!("{}", shortener::short_code(&url, length));
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config)
                    .context("Failed to serialize configuration")?;
                println!("{}", content);
            }
            ConfigAction::Reset => {
                Config::default().save_to(config_path)?;
                println!("Configuration reset: {}", config_path.display());
            }
            ConfigAction::Path => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

fn load_catalog(path: Option<&PathBuf>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Ok(Catalog::reference()),
    }
}
