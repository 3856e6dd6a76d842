use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use reviewlens::classifier::hybrid::ReviewClassifier;
use reviewlens::config::Config;
use reviewlens::model::artifact::load_model;
use reviewlens::model::training::{self, TrainingConfig};
use reviewlens::output::terminal;
use reviewlens::pipeline::analysis::{AnalysisReport, AnalysisService, ProductInfo};
use reviewlens::reviews::{models, product, sample};

/// ReviewLens: fake product review detection.
///
/// Classifies each review as genuine or fake with explainable rules (plus an
/// optional trained text model) and grades the product's review authenticity.
#[derive(Parser)]
#[command(name = "reviewlens", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze reviews from a JSON file
    Analyze {
        /// JSON array of review records, or a product object with a `reviews` array
        file: PathBuf,

        /// Product page URL (the ASIN is derived from it when --asin is absent)
        #[arg(long)]
        url: Option<String>,

        /// Product identifier
        #[arg(long)]
        asin: Option<String>,

        /// Product title shown in the report
        #[arg(long)]
        title: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Tag the report as sample data
        #[arg(long)]
        demo_flag: bool,
    },

    /// Analyze the built-in sample review set
    Demo {
        /// Label the sample set with this product identifier
        #[arg(long)]
        asin: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Train the statistical text model from labeled reviews
    Train {
        /// JSON array of {"text": ..., "label": "genuine" | "fake"}
        file: PathBuf,

        /// Where to write the model artifact (default: REVIEWLENS_MODEL_PATH)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show configuration and model status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("reviewlens=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            file,
            url,
            asin,
            title,
            json,
            demo_flag,
        } => {
            let reviews = read_reviews(&file)?;
            if reviews.is_empty() {
                anyhow::bail!("No reviews found in {}", file.display());
            }

            let asin = asin.or_else(|| url.as_deref().and_then(product::extract_product_id));
            if let Some(id) = asin.as_deref().filter(|id| !product::is_valid_product_id(id)) {
                warn!(asin = id, "ASIN does not look like a catalog identifier");
            }
            let info = ProductInfo {
                asin,
                title,
                image: None,
                url,
                is_demo_data: demo_flag,
            };

            let report = build_service(&config).analyze(info, reviews).await?;
            print_report(&report, json)?;
        }

        Commands::Demo { asin, json } => {
            let reviews = match &asin {
                Some(id) => sample::sample_reviews_for_product(id),
                None => sample::sample_reviews(),
            };
            let info = ProductInfo {
                asin,
                is_demo_data: true,
                ..ProductInfo::default()
            };

            let report = build_service(&config).analyze(info, reviews).await?;
            print_report(&report, json)?;
        }

        Commands::Train { file, output } => {
            let samples = training::load_training_data(&file)?;
            println!("Training on {} labeled reviews...", samples.len());

            let model = tokio::task::spawn_blocking(move || {
                training::train(&samples, &TrainingConfig::default())
            })
            .await
            .context("Training task failed")??;

            if let Some(eval) = &model.evaluation {
                terminal::display_evaluation(eval);
            }

            let path = output.unwrap_or_else(|| config.model_path.clone());
            model.save(&path)?;
            info!(path = %path.display(), "Model artifact written");
            println!(
                "\n{} {}",
                "Model saved to".green(),
                path.display().to_string().bold()
            );
        }

        Commands::Status => {
            let model = load_model(&config.model_path);
            reviewlens::status::show(&config, model.as_ref());
        }
    }

    Ok(())
}

/// Compose the pipeline from configuration: sentiment backend, optional
/// model artifact, concurrency and per-request cap.
fn build_service(config: &Config) -> AnalysisService {
    let model = load_model(&config.model_path);
    let classifier = ReviewClassifier::new(model);
    AnalysisService::new(config.sentiment_backend.build_extractor(), classifier)
        .with_concurrency(config.concurrency)
        .with_max_reviews(config.max_reviews)
}

fn read_reviews(path: &Path) -> Result<Vec<models::RawReview>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let payload: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    Ok(models::parse_payload(&payload))
}

fn print_report(report: &AnalysisReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        terminal::display_report(report);
    }
    Ok(())
}
