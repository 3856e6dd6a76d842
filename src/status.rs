// System status display — configuration and model artifact state.

use crate::classifier::traits::FakeProbabilityModel;
use crate::config::Config;

/// Display system status to the terminal.
pub fn show(config: &Config, model: &dyn FakeProbabilityModel) {
    println!("Sentiment: {}", config.sentiment_backend.as_str());
    println!("Concurrency: {}", config.concurrency);
    println!("Max reviews per analysis: {}", config.max_reviews);

    if config.model_present() {
        let size = std::fs::metadata(&config.model_path)
            .map(|m| format_bytes(m.len()))
            .unwrap_or_else(|_| "unknown".to_string());
        println!("Model artifact: {} ({})", config.model_path.display(), size);
    } else {
        println!("Model artifact: not found at {}", config.model_path.display());
        println!("  Run `reviewlens train <FILE>` to build one");
    }

    let mode = if model.is_available() {
        "hybrid (rules + model)"
    } else {
        "rules only"
    };
    println!("Classifier: {} (model: {})", mode, model.describe());
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
