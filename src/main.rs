use std::io::Read;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use threatscope::{count_by_priority, FeatureAnalysisService};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let service = match FeatureAnalysisService::from_env() {
        Ok(service) => service,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // Feature description comes from stdin; no flags, no files
    let mut feature_description = String::new();
    std::io::stdin().read_to_string(&mut feature_description)?;

    match service.analyze(&feature_description).await {
        Ok(result) => {
            println!("{}", result.report_text);

            println!("\nRisk prioritization summary ({} risks):", result.risks.len());
            for bucket in count_by_priority(&result.risks) {
                println!("  {:?}: {}", bucket.priority, bucket.count);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Feature analysis failed");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
