use anyhow::{Context, Result};
use std::io::Read;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use trademind_coach::coach::InsightCoach;
use trademind_coach::config::Config;
use trademind_coach::models::TradeAttributes;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing before reading config so config warnings show up.
    // Logs go to stderr so stdout stays pure JSON.
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let cfg = Config::from_env();

    // Usage: trademind-coach [--fallback-only] [trade.json]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let fallback_only = args.iter().any(|a| a == "--fallback-only");
    let path = args.iter().find(|a| !a.starts_with("--"));

    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read trade file {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read trade from stdin")?;
            buf
        }
    };
    let trade: TradeAttributes =
        serde_json::from_str(&raw).context("Failed to parse trade JSON")?;

    let coach = if fallback_only {
        info!("Remote generator disabled, using fallback heuristic");
        InsightCoach::fallback_only()
    } else {
        info!(
            "Generator: {} (configured: {})",
            cfg.generator,
            cfg.generator_configured()
        );
        InsightCoach::from_config(&cfg)
    };

    let (result, source) = coach.get_insight_with_source(&trade).await;
    info!(
        "{} {} -> {}/10 via {}",
        trade.entry, trade.pair, result.discipline_score, source
    );

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
