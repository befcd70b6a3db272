//! RetainAI command-line runner.
//!
//! Loads configuration, loads the dashboard, scores the default wizard
//! profile and applies the AI retention plan, printing each view as JSON.
//!
//! ```text
//! retain-ai [--offline] [--export <path>]
//! ```
//!
//! `--offline` swaps the HTTP adapters for the in-memory mocks.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use retain_ai::adapters::mock::{MockDashboardSource, MockPredictionGateway};
use retain_ai::adapters::retain_api::{HttpDashboardSource, HttpPredictionGateway, RetainApiConfig};
use retain_ai::application::{DashboardHandler, ExportHistoryHandler, PredictionWorkflowHandler};
use retain_ai::config::AppConfig;
use retain_ai::domain::dashboard::{DashboardFilters, Pagination};
use retain_ai::domain::simulation::ExitPolicy;
use retain_ai::ports::{DashboardSource, PredictionGateway};

/// Churn-risk dashboard runner.
#[derive(Parser, Debug)]
#[command(name = "retain-ai")]
#[command(about = "RetainAI churn-risk dashboard runner")]
#[command(version)]
struct Args {
    /// Use the in-memory scoring service and dashboard instead of HTTP
    #[arg(long)]
    offline: bool,

    /// Write the prediction history CSV to this file
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = AppConfig::load()?;
    config.validate()?;

    // Initialize logging
    let registry = tracing_subscriber::registry().with(config.telemetry.env_filter()?);
    if config.telemetry.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    let (gateway, source): (Arc<dyn PredictionGateway>, Arc<dyn DashboardSource>) = if args.offline {
        info!("Running against in-memory scoring service");
        (
            Arc::new(MockPredictionGateway::new()),
            Arc::new(MockDashboardSource::new()),
        )
    } else {
        let api = RetainApiConfig::from(&config.api);
        info!(base_url = %config.api.base_url, "Using scoring service");
        (
            Arc::new(HttpPredictionGateway::new(api.clone())?),
            Arc::new(HttpDashboardSource::new(api)?),
        )
    };

    let dashboard = DashboardHandler::new(source.clone())
        .load(&DashboardFilters::default(), Pagination::default())
        .await;
    println!("{}", serde_json::to_string_pretty(&dashboard)?);

    let mut handler = PredictionWorkflowHandler::new(gateway).with_numeric_input(config.profile.numeric_input);
    let wizard = handler.wizard_mut()?;
    while wizard.advance() {}

    let baseline = handler.submit().await?;
    let plan = handler.generate_plan().await?;
    if !plan.status.is_applied() {
        warn!(status = ?plan.status, "Planned profile was not scored");
    }
    let simulated = handler.workflow().session().map(|session| session.outcome());
    handler.exit_simulation(ExitPolicy::Commit)?;

    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "baseline": baseline,
            "suggestions": plan.suggestions,
            "simulation": simulated,
        }))?
    );

    if let Some(path) = args.export {
        match ExportHistoryHandler::new(source).export_to(&path).await {
            Ok(bytes) => info!(path = %path.display(), bytes, "Export written"),
            Err(err) => warn!(error = %err, "Export failed"),
        }
    }

    Ok(())
}
