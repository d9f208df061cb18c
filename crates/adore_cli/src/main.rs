use adore_core::{AdoreConfig, AnalysisError, Dashboard, ScoringApproach};
use adore_gateway::GatewayServer;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

mod batch;
mod logging;
mod report;

use report::AnalysisReport;

#[derive(Parser, Debug)]
#[command(name = "adore", author, version, about = "Customer feedback emotion dashboard", long_about = None)]
struct Args {
    /// Path to the TOML config file (missing file -> defaults)
    #[arg(short, long, default_value = "adore.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the dashboard web server
    Serve {
        /// Bind host (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Bind port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Analyze one piece of feedback and print the JSON result
    Analyze {
        /// Feedback text
        text: String,
        /// "single" or "separate" (overrides config)
        #[arg(short, long)]
        approach: Option<ScoringApproach>,
    },
    /// Analyze every .txt file in a folder, writing one .json per file
    Batch {
        #[arg(short, long, default_value = "inputs")]
        input: PathBuf,
        #[arg(short, long, default_value = "output")]
        output: PathBuf,
        /// "single" or "separate" (overrides config)
        #[arg(short, long)]
        approach: Option<ScoringApproach>,
    },
}

/// One scorer per approach so the page can switch between them.
fn build_dashboard(config: &AdoreConfig) -> anyhow::Result<Arc<Dashboard>> {
    let mut dashboard = Dashboard::new(
        adore_scorer::build_scorer_for(config, ScoringApproach::Single)?,
        config.adore.clone(),
        config.theme_list(),
    )
    .with_default_approach(config.scorer.approach);
    for approach in ScoringApproach::ALL {
        if approach != ScoringApproach::Single {
            let scorer = adore_scorer::build_scorer_for(config, approach)?;
            dashboard = dashboard.with_scorer(approach, scorer);
        }
    }
    Ok(Arc::new(dashboard))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let mut config = AdoreConfig::load_or_default(&args.config)?;
    let _log_guard = logging::init(&config.logging)?;

    info!("Initializing Adore...");

    match args.command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.gateway.host = host;
            }
            if let Some(port) = port {
                config.gateway.port = port;
            }
            let dashboard = build_dashboard(&config)?;
            GatewayServer::new(dashboard, &config.gateway).serve().await?;
        }
        Command::Analyze { text, approach } => {
            if let Some(approach) = approach {
                config.scorer.approach = approach;
            }
            let dashboard = build_dashboard(&config)?;
            match dashboard.analyze(&text).await {
                Ok(analysis) => {
                    let report = AnalysisReport::new(&analysis, dashboard.themes());
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                Err(AnalysisError::EmptyInput) => {
                    eprintln!("{}", AnalysisError::EmptyInput.user_message());
                }
                Err(e) => {
                    eprintln!("{}", e.user_message());
                    return Err(e.into());
                }
            }
        }
        Command::Batch {
            input,
            output,
            approach,
        } => {
            if let Some(approach) = approach {
                config.scorer.approach = approach;
            }
            let dashboard = build_dashboard(&config)?;
            let summary = batch::process_folder(&dashboard, &input, &output).await?;
            info!(
                "Batch finished: {} written, {} skipped",
                summary.written, summary.skipped
            );
        }
    }

    Ok(())
}
