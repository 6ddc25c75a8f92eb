//! Receipt points service CLI
//!
//! Usage:
//!   receipts start          - Start the HTTP API server
//!   receipts score <file>   - Score a receipt JSON file without storing it

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use receipts_api::validate::parse_receipt;
use receipts_api::{run_server, ApiConfig, ProcessReceiptRequest};
use receipts_core::{canon, score};

#[derive(Parser)]
#[command(name = "receipts")]
#[command(about = "Receipt points service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Start {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
        /// Disable permissive CORS headers
        #[arg(long)]
        no_cors: bool,
    },

    /// Score a receipt JSON file offline
    Score {
        /// File containing the receipt JSON
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Start {
            host,
            port,
            no_cors,
        } => {
            let config = ApiConfig {
                host,
                port,
                enable_cors: !no_cors,
            };
            run_server(&config).await?;
        }

        Commands::Score { file } => {
            let raw = std::fs::read_to_string(&file)?;
            let request: ProcessReceiptRequest = serde_json::from_str(&raw)?;

            let receipt = parse_receipt(&request).map_err(|violations| {
                let fields = violations
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("invalid receipt: {fields}")
            })?;

            let points = score::score(&receipt)?;
            let digest = canon::receipt_digest(&receipt);

            println!("points: {points}");
            println!("digest: {digest}");
        }
    }

    Ok(())
}
