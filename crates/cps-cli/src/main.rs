use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use cps_client::HubSpotSchemaClient;
use cps_reconcile::RunContext;
use cps_schema::read_property_csv;

/// Environment variable holding the CRM access token. Its absence is a fatal
/// startup condition, never a per-row error.
const ENV_ACCESS_TOKEN: &str = "HUBSPOT_ACCESS_TOKEN";

#[derive(Parser)]
#[command(name = "cps")]
#[command(about = "CRM property sync CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile a CSV of property definitions against the remote schema
    Sync {
        /// Path to the property-definition CSV
        #[arg(long)]
        csv: PathBuf,

        /// Override the properties API base URL (testing / private gateways)
        #[arg(long)]
        base_url: Option<String>,

        /// File receiving a plain-text copy of the console log stream
        #[arg(long, default_value = "property_sync.log")]
        log_file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Dev-time .env bootstrap; a missing file is fine.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Sync {
            csv,
            base_url,
            log_file,
        } => {
            init_tracing(&log_file)?;

            let token = match std::env::var(ENV_ACCESS_TOKEN) {
                Ok(v) if !v.trim().is_empty() => v,
                _ => bail!("{ENV_ACCESS_TOKEN} environment variable not set"),
            };

            let rows = read_property_csv(&csv)
                .with_context(|| format!("read property csv '{}'", csv.display()))?;
            tracing::info!(rows = rows.len(), file = %csv.display(), "loaded property definitions");

            let client = match base_url {
                Some(url) => HubSpotSchemaClient::new_with_base_url(token, url),
                None => HubSpotSchemaClient::new(token),
            };

            let mut ctx = RunContext::new(&client);
            let summary = cps_reconcile::run(&mut ctx, &rows).await;

            println!("rows={}", summary.total());
            println!("created={} {:?}", summary.created.len(), summary.created);
            println!("skipped={} {:?}", summary.skipped.len(), summary.skipped);
            println!("errors={} {:?}", summary.errors.len(), summary.errors);
        }
    }

    Ok(())
}

/// Console + file logging. The file copy carries the same events with ANSI
/// colors stripped.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("create log file '{}'", log_file.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .init();

    Ok(())
}
