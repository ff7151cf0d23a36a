use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

use waitlist::adapters::export_client::{WaitlistApiClient, write_export};

/// Download the waitlist as a dated CSV file.
#[derive(Parser, Debug)]
#[command(name = "waitlist-export", version, about)]
struct Args {
    /// Root URL of the waitlist service
    #[arg(long, env = "WAITLIST_API_URL", default_value = "http://127.0.0.1:3001")]
    api_url: Url,

    /// Directory the CSV file is written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "waitlist=info".into()),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let client = WaitlistApiClient::new(&args.api_url)?;
    info!(url = %client.list_url(), "Fetching waitlist");
    let entries = client.fetch_entries().await?;

    let today = chrono::Utc::now().date_naive();
    match write_export(&args.out_dir, today, &entries)? {
        Some(path) => {
            info!(count = entries.len(), "Export complete");
            println!("{}", path.display());
        }
        None => info!("No signups yet, nothing to export"),
    }

    Ok(())
}
