//! `formrelay` command-line host.
//!
//! Loads a form snapshot, validates it and relays it to the configured API,
//! printing inline errors and notices the way a page would show them.
//!
//! ```bash
//! formrelay --form contact.json
//! formrelay --form contact.json --api-url https://api.example.com --lenient-status
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use formrelay_client::config::normalize_api_url;
use formrelay_client::{FormRelay, MemoryForm, RelayConfig, ReqwestTransport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod report;

#[derive(Parser)]
#[command(name = "formrelay")]
#[command(version)]
#[command(about = "Validate a form snapshot and relay it to the API", long_about = None)]
struct Cli {
    /// Path to the JSON form snapshot
    #[arg(long, short)]
    form: PathBuf,

    /// API base URL (overrides FORMRELAY_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Accept non-2xx responses as delivered
    #[arg(long)]
    lenient_status: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formrelay=info,formrelay_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = RelayConfig::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = normalize_api_url(&api_url);
    }
    if cli.lenient_status {
        config.strict_status = false;
    }

    let raw = std::fs::read_to_string(&cli.form)
        .with_context(|| format!("Failed to read form snapshot {}", cli.form.display()))?;
    let mut form: MemoryForm = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid form snapshot {}", cli.form.display()))?;

    tracing::info!(form_id = %form.id, api_url = %config.api_url, "Submitting form");

    let transport = ReqwestTransport::new(&config).context("Failed to build HTTP client")?;
    let relay = FormRelay::new(transport, config);

    let outcome = relay.handle_submit(&mut form).await?;

    print!("{}", report::render(&form, &outcome));
    Ok(report::exit_code(&outcome))
}
