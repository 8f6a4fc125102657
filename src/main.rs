use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use payout_form::application::shell::{FORM_ROUTE, Shell};
use payout_form::config::{
    DEFAULT_AFFILIATE_ID, DEFAULT_BASE_URL, DEFAULT_MERCHANT_ID, GatewayConfig, SecretKey,
};
use payout_form::domain::payout::MerchantIdentity;
use payout_form::domain::ports::SharedGateway;
use payout_form::error::PayoutError;
use payout_form::infrastructure::http::HttpPayoutGateway;
use payout_form::infrastructure::in_memory::InMemoryGateway;
use payout_form::interfaces::csv::batch::run_batch;
use payout_form::interfaces::csv::form_reader::FormReader;
use payout_form::interfaces::terminal::repl;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    gateway: GatewayArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Fill in and submit the payout form interactively
    Interactive,
    /// Submit one payout form per row of a CSV file
    Batch {
        /// CSV file whose headers are form field names
        input: PathBuf,
    },
}

#[derive(Args)]
struct GatewayArgs {
    /// Base URL of the payout service
    #[arg(long, env = "PAYOUT_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Pre-shared key sent in the X-Secret-Key header
    #[arg(long, env = "PAYOUT_SECRET_KEY", hide_env_values = true, global = true)]
    secret_key: Option<String>,

    /// Merchant identifier attached to every payout
    #[arg(long, env = "PAYOUT_MERCHANT_ID", default_value = DEFAULT_MERCHANT_ID, global = true)]
    merchant_id: String,

    /// Affiliate identifier attached to every payout
    #[arg(long, env = "PAYOUT_AFFILIATE_ID", default_value = DEFAULT_AFFILIATE_ID, global = true)]
    affiliate_id: String,

    /// Overall request timeout in seconds (transport default when omitted)
    #[arg(long, env = "PAYOUT_TIMEOUT_SECS", global = true)]
    timeout_secs: Option<u64>,

    /// Accept payouts locally instead of calling the payout service
    #[arg(long, global = true)]
    dry_run: bool,
}

impl GatewayArgs {
    fn build_gateway(&self) -> Result<SharedGateway> {
        if self.dry_run {
            tracing::warn!("dry run: payouts are accepted locally and nothing is sent");
            return Ok(Arc::new(InMemoryGateway::new()));
        }

        let secret_key = self
            .secret_key
            .clone()
            .ok_or_else(|| {
                PayoutError::ConfigError(
                    "a secret key is required (--secret-key or PAYOUT_SECRET_KEY)".to_string(),
                )
            })
            .into_diagnostic()?;

        let mut config = GatewayConfig::new(&self.base_url, SecretKey::new(secret_key));
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        let gateway = HttpPayoutGateway::new(&config).into_diagnostic()?;
        Ok(Arc::new(gateway))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let identity = MerchantIdentity::new(&cli.gateway.merchant_id, &cli.gateway.affiliate_id);
    let shell = Shell::new(cli.gateway.build_gateway()?, identity);

    match cli.command {
        Command::Interactive => {
            let mut form = shell.mount(FORM_ROUTE).into_diagnostic()?;
            repl::run(&mut form, io::stdin().lock(), io::stdout())
                .await
                .into_diagnostic()?;
        }
        Command::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let rows = FormReader::new(file).rows().into_diagnostic()?;
            let summary = run_batch(&shell, rows, io::stdout(), io::stderr())
                .await
                .into_diagnostic()?;
            eprintln!(
                "Processed batch: {} succeeded, {} failed, {} invalid, {} skipped",
                summary.succeeded, summary.failed, summary.invalid, summary.skipped
            );
        }
    }

    Ok(())
}
