use crate::errors::AppResult;
use clap::Parser;

pub mod commands;

/// Qtum Super Staker Checkup
#[derive(Parser)]
#[command(name = "super-staker-checkup")]
#[command(about = "Classify super staker and delegate UTXOs and report staking weight")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub checkup: commands::checkup::CheckupCommand,
}

pub async fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();
    cli.checkup.run().await
}
