use crate::analysis::reports::{OutputFormat, ReportFormatter};
use crate::api::QtumInfoClient;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::processor::CheckupProcessor;
use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};

/// Run a full checkup for the configured super staker
#[derive(Args)]
pub struct CheckupCommand {
    /// Path to the checkup configuration file (TOML or JSON)
    pub config: PathBuf,
}

impl CheckupCommand {
    pub async fn run(&self) -> AppResult<()> {
        info!("=== Super Staker Checkup ===");

        let app_config = match AppConfig::load(&self.config) {
            Ok(config) => {
                info!("Configuration loaded from {}", self.config.display());
                config
            }
            Err(e) => {
                warn!("Failed to load configuration: {}", e);
                return Err(e);
            }
        };

        let format = app_config.output.format;
        if format == OutputFormat::Console {
            println!(
                "{}",
                ReportFormatter::format_header(env!("CARGO_PKG_VERSION"))
            );
            println!(
                "{}",
                ReportFormatter::format_configuration(
                    &app_config,
                    &self.config.display().to_string()
                )
            );
        }

        let client = QtumInfoClient::new(app_config.api.clone(), app_config.network())?;
        let processor = CheckupProcessor::new(
            &client,
            app_config.run_config(),
            app_config.api.concurrent_requests,
        );

        let report = processor.run().await?;
        info!(
            "Completed with {} API requests ({} failed attempts)",
            client.get_request_count(),
            client.get_error_count()
        );

        print!("{}", ReportFormatter::format_checkup(&report, &format)?);

        if report.staker_unavailable() {
            return Err(AppError::StakerUnavailable(
                report.staker.address.clone(),
            ));
        }

        Ok(())
    }
}
