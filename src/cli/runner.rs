//! CLI runner - executes the export

use crate::cli::commands::Cli;
use crate::config::ExportConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RateLimiterConfig};
use crate::output;
use crate::pager::Pager;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the export: fetch every page, then write all configured outputs
    ///
    /// Nothing is written unless the whole pagination loop succeeds, so a
    /// failed run leaves no partial output behind.
    pub async fn run(&self) -> Result<()> {
        let config = ExportConfig::new(
            self.cli.api_key.clone(),
            self.cli.rest_endpoint.clone(),
            self.cli.out_file.clone(),
            self.cli.csv_file.clone(),
        )?;

        let client = HttpClient::with_config(
            HttpClientConfig::new(config.api_key.as_str())
                .timeout(config.timeout)
                .rate_limit(RateLimiterConfig::new(config.page_interval)),
        )?;

        let records = Pager::new(&client, &config).fetch_all().await?;

        // The primary output always goes to stdout; files only when set.
        let json_text = output::json::render(&records)?;
        println!("{json_text}");

        if let Some(path) = &config.out_file {
            output::json::write_file(path, &json_text)?;
        }

        if let Some(path) = &config.csv_file {
            if output::csv::write_file(path, &records)? {
                info!("Attributes written to {}", path.display());
            }
        }

        Ok(())
    }
}
