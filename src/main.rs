//! braze-export CLI
//!
//! Command-line entry point for the attribute export

use braze_export::cli::{Cli, Runner};
use clap::Parser;

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout is reserved for the JSON payload.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
