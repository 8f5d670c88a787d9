//! CLI definition and argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Export Braze custom attribute definitions by paging the REST API
///
/// The full attribute list is printed to stdout as pretty JSON once every
/// page has been fetched; progress goes to stderr.
#[derive(Parser, Debug)]
#[command(name = "braze-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// REST API key, sent as the bearer token on every request
    #[arg(long, env = "BRAZE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// REST endpoint base URL, e.g. https://rest.iad-01.braze.com
    #[arg(long, env = "BRAZE_REST_ENDPOINT")]
    pub rest_endpoint: Option<String>,

    /// Also write the full JSON payload to this file
    #[arg(short, long, env = "OUT_FILE")]
    pub out_file: Option<PathBuf>,

    /// Also write a flattened CSV of the attributes to this file
    #[arg(long, env = "CSV_FILE")]
    pub csv_file: Option<PathBuf>,
}
