// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # braze-export
//!
//! Export every Braze custom attribute definition by paging the
//! `/custom_attributes` REST endpoint.
//!
//! The run is one linear pipeline:
//!
//! ```text
//! ┌──────────┐    Link: rel="next"    ┌────────────┐    ┌─────────────┐
//! │  Pager   │ ─────────────────────▶ │ Pagination │    │  Output     │
//! │ GET page │ ◀───────────────────── │ parser     │    │ JSON / CSV  │
//! └──────────┘      next page URL     └────────────┘    └─────────────┘
//!       │                                                      ▲
//!       └───────────── collected records (once, at the end) ───┘
//! ```
//!
//! Pages are requested sequentially with bearer-token auth and token-bucket
//! pacing; the collected records are written only after the final page, so
//! a failed run produces no partial output.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use braze_export::cli::{Cli, Runner};
//! use clap::Parser;
//!
//! #[tokio::main]
//! async fn main() -> braze_export::Result<()> {
//!     let cli = Cli::parse();
//!     Runner::new(cli).run().await
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the exporter
pub mod error;

/// Export run configuration
pub mod config;

/// HTTP client with fixed headers and request pacing
pub mod http;

/// Link header pagination (RFC 5988)
pub mod pagination;

/// Page-following fetch loop
pub mod pager;

/// JSON and CSV serialization
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ExportConfig;
pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
