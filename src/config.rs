//! Export run configuration
//!
//! Settings are resolved once at process entry into an [`ExportConfig`]
//! that is passed by reference to the pager and the serializers. There is
//! no global state; the CLI layer owns the env-var fallbacks.

use crate::error::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Top-level JSON field holding the attribute array in each page body
pub const RECORDS_FIELD: &str = "attributes";

/// Endpoint path appended to the REST endpoint base
pub const ATTRIBUTES_PATH: &str = "/custom_attributes";

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimum interval between page requests
///
/// One request per 700ms keeps the run at ~85 requests/minute, under the
/// documented limit of 100/minute.
const PAGE_INTERVAL: Duration = Duration::from_millis(700);

/// Resolved configuration for one export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// REST API key, sent as the bearer token on every request
    pub api_key: String,

    /// REST endpoint base URL (e.g. `https://rest.iad-01.braze.com`)
    pub rest_endpoint: String,

    /// Optional path for the full JSON payload (in addition to stdout)
    pub out_file: Option<PathBuf>,

    /// Optional path for the flattened CSV
    pub csv_file: Option<PathBuf>,

    /// Per-request timeout
    pub timeout: Duration,

    /// Minimum interval between page requests
    pub page_interval: Duration,
}

impl ExportConfig {
    /// Resolve a config from optional settings, failing on missing
    /// required ones
    ///
    /// The error names both the CLI flag and the env var so the message is
    /// actionable regardless of how the setting was meant to arrive.
    pub fn new(
        api_key: Option<String>,
        rest_endpoint: Option<String>,
        out_file: Option<PathBuf>,
        csv_file: Option<PathBuf>,
    ) -> Result<Self> {
        let api_key = api_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::missing_field("api-key (BRAZE_API_KEY)"))?;
        let rest_endpoint = rest_endpoint
            .filter(|e| !e.is_empty())
            .ok_or_else(|| Error::missing_field("rest-endpoint (BRAZE_REST_ENDPOINT)"))?;

        // Fail fast on an unusable endpoint, before any network activity.
        Url::parse(&rest_endpoint)?;

        Ok(Self {
            api_key,
            rest_endpoint,
            out_file,
            csv_file,
            timeout: REQUEST_TIMEOUT,
            page_interval: PAGE_INTERVAL,
        })
    }

    /// Base URL of the attribute listing (first page, no cursor)
    pub fn base_url(&self) -> String {
        format!(
            "{}{ATTRIBUTES_PATH}",
            self.rest_endpoint.trim_end_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_endpoint(endpoint: &str) -> Result<ExportConfig> {
        ExportConfig::new(
            Some("test-key".to_string()),
            Some(endpoint.to_string()),
            None,
            None,
        )
    }

    #[test]
    fn test_base_url_appends_path() {
        let config = config_with_endpoint("https://rest.iad-01.braze.com").unwrap();
        assert_eq!(
            config.base_url(),
            "https://rest.iad-01.braze.com/custom_attributes"
        );
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let config = config_with_endpoint("https://rest.iad-01.braze.com/").unwrap();
        assert_eq!(
            config.base_url(),
            "https://rest.iad-01.braze.com/custom_attributes"
        );
    }

    #[test]
    fn test_missing_api_key() {
        let err = ExportConfig::new(None, Some("https://rest.example.com".to_string()), None, None)
            .unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));
        assert!(err.to_string().contains("BRAZE_API_KEY"));
    }

    #[test]
    fn test_missing_endpoint() {
        let err = ExportConfig::new(Some("key".to_string()), None, None, None).unwrap_err();
        assert!(err.to_string().contains("BRAZE_REST_ENDPOINT"));
    }

    #[test]
    fn test_empty_values_treated_as_missing() {
        let err = ExportConfig::new(
            Some(String::new()),
            Some("https://rest.example.com".to_string()),
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let err = config_with_endpoint("not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_defaults() {
        let config = config_with_endpoint("https://rest.example.com").unwrap();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.page_interval, Duration::from_millis(700));
        assert!(config.out_file.is_none());
        assert!(config.csv_file.is_none());
    }
}
