//! Page-following fetch loop
//!
//! Walks the attribute listing from its base URL, following the `Link`
//! header's `rel="next"` entry until a page comes back without one, and
//! accumulates every record in fetch order. Request pacing lives in the
//! HTTP client; any request failure aborts the whole run with nothing
//! written.

use crate::config::{ExportConfig, RECORDS_FIELD};
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination;
use reqwest::header::LINK;
use serde_json::Value;
use tracing::{debug, info};

/// Fetches all pages of the attribute listing
pub struct Pager<'a> {
    client: &'a HttpClient,
    config: &'a ExportConfig,
}

impl<'a> Pager<'a> {
    /// Create a pager over the configured endpoint
    pub fn new(client: &'a HttpClient, config: &'a ExportConfig) -> Self {
        Self { client, config }
    }

    /// Fetch every page reachable from the base URL
    ///
    /// Returns the concatenation of all page records, page order and
    /// within-page order preserved. No deduplication is performed.
    pub async fn fetch_all(&self) -> Result<Vec<Value>> {
        let mut collected: Vec<Value> = Vec::new();
        let mut next_url = Some(self.config.base_url());
        let mut page_count = 0u32;

        while let Some(url) = next_url {
            page_count += 1;
            info!("Requesting page {page_count}: {url}");

            let response = self.client.get(&url).await?;

            // Read the Link header before the body consumes the response.
            let link_header = response
                .headers()
                .get(LINK)
                .and_then(|v| v.to_str().ok())
                .map(ToOwned::to_owned);

            let body = response.text().await?;
            let payload: Value = serde_json::from_str(&body)?;

            let records = page_records(&payload);
            debug!("Page {page_count}: fetched {} records", records.len());
            collected.extend(records);

            next_url = link_header.as_deref().and_then(pagination::next_url);
        }

        info!("Total attributes retrieved: {}", collected.len());
        Ok(collected)
    }
}

/// Extract the attribute array from a page body
///
/// A missing or non-array field means zero records for that page, not an
/// error; pagination still continues off the Link header.
fn page_records(payload: &Value) -> Vec<Value> {
    match payload.get(RECORDS_FIELD) {
        Some(Value::Array(records)) => records.clone(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests;
