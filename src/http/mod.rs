//! HTTP client module
//!
//! Provides the outbound side of the export: a reqwest client carrying the
//! fixed header set (bearer authorization, JSON content negotiation, a
//! distinguishing user agent) and token-bucket request pacing so the run
//! stays under the documented API rate limit.

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
