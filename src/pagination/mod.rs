//! Link header pagination (RFC 5988)
//!
//! The Braze attribute listing advertises its next page through the `Link`
//! response header. This module extracts the URL tagged with a given
//! relation; everything about the URL itself (cursor included) is opaque.

mod link;

pub use link::{next_url, rel_url};
