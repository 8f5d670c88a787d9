//! Link header parsing
//!
//! A header value looks like:
//!
//! ```text
//! <https://rest.../custom_attributes?cursor=XYZ>; rel="prev",
//! <https://rest.../custom_attributes?cursor=ABC>; rel="next"
//! ```

/// Extract the URL of the `rel="next"` entry, or `None` if there is none
pub fn next_url(header: &str) -> Option<String> {
    rel_url(header, "next")
}

/// Extract the URL tagged with the given relation from a raw Link header
///
/// Entries are comma-separated; the first entry carrying the relation wins.
/// Entries missing their `<`/`>` delimiters are skipped rather than treated
/// as an error. No URL validation or normalization is performed.
pub fn rel_url(header: &str, rel: &str) -> Option<String> {
    if header.is_empty() {
        return None;
    }

    let tag = format!("rel=\"{rel}\"");
    for entry in header.split(',') {
        let entry = entry.trim();
        if !entry.contains(&tag) {
            continue;
        }

        // Take the substring strictly between the first '<' and the '>'
        // that follows it, skipping entries where either is missing.
        let Some(start) = entry.find('<') else {
            continue;
        };
        let Some(end) = entry[start + 1..].find('>').map(|i| i + start + 1) else {
            continue;
        };
        if end > start + 1 {
            return Some(entry[start + 1..end].to_string());
        }
    }

    None
}
