use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::error::{AppError, Result};

// Recognises most standard links. The broad run may include punctuation,
// but the match must end on a character from the narrower class so trailing
// '.' ',' '!' and friends stay out of the URL.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(https?)://[-A-Z0-9+&@#/%?=~_|!:,.;]*[-A-Z0-9+&@#/%=~_|]")
        .expect("Failed to compile URL pattern")
});

/// The first URL found in a free-form submission, kept both as the matched
/// text and in parsed form.
#[derive(Debug, Clone)]
pub struct ExtractedUrl {
    pub raw: String,
    pub parsed: Url,
}

impl ExtractedUrl {
    /// Hostname of the matched URL. Always present, checked at extraction.
    pub fn host(&self) -> &str {
        self.parsed.host_str().unwrap_or_default()
    }
}

/// Scans free-form text for the first http(s) URL substring. Later matches
/// in the same string are ignored.
///
/// A match that does not parse as an absolute URL with a host is rejected
/// the same way as no match at all.
pub fn extract_first_url(input: &str) -> Result<ExtractedUrl> {
    let matched = URL_PATTERN.find(input).ok_or(AppError::NoUrlFound)?;
    let raw = matched.as_str().to_owned();

    let parsed = Url::parse(&raw).map_err(|_| AppError::NoUrlFound)?;
    if parsed.host_str().is_none() {
        return Err(AppError::NoUrlFound);
    }

    Ok(ExtractedUrl { raw, parsed })
}
