// src/checker/normalize.rs
// =============================================================================
// Turns raw candidates from the extractor into absolute URLs we can request.
//
// Two cases:
// - "https://example.com"  -> already absolute, kept exactly as written
// - "example.com/page"     -> no scheme, becomes "http://example.com/page"
//
// Bytes that aren't valid UTF-8 are percent-encoded, not rejected.
//
// Anything the url crate can't make sense of even after adding a scheme is a
// fatal error for the whole run. We'd rather stop and tell the user than
// quietly skip a link they expect to be checked.
// =============================================================================

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use url::{ParseError, Url};

use crate::error::{Error, Result};

// Scheme used when a candidate doesn't carry one
const DEFAULT_SCHEME: &str = "http";

/// An absolute URL, ready to be probed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedUrl(String);

impl NormalizedUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Normalizes a single candidate
//
// Returns Err(Error::InvalidUrl) if the candidate can't be parsed as a URL,
// with or without a default scheme.
pub fn normalize(candidate: &[u8]) -> Result<NormalizedUrl> {
    let text = escape_invalid_utf8(candidate);
    let text = text.as_ref();

    match Url::parse(text) {
        Ok(_) => Ok(NormalizedUrl(text.to_string())),
        // "example.com/page" parses as a relative reference, i.e. no scheme
        Err(ParseError::RelativeUrlWithoutBase) => {
            let with_scheme = format!("{}://{}", DEFAULT_SCHEME, text);
            Url::parse(&with_scheme).map_err(|e| invalid(text, e))?;
            Ok(NormalizedUrl(with_scheme))
        }
        Err(e) => Err(invalid(text, e)),
    }
}

// Percent-encodes every byte that isn't part of valid UTF-8
//
// b"http://a.test/x\xffy" -> "http://a.test/x%FFy"
fn escape_invalid_utf8(mut bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(bytes.len() + 8);
    loop {
        match std::str::from_utf8(bytes) {
            Ok(rest) => {
                escaped.push_str(rest);
                return Cow::Owned(escaped);
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                // valid_up_to always lands on a char boundary
                escaped.push_str(std::str::from_utf8(valid).unwrap_or_default());
                let bad = e.error_len().unwrap_or(rest.len());
                for byte in &rest[..bad] {
                    escaped.push_str(&format!("%{:02X}", byte));
                }
                bytes = &rest[bad..];
            }
        }
    }
}

// Normalizes every candidate, stopping at the first one that fails
pub fn normalize_all(candidates: &[Vec<u8>]) -> Result<Vec<NormalizedUrl>> {
    candidates.iter().map(|c| normalize(c)).collect()
}

fn invalid(candidate: &str, error: ParseError) -> Error {
    Error::InvalidUrl {
        candidate: candidate.to_string(),
        reason: error.to_string(),
    }
}
