// src/error.rs
// =============================================================================
// Errors that stop a whole run.
//
// Per-URL problems (timeouts, refused connections, 404s...) are NOT errors
// here: they are recorded in a ProbeResult and the run keeps going. Only the
// conditions below abort before (or instead of) a report:
// - the document can't be read
// - the document contains no URLs
// - a candidate can't be parsed as a URL at all
// - the HTTP client can't be built
// - the collector lost results because every sender went away
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The input document could not be read from disk
    #[error("Could not open {}: {}", .path.display(), .source)]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extraction found nothing that looks like a URL
    #[error("No URLs could be parsed from {}", .path.display())]
    NoUrlsFound { path: PathBuf },

    /// A candidate couldn't be turned into an absolute URL
    #[error("Could not parse {candidate}: {reason}")]
    InvalidUrl { candidate: String, reason: String },

    /// reqwest refused our client configuration
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// The completion channel closed before every probe reported back
    #[error("Only {received} of {expected} probes reported a result")]
    Incomplete { expected: usize, received: usize },
}

// Convenience alias used across the checker module
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_input() {
        let err = Error::NoUrlsFound {
            path: PathBuf::from("README.md"),
        };
        assert_eq!(err.to_string(), "No URLs could be parsed from README.md");

        let err = Error::InvalidUrl {
            candidate: "http://[::1".to_string(),
            reason: "invalid IPv6 address".to_string(),
        };
        assert!(err.to_string().contains("http://[::1"));
    }

    #[test]
    fn test_incomplete_message() {
        let err = Error::Incomplete {
            expected: 3,
            received: 2,
        };
        assert_eq!(err.to_string(), "Only 2 of 3 probes reported a result");
    }
}
