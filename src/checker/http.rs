// src/checker/http.rs
// =============================================================================
// This module probes a single URL over HTTP.
//
// Key functionality:
// - Makes one HTTP HEAD request per URL (or GET, if the run asks for it)
// - Records the status code of ANY response; deciding what counts as "ok"
//   happens later, in report.rs
// - Turns transport failures (timeout, DNS, TLS...) into data instead of
//   propagating them, so one bad link never affects its siblings
//
// Rust concepts:
// - async/await: For non-blocking network I/O
// - Enums with data: ProbeOutcome is EITHER a status OR a failure, never both
// - Drop: the response is released as soon as it goes out of scope
// =============================================================================

use log::debug;
use reqwest::{Client, Method};
use serde::Serialize;
use std::error::Error as _;
use std::fmt;
use std::time::{Duration, Instant};

use super::normalize::NormalizedUrl;
use crate::config::{ProbeConfig, ProbeMethod};
use crate::error::Result;

// Broad category of a transport-level failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Request didn't finish within the configured timeout
    Timeout,
    /// Could not resolve hostname
    Dns,
    /// Connection refused, reset, unreachable...
    Connect,
    /// SSL/TLS certificate or handshake error
    Tls,
    /// Too many redirects (redirect loop)
    Redirect,
    /// Anything else reqwest reports
    Other,
}

/// Why a probe produced no response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// What happened when we asked the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// The server answered, with any status code at all
    Status { code: u16 },
    /// No response: the transport failed
    Failed(ProbeFailure),
}

/// The single result a probe task publishes.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeResult {
    /// The URL that was probed
    pub url: NormalizedUrl,
    #[serde(flatten)]
    pub outcome: ProbeOutcome,
    /// How long the request took, including failures
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl ProbeResult {
    pub fn status_code(&self) -> Option<u16> {
        match self.outcome {
            ProbeOutcome::Status { code } => Some(code),
            ProbeOutcome::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ProbeFailure> {
        match &self.outcome {
            ProbeOutcome::Status { .. } => None,
            ProbeOutcome::Failed(failure) => Some(failure),
        }
    }
}

// Durations go out as whole milliseconds in JSON
pub(crate) fn serialize_millis<S: serde::Serializer>(
    d: &Duration,
    s: S,
) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

// Builds the one HTTP client shared by every probe in a run
//
// Client is cheap to clone (it's an Arc inside), so each task gets its own
// handle while they all share the connection pool.
pub fn build_client(config: &ProbeConfig) -> Result<Client> {
    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(client)
}

// Probes a single URL
//
// This never fails: every outcome, good or bad, ends up in the ProbeResult.
// The client's timeout bounds how long this can take.
pub async fn probe_url(client: Client, url: NormalizedUrl, method: ProbeMethod) -> ProbeResult {
    debug!("Fetching {}", url);
    let start = Instant::now();

    let method = match method {
        ProbeMethod::Head => Method::HEAD,
        ProbeMethod::Get => Method::GET,
    };

    let outcome = match client.request(method, url.as_str()).send().await {
        Ok(response) => {
            let code = response.status().as_u16();
            // Dropping the response here releases the body and the
            // connection, whatever the status was
            drop(response);
            ProbeOutcome::Status { code }
        }
        Err(e) => ProbeOutcome::Failed(categorize_error(&e)),
    };

    ProbeResult {
        url,
        outcome,
        elapsed: start.elapsed(),
    }
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - SSL certificate issues
// - Too many redirects
// - etc.
fn categorize_error(error: &reqwest::Error) -> ProbeFailure {
    // "dns error" and TLS details usually live a couple of levels below
    // reqwest's own message, which also contains the URL itself
    let mut causes = String::new();
    let mut source = error.source();
    while let Some(inner) = source {
        causes.push_str(": ");
        causes.push_str(&inner.to_string());
        source = inner.source();
    }
    let lowered = causes.to_lowercase();

    let kind = if error.is_timeout() {
        FailureKind::Timeout
    } else if error.is_redirect() {
        FailureKind::Redirect
    } else if lowered.contains("dns") || lowered.contains("resolve") {
        FailureKind::Dns
    } else if lowered.contains("certificate") || lowered.contains("ssl") || lowered.contains("tls") {
        FailureKind::Tls
    } else if error.is_connect() {
        FailureKind::Connect
    } else {
        FailureKind::Other
    };

    ProbeFailure {
        kind,
        message: format!("{}{}", error, causes),
    }
}
