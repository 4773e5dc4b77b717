// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules, in the order data flows through them:
// - extract:   finds URL-like strings in the document
// - normalize: makes them absolute (defaulting the scheme to http)
// - http:      probes one URL
// - dispatch:  runs every probe concurrently and collects the results
// - report:    classifies results as ok/error and counts them
//
// check_document() wires them together for a file on disk.
// =============================================================================

mod dispatch;
mod extract;
pub(crate) mod http;
pub(crate) mod normalize;
mod report;

use log::{debug, info};
use std::path::Path;
use std::time::Instant;

use crate::error::{Error, Result};

// Re-export public items from submodules
pub use dispatch::Dispatcher;
pub use http::{ProbeOutcome, ProbeResult};
pub use report::Report;

use extract::extract_urls;
use normalize::{normalize_all, NormalizedUrl};

// Reads a document and turns every URL in it into a NormalizedUrl
//
// Fails if the file can't be read, if it has no URLs, or if any one
// candidate can't be parsed. Nothing is probed in any of those cases.
fn load_urls(path: &Path) -> Result<Vec<NormalizedUrl>> {
    let document = std::fs::read(path).map_err(|source| Error::ReadDocument {
        path: path.to_path_buf(),
        source,
    })?;

    let candidates = extract_urls(&document);
    if candidates.is_empty() {
        return Err(Error::NoUrlsFound {
            path: path.to_path_buf(),
        });
    }
    debug!("{} URL(s) found in {}", candidates.len(), path.display());

    normalize_all(&candidates)
}

// Checks every URL in a document and returns the report
//
// The report's elapsed time covers reading the file as well as probing.
pub async fn check_document(path: &Path, dispatcher: &Dispatcher) -> Result<Report> {
    let start = Instant::now();
    let urls = load_urls(path)?;

    info!("Checking {} URL(s)", urls.len());
    let results = dispatcher.probe_all(urls).await?;

    Ok(Report::new(results, start.elapsed()))
}
