// src/checker/dispatch.rs
// =============================================================================
// Fan-out / fan-in for probes.
//
// How it works:
// 1. The dispatcher spawns one tokio task per URL, all at once
// 2. Each task probes its URL and sends exactly ONE ProbeResult down a
//    shared channel
// 3. The collector reads from that channel until it has one result per
//    dispatched task, then returns them all
//
// The channel is unbounded, so a task never waits to publish. The collector
// has no timeout of its own: it relies on each probe's HTTP timeout to
// finish. A task that hangs forever while holding its sender will hang the
// collector too.
//
// Optionally, a semaphore caps how many probes are in flight at once. Every
// URL still gets its own task; the cap only gates when the request starts.
// =============================================================================

use log::debug;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::sync::Semaphore;

use super::http::{build_client, probe_url, ProbeResult};
use super::normalize::NormalizedUrl;
use crate::config::ProbeConfig;
use crate::error::{Error, Result};

/// Launches probe tasks and hands back the receiving end of their results.
pub struct Dispatcher {
    client: Client,
    config: ProbeConfig,
}

/// Everything needed to collect the results of one dispatch.
pub struct InFlight {
    /// How many tasks were spawned, i.e. how many results to wait for
    pub expected: usize,
    pub results: UnboundedReceiver<ProbeResult>,
}

impl Dispatcher {
    pub fn new(config: ProbeConfig) -> Result<Self> {
        let client = build_client(&config)?;
        Ok(Self::with_client(client, config))
    }

    // Uses a ready-made client instead of building one from `config`
    //
    // The client's own timeout applies; `config.timeout` is not re-applied.
    pub fn with_client(client: Client, config: ProbeConfig) -> Self {
        Self { client, config }
    }

    // Spawns one probe task per URL
    //
    // Must be called from inside a tokio runtime. Returns immediately; the
    // tasks keep running in the background.
    pub fn dispatch(&self, urls: Vec<NormalizedUrl>) -> InFlight {
        let (tx, rx) = mpsc::unbounded_channel();
        let expected = urls.len();
        let gate = self.config.max_in_flight.map(|n| Arc::new(Semaphore::new(n)));

        for url in urls {
            let tx = tx.clone();
            let client = self.client.clone();
            let gate = gate.clone();
            let method = self.config.method;

            tokio::spawn(async move {
                // acquire only fails on a closed semaphore; this one never is
                let _permit = match gate {
                    Some(gate) => gate.acquire_owned().await.ok(),
                    None => None,
                };
                let result = probe_url(client, url, method).await;
                // The collector only goes away once it has everything it
                // wants, so a failed send has nobody left to tell
                let _ = tx.send(result);
            });
        }

        InFlight {
            expected,
            results: rx,
        }
    }

    // Dispatches every URL and waits for all of the results
    pub async fn probe_all(&self, urls: Vec<NormalizedUrl>) -> Result<Vec<ProbeResult>> {
        collect(self.dispatch(urls)).await
    }
}

// Waits until exactly `expected` results have arrived
//
// Results come back in completion order, not input order.
pub async fn collect(in_flight: InFlight) -> Result<Vec<ProbeResult>> {
    let InFlight {
        expected,
        mut results,
    } = in_flight;
    let mut collected = Vec::with_capacity(expected);

    while collected.len() < expected {
        match results.recv().await {
            Some(result) => {
                debug!("{} was fetched", result.url);
                if let Some(failure) = result.failure() {
                    debug!("with an error: {}", failure);
                }
                collected.push(result);
            }
            // Every sender is gone but some results never came (a task
            // panicked before publishing)
            None => {
                return Err(Error::Incomplete {
                    expected,
                    received: collected.len(),
                })
            }
        }
    }

    Ok(collected)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is an mpsc channel?
//    - "multi-producer, single-consumer": many senders, one receiver
//    - Every probe task gets a clone of the sender (tx)
//    - The collector owns the only receiver (rx)
//    - It's the ONLY state the tasks share, so no Mutex is needed
//
// 2. Why unbounded?
//    - A bounded channel can make send() wait when it's full
//    - Ours holds at most one message per URL, and the collector keeps
//      draining, so there's nothing to gain from a bound
//
// 3. What does tokio::spawn do?
//    - Starts a task that runs on the runtime's thread pool
//    - It runs in parallel with everything else; we never join it directly,
//      we just wait for its message on the channel
//
// 4. What is a Semaphore?
//    - A counter of "permits"; acquire() waits until one is free
//    - The permit is released when _permit is dropped at the end of the task
//    - With Semaphore::new(4), at most 4 probes run at the same time
// -----------------------------------------------------------------------------
