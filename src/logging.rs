// src/logging.rs
// =============================================================================
// Sets up env_logger.
//
// - Default level is warn, so a normal run only prints the report
// - --debug turns on debug logs for this crate (each fetch, each result)
// - RUST_LOG still works for anything more specific
// =============================================================================

use log::LevelFilter;

pub fn init_logger(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    // Our own crate follows --debug; the HTTP stack stays quiet
    builder.filter_module("urlprobe", level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    // RUST_LOG, when set, has the final word
    builder.parse_default_env();

    // Only fails if a logger is already installed, which is fine to ignore
    let _ = builder.try_init();
}
