// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Read the document, extract its URLs and check them all concurrently
// 3. Print the report
// 4. Exit with proper code (0 = all links OK, 1 = broken links, 2 = error)
//
// Rust concepts used:
// - async/await: Because we need to make many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - extraction, probing and classification
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - run configuration
mod error; // src/error.rs - errors that stop a run
mod logging; // src/logging.rs - env_logger setup
mod output; // src/output.rs - printing the report

use anyhow::Result;
use clap::Parser; // Parser trait enables the parse() method
use colored::Colorize;
use log::debug;

use checker::Dispatcher;
use cli::Cli;
use config::Config;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Unreadable file, no URLs, unparsable URL... print it and exit with code 2
            eprintln!("{}", e.to_string().red());
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = every link answered 2xx
//   Ok(1) = at least one link is broken
//   Err = the run couldn't complete
async fn run() -> Result<i32> {
    let config = Config::from_cli(Cli::parse());

    logging::init_logger(config.debug);
    if !config.color {
        colored::control::set_override(false);
    }
    debug!("Running with {:?}", config);

    let dispatcher = Dispatcher::new(config.probe)?;
    let report = checker::check_document(&config.document, &dispatcher).await?;

    output::print_report(&report, config.json)?;

    if report.is_success() {
        Ok(0) // Exit code 0 = all good
    } else {
        Ok(1) // Exit code 1 = broken links found
    }
}
