// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// There's a single command: point it at a text file, and every URL in that
// file gets checked.
// =============================================================================

use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::config::ProbeMethod;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "urlprobe",
    version = "0.1.0",
    about = "Checks every URL found in a text file",
    long_about = "urlprobe extracts every URL-like string from a text document and checks them all \
                  concurrently. It exits non-zero if any link is broken, which makes it handy in CI \
                  to keep READMEs and docs honest."
)]
pub struct Cli {
    /// Text file to scan for URLs (README.md, CHANGELOG, notes...)
    ///
    /// This is a positional argument (required, no flag needed)
    pub file: PathBuf,

    /// Print debug logs (every fetch and every result as it arrives)
    #[arg(short, long)]
    pub debug: bool,

    /// HTTP request timeout, in seconds, for each URL
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// HTTP method used for every probe
    #[arg(long, value_enum, default_value_t = ProbeMethod::Head)]
    pub method: ProbeMethod,

    /// Limit how many requests run at once (default: no limit)
    #[arg(long)]
    pub max_in_flight: Option<NonZeroUsize>,

    /// Output results in JSON format instead of colored lines
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_file_is_required() {
        assert!(Cli::try_parse_from(["urlprobe"]).is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["urlprobe", "-t", "0", "README.md"]).is_err());
    }

    #[test]
    fn test_zero_max_in_flight_is_rejected() {
        assert!(Cli::try_parse_from(["urlprobe", "--max-in-flight", "0", "README.md"]).is_err());
    }
}
