// src/config.rs
// =============================================================================
// Run configuration.
//
// Everything the engine needs is gathered here once, from the parsed CLI,
// and passed down explicitly. Nothing reads flags from global state.
// =============================================================================

use clap::ValueEnum;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;

/// Which HTTP method each probe uses. One method per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ProbeMethod {
    /// Headers only, no body download
    #[default]
    Head,
    /// Full request, for servers that mishandle HEAD
    Get,
}

/// Settings for the probing engine.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Per-request timeout; the only thing that bounds a probe's lifetime
    pub timeout: Duration,
    pub method: ProbeMethod,
    /// None = one concurrent task per URL with no cap
    pub max_in_flight: Option<usize>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(1),
            method: ProbeMethod::Head,
            max_in_flight: None,
        }
    }
}

/// Settings for a whole run: what to read, how to probe, how to print.
#[derive(Debug, Clone)]
pub struct Config {
    pub document: PathBuf,
    pub probe: ProbeConfig,
    pub debug: bool,
    pub json: bool,
    pub color: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            document: cli.file,
            probe: ProbeConfig {
                timeout: Duration::from_secs(cli.timeout),
                method: cli.method,
                max_in_flight: cli.max_in_flight.map(NonZeroUsize::get),
            },
            debug: cli.debug,
            json: cli.json,
            color: !cli.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_from_cli() {
        let cli = Cli::parse_from(["urlprobe", "README.md"]);
        let config = Config::from_cli(cli);

        assert_eq!(config.document, PathBuf::from("README.md"));
        assert_eq!(config.probe.timeout, Duration::from_secs(1));
        assert_eq!(config.probe.method, ProbeMethod::Head);
        assert_eq!(config.probe.max_in_flight, None);
        assert!(!config.debug);
        assert!(!config.json);
        assert!(config.color);
    }

    #[test]
    fn test_flags_from_cli() {
        let cli = Cli::parse_from([
            "urlprobe",
            "-d",
            "-t",
            "5",
            "--method",
            "get",
            "--max-in-flight",
            "8",
            "--json",
            "--no-color",
            "notes.txt",
        ]);
        let config = Config::from_cli(cli);

        assert_eq!(config.probe.timeout, Duration::from_secs(5));
        assert_eq!(config.probe.method, ProbeMethod::Get);
        assert_eq!(config.probe.max_in_flight, Some(8));
        assert!(config.debug);
        assert!(config.json);
        assert!(!config.color);
    }
}
