// src/output.rs
// =============================================================================
// Prints a Report, either as colored lines or as JSON.
//
// Text layout:
//   [200] https://www.rust-lang.org
//   [404] http://example.org/gone
//   [ERROR] http://down.test
//   3 URLs checked
//   Execution time: 1.02s
//   Total errors: 2
//   Total OK: 1
//   Some errors were found (Please check for false positives):
//   - [http://example.org/gone] Error:
//    HTTP 404
//   ...
//
// Everything is written to a generic `impl Write` so tests can capture it.
// =============================================================================

use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use crate::checker::{ProbeOutcome, ProbeResult, Report};

// Prints the report to stdout in the chosen format
pub fn print_report(report: &Report, json: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        write_json(&mut out, report)
    } else {
        write_text(&mut out, report)
    }
}

fn write_json(out: &mut impl Write, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

fn write_text(out: &mut impl Write, report: &Report) -> Result<()> {
    // One line per URL, in the order the results came in
    for result in &report.results {
        writeln!(out, "[{}] {}", format_status(result), result.url)?;
    }

    writeln!(out, "{} URLs checked", report.total.to_string().green())?;
    writeln!(out, "Execution time: {}", format!("{:.2?}", report.elapsed).green())?;
    writeln!(out, "Total errors: {}", report.error_count.to_string().red())?;
    writeln!(out, "Total OK: {}", report.ok_count.to_string().green())?;

    if !report.errors.is_empty() {
        writeln!(
            out,
            "{}",
            "Some errors were found (Please check for false positives):".red()
        )?;
        for result in &report.errors {
            writeln!(
                out,
                "- [{}] Error: \n {}",
                result.url.as_str().yellow(),
                describe(result).red()
            )?;
        }
    }

    Ok(())
}

// The bracketed status: green for 2xx, red for other codes, red ERROR for
// transport failures
fn format_status(result: &ProbeResult) -> String {
    match result.outcome {
        ProbeOutcome::Status { code } if (200..=299).contains(&code) => {
            code.to_string().green().to_string()
        }
        ProbeOutcome::Status { code } => code.to_string().red().to_string(),
        ProbeOutcome::Failed(_) => "ERROR".red().to_string(),
    }
}

// What went wrong, for the error list at the end
fn describe(result: &ProbeResult) -> String {
    match &result.outcome {
        ProbeOutcome::Status { code } => format!("HTTP {}", code),
        ProbeOutcome::Failed(failure) => failure.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::http::{FailureKind, ProbeFailure};
    use crate::checker::normalize::normalize;
    use std::time::Duration;

    fn result(raw: &str, outcome: ProbeOutcome) -> ProbeResult {
        ProbeResult {
            url: normalize(raw.as_bytes()).unwrap(),
            outcome,
            elapsed: Duration::from_millis(10),
        }
    }

    fn sample_report() -> Report {
        Report::new(
            vec![
                result("https://www.rust-lang.org", ProbeOutcome::Status { code: 200 }),
                result("example.org/gone", ProbeOutcome::Status { code: 404 }),
                result(
                    "http://down.test",
                    ProbeOutcome::Failed(ProbeFailure {
                        kind: FailureKind::Dns,
                        message: "dns error".to_string(),
                    }),
                ),
            ],
            Duration::from_millis(1200),
        )
    }

    fn render(report: &Report, json: bool) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        if json {
            write_json(&mut buf, report).unwrap();
        } else {
            write_text(&mut buf, report).unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_output() {
        let text = render(&sample_report(), false);

        assert!(text.contains("[200] https://www.rust-lang.org\n"));
        assert!(text.contains("[404] http://example.org/gone\n"));
        assert!(text.contains("[ERROR] http://down.test\n"));
        assert!(text.contains("3 URLs checked\n"));
        assert!(text.contains("Total errors: 2\n"));
        assert!(text.contains("Total OK: 1\n"));
        assert!(text.contains("Some errors were found"));
        assert!(text.contains("- [http://example.org/gone] Error: \n HTTP 404\n"));
        assert!(text.contains("- [http://down.test] Error: \n dns error\n"));
    }

    #[test]
    fn test_no_error_section_when_all_ok() {
        let report = Report::new(
            vec![result("https://a.test", ProbeOutcome::Status { code: 200 })],
            Duration::ZERO,
        );
        let text = render(&report, false);

        assert!(!text.contains("Some errors were found"));
    }

    #[test]
    fn test_json_output() {
        let text = render(&sample_report(), true);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["total"], 3);
        assert_eq!(value["ok_count"], 1);
        assert_eq!(value["errors"][1]["url"], "http://down.test");
        assert_eq!(value["errors"][1]["kind"], "dns");
    }
}
