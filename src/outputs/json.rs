//! JSON output for the headline report.
//!
//! The report is pretty-printed with a four-space indent. Non-ASCII text
//! is written as UTF-8, not escaped.

use crate::models::HeadlineReport;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{error, info, instrument};

/// Render a report as indented JSON.
pub fn render_report(report: &HeadlineReport) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    report.serialize(&mut serializer)?;
    // serde_json only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write a report to `path`, or to stdout when no path is given.
///
/// A trailing newline is appended so the output ends cleanly in a terminal.
///
/// # Arguments
///
/// * `report` - Headlines per category
/// * `path` - Output file, or `None` for stdout
///
/// # Returns
///
/// `Ok(())` on success, or an error if serialization, directory creation or
/// writing fails.
///
/// # Output Path
///
/// Parent directories of `path` are created when missing.
#[instrument(level = "info", skip_all, fields(path = ?path))]
pub async fn write_report(report: &HeadlineReport, path: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let mut json = render_report(report)?;
    json.push('\n');

    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if let Err(e) = fs::create_dir_all(parent).await {
                    error!(dir = %parent.display(), error = %e, "Failed to create output dir");
                    return Err(e.into());
                }
            }
            fs::write(path, json).await?;
            info!(path = %path.display(), "Wrote JSON report");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(json.as_bytes()).await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryHeadlines, HeadlineLink};

    fn sample_report() -> HeadlineReport {
        let mut report = HeadlineReport::new();
        report.insert("style", CategoryHeadlines::Titles(vec!["Café culture".into()]));
        report.insert("business", CategoryHeadlines::Titles(vec![]));
        report
    }

    #[test]
    fn test_render_uses_four_space_indent() {
        let json = render_report(&sample_report()).unwrap();
        assert_eq!(json, "{\n    \"style\": [\n        \"Café culture\"\n    ],\n    \"business\": []\n}");
    }

    #[test]
    fn test_render_links() {
        let mut report = HeadlineReport::new();
        report.insert(
            "style",
            CategoryHeadlines::Links(vec![HeadlineLink {
                title: "T".into(),
                url: None,
            }]),
        );
        let json = render_report(&report).unwrap();
        assert_eq!(
            json,
            "{\n    \"style\": [\n        {\n            \"title\": \"T\",\n            \"url\": null\n        }\n    ]\n}"
        );
    }

    #[tokio::test]
    async fn test_write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");

        write_report(&sample_report(), Some(&path)).await.unwrap();

        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(written.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["style"][0], "Café culture");
    }
}
