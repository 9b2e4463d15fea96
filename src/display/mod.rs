//! Terminal rendering of check results.

pub mod global;

use std::fmt::Write;
use std::str::FromStr;

use serde::Serialize;
use unicode_truncate::UnicodeTruncateStr;

use crate::http_probe::result::{CheckResult, Status};
use global::{RegionVerdict, simulate_global_check};

const LABEL_WIDTH: usize = 10;
const REGION_WIDTH: usize = 18;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

pub fn to_fixed_width(input: &str, width: usize) -> String {
    let (truncated, _) = input.unicode_truncate(width);
    format!("{:<width$}", truncated, width = width)
}

fn indicator(status: Status) -> &'static str {
    match status {
        Status::Up => "✅ UP",
        Status::Down => "❌ DOWN",
        Status::Error => "⚠️  ERROR",
    }
}

fn region_mark(status: Status) -> &'static str {
    match status {
        Status::Up => "✓ UP",
        Status::Down => "✗ DOWN",
        Status::Error => "? ERROR",
    }
}

/// The result card followed by the simulated global check.
/// The global check is left out when `regions` is empty.
pub fn render_human(result: &CheckResult, regions: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", indicator(result.status));
    let _ = writeln!(out, "{}{}", to_fixed_width("URL:", LABEL_WIDTH), result.url);
    let _ = writeln!(out, "{}{}", to_fixed_width("Status:", LABEL_WIDTH), result.status_line());
    let _ = writeln!(
        out,
        "{}{} ms",
        to_fixed_width("Response:", LABEL_WIDTH),
        result.response_time_ms
    );

    let verdicts = simulate_global_check(result, regions);
    if !verdicts.is_empty() {
        let region_width = verdicts
            .iter()
            .map(|v| v.location.chars().count() + 2)
            .max()
            .unwrap_or(REGION_WIDTH)
            .max(REGION_WIDTH);

        let _ = writeln!(out, "\nSimulated Global Check");
        for RegionVerdict { location, status } in &verdicts {
            let _ = writeln!(
                out,
                "  {}{}",
                to_fixed_width(location, region_width),
                region_mark(*status)
            );
        }
    }

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a CheckResult,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    regions: Vec<RegionVerdict>,
}

pub fn render_json(result: &CheckResult, regions: &[String]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        result,
        regions: simulate_global_check(result, regions),
    })
}

pub fn render(
    format: OutputFormat,
    result: &CheckResult,
    regions: &[String],
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Human => Ok(render_human(result, regions)),
        OutputFormat::Json => render_json(result, regions),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn down_503() -> CheckResult {
        CheckResult {
            url: "https://example.com/".to_string(),
            status: Status::Down,
            status_code: Some(503),
            status_text: Some("Service Unavailable".to_string()),
            response_time_ms: 87,
            checked_at: Utc::now(),
        }
    }

    fn regions() -> Vec<String> {
        vec!["London, UK".to_string(), "Tokyo, JP".to_string()]
    }

    #[test]
    fn test_fixed_width() {
        assert_eq!(to_fixed_width("abc", 5), "abc  ");
        assert_eq!(to_fixed_width("abcdef", 3), "abc");
    }

    #[test]
    fn test_human_card() {
        let out = render_human(&down_503(), &regions());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "❌ DOWN");
        assert_eq!(lines[1], "URL:      https://example.com/");
        assert_eq!(lines[2], "Status:   503 Service Unavailable");
        assert_eq!(lines[3], "Response: 87 ms");
        assert!(out.contains("Simulated Global Check"));
        assert!(out.contains("  London, UK        ✗ DOWN"));
        assert!(out.contains("  Tokyo, JP         ✗ DOWN"));
    }

    #[test]
    fn test_long_region_names_keep_a_gap() {
        let regions = vec![
            "London, UK".to_string(),
            "São Paulo, Brazil".to_string(),
            "Johannesburg, South Africa".to_string(),
        ];
        let out = render_human(&down_503(), &regions);
        assert!(out.contains("  Johannesburg, South Africa  ✗ DOWN"));
        assert!(out.contains("  São Paulo, Brazil           ✗ DOWN"));
        assert!(out.contains("  London, UK                  ✗ DOWN"));
    }

    #[test]
    fn test_human_without_code_or_regions() {
        let result = CheckResult::rejected("not a url");
        let out = render_human(&result, &[]);
        assert!(out.starts_with("⚠️  ERROR"));
        assert!(out.contains("Status:   N/A"));
        assert!(!out.contains("Simulated Global Check"));
    }

    #[test]
    fn test_json_report() {
        let out = render(OutputFormat::Json, &down_503(), &regions()).expect("json");
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(value["status"], "DOWN");
        assert_eq!(value["statusCode"], 503);
        assert_eq!(value["regions"][1]["location"], "Tokyo, JP");
        assert_eq!(value["regions"][1]["status"], "DOWN");

        let bare = render_json(&down_503(), &[]).expect("json");
        assert!(!bare.contains("regions"));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("human".parse::<OutputFormat>(), Ok(OutputFormat::Human));
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
