use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The three-way verdict for a checked URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Up,
    Down,
    Error,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Up => "UP",
            Status::Down => "DOWN",
            Status::Error => "ERROR",
        }
    }

    /// Process exit code for the CLI: 0 when up, 1 when down, 2 when the input was unusable.
    pub fn exit_code(&self) -> i32 {
        match self {
            Status::Up => 0,
            Status::Down => 1,
            Status::Error => 2,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one status check. Built once by the checker and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// Normalized target, or the trimmed input when it could not be normalized.
    pub url: String,
    pub status: Status,
    pub status_code: Option<u16>,
    /// Reason phrase for `status_code`, e.g. "Service Unavailable".
    pub status_text: Option<String>,
    #[serde(rename = "responseTime")]
    pub response_time_ms: u64,
    pub checked_at: DateTime<Utc>,
}

impl CheckResult {
    /// ERROR result for input that never became a request.
    pub fn rejected(input: &str) -> Self {
        Self {
            url: input.trim().to_string(),
            status: Status::Error,
            status_code: None,
            status_text: None,
            response_time_ms: 0,
            checked_at: Utc::now(),
        }
    }

    pub fn is_up(&self) -> bool {
        self.status == Status::Up
    }

    /// `"503 Service Unavailable"`, `"200"` for codes without a phrase, `"N/A"` without a code.
    pub fn status_line(&self) -> String {
        match (self.status_code, &self.status_text) {
            (Some(code), Some(text)) => format!("{code} {text}"),
            (Some(code), None) => code.to_string(),
            (None, _) => "N/A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(status: Status, code: Option<u16>, text: Option<&str>) -> CheckResult {
        CheckResult {
            url: "https://example.com/".to_string(),
            status,
            status_code: code,
            status_text: text.map(str::to_string),
            response_time_ms: 42,
            checked_at: Utc::now(),
        }
    }

    #[test]
    fn test_status_line() {
        assert_eq!(
            sample(Status::Down, Some(503), Some("Service Unavailable")).status_line(),
            "503 Service Unavailable"
        );
        assert_eq!(sample(Status::Down, Some(599), None).status_line(), "599");
        assert_eq!(sample(Status::Down, None, None).status_line(), "N/A");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample(Status::Up, Some(200), Some("OK")))
            .expect("result serializes");
        assert_eq!(json["url"], "https://example.com/");
        assert_eq!(json["status"], "UP");
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["statusText"], "OK");
        assert_eq!(json["responseTime"], 42);
        assert!(json.get("checkedAt").is_some());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Status::Up.exit_code(), 0);
        assert_eq!(Status::Down.exit_code(), 1);
        assert_eq!(Status::Error.exit_code(), 2);
        assert_eq!(Status::Error.to_string(), "ERROR");
    }
}
