use std::time::Duration;

use reqwest::StatusCode;

use super::result::Status;
use crate::error::{CheckError, TransportError};

/// What happened to the single request of a check.
/// Timeouts from either the client or the checker's own bound arrive as
/// `Failed(TransportError::Timeout)`.
#[derive(Debug)]
pub enum Outcome {
    Reply(StatusCode),
    Failed(TransportError),
}

/// Verdict for an outcome, with the reason when the target is not UP.
#[derive(Debug, PartialEq)]
pub struct Verdict {
    pub status: Status,
    pub status_code: Option<u16>,
    pub status_text: Option<String>,
    pub reason: Option<CheckError>,
}

/// 2xx and 3xx are UP; every other received code is DOWN.
pub fn classify_status_code(code: u16) -> Status {
    match code {
        200..=399 => Status::Up,
        _ => Status::Down,
    }
}

/// `target` is the URL the request went to, `elapsed` the time from dispatch to `outcome`.
pub fn classify(target: &str, outcome: Outcome, elapsed: Duration) -> Verdict {
    match outcome {
        Outcome::Reply(code) => {
            let status = classify_status_code(code.as_u16());
            Verdict {
                status,
                status_code: Some(code.as_u16()),
                status_text: code.canonical_reason().map(str::to_string),
                reason: (status != Status::Up).then_some(CheckError::UpstreamStatus {
                    code: code.as_u16(),
                }),
            }
        }
        Outcome::Failed(TransportError::InvalidTarget(reason)) => no_answer(
            Status::Error,
            CheckError::MalformedInput {
                input: target.to_string(),
                reason,
            },
        ),
        Outcome::Failed(TransportError::Timeout) => no_answer(
            Status::Down,
            CheckError::Timeout(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)),
        ),
        Outcome::Failed(TransportError::Connect(reason) | TransportError::Other(reason)) => {
            no_answer(Status::Down, CheckError::UpstreamUnreachable(reason))
        }
    }
}

fn no_answer(status: Status, reason: CheckError) -> Verdict {
    Verdict {
        status,
        status_code: None,
        status_text: None,
        reason: Some(reason),
    }
}
