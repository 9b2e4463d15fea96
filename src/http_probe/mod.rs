pub mod classify;
pub mod normalize;
pub mod probe;
pub mod result;

pub mod prelude {
    pub use super::classify::{Outcome, Verdict, classify};
    pub use super::normalize::normalize_url;
    pub use super::probe::{Reply, ReqwestTransport, StatusChecker, Transport, check_url_status};
    pub use super::result::{CheckResult, Status};
}

use std::fmt::Write;

use crate::error::TransportError;

fn report(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, ": {}", src);
        err = src;
    }
    s
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        // connect timeouts report both is_connect and is_timeout
        if err.is_timeout() {
            return TransportError::Timeout;
        }
        let detail = report(&err);
        if err.is_builder() {
            TransportError::InvalidTarget(detail)
        } else if err.is_connect() {
            TransportError::Connect(detail)
        } else {
            TransportError::Other(detail)
        }
    }
}
