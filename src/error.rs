use thiserror::Error;

/// Why a check did not end in an UP verdict.
///
/// None of these ever reach the caller of a check: the checker folds each one
/// into a [`Status`](crate::http_probe::result::Status) plus an optional status code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("malformed input {input:?}: {reason}")]
    MalformedInput { input: String, reason: String },

    #[error("upstream answered with {code}")]
    UpstreamStatus { code: u16 },

    #[error("upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    #[error("no answer after {0} ms")]
    Timeout(u64),
}

impl CheckError {
    /// The target gave no answer at all, as opposed to answering badly.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, CheckError::UpstreamUnreachable(_) | CheckError::Timeout(_))
    }
}

/// Failure reported by a [`Transport`](crate::http_probe::probe::Transport).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("invalid request target: {0}")]
    InvalidTarget(String),

    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid value {value:?} for {key}")]
    InvalidEnv { key: String, value: String },

    #[error("invalid {key} in config: {reason}")]
    InvalidValue { key: &'static str, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("enter a URL to check")]
    EmptyInput,

    #[error("a check is already in progress")]
    CheckInProgress,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_reasons() {
        assert!(CheckError::Timeout(5_000).is_unreachable());
        assert!(CheckError::UpstreamUnreachable("connection refused".into()).is_unreachable());
        assert!(!CheckError::UpstreamStatus { code: 503 }.is_unreachable());
        assert!(
            !CheckError::MalformedInput {
                input: "http://example.com/".into(),
                reason: "builder error".into(),
            }
            .is_unreachable()
        );
    }
}
