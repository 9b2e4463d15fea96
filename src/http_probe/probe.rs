use std::future::Future;
use std::time::Duration;

use chrono::Utc;
use reqwest::{Client, StatusCode};
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::prelude::*;
use crate::config::app_config::setup_client;
use crate::config::model::CheckerConfig;
use crate::error::{ConfigError, TransportError};

/// The answer to a dispatched request. Only the status line matters for a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
}

/// Sends the single request of a check.
pub trait Transport: Send + Sync {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<Reply, TransportError>> + Send;
}

/// [`Transport`] over a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &CheckerConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(setup_client(config)?))
    }
}

impl Transport for ReqwestTransport {
    async fn fetch(&self, url: &Url) -> Result<Reply, TransportError> {
        let response = self.client.get(url.clone()).send().await?;
        Ok(Reply {
            status: response.status(),
        })
    }
}

/// Checks URLs one request at a time and classifies the outcome.
/// Holds no state between checks apart from the transport's connection pool.
#[derive(Debug, Clone)]
pub struct StatusChecker<T = ReqwestTransport> {
    transport: T,
    timeout: Duration,
}

impl StatusChecker<ReqwestTransport> {
    pub fn from_config(config: &CheckerConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            ReqwestTransport::from_config(config)?,
            Duration::from_millis(config.timeout_ms),
        ))
    }
}

impl<T: Transport> StatusChecker<T> {
    pub fn new(transport: T, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Check `input` and return its verdict. Never fails: malformed input is an
    /// ERROR result, unreachable targets and timeouts are DOWN results.
    #[instrument(skip_all, fields(input = %input.trim()))]
    pub async fn check(&self, input: &str) -> CheckResult {
        let url = match normalize_url(input) {
            Ok(url) => url,
            Err(err) => {
                debug!("Rejected input: {err}");
                return CheckResult::rejected(input);
            }
        };

        let start = Instant::now();
        let fetched = match tokio::time::timeout(self.timeout, self.transport.fetch(&url)).await {
            Ok(fetched) => fetched,
            Err(_) => Err(TransportError::Timeout),
        };
        let elapsed = start.elapsed();

        let outcome = match fetched {
            Ok(reply) => Outcome::Reply(reply.status),
            Err(err) => Outcome::Failed(err),
        };
        let verdict = classify(url.as_str(), outcome, elapsed);
        let response_time_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

        match &verdict.reason {
            Some(reason) if reason.is_unreachable() => {
                warn!("{url} is {}: {reason}", verdict.status)
            }
            Some(reason) => info!("{url} is {}: {reason}", verdict.status),
            None => {}
        }
        debug!(
            "Checked {url}: {} {:?} in {response_time_ms}ms",
            verdict.status, verdict.status_code
        );

        CheckResult {
            url: url.to_string(),
            status: verdict.status,
            status_code: verdict.status_code,
            status_text: verdict.status_text,
            response_time_ms,
            checked_at: Utc::now(),
        }
    }
}

/// Check `input` with the default configuration.
/// A client that cannot be built is reported as an ERROR result.
pub async fn check_url_status(input: &str) -> CheckResult {
    match StatusChecker::from_config(&CheckerConfig::default()) {
        Ok(checker) => checker.check(input).await,
        Err(err) => {
            tracing::error!("Cannot create HTTP client: {err}");
            CheckResult::rejected(input)
        }
    }
}
