use serde::Deserialize;

use crate::error::ConfigError;

/// Settings for the status checker.
/// Every field is optional in the YAML file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Upper bound for a single check, in milliseconds.
    pub timeout_ms: u64,

    /// The `User-Agent` header sent with every check.
    pub user_agent: String,

    /// How many redirects to follow before answering.
    /// With 0 (the default) a 3xx is the target's own answer and counts as UP.
    pub max_redirects: usize,

    /// Accept self-signed or expired certificates.
    pub accept_invalid_certs: bool,

    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub use_system_proxy: bool,

    /// Locations listed in the simulated global check.
    pub regions: Vec<String>,
}

pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_USER_AGENT: &str = concat!("downdetector/", env!("CARGO_PKG_VERSION"));

fn default_regions() -> Vec<String> {
    ["London, UK", "New York, USA", "Tokyo, JP", "Sydney, AU"]
        .iter()
        .map(|r| r.to_string())
        .collect()
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: 0,
            accept_invalid_certs: false,
            use_system_proxy: true,
            regions: default_regions(),
        }
    }
}

impl CheckerConfig {
    /// Reject settings that would make every check fail before it starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn test_default_regions() {
        let regions = default_regions();
        assert_eq!(
            regions,
            vec!["London, UK", "New York, USA", "Tokyo, JP", "Sydney, AU"]
        );
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: CheckerConfig = serde_yaml::from_str("{}").expect("Invalid YAML");
        assert_eq!(config, CheckerConfig::default());
        assert_eq!(config.timeout_ms, 5_000);
        assert_eq!(config.max_redirects, 0);
        assert!(config.use_system_proxy);
    }

    #[test]
    fn test_checker_config_deserialization() {
        let yaml = r#"
                    timeout_ms: 2500
                    user_agent: uptime-bot/2.0
                    max_redirects: 3
                    regions:
                        - Frankfurt, DE
                        - Sao Paulo, BR
                    "#;

        let config: CheckerConfig = serde_yaml::from_str(yaml).expect("Invalid YAML");
        assert_eq!(config.timeout_ms, 2500);
        assert_eq!(config.user_agent, "uptime-bot/2.0");
        assert_eq!(config.max_redirects, 3);
        assert_eq!(config.regions, vec!["Frankfurt, DE", "Sao Paulo, BR"]);
        // untouched fields keep their defaults
        assert!(!config.accept_invalid_certs);
        assert!(config.use_system_proxy);
    }

    #[test]
    fn test_validate_timeout() {
        assert!(CheckerConfig::default().validate().is_ok());

        let config: CheckerConfig = serde_yaml::from_str("timeout_ms: 0").expect("Invalid YAML");
        let err = config.validate().expect_err("zero timeout must be rejected");
        assert!(matches!(err, ConfigError::InvalidValue { key: "timeout_ms", .. }));
    }

    #[test]
    fn test_rejects_wrong_types() {
        let result: Result<CheckerConfig, _> = serde_yaml::from_str("timeout_ms: soon");
        assert!(result.is_err());
    }
}
