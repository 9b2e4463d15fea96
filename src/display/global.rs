use serde::Serialize;

use crate::http_probe::result::{CheckResult, Status};

/// One row of the simulated global check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionVerdict {
    pub location: String,
    pub status: Status,
}

/// Fan a single result out over `regions`.
/// Nothing is measured per region: every location reports the result's status.
pub fn simulate_global_check(result: &CheckResult, regions: &[String]) -> Vec<RegionVerdict> {
    regions
        .iter()
        .map(|location| RegionVerdict {
            location: location.clone(),
            status: result.status,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::config::model::CheckerConfig;

    fn result(status: Status) -> CheckResult {
        CheckResult {
            url: "https://example.com/".to_string(),
            status,
            status_code: None,
            status_text: None,
            response_time_ms: 10,
            checked_at: Utc::now(),
        }
    }

    #[test]
    fn test_every_region_mirrors_the_result() {
        let regions = CheckerConfig::default().regions;
        for status in [Status::Up, Status::Down, Status::Error] {
            let verdicts = simulate_global_check(&result(status), &regions);
            assert_eq!(verdicts.len(), 4);
            assert!(verdicts.iter().all(|v| v.status == status));
            assert_eq!(verdicts[0].location, "London, UK");
            assert_eq!(verdicts[3].location, "Sydney, AU");
        }
    }

    #[test]
    fn test_no_regions() {
        assert!(simulate_global_check(&result(Status::Up), &[]).is_empty());
    }
}
