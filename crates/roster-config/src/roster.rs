//! Roster behaviour configuration.
//!
//! # Configuration
//!
//! - `ROSTER_OVERSIZED_GRADES`: `reject`, `truncate` or `discard` (default: `reject`)
//! - `ROSTER_REPORT_TARGET`: `stdout` or `log` (default: `stdout`)
//!
//! Unset or unparsable values fall back to the defaults.

use roster_core::GradePolicy;
use std::str::FromStr;

/// Where school reports are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportTarget {
    /// Plain lines on standard output.
    #[default]
    Stdout,
    /// One `info` tracing event per line.
    Log,
}

impl FromStr for ReportTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdout" => Ok(Self::Stdout),
            "log" => Ok(Self::Log),
            other => Err(format!("unknown report target '{}'", other)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterConfig {
    /// Applied when a student is created with more grades than can be stored.
    pub oversized_grades: GradePolicy,

    /// Destination of `School::generate_report` output in the CLI.
    pub report_target: ReportTarget,
}

impl RosterConfig {
    /// Creates a new `RosterConfig` from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            oversized_grades: lookup("ROSTER_OVERSIZED_GRADES")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            report_target: lookup("ROSTER_REPORT_TARGET")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn with_oversized_grades(mut self, policy: GradePolicy) -> Self {
        self.oversized_grades = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.oversized_grades, GradePolicy::Reject);
        assert_eq!(config.report_target, ReportTarget::Stdout);
    }

    #[test]
    fn test_config_from_lookup() {
        let config = RosterConfig::from_lookup(lookup_from(&[
            ("ROSTER_OVERSIZED_GRADES", "truncate"),
            ("ROSTER_REPORT_TARGET", "LOG"),
        ]));
        assert_eq!(config.oversized_grades, GradePolicy::Truncate);
        assert_eq!(config.report_target, ReportTarget::Log);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = RosterConfig::from_lookup(lookup_from(&[
            ("ROSTER_OVERSIZED_GRADES", "sometimes"),
            ("ROSTER_REPORT_TARGET", "printer"),
        ]));
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_with_oversized_grades() {
        let config = RosterConfig::default().with_oversized_grades(GradePolicy::Discard);
        assert_eq!(config.oversized_grades, GradePolicy::Discard);
    }
}
