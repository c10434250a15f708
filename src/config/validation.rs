// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Run configuration validation.
//!
//! Checks that a configuration asks for something to render and that no
//! report is requested twice. All errors are accumulated so a user sees every
//! problem at once.
//!
//! Report names that do not match a known report type are deliberately NOT
//! validated here: report generation renders them as TEXT.

use std::collections::HashMap;
use crate::config::Config;
use crate::errors::ValidationError;

/// Validates a run configuration.
///
/// # Returns
///
/// * `Ok(())` - Configuration is ready to render
/// * `Err(Vec<ValidationError>)` - Every validation error found
///
/// # Examples
///
/// ```rust
/// use report_forge::config::{validate_config, Config};
/// use report_forge::errors::ValidationError;
///
/// let config = Config {
///     data: vec!["Revenue: $50000".to_string()],
///     reports: vec![],
/// };
///
/// let errors = validate_config(&config).unwrap_err();
/// assert_eq!(errors, vec![ValidationError::NoReportsRequested]);
/// ```
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.reports.is_empty() {
        errors.push(ValidationError::NoReportsRequested);
    }

    if let Err(duplicate_errors) = validate_unique_reports(config) {
        errors.extend(duplicate_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_unique_reports(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut errors = Vec::new();

    for (index, report) in config.reports.iter().enumerate() {
        match first_seen.get(report.as_str()) {
            Some(&first) => errors.push(ValidationError::DuplicateReport {
                report: report.clone(),
                first,
                duplicate: index,
            }),
            None => {
                first_seen.insert(report, index);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_reports(reports: &[&str]) -> Config {
        Config {
            data: vec!["item".to_string()],
            reports: reports.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_validate_config_table_driven() {
        struct TestCase {
            name: &'static str,
            reports: Vec<&'static str>,
            expected: Result<(), Vec<ValidationError>>,
        }

        let test_cases = vec![
            TestCase {
                name: "default reports",
                reports: vec!["PDF", "CSV", "TEXT"],
                expected: Ok(()),
            },
            TestCase {
                name: "unknown report names are allowed",
                reports: vec!["PDF", "XLSX"],
                expected: Ok(()),
            },
            TestCase {
                name: "empty report list",
                reports: vec![],
                expected: Err(vec![ValidationError::NoReportsRequested]),
            },
            TestCase {
                name: "duplicate report",
                reports: vec!["CSV", "PDF", "CSV"],
                expected: Err(vec![ValidationError::DuplicateReport {
                    report: "CSV".to_string(),
                    first: 0,
                    duplicate: 2,
                }]),
            },
            TestCase {
                name: "triple report reports each repeat",
                reports: vec!["TEXT", "TEXT", "TEXT"],
                expected: Err(vec![
                    ValidationError::DuplicateReport {
                        report: "TEXT".to_string(),
                        first: 0,
                        duplicate: 1,
                    },
                    ValidationError::DuplicateReport {
                        report: "TEXT".to_string(),
                        first: 0,
                        duplicate: 2,
                    },
                ]),
            },
            TestCase {
                name: "names differing in case are distinct",
                reports: vec!["CSV", "csv"],
                expected: Ok(()),
            },
        ];

        for case in test_cases {
            let config = config_with_reports(&case.reports);
            assert_eq!(
                validate_config(&config),
                case.expected,
                "Failed for case: {}",
                case.name
            );
        }
    }

    #[test]
    fn test_empty_data_is_valid() {
        let config = Config {
            data: vec![],
            reports: vec!["PDF".to_string()],
        };
        assert!(validate_config(&config).is_ok());
    }
}
