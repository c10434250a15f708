// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors that can occur while validating a run configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The `reports` list is empty, so the run would print nothing
    #[error("No reports requested: 'reports' must list at least one report type")]
    NoReportsRequested,

    /// The same report selector appears more than once
    #[error("Report '{report}' is requested more than once (positions {first} and {duplicate})")]
    DuplicateReport {
        /// The repeated selector, as written in the config
        report: String,
        /// Index of the first occurrence
        first: usize,
        /// Index of the repeated occurrence
        duplicate: usize,
    },
}

/// Errors that can occur while loading a run configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config '{path}': {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse TOML config '{path}': {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unsupported config file '{path}': expected a .yaml, .yml or .toml extension")]
    UnsupportedFormat { path: String },

    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
