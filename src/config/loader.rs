// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_DATA, DEFAULT_REPORTS};
use crate::errors::ConfigError;
use crate::model::{DataProcessor, ReportType};
use crate::observability::messages::config::{ConfigLoaded, ValidationFailed};
use crate::observability::messages::report::UnknownReportSelector;
use crate::observability::messages::StructuredLog;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Run configuration for the report demo.
///
/// Lists the raw data items to accumulate and the reports to render from
/// them, in order. Report names are kept as written: a name that is not one
/// of `PDF`, `CSV` or `TEXT` is not an error and renders as a text report.
///
/// # Fields
/// * `data` - Raw items, appended to the accumulator in order (defaults to empty)
/// * `reports` - Report selectors to render (defaults to PDF, CSV, TEXT)
///
/// # Example
/// ```yaml
/// data:
///   - "Sales Data: Q1"
///   - "Revenue: $50000"
/// reports: [PDF, CSV]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: Vec<String>,
    #[serde(default = "default_reports")]
    pub reports: Vec<String>,
}

fn default_reports() -> Vec<String> {
    DEFAULT_REPORTS.iter().map(|r| r.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DEFAULT_DATA.iter().map(|d| d.to_string()).collect(),
            reports: default_reports(),
        }
    }
}

impl Config {
    /// Resolve every report selector, warning about the ones that fall back to TEXT.
    pub fn report_types(&self) -> Vec<ReportType> {
        self.reports
            .iter()
            .map(|selector| {
                selector.parse::<ReportType>().unwrap_or_else(|unknown| {
                    UnknownReportSelector {
                        selector: &unknown.selector,
                    }
                    .log();
                    ReportType::Text
                })
            })
            .collect()
    }

    /// A fresh accumulator holding the configured items.
    pub fn data_processor(&self) -> DataProcessor {
        self.data.iter().cloned().collect()
    }
}

/// Supported config file encodings, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<ConfigFormat> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// Load a config from a YAML or TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: display.clone(),
    })?;

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: display.clone(),
        source,
    })?;

    let cfg: Config = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: display.clone(),
            source,
        })?,
        ConfigFormat::Toml => toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: display.clone(),
            source,
        })?,
    };

    ConfigLoaded {
        path: &display,
        item_count: cfg.data.len(),
        report_count: cfg.reports.len(),
    }
    .log();

    Ok(cfg)
}

/// Load and validate a config file
///
/// Every validation error is collected and returned together.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;

    if let Err(validation_errors) = crate::config::validate_config(&cfg) {
        ValidationFailed {
            error_count: validation_errors.len(),
        }
        .log();
        return Err(ConfigError::Validation(validation_errors));
    }

    Ok(cfg)
}
