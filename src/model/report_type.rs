// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

use crate::errors::UnknownReportType;

/// The closed set of report formats.
///
/// `Text` is the default and the fallback for any selector that does not name
/// one of the variants exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportType {
    Pdf,
    Csv,
    #[default]
    Text,
}

impl ReportType {
    /// Every variant, in declaration order.
    pub const ALL: [ReportType; 3] = [ReportType::Pdf, ReportType::Csv, ReportType::Text];

    /// Selector string for this variant (`"PDF"`, `"CSV"`, `"TEXT"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Pdf => "PDF",
            ReportType::Csv => "CSV",
            ReportType::Text => "TEXT",
        }
    }

    /// Exact, case-sensitive match of a selector string.
    pub fn from_selector(selector: &str) -> Option<ReportType> {
        Self::ALL
            .into_iter()
            .find(|report_type| report_type.as_str() == selector)
    }

    /// Resolve an optional selector, falling back to `Text` when it is missing
    /// or unrecognized. Never fails.
    ///
    /// ```
    /// use report_forge::model::ReportType;
    ///
    /// assert_eq!(ReportType::resolve(Some("CSV")), ReportType::Csv);
    /// assert_eq!(ReportType::resolve(Some("csv")), ReportType::Text);
    /// assert_eq!(ReportType::resolve(None), ReportType::Text);
    /// ```
    pub fn resolve(selector: Option<&str>) -> ReportType {
        selector.and_then(Self::from_selector).unwrap_or_default()
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = UnknownReportType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_selector(s).ok_or_else(|| UnknownReportType {
            selector: s.to_string(),
        })
    }
}
