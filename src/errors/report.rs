// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// A string that does not name any report type.
///
/// Only returned by strict parsing (`str::parse::<ReportType>()`); report
/// generation itself treats unknown selectors as TEXT.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown report type '{selector}': expected one of PDF, CSV, TEXT")]
pub struct UnknownReportType {
    pub selector: String,
}
