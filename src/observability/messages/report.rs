// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for report generation events.
//!
//! This module contains message types for logging events related to:
//! * Report rendering
//! * Formatter rebinding after a report type change
//! * Selector resolution fallbacks
//! * Data accumulator lifecycle

use crate::model::ReportType;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Report generation started; its span wraps the formatter call.
///
/// # Log Level
/// `debug!` - Routine per-call event
///
/// # Example
/// ```
/// use report_forge::model::ReportType;
/// use report_forge::observability::messages::report::ReportGenerationStarted;
/// use report_forge::observability::messages::StructuredLog;
///
/// let msg = ReportGenerationStarted {
///     report_type: ReportType::Pdf,
///     formatter: "pdf",
///     item_count: 3,
/// };
///
/// let span = msg.span("report_generation");
/// let _guard = span.enter();
/// msg.log();
/// ```
pub struct ReportGenerationStarted {
    pub report_type: ReportType,
    pub formatter: &'static str,
    pub item_count: usize,
}

impl Display for ReportGenerationStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Generating {} report from {} items with '{}' formatter",
            self.report_type, self.item_count, self.formatter
        )
    }
}

impl StructuredLog for ReportGenerationStarted {
    fn log(&self) {
        tracing::debug!(
            report_type = %self.report_type,
            formatter = self.formatter,
            item_count = self.item_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "span_name",
            name = name,
            report_type = %self.report_type,
            formatter = self.formatter,
            item_count = self.item_count,
        )
    }
}

/// A report was rendered.
///
/// # Log Level
/// `debug!` - Routine per-call event
///
/// # Example
/// ```
/// use report_forge::model::ReportType;
/// use report_forge::observability::messages::report::ReportGenerated;
///
/// let msg = ReportGenerated {
///     report_type: ReportType::Csv,
///     formatter: "csv",
///     item_count: 3,
///     output_size: 47,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ReportGenerated {
    pub report_type: ReportType,
    pub formatter: &'static str,
    pub item_count: usize,
    pub output_size: usize,
}

impl Display for ReportGenerated {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Generated {} report with '{}' formatter: items={}, output={} bytes",
            self.report_type, self.formatter, self.item_count, self.output_size
        )
    }
}

impl StructuredLog for ReportGenerated {
    fn log(&self) {
        tracing::debug!(
            report_type = %self.report_type,
            formatter = self.formatter,
            item_count = self.item_count,
            output_size = self.output_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "span_name",
            name = name,
            report_type = %self.report_type,
            formatter = self.formatter,
            item_count = self.item_count,
            output_size = self.output_size,
        )
    }
}

/// The report type changed and the formatter was rebound.
///
/// # Log Level
/// `debug!` - Routine state change
pub struct FormatterRebound {
    pub from: ReportType,
    pub to: ReportType,
}

impl Display for FormatterRebound {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Report type changed from {} to {}; formatter rebound",
            self.from, self.to
        )
    }
}

impl StructuredLog for FormatterRebound {
    fn log(&self) {
        tracing::debug!(
            from = %self.from,
            to = %self.to,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "span_name",
            name = name,
            from = %self.from,
            to = %self.to,
        )
    }
}

/// A selector string did not name a report type and fell back to TEXT.
///
/// # Log Level
/// `warn!` - Degraded behavior, output is still produced
///
/// # Example
/// ```
/// use report_forge::observability::messages::report::UnknownReportSelector;
///
/// let msg = UnknownReportSelector { selector: "XLSX" };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct UnknownReportSelector<'a> {
    pub selector: &'a str,
}

impl Display for UnknownReportSelector<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unknown report type '{}', falling back to TEXT",
            self.selector
        )
    }
}

impl StructuredLog for UnknownReportSelector<'_> {
    fn log(&self) {
        tracing::warn!(
            selector = self.selector,
            fallback = %ReportType::Text,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "span_name",
            name = name,
            selector = self.selector,
        )
    }
}

/// The data accumulator was cleared.
///
/// # Log Level
/// `debug!` - Routine state change
pub struct DataCleared {
    pub item_count: usize,
}

impl Display for DataCleared {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Cleared {} data items", self.item_count)
    }
}

impl StructuredLog for DataCleared {
    fn log(&self) {
        tracing::debug!(item_count = self.item_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "span_name",
            name = name,
            item_count = self.item_count,
        )
    }
}
