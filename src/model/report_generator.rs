// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::Arc;

use crate::formatters::FormatterFactory;
use crate::model::{ReportType, SharedData};
use crate::observability::messages::report::{
    FormatterRebound, ReportGenerated, ReportGenerationStarted, UnknownReportSelector,
};
use crate::observability::messages::StructuredLog;
use crate::traits::ReportFormatter;

/// Normalize a raw item: trim, then uppercase.
///
/// Trimming strips every leading and trailing char at or below U+0020 (space,
/// tab, newline and the other ASCII control characters) and nothing else, so
/// U+00A0 and other Unicode spaces are kept.
///
/// Idempotent: normalizing an already-normalized item returns it unchanged.
pub fn normalize_item(raw: &str) -> String {
    raw.trim_matches(|c: char| c <= ' ').to_uppercase()
}

/// Renders a live data list in the format chosen by its report type.
///
/// The bound formatter always matches `report_type`: the only way to change
/// the type is `set_report_type`, which rebinds the formatter in the same call.
///
/// ```
/// use report_forge::model::{DataProcessor, ReportGenerator, ReportType};
///
/// let mut processor = DataProcessor::new();
/// processor.add_data(" Sales Data: Q1 ");
/// processor.add_data("Revenue: $50000");
///
/// let mut generator = ReportGenerator::new(ReportType::Csv, processor.data());
/// assert_eq!(generator.generate_report(), "SALES DATA: Q1,REVENUE: $50000");
///
/// generator.set_report_type(ReportType::Text);
/// assert_eq!(generator.generate_report(), "SALES DATA: Q1\nREVENUE: $50000\n");
/// ```
pub struct ReportGenerator {
    report_type: ReportType,
    raw_data: SharedData,
    formatter: Arc<dyn ReportFormatter>,
}

impl ReportGenerator {
    pub fn new(report_type: ReportType, raw_data: SharedData) -> Self {
        Self {
            report_type,
            raw_data,
            formatter: FormatterFactory::create_formatter(report_type),
        }
    }

    /// Build a generator from a raw selector string; unknown or missing
    /// selectors produce a text report.
    pub fn from_selector(selector: Option<&str>, raw_data: SharedData) -> Self {
        if let Some(unknown) = selector.filter(|s| ReportType::from_selector(s).is_none()) {
            UnknownReportSelector { selector: unknown }.log();
        }
        Self::new(ReportType::resolve(selector), raw_data)
    }

    /// Normalize the current items and hand them to the bound formatter.
    pub fn generate_report(&self) -> String {
        let processed = self.process_data();

        let start_msg = ReportGenerationStarted {
            report_type: self.report_type,
            formatter: self.formatter.name(),
            item_count: processed.len(),
        };
        let span = start_msg.span("report_generation");
        let _guard = span.enter();
        start_msg.log();

        let report = self.formatter.format(&processed);

        ReportGenerated {
            report_type: self.report_type,
            formatter: self.formatter.name(),
            item_count: processed.len(),
            output_size: report.len(),
        }
        .log();

        report
    }

    fn process_data(&self) -> Vec<String> {
        self.raw_data
            .borrow()
            .iter()
            .map(|item| normalize_item(item))
            .collect()
    }

    pub fn report_type(&self) -> ReportType {
        self.report_type
    }

    pub fn set_report_type(&mut self, report_type: ReportType) {
        FormatterRebound {
            from: self.report_type,
            to: report_type,
        }
        .log();
        self.report_type = report_type;
        self.formatter = FormatterFactory::create_formatter(report_type);
    }

    pub fn raw_data(&self) -> SharedData {
        self.raw_data.clone()
    }

    pub fn set_raw_data(&mut self, raw_data: SharedData) {
        self.raw_data = raw_data;
    }

    /// Name of the formatter currently bound.
    pub fn formatter_name(&self) -> &'static str {
        self.formatter.name()
    }
}

impl fmt::Debug for ReportGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportGenerator")
            .field("report_type", &self.report_type)
            .field("raw_data", &self.raw_data)
            .field("formatter", &self.formatter.name())
            .finish()
    }
}
