// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::model::ReportType;
use crate::traits::ReportFormatter;
use super::{CsvReportFormatter, PdfReportFormatter, TextReportFormatter};

/// Factory for creating report formatter instances
pub struct FormatterFactory;

impl FormatterFactory {
    /// Create the formatter bound to a report type
    ///
    /// - `ReportType::Pdf` -> PdfReportFormatter
    /// - `ReportType::Csv` -> CsvReportFormatter
    /// - `ReportType::Text` -> TextReportFormatter
    pub fn create_formatter(report_type: ReportType) -> Arc<dyn ReportFormatter> {
        match report_type {
            ReportType::Pdf => Arc::new(PdfReportFormatter::new()),
            ReportType::Csv => Arc::new(CsvReportFormatter::new()),
            ReportType::Text => Arc::new(TextReportFormatter::new()),
        }
    }

    /// Create a formatter from a raw selector string
    ///
    /// Missing or unrecognized selectors get the text formatter.
    pub fn create_for_selector(selector: Option<&str>) -> Arc<dyn ReportFormatter> {
        Self::create_formatter(ReportType::resolve(selector))
    }

    /// List all available formatter names
    pub fn list_available_formatters() -> Vec<&'static str> {
        ReportType::ALL
            .iter()
            .map(|report_type| Self::create_formatter(*report_type).name())
            .collect()
    }

    /// Check if a formatter is available
    pub fn is_formatter_available(name: &str) -> bool {
        Self::list_available_formatters().contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<String> {
        vec!["A".to_string(), "B".to_string()]
    }

    #[test]
    fn test_create_formatter_per_report_type() {
        let test_cases = vec![
            (ReportType::Pdf, "pdf", "PDF-FORMAT: A\n---PDF-PAGE-BREAK---\nPDF-FORMAT: B\n---PDF-PAGE-BREAK---\n===PDF-END==="),
            (ReportType::Csv, "csv", "A,B"),
            (ReportType::Text, "text", "A\nB\n"),
        ];

        for (report_type, name, expected) in test_cases {
            let formatter = FormatterFactory::create_formatter(report_type);
            assert_eq!(formatter.name(), name, "Wrong formatter for {}", report_type);
            assert_eq!(formatter.format(&sample()), expected, "Wrong output for {}", report_type);
        }
    }

    #[test]
    fn test_create_for_selector_falls_back_to_text() {
        assert_eq!(FormatterFactory::create_for_selector(None).name(), "text");
        assert_eq!(FormatterFactory::create_for_selector(Some("DOCX")).name(), "text");
        assert_eq!(FormatterFactory::create_for_selector(Some("CSV")).name(), "csv");
    }

    #[test]
    fn test_list_available_formatters() {
        let formatters = FormatterFactory::list_available_formatters();
        assert_eq!(formatters, vec!["pdf", "csv", "text"]);
    }

    #[test]
    fn test_is_formatter_available() {
        assert!(FormatterFactory::is_formatter_available("pdf"));
        assert!(FormatterFactory::is_formatter_available("text"));
        assert!(!FormatterFactory::is_formatter_available("html"));
    }
}
