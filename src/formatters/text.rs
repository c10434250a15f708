// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::ReportFormatter;

/// Plain text report: one item per line, every line newline-terminated.
pub struct TextReportFormatter;

impl TextReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format(&self, items: &[String]) -> String {
        let mut report = String::new();
        for item in items {
            report.push_str(item);
            report.push('\n');
        }
        report
    }

    fn name(&self) -> &'static str {
        "text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_formatter_terminates_every_line() {
        let items = vec!["SALES DATA: Q1".to_string(), "REVENUE: $50000".to_string()];
        let report = TextReportFormatter::new().format(&items);
        assert_eq!(report, "SALES DATA: Q1\nREVENUE: $50000\n");
    }

    #[test]
    fn test_text_formatter_empty_input() {
        assert_eq!(TextReportFormatter::new().format(&[]), "");
    }

    #[test]
    fn test_text_formatter_single_empty_item() {
        assert_eq!(TextReportFormatter::new().format(&[String::new()]), "\n");
    }

    #[test]
    fn test_text_formatter_does_not_normalize() {
        let items = vec!["  mixed Case  ".to_string()];
        assert_eq!(TextReportFormatter::new().format(&items), "  mixed Case  \n");
    }
}
