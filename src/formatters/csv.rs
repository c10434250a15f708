// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::ReportFormatter;

/// Comma-joined report with no trailing comma.
///
/// Each item is appended followed by a comma, then exactly one trailing comma
/// is removed from the assembled string. The strip is positional: a comma that
/// belongs to the last item itself is never removed.
pub struct CsvReportFormatter;

impl CsvReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvReportFormatter {
    fn format(&self, items: &[String]) -> String {
        let mut report = String::new();
        for item in items {
            report.push_str(item);
            report.push(',');
        }

        if report.ends_with(',') {
            report.pop();
        }

        report
    }

    fn name(&self) -> &'static str {
        "csv"
    }
}
