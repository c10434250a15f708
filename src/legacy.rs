// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The single-method report generator that `ReportGenerator` replaces.
//!
//! Kept as a behavioural reference: for every selector, including unknown
//! ones, its output is byte-identical to `ReportGenerator::from_selector`.
//! Formatting is chosen by comparing the selector string inline, once per
//! item and once more for the footer.

use crate::formatters::pdf::{PDF_END_MARKER, PDF_ITEM_PREFIX, PDF_PAGE_BREAK};
use crate::model::{normalize_item, SharedData};

#[derive(Debug, Clone)]
pub struct LegacyReportGenerator {
    /// Raw selector; anything other than `"PDF"` or `"CSV"` renders as text.
    pub report_type: String,
    raw_data: SharedData,
}

impl LegacyReportGenerator {
    pub fn new(report_type: impl Into<String>, raw_data: SharedData) -> Self {
        Self {
            report_type: report_type.into(),
            raw_data,
        }
    }

    pub fn generate_report(&self) -> String {
        let mut report = String::new();

        for data in self.raw_data.borrow().iter() {
            let processed = normalize_item(data);

            if self.report_type == "PDF" {
                report.push_str(PDF_ITEM_PREFIX);
                report.push_str(&processed);
                report.push('\n');
                report.push_str(PDF_PAGE_BREAK);
                report.push('\n');
            } else if self.report_type == "CSV" {
                report.push_str(&processed);
                report.push(',');
            } else {
                report.push_str(&processed);
                report.push('\n');
            }
        }

        if self.report_type == "PDF" {
            report.push_str(PDF_END_MARKER);
        } else if self.report_type == "CSV" && report.ends_with(',') {
            report.pop();
        }

        report
    }

    pub fn report_type(&self) -> &str {
        &self.report_type
    }
}
