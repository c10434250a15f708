// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Console demonstration of both generators.
//!
//! Each report is printed as a labelled section, and consecutive sections are
//! separated by a divider line:
//!
//! ```text
//! PDF Report:
//! <report>
//!
//! ---
//!
//! CSV Report:
//! <report>
//! ```
//!
//! Rendering returns a `String` so the binary and the tests share one code path.

use serde::Serialize;

use crate::config::consts::SECTION_DIVIDER;
use crate::legacy::LegacyReportGenerator;
use crate::model::{DataProcessor, ReportGenerator, ReportType};

/// One rendered report and the label it is printed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedReport {
    pub report_type: String,
    pub content: String,
}

/// Render each report type from the processor's live data.
pub fn collect_refactored(
    processor: &DataProcessor,
    report_types: &[ReportType],
) -> Vec<RenderedReport> {
    report_types
        .iter()
        .map(|report_type| RenderedReport {
            report_type: report_type.to_string(),
            content: ReportGenerator::new(*report_type, processor.data()).generate_report(),
        })
        .collect()
}

/// Render each raw selector with the legacy generator. The label is the
/// selector exactly as given.
pub fn collect_legacy<S: AsRef<str>>(
    processor: &DataProcessor,
    selectors: &[S],
) -> Vec<RenderedReport> {
    selectors
        .iter()
        .map(|selector| RenderedReport {
            report_type: selector.as_ref().to_string(),
            content: LegacyReportGenerator::new(selector.as_ref(), processor.data())
                .generate_report(),
        })
        .collect()
}

/// Lay reports out as labelled console sections.
pub fn render_sections(reports: &[RenderedReport]) -> String {
    let mut output = String::new();
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            output.push_str(SECTION_DIVIDER);
            output.push('\n');
        }
        output.push_str(&format!("{} Report:\n{}\n", report.report_type, report.content));
    }
    output
}

pub fn render_refactored(processor: &DataProcessor, report_types: &[ReportType]) -> String {
    render_sections(&collect_refactored(processor, report_types))
}

pub fn render_legacy<S: AsRef<str>>(processor: &DataProcessor, selectors: &[S]) -> String {
    render_sections(&collect_legacy(processor, selectors))
}

/// Pretty-printed JSON array of `{report_type, content}` objects.
pub fn render_json(reports: &[RenderedReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}
