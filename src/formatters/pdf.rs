// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::ReportFormatter;

/// Prefix written before every item.
pub const PDF_ITEM_PREFIX: &str = "PDF-FORMAT: ";
/// Line written after every item.
pub const PDF_PAGE_BREAK: &str = "---PDF-PAGE-BREAK---";
/// Footer; always present, never followed by a newline.
pub const PDF_END_MARKER: &str = "===PDF-END===";

/// Pseudo-PDF report: one marked block per item and a closing footer.
pub struct PdfReportFormatter;

impl PdfReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for PdfReportFormatter {
    fn format(&self, items: &[String]) -> String {
        let mut report = String::new();
        for item in items {
            report.push_str(PDF_ITEM_PREFIX);
            report.push_str(item);
            report.push('\n');
            report.push_str(PDF_PAGE_BREAK);
            report.push('\n');
        }

        report.push_str(PDF_END_MARKER);
        report
    }

    fn name(&self) -> &'static str {
        "pdf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_formatter_empty_input_still_has_footer() {
        assert_eq!(PdfReportFormatter::new().format(&[]), "===PDF-END===");
    }

    #[test]
    fn test_pdf_formatter_single_empty_item() {
        assert_eq!(
            PdfReportFormatter::new().format(&[String::new()]),
            "PDF-FORMAT: \n---PDF-PAGE-BREAK---\n===PDF-END==="
        );
    }

    #[test]
    fn test_pdf_formatter_blocks_in_order() {
        let items = vec!["FIRST".to_string(), "SECOND".to_string()];
        assert_eq!(
            PdfReportFormatter::new().format(&items),
            "PDF-FORMAT: FIRST\n---PDF-PAGE-BREAK---\nPDF-FORMAT: SECOND\n---PDF-PAGE-BREAK---\n===PDF-END==="
        );
    }
}
