// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Report formatter implementations.
//!
//! Each formatter implements the `ReportFormatter` trait and renders an
//! ordered list of already-normalized items into one textual report format.
//! Formatters are stateless and are handed out by `FormatterFactory`:
//!
//! ```text
//! ReportType → FormatterFactory → Arc<dyn ReportFormatter> → ReportGenerator
//! ```
//!
//! # Available Formatters
//!
//! - **Text**: one item per line, each line newline-terminated
//! - **CSV**: items joined by commas, no trailing comma
//! - **PDF**: marked blocks with page breaks and an end marker
//!
//! # Example
//! ```rust
//! use report_forge::formatters::FormatterFactory;
//! use report_forge::model::ReportType;
//!
//! let formatter = FormatterFactory::create_formatter(ReportType::Csv);
//! let items = vec!["A".to_string(), "B".to_string()];
//! assert_eq!(formatter.format(&items), "A,B");
//! ```

pub mod csv;
pub mod factory;
pub mod pdf;
pub mod text;

pub use csv::CsvReportFormatter;
pub use factory::FormatterFactory;
pub use pdf::PdfReportFormatter;
pub use text::TextReportFormatter;
