// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable text and
//! `StructuredLog` to emit itself at its own level with typed fields.
//!
//! # Organization
//!
//! * `config` - Configuration loading and validation events
//! * `report` - Report generation, formatter binding and data lifecycle events
//!
//! # Usage Pattern
//!
//! ```rust
//! use report_forge::model::ReportType;
//! use report_forge::observability::messages::report::FormatterRebound;
//! use report_forge::observability::messages::StructuredLog;
//!
//! let msg = FormatterRebound {
//!     from: ReportType::Pdf,
//!     to: ReportType::Csv,
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod config;
pub mod report;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
