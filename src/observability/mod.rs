// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Message types follow a struct-based pattern with a `Display` implementation
//! so log text lives in one place instead of being scattered as literals
//! through the formatting and config code.
//!
//! Output goes through `tracing`; the binary installs a `tracing-subscriber`
//! formatter on stderr so report output on stdout is never interleaved with
//! log lines.

pub mod messages;

#[cfg(test)]
pub(crate) mod test_support;
