// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// A single report rendering behaviour.
///
/// Implementations receive items that are already normalized (trimmed and
/// uppercased) and must not normalize them again.
pub trait ReportFormatter: Send + Sync {
    fn format(&self, items: &[String]) -> String;

    fn name(&self) -> &'static str;
}
