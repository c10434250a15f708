// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Items loaded into the accumulator when no config file is given
pub const DEFAULT_DATA: [&str; 3] = ["Sales Data: Q1", "Revenue: $50000", "Expenses: $30000"];
/// Reports rendered by the refactored demo, in order
pub const DEFAULT_REPORTS: [&str; 3] = ["PDF", "CSV", "TEXT"];
/// Reports rendered by the legacy demo, in order
pub const LEGACY_REPORTS: [&str; 2] = ["PDF", "CSV"];
/// Line printed between two report sections
pub const SECTION_DIVIDER: &str = "\n---\n";
