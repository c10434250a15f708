// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::model::SharedData;
use crate::observability::messages::report::DataCleared;
use crate::observability::messages::StructuredLog;

/// Ordered accumulator of raw report items.
///
/// Pure data holder: no validation, no normalization. `data()` hands out the
/// live list, not a copy.
#[derive(Debug, Default)]
pub struct DataProcessor {
    data: SharedData,
}

impl DataProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item. Always succeeds, including for empty strings.
    pub fn add_data(&mut self, item: impl Into<String>) {
        self.data.push(item);
    }

    pub fn data(&self) -> SharedData {
        self.data.clone()
    }

    pub fn clear_data(&mut self) {
        DataCleared {
            item_count: self.data.len(),
        }
        .log();
        self.data.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for DataProcessor {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}
