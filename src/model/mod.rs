// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod data_processor;
mod report_generator;
mod report_type;
mod shared_data;

pub use data_processor::DataProcessor;
pub use report_generator::{normalize_item, ReportGenerator};
pub use report_type::ReportType;
pub use shared_data::SharedData;
