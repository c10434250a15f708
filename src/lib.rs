// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;        // run config + loader
pub mod demo;          // console demonstration
pub mod errors;        // error handling
pub mod formatters;    // report formatter strategies + factory
pub mod legacy;        // single-method generator kept for equivalence
pub mod model;         // report types, accumulator, generator
pub mod observability;
pub mod traits;        // unified abstractions
