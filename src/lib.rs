// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod analytics;
pub mod cli;
pub mod codec;
pub mod commands;
pub mod db;
pub mod error;
pub mod filter;
pub mod models;
pub mod store;
pub mod utils;

pub use analytics::{Analytics, calculate_analytics, calculate_analytics_at};
pub use codec::{export_to_csv, import_csv, import_json};
pub use error::{Error, Result};
pub use filter::{Filter, filter_transactions, filter_transactions_at};
pub use store::Store;
pub use utils::{format_currency, format_date};
