// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error importing file, please check the format: {0}")]
    Import(String),

    #[error("Transaction '{0}' not found")]
    TransactionNotFound(String),

    #[error("Category '{0}' not found")]
    CategoryNotFound(String),

    #[error("Category '{name}' already exists for {kind}")]
    DuplicateCategory { name: String, kind: String },

    #[error("Cannot delete category '{0}' that has transactions, reassign them first")]
    CategoryInUse(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, Error>;
