// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::codec::{ImportedRecord, import_csv, import_json};
use crate::error::Error;
use crate::store::Store;
use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use std::path::Path;

/// Candidate rows from a `.csv` or `.json` file, chosen by extension.
pub fn read_candidates(path: &Path) -> Result<Vec<ImportedRecord>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Open {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let records = match ext.as_deref() {
        Some("csv") => import_csv(&content)?,
        Some("json") => import_json(&content)?,
        _ => {
            return Err(anyhow!(
                "Unsupported file '{}', expected .csv or .json",
                path.display()
            ));
        }
    };
    Ok(records)
}

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    let path = m
        .get_one::<String>("path")
        .map(|p| p.trim())
        .ok_or_else(|| anyhow!("--path is required"))?;
    let path = Path::new(path);
    let records = read_candidates(path)?;

    if m.get_flag("dry-run") {
        println!("Found {} transactions in {}", records.len(), path.display());
        return Ok(());
    }

    // all rows must convert, otherwise nothing is imported
    let mut items = Vec::with_capacity(records.len());
    for rec in &records {
        let mut tx = rec
            .to_new_transaction()
            .map_err(|e| Error::Import(e.to_string()))?;
        tx.category_id = store
            .category_by_name(&tx.category_name, Some(tx.r#type))
            .map(|c| c.id.clone());
        items.push(tx);
    }
    let imported = store.import_transactions(items, Utc::now());
    println!(
        "Imported {} transactions from {}",
        imported.len(),
        path.display()
    );
    Ok(())
}
