// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::codec::export_to_csv;
use crate::store::Store;
use crate::utils::export_filename;
use anyhow::{Context, Result, anyhow};
use chrono::Local;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("csv", sub)) => export_csv(store, sub),
        Some(("json", sub)) => export_json(store, sub),
        _ => Ok(()),
    }
}

fn export_csv(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let out = match sub.get_one::<String>("out") {
        Some(p) => p.trim().to_string(),
        None => export_filename(Local::now().date_naive()),
    };
    let text = export_to_csv(&store.transactions)?;
    std::fs::write(&out, text).with_context(|| format!("Write {}", out))?;
    tracing::info!(path = %out, count = store.transactions.len(), "exported CSV");
    println!("Exported {} transactions to {}", store.transactions.len(), out);
    Ok(())
}

fn export_json(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub
        .get_one::<String>("out")
        .map(|p| p.trim().to_string())
        .ok_or_else(|| anyhow!("--out is required"))?;
    std::fs::write(&out, serde_json::to_string_pretty(&store.transactions)?)
        .with_context(|| format!("Write {}", out))?;
    tracing::info!(path = %out, count = store.transactions.len(), "exported JSON");
    println!("Exported {} transactions to {}", store.transactions.len(), out);
    Ok(())
}
