// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Store;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Tally", "tally"));

pub const DATA_DIR_ENV: &str = "TALLY_DATA_DIR";
const DATA_FILE: &str = "tally.json";

/// `override_dir`, then `$TALLY_DATA_DIR`, then the platform data dir.
pub fn data_path(override_dir: Option<&Path>) -> Result<PathBuf> {
    let data_dir = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => ProjectDirs::from(APP.0, APP.1, APP.2)
                .context("Could not determine platform-specific data dir")?
                .data_dir()
                .to_path_buf(),
        },
    };
    fs::create_dir_all(&data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join(DATA_FILE))
}

/// A missing file is a fresh store with the built-in categories.
pub fn load(path: &Path) -> Result<Store> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no data file yet, starting empty");
        return Ok(Store::default());
    }
    let raw = fs::read_to_string(path).with_context(|| format!("Read {}", path.display()))?;
    let store: Store = serde_json::from_str(&raw)
        .with_context(|| format!("Parse data file {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        transactions = store.transactions.len(),
        categories = store.categories.len(),
        "loaded store"
    );
    Ok(store)
}

pub fn save(store: &Store, path: &Path) -> Result<()> {
    let raw = serde_json::to_string_pretty(store)?;
    fs::write(path, raw).with_context(|| format!("Write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "saved store");
    Ok(())
}

pub fn open_or_init(override_dir: Option<&Path>) -> Result<(Store, PathBuf)> {
    let path = data_path(override_dir)?;
    let store = load(&path)?;
    if !path.exists() {
        save(&store, &path)?;
    }
    Ok((store, path))
}
