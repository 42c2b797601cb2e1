// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde_json::json;
use tally::models::{NewTransaction, TransactionType};
use tally::store::Store;
use tally::{cli, commands::exporter};
use tempfile::tempdir;

fn store() -> Store {
    let mut store = Store::default();
    let mut t = NewTransaction::new(
        TransactionType::Expense,
        "12.34".parse().unwrap(),
        "Corner Shop",
        "Food & Dining",
        NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
    );
    t.notes = Some("Weekly run".into());
    store.add_transaction(t, Utc::now());
    store
}

fn run(store: &Store, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["tally", "export"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(store, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_csv_writes_quoted_rows() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("out.csv");
    let out_str = out_path.to_string_lossy().to_string();
    run(&store(), &["csv", "--out", &out_str]).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        contents,
        "Date,Type,Amount,Description,Category,Subcategory,Payment Method,Tags,Notes\n\
         2025-01-02,expense,12.34,\"Corner Shop\",\"Food & Dining\",\"\",\"\",\"\",\"Weekly run\""
    );
}

#[test]
fn export_transactions_streams_pretty_json() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();
    let store = store();
    run(&store, &["json", "--out", &out_str]).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let tx = &store.transactions[0];
    assert_eq!(
        parsed,
        json!([
            {
                "id": tx.id,
                "type": "expense",
                "amount": "12.34",
                "description": "Corner Shop",
                "category_name": "Food & Dining",
                "date": "2025-01-02",
                "recurring": false,
                "notes": "Weekly run",
                "created_at": serde_json::to_value(tx.created_at).unwrap(),
                "updated_at": serde_json::to_value(tx.updated_at).unwrap()
            }
        ])
    );
    assert_eq!(tx.amount, "12.34".parse::<Decimal>().unwrap());
}
