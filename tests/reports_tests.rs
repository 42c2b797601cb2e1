// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Local, Utc};
use rust_decimal::Decimal;
use std::process::Command;
use tally::models::{NewTransaction, TransactionType};
use tally::store::Store;
use tally::{cli, commands::reports};
use tempfile::tempdir;

fn store() -> Store {
    let mut store = Store::default();
    let today = Local::now().date_naive();
    for (kind, amount, category) in [
        (TransactionType::Expense, 40, "Food & Dining"),
        (TransactionType::Expense, 25, "Mystery"),
        (TransactionType::Revenue, 500, "Salary"),
    ] {
        store.add_transaction(
            NewTransaction::new(kind, Decimal::from(amount), "item", category, today),
            Utc::now(),
        );
    }
    store
}

fn run(store: &Store, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["tally", "report"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("report", report_m)) = matches.subcommand() {
        reports::handle(store, report_m)
    } else {
        panic!("no report subcommand");
    }
}

#[test]
fn summary_renders_tables_and_json() {
    let store = store();
    run(&store, &["summary"]).unwrap();
    run(&store, &["summary", "--json"]).unwrap();
    run(&store, &["summary", "--jsonl"]).unwrap();
}

#[test]
fn colored_summary_uses_camel_case_keys() {
    let value = serde_json::to_value(reports::colored_summary(&store())).unwrap();
    let obj = value.as_object().unwrap();
    for key in [
        "totalExpenses",
        "totalRevenue",
        "profit",
        "avgMonthlyExpenses",
        "avgMonthlyRevenue",
        "topExpenseCategories",
        "topRevenueCategories",
        "monthlyTrends",
    ] {
        assert!(obj.contains_key(key), "missing {}", key);
    }
    assert_eq!(value["monthlyTrends"].as_array().unwrap().len(), 12);
    assert_eq!(value["topExpenseCategories"][0]["name"], "Food & Dining");
    assert_eq!(value["topExpenseCategories"][0]["color"], "#ef4444");
    assert!(value["topExpenseCategories"][1]["color"].is_string());
}

#[test]
fn report_summary_json_from_binary() {
    let dir = tempdir().unwrap();
    let data_dir = dir.path().to_string_lossy().to_string();
    let bin = env!("CARGO_BIN_EXE_tally");

    let added = Command::new(bin)
        .args(["--data-dir", &data_dir, "tx", "add", "--type", "revenue"])
        .args(["--amount", "1200", "--description", "Invoice"])
        .args(["--category", "Freelance"])
        .output()
        .unwrap();
    assert!(added.status.success());

    let out = Command::new(bin)
        .args(["--data-dir", &data_dir, "report", "summary", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["totalRevenue"], "1200");
    assert_eq!(value["monthlyTrends"].as_array().unwrap().len(), 12);
    assert_eq!(value["monthlyTrends"][11]["revenue"], "1200");
    assert!(value.get("total_revenue").is_none());
}
