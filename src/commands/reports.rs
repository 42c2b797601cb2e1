// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{Analytics, ChartData, with_colors};
use crate::store::Store;
use crate::utils::{format_currency, maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::Local;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        _ => {}
    }
    Ok(())
}

/// Analytics with chart colors attached to the top-category lists.
pub fn colored_summary(store: &Store) -> Analytics {
    let mut analytics = store.analytics(Local::now().date_naive());
    analytics.top_expense_categories =
        with_colors(&analytics.top_expense_categories, &store.categories);
    analytics.top_revenue_categories =
        with_colors(&analytics.top_revenue_categories, &store.categories);
    analytics
}

fn category_rows(items: &[ChartData]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|c| vec![c.name.clone(), format_currency(c.value)])
        .collect()
}

fn summary(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let a = colored_summary(store);
    if maybe_print_json(json_flag, jsonl_flag, &a)? {
        return Ok(());
    }

    let totals = vec![
        vec!["Total revenue".into(), format_currency(a.total_revenue)],
        vec!["Total expenses".into(), format_currency(a.total_expenses)],
        vec!["Profit".into(), format_currency(a.profit)],
        vec!["Avg monthly revenue".into(), format_currency(a.avg_monthly_revenue)],
        vec!["Avg monthly expenses".into(), format_currency(a.avg_monthly_expenses)],
    ];
    println!("{}", pretty_table(&["Summary", "Amount"], totals));
    println!(
        "{}",
        pretty_table(
            &["Top expense category", "Spent"],
            category_rows(&a.top_expense_categories)
        )
    );
    println!(
        "{}",
        pretty_table(
            &["Top revenue category", "Earned"],
            category_rows(&a.top_revenue_categories)
        )
    );
    let trend: Vec<Vec<String>> = a
        .monthly_trends
        .iter()
        .map(|m| {
            vec![
                m.month.clone(),
                format_currency(m.revenue),
                format_currency(m.expenses),
                format_currency(m.profit),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Month", "Revenue", "Expenses", "Profit"], trend)
    );
    Ok(())
}
