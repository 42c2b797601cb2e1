// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, Transaction, category_color};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const TOP_CATEGORIES: usize = 10;

const PALETTE: [&str; 8] = [
    "#ef4444", "#3b82f6", "#8b5cf6", "#ec4899", "#f59e0b", "#10b981", "#6366f1", "#14b8a6",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub name: String,
    pub value: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Sums amounts per raw `category_name`, in first-seen order. Names are not
/// trimmed or case folded.
pub fn sum_by_category<'a, I>(transactions: I) -> Vec<(String, Decimal)>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut sums: Vec<(String, Decimal)> = Vec::new();
    for t in transactions {
        match index.get(t.category_name.as_str()) {
            Some(&i) => sums[i].1 = sums[i].1.saturating_add(t.amount),
            None => {
                index.insert(t.category_name.as_str(), sums.len());
                sums.push((t.category_name.clone(), t.amount));
            }
        }
    }
    sums
}

/// Descending by value, ties in first-seen order, at most [`TOP_CATEGORIES`].
pub fn top_categories<'a, I>(transactions: I) -> Vec<ChartData>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut items = sum_by_category(transactions);
    // sort_by is stable
    items.sort_by(|a, b| b.1.cmp(&a.1));
    items
        .into_iter()
        .take(TOP_CATEGORIES)
        .map(|(name, value)| ChartData {
            name,
            value,
            color: None,
        })
        .collect()
}

/// Attaches the known category color, or a palette color by position when the
/// category no longer exists.
pub fn with_colors(entries: &[ChartData], categories: &[Category]) -> Vec<ChartData> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let color = if categories.iter().any(|c| c.name == e.name) {
                category_color(categories, &e.name)
            } else {
                PALETTE[i % PALETTE.len()]
            };
            ChartData {
                color: Some(color.to_string()),
                ..e.clone()
            }
        })
        .collect()
}
