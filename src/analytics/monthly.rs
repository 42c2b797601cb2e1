// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TransactionType};
use crate::utils::month_end;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const TREND_MONTHS: u32 = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyData {
    pub month: String,
    pub expenses: Decimal,
    pub revenue: Decimal,
    pub profit: Decimal,
}

/// First and last day of the month `back` months before the month of `today`.
fn month_bounds(today: NaiveDate, back: u32) -> Option<(NaiveDate, NaiveDate)> {
    let idx = today.year() * 12 + today.month0() as i32 - back as i32;
    let (year, month) = (idx.div_euclid(12), idx.rem_euclid(12) as u32 + 1);
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = month_end(year, month).ok()?;
    Some((start, end))
}

fn bucket(transactions: &[Transaction], start: NaiveDate, end: NaiveDate) -> MonthlyData {
    let mut expenses = Decimal::ZERO;
    let mut revenue = Decimal::ZERO;
    for t in transactions.iter().filter(|t| t.date >= start && t.date <= end) {
        match t.r#type {
            TransactionType::Expense => expenses = expenses.saturating_add(t.amount),
            TransactionType::Revenue => revenue = revenue.saturating_add(t.amount),
        }
    }
    MonthlyData {
        month: start.format("%b %Y").to_string(),
        expenses,
        revenue,
        profit: revenue.saturating_sub(expenses),
    }
}

/// Trailing twelve calendar months ending with the month of `today`, oldest
/// first. Transactions outside the window do not appear in any bucket.
pub fn monthly_trends(transactions: &[Transaction], today: NaiveDate) -> Vec<MonthlyData> {
    (0..TREND_MONTHS)
        .rev()
        .filter_map(|back| month_bounds(today, back))
        .map(|(start, end)| bucket(transactions, start, end))
        .collect()
}
