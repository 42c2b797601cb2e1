// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Summary analytics derived from a transaction list.
//!
//! Everything here is recomputed from scratch on each call and depends only on
//! the transactions and the "today" date captured once at the start of
//! [`calculate_analytics`].

pub mod categories;
pub mod monthly;

pub use categories::{ChartData, TOP_CATEGORIES, sum_by_category, top_categories, with_colors};
pub use monthly::{MonthlyData, TREND_MONTHS, monthly_trends};

use crate::models::{Transaction, TransactionType};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_expenses: Decimal,
    pub total_revenue: Decimal,
    pub profit: Decimal,
    pub avg_monthly_expenses: Decimal,
    pub avg_monthly_revenue: Decimal,
    pub top_expense_categories: Vec<ChartData>,
    pub top_revenue_categories: Vec<ChartData>,
    pub monthly_trends: Vec<MonthlyData>,
}

/// Number of distinct `YYYY-MM` months in `transactions`, at least 1.
pub fn month_count(transactions: &[Transaction]) -> usize {
    let months: HashSet<String> = transactions
        .iter()
        .map(|t| t.date.format("%Y-%m").to_string())
        .collect();
    months.len().max(1)
}

fn total(transactions: &[Transaction], kind: TransactionType) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.r#type == kind)
        .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.amount))
}

pub fn calculate_analytics(transactions: &[Transaction]) -> Analytics {
    calculate_analytics_at(transactions, Local::now().date_naive())
}

pub fn calculate_analytics_at(transactions: &[Transaction], today: NaiveDate) -> Analytics {
    let total_expenses = total(transactions, TransactionType::Expense);
    let total_revenue = total(transactions, TransactionType::Revenue);
    let months = Decimal::from(month_count(transactions));

    let of_type = move |kind: TransactionType| {
        transactions
            .iter()
            .filter(move |t: &&Transaction| t.r#type == kind)
    };

    let analytics = Analytics {
        total_expenses,
        total_revenue,
        profit: total_revenue.saturating_sub(total_expenses),
        avg_monthly_expenses: total_expenses / months,
        avg_monthly_revenue: total_revenue / months,
        top_expense_categories: top_categories(of_type(TransactionType::Expense)),
        top_revenue_categories: top_categories(of_type(TransactionType::Revenue)),
        monthly_trends: monthly_trends(transactions, today),
    };
    tracing::debug!(
        transactions = transactions.len(),
        %today,
        "computed analytics"
    );
    analytics
}
