// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tally::analytics::{calculate_analytics_at, month_count, top_categories, with_colors};
use tally::models::{NewTransaction, Transaction, TransactionType, default_categories};
use tally::store::Store;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn item(kind: TransactionType, amount: i64, category: &str, date: &str) -> NewTransaction {
    NewTransaction::new(kind, Decimal::from(amount), "item", category, d(date))
}

fn txs(items: Vec<NewTransaction>) -> Vec<Transaction> {
    let mut store = Store::default();
    store.import_transactions(items, Utc::now())
}

fn example() -> Vec<Transaction> {
    txs(vec![
        item(TransactionType::Expense, 100, "Food", "2025-06-02"),
        item(TransactionType::Expense, 50, "Food", "2025-06-10"),
        item(TransactionType::Revenue, 200, "Salary", "2025-06-01"),
    ])
}

#[test]
fn single_month_example() {
    let a = calculate_analytics_at(&example(), d("2025-06-15"));
    assert_eq!(a.total_expenses, Decimal::from(150));
    assert_eq!(a.total_revenue, Decimal::from(200));
    assert_eq!(a.profit, Decimal::from(50));
    assert_eq!(a.avg_monthly_expenses, Decimal::from(150));
    assert_eq!(a.avg_monthly_revenue, Decimal::from(200));
    assert_eq!(a.top_expense_categories.len(), 1);
    assert_eq!(a.top_expense_categories[0].name, "Food");
    assert_eq!(a.top_expense_categories[0].value, Decimal::from(150));
    assert_eq!(a.top_revenue_categories[0].name, "Salary");

    let last = a.monthly_trends.last().unwrap();
    assert_eq!(last.month, "Jun 2025");
    assert_eq!(last.expenses, Decimal::from(150));
    assert_eq!(last.revenue, Decimal::from(200));
    assert_eq!(last.profit, Decimal::from(50));
}

#[test]
fn empty_input_still_has_twelve_zero_buckets() {
    let a = calculate_analytics_at(&[], d("2025-06-15"));
    assert_eq!(a.total_expenses, Decimal::ZERO);
    assert_eq!(a.total_revenue, Decimal::ZERO);
    assert_eq!(a.profit, Decimal::ZERO);
    assert_eq!(a.avg_monthly_expenses, Decimal::ZERO);
    assert_eq!(a.avg_monthly_revenue, Decimal::ZERO);
    assert!(a.top_expense_categories.is_empty());
    assert!(a.top_revenue_categories.is_empty());
    assert_eq!(a.monthly_trends.len(), 12);
    for m in &a.monthly_trends {
        assert_eq!(m.expenses, Decimal::ZERO);
        assert_eq!(m.revenue, Decimal::ZERO);
        assert_eq!(m.profit, Decimal::ZERO);
    }
}

#[test]
fn trend_window_is_anchored_to_today_oldest_first() {
    let a = calculate_analytics_at(&example(), d("2025-06-15"));
    let labels: Vec<&str> = a.monthly_trends.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Jul 2024", "Aug 2024", "Sep 2024", "Oct 2024", "Nov 2024", "Dec 2024", "Jan 2025",
            "Feb 2025", "Mar 2025", "Apr 2025", "May 2025", "Jun 2025",
        ]
    );
}

#[test]
fn trend_window_crosses_year_boundary() {
    let a = calculate_analytics_at(&[], d("2025-01-31"));
    assert_eq!(a.monthly_trends.first().unwrap().month, "Feb 2024");
    assert_eq!(a.monthly_trends.last().unwrap().month, "Jan 2025");
}

#[test]
fn month_bounds_are_inclusive() {
    let list = txs(vec![
        item(TransactionType::Expense, 10, "Rent", "2024-02-01"),
        item(TransactionType::Expense, 20, "Rent", "2024-02-29"),
        item(TransactionType::Expense, 40, "Rent", "2024-03-01"),
    ]);
    let a = calculate_analytics_at(&list, d("2024-03-05"));
    let feb = &a.monthly_trends[10];
    assert_eq!(feb.month, "Feb 2024");
    assert_eq!(feb.expenses, Decimal::from(30));
    assert_eq!(a.monthly_trends[11].expenses, Decimal::from(40));
}

#[test]
fn old_transactions_count_in_totals_but_not_trends() {
    let list = txs(vec![
        item(TransactionType::Expense, 100, "Food", "2025-06-02"),
        item(TransactionType::Expense, 300, "Travel", "2022-01-15"),
    ]);
    let a = calculate_analytics_at(&list, d("2025-06-15"));
    assert_eq!(a.total_expenses, Decimal::from(400));
    assert_eq!(a.avg_monthly_expenses, Decimal::from(200));
    let trend_total: Decimal = a.monthly_trends.iter().map(|m| m.expenses).sum();
    assert_eq!(trend_total, Decimal::from(100));
}

#[test]
fn month_count_uses_distinct_months_with_floor_of_one() {
    assert_eq!(month_count(&[]), 1);
    let list = txs(vec![
        item(TransactionType::Expense, 1, "A", "2025-01-02"),
        item(TransactionType::Expense, 1, "A", "2025-01-30"),
        item(TransactionType::Revenue, 1, "B", "2024-01-05"),
    ]);
    assert_eq!(month_count(&list), 2);
}

#[test]
fn equal_values_keep_first_seen_order() {
    let list = txs(vec![
        item(TransactionType::Expense, 100, "Rent", "2025-06-01"),
        item(TransactionType::Expense, 20, "Coffee", "2025-06-01"),
        item(TransactionType::Expense, 100, "Food", "2025-06-02"),
        item(TransactionType::Expense, 300, "Travel", "2025-06-03"),
    ]);
    let names: Vec<String> = top_categories(&list).into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Travel", "Rent", "Food", "Coffee"]);
}

#[test]
fn top_categories_are_capped_at_ten() {
    let items = (1..=12)
        .map(|i| item(TransactionType::Expense, i, &format!("Cat{}", i), "2025-06-01"))
        .collect();
    let top = top_categories(&txs(items));
    assert_eq!(top.len(), 10);
    assert_eq!(top[0].name, "Cat12");
    assert_eq!(top[9].name, "Cat3");
}

#[test]
fn category_names_are_not_normalized() {
    let list = txs(vec![
        item(TransactionType::Expense, 10, "Food", "2025-06-01"),
        item(TransactionType::Expense, 10, "food", "2025-06-01"),
        item(TransactionType::Expense, 10, "Food ", "2025-06-01"),
    ]);
    assert_eq!(top_categories(&list).len(), 3);
}

#[test]
fn profit_is_revenue_minus_expenses() {
    let list = txs(vec![
        item(TransactionType::Expense, 700, "Rent", "2025-03-01"),
        item(TransactionType::Revenue, 250, "Freelance", "2025-04-01"),
        item(TransactionType::Revenue, 100, "Other", "2024-12-24"),
    ]);
    let a = calculate_analytics_at(&list, d("2025-06-15"));
    assert_eq!(a.profit, a.total_revenue - a.total_expenses);
    assert_eq!(a.profit, Decimal::from(-350));
    for m in &a.monthly_trends {
        assert_eq!(m.profit, m.revenue - m.expenses);
    }
}

#[test]
fn same_inputs_same_output() {
    let list = example();
    let today = d("2025-06-15");
    assert_eq!(calculate_analytics_at(&list, today), calculate_analytics_at(&list, today));
}

#[test]
fn chart_colors_fall_back_to_palette() {
    let list = txs(vec![
        item(TransactionType::Expense, 50, "Mystery", "2025-06-01"),
        item(TransactionType::Expense, 40, "Travel", "2025-06-01"),
    ]);
    let colored = with_colors(&top_categories(&list), &default_categories());
    assert_eq!(colored[0].color.as_deref(), Some("#ef4444"));
    assert_eq!(colored[1].color.as_deref(), Some("#14b8a6"));
}

#[test]
fn huge_amounts_saturate_instead_of_panicking() {
    let list = txs(vec![
        NewTransaction::new(
            TransactionType::Expense,
            Decimal::MAX,
            "big",
            "Food",
            d("2025-06-01"),
        ),
        NewTransaction::new(
            TransactionType::Expense,
            Decimal::MAX,
            "bigger",
            "Food",
            d("2025-06-02"),
        ),
    ]);
    let a = calculate_analytics_at(&list, d("2025-06-15"));
    assert_eq!(a.total_expenses, Decimal::MAX);
    assert_eq!(a.profit, -Decimal::MAX);
    assert_eq!(a.top_expense_categories[0].value, Decimal::MAX);
    assert_eq!(a.monthly_trends[11].expenses, Decimal::MAX);
}
