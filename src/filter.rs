// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Transaction list filtering, sorting and picker values.

use crate::models::{Transaction, TransactionType};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::str::FromStr;

/// A set of independent predicates. `None` (or an empty string/list) means no
/// constraint for that field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub r#type: Option<TransactionType>,
    pub category: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub amount_min: Option<Decimal>,
    pub amount_max: Option<Decimal>,
    pub search_term: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN)
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        *self == Filter::default()
    }

    /// True when `t` satisfies every present predicate. An open date bound
    /// falls back to the epoch (`from`) or `today` (`to`).
    pub fn matches(&self, t: &Transaction, today: NaiveDate) -> bool {
        if let Some(kind) = self.r#type {
            if t.r#type != kind {
                return false;
            }
        }

        if let Some(cat) = non_empty(&self.category) {
            if t.category_name != cat {
                return false;
            }
        }

        if self.date_from.is_some() || self.date_to.is_some() {
            let from = self.date_from.unwrap_or_else(epoch);
            let to = self.date_to.unwrap_or(today);
            if t.date < from || t.date > to {
                return false;
            }
        }

        if let Some(min) = self.amount_min {
            if t.amount < min {
                return false;
            }
        }
        if let Some(max) = self.amount_max {
            if t.amount > max {
                return false;
            }
        }

        if let Some(term) = non_empty(&self.search_term) {
            let hay = format!(
                "{} {} {} {}",
                t.description,
                t.category_name,
                t.subcategory.as_deref().unwrap_or(""),
                t.notes.as_deref().unwrap_or("")
            )
            .to_lowercase();
            if !hay.contains(&term.to_lowercase()) {
                return false;
            }
        }

        if !self.tags.is_empty() && !self.tags.iter().any(|tag| t.tags.contains(tag)) {
            return false;
        }

        true
    }
}

pub fn filter_transactions(transactions: &[Transaction], filter: &Filter) -> Vec<Transaction> {
    filter_transactions_at(transactions, filter, Local::now().date_naive())
}

/// Order-preserving subset of `transactions` matching `filter`.
pub fn filter_transactions_at(
    transactions: &[Transaction],
    filter: &Filter,
    today: NaiveDate,
) -> Vec<Transaction> {
    let out: Vec<Transaction> = transactions
        .iter()
        .filter(|t| filter.matches(t, today))
        .cloned()
        .collect();
    tracing::debug!(total = transactions.len(), kept = out.len(), "filtered transactions");
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Amount,
    Description,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "amount" => Ok(SortKey::Amount),
            "description" => Ok(SortKey::Description),
            other => Err(format!(
                "Invalid sort key '{}', expected date|amount|description",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("Invalid sort order '{}', expected asc|desc", other)),
        }
    }
}

fn compare(a: &Transaction, b: &Transaction, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Amount => a.amount.cmp(&b.amount),
        SortKey::Description => a
            .description
            .to_lowercase()
            .cmp(&b.description.to_lowercase())
            .then_with(|| a.description.cmp(&b.description)),
    }
}

/// Stable in-place sort; equal keys keep their current relative order in
/// both directions.
pub fn sort_transactions(transactions: &mut [Transaction], key: SortKey, order: SortOrder) {
    match order {
        SortOrder::Asc => transactions.sort_by(|a, b| compare(a, b, key)),
        SortOrder::Desc => transactions.sort_by(|a, b| compare(b, a, key)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Description,
    Category,
    Subcategory,
    PaymentMethod,
}

/// Sorted distinct non-empty values of `field`.
pub fn unique_values(transactions: &[Transaction], field: Field) -> Vec<String> {
    let set: BTreeSet<&str> = transactions
        .iter()
        .filter_map(|t| match field {
            Field::Description => Some(t.description.as_str()),
            Field::Category => Some(t.category_name.as_str()),
            Field::Subcategory => t.subcategory.as_deref(),
            Field::PaymentMethod => t.payment_method.as_deref(),
        })
        .filter(|v| !v.is_empty())
        .collect();
    set.into_iter().map(str::to_string).collect()
}
