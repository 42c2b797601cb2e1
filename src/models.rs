// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const FALLBACK_ICON: &str = "📝";
pub const FALLBACK_COLOR: &str = "#6b7280";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Expense,
    Revenue,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Revenue => "revenue",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expense" => Ok(TransactionType::Expense),
            "revenue" => Ok(TransactionType::Revenue),
            other => Err(format!(
                "Invalid transaction type '{}', expected expense|revenue",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl FromStr for RecurringFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(RecurringFrequency::Daily),
            "weekly" => Ok(RecurringFrequency::Weekly),
            "monthly" => Ok(RecurringFrequency::Monthly),
            "yearly" => Ok(RecurringFrequency::Yearly),
            other => Err(format!(
                "Invalid frequency '{}', expected daily|weekly|monthly|yearly",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub r#type: TransactionType,
    pub amount: Decimal,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub category_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_frequency: Option<RecurringFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User-supplied fields of a transaction; the store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub r#type: TransactionType,
    pub amount: Decimal,
    pub description: String,
    #[serde(default)]
    pub category_id: Option<String>,
    pub category_name: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub recurring_frequency: Option<RecurringFrequency>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewTransaction {
    pub fn new(
        r#type: TransactionType,
        amount: Decimal,
        description: &str,
        category_name: &str,
        date: NaiveDate,
    ) -> Self {
        NewTransaction {
            r#type,
            amount,
            description: description.to_string(),
            category_id: None,
            category_name: category_name.to_string(),
            subcategory: None,
            date,
            tags: Vec::new(),
            payment_method: None,
            recurring: false,
            recurring_frequency: None,
            notes: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub r#type: TransactionType,
    pub color: String,
    pub icon: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub r#type: TransactionType,
    pub color: String,
    pub icon: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
}

pub fn category_icon<'a>(categories: &'a [Category], name: &str) -> &'a str {
    categories
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.icon.as_str())
        .unwrap_or(FALLBACK_ICON)
}

pub fn category_color<'a>(categories: &'a [Category], name: &str) -> &'a str {
    categories
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.color.as_str())
        .unwrap_or(FALLBACK_COLOR)
}

fn category(
    id: &str,
    name: &str,
    r#type: TransactionType,
    color: &str,
    icon: &str,
    subcategories: &[&str],
) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        r#type,
        color: color.to_string(),
        icon: icon.to_string(),
        subcategories: subcategories.iter().map(|s| s.to_string()).collect(),
    }
}

/// Built-in categories a fresh store starts with.
pub fn default_categories() -> Vec<Category> {
    use TransactionType::{Expense, Revenue};
    vec![
        category(
            "1",
            "Food & Dining",
            Expense,
            "#ef4444",
            "🍽️",
            &["Restaurants", "Groceries", "Coffee", "Fast Food", "Alcohol"],
        ),
        category(
            "2",
            "Transportation",
            Expense,
            "#3b82f6",
            "🚗",
            &["Gas", "Public Transit", "Parking", "Maintenance", "Insurance"],
        ),
        category(
            "3",
            "Shopping",
            Expense,
            "#8b5cf6",
            "🛍️",
            &["Clothing", "Electronics", "Home & Garden", "Books", "Gifts"],
        ),
        category(
            "4",
            "Entertainment",
            Expense,
            "#ec4899",
            "🎬",
            &["Movies", "Games", "Music", "Sports", "Hobbies"],
        ),
        category(
            "5",
            "Bills & Utilities",
            Expense,
            "#f59e0b",
            "⚡",
            &["Electricity", "Water", "Internet", "Phone", "Insurance"],
        ),
        category(
            "6",
            "Healthcare",
            Expense,
            "#10b981",
            "🏥",
            &["Doctor", "Pharmacy", "Insurance", "Dental", "Vision"],
        ),
        category(
            "7",
            "Education",
            Expense,
            "#6366f1",
            "📚",
            &["Tuition", "Books", "Courses", "Supplies", "Training"],
        ),
        category(
            "8",
            "Travel",
            Expense,
            "#14b8a6",
            "✈️",
            &["Flights", "Hotels", "Car Rental", "Food", "Activities"],
        ),
        category(
            "9",
            "Salary",
            Revenue,
            "#22c55e",
            "💼",
            &["Base Salary", "Bonus", "Overtime", "Commission"],
        ),
        category(
            "10",
            "Business",
            Revenue,
            "#3b82f6",
            "🏢",
            &["Sales", "Services", "Consulting", "Products"],
        ),
        category(
            "11",
            "Investments",
            Revenue,
            "#8b5cf6",
            "📈",
            &["Dividends", "Interest", "Capital Gains", "Crypto"],
        ),
        category(
            "12",
            "Freelance",
            Revenue,
            "#f59e0b",
            "💻",
            &["Projects", "Hourly Work", "Contracts", "Royalties"],
        ),
        category(
            "13",
            "Rental",
            Revenue,
            "#06b6d4",
            "🏠",
            &["Property Rent", "Equipment Rental", "Vehicle Rental"],
        ),
        category(
            "14",
            "Other",
            Revenue,
            "#84cc16",
            "💰",
            &["Gifts", "Refunds", "Cashback", "Side Hustle"],
        ),
    ]
}
