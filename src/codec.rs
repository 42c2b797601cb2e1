// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! CSV export and CSV/JSON import of transactions.
//!
//! Export header:
//! Date,Type,Amount,Description,Category,Subcategory,Payment Method,Tags,Notes

use crate::error::{Error, Result};
use crate::models::{NewTransaction, Transaction, TransactionType};
use csv::{QuoteStyle, ReaderBuilder, Terminator, Trim, WriterBuilder};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

pub const HEADERS: [&str; 9] = [
    "Date",
    "Type",
    "Amount",
    "Description",
    "Category",
    "Subcategory",
    "Payment Method",
    "Tags",
    "Notes",
];

fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn quoted_opt(s: &Option<String>) -> String {
    quoted(s.as_deref().unwrap_or(""))
}

/// Date, type and amount are written bare; the six text columns are always
/// quoted. Rows are separated by `\n` with no trailing newline.
pub fn export_to_csv(transactions: &[Transaction]) -> Result<String> {
    // fields are escaped by `quoted`, the writer only lays out records
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    wtr.write_record(HEADERS)?;
    for t in transactions {
        wtr.write_record([
            t.date.format("%Y-%m-%d").to_string(),
            t.r#type.to_string(),
            t.amount.to_string(),
            quoted(&t.description),
            quoted(&t.category_name),
            quoted_opt(&t.subcategory),
            quoted_opt(&t.payment_method),
            quoted(&t.tags.join(", ")),
            quoted_opt(&t.notes),
        ])?;
    }
    let bytes = wtr.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    let mut out = String::from_utf8(bytes).map_err(|e| Error::Import(e.to_string()))?;
    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

/// A candidate row from an import file. Values are the raw trimmed strings;
/// nothing is coerced until [`ImportedRecord::to_new_transaction`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportedRecord {
    pub date: String,
    pub r#type: String,
    pub amount: String,
    pub description: String,
    pub category: String,
    pub subcategory: String,
    pub payment_method: String,
    pub tags: String,
    pub notes: String,
}

fn opt(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

impl ImportedRecord {
    fn is_candidate(&self) -> bool {
        !self.date.is_empty() && !self.amount.is_empty() && !self.description.is_empty()
    }

    pub fn to_new_transaction(&self) -> Result<NewTransaction> {
        let date = chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| Error::InvalidDate(self.date.clone()))?;
        let r#type = self
            .r#type
            .parse::<TransactionType>()
            .map_err(Error::Import)?;
        let amount = self
            .amount
            .parse::<Decimal>()
            .map_err(|e| Error::Import(format!("Invalid amount '{}': {}", self.amount, e)))?;
        if amount.is_sign_negative() {
            return Err(Error::Import(format!(
                "Invalid amount '{}', amounts must not be negative",
                self.amount
            )));
        }
        let mut tx = NewTransaction::new(r#type, amount, &self.description, &self.category, date);
        tx.subcategory = opt(&self.subcategory);
        tx.payment_method = opt(&self.payment_method);
        tx.notes = opt(&self.notes);
        tx.tags = self
            .tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        Ok(tx)
    }
}

/// Parses quoted fields per RFC 4180. Columns are matched by header name, so
/// their order does not matter; rows without a date, amount or description
/// are dropped.
pub fn import_csv(text: &str) -> Result<Vec<ImportedRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let columns: HashMap<String, usize> = rdr
        .headers()
        .map_err(|e| Error::Import(e.to_string()))?
        .iter()
        .enumerate()
        .map(|(i, h)| (h.to_string(), i))
        .collect();

    let mut out = Vec::new();
    for (line, result) in rdr.records().enumerate() {
        let rec = result.map_err(|e| Error::Import(e.to_string()))?;
        let field = |name: &str| -> String {
            columns
                .get(name)
                .and_then(|&i| rec.get(i))
                .unwrap_or("")
                .to_string()
        };
        let candidate = ImportedRecord {
            date: field("Date"),
            r#type: field("Type"),
            amount: field("Amount"),
            description: field("Description"),
            category: field("Category"),
            subcategory: field("Subcategory"),
            payment_method: field("Payment Method"),
            tags: field("Tags"),
            notes: field("Notes"),
        };
        if candidate.is_candidate() {
            out.push(candidate);
        } else {
            tracing::warn!(row = line + 2, "skipping CSV row without date, amount or description");
        }
    }
    tracing::debug!(candidates = out.len(), "parsed CSV import");
    Ok(out)
}

fn truthy(v: Option<&Value>) -> bool {
    match v {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn text(v: Option<&Value>) -> String {
    match v {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|i| text(Some(i)))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}

/// Accepts an array of transaction-like objects. Items lacking a type,
/// amount, description, category or date are dropped.
pub fn import_json(text_in: &str) -> Result<Vec<ImportedRecord>> {
    let parsed: Value =
        serde_json::from_str(text_in).map_err(|e| Error::Import(e.to_string()))?;
    let items = parsed
        .as_array()
        .ok_or_else(|| Error::Import("expected a JSON array of transactions".into()))?;

    let out: Vec<ImportedRecord> = items
        .iter()
        .filter_map(|item| {
            let category = item.get("category").or_else(|| item.get("category_name"));
            let keep = truthy(item.get("type"))
                && truthy(item.get("amount"))
                && truthy(item.get("description"))
                && truthy(category)
                && truthy(item.get("date"));
            keep.then(|| ImportedRecord {
                date: text(item.get("date")),
                r#type: text(item.get("type")),
                amount: text(item.get("amount")),
                description: text(item.get("description")),
                category: text(category),
                subcategory: text(item.get("subcategory")),
                payment_method: text(item.get("payment_method")),
                tags: text(item.get("tags")),
                notes: text(item.get("notes")),
            })
        })
        .collect();
    tracing::debug!(items = items.len(), candidates = out.len(), "parsed JSON import");
    Ok(out)
}
