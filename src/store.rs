// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory owner of the transaction and category collections.
//!
//! Derived data is never cached here: call [`Store::analytics`] or
//! [`Store::filtered`] again after any mutation.

use crate::analytics::{self, Analytics};
use crate::error::{Error, Result};
use crate::filter::{self, Filter};
use crate::models::{
    Category, NewCategory, NewTransaction, Transaction, TransactionType, default_categories,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
}

impl Default for Store {
    fn default() -> Self {
        Store {
            transactions: Vec::new(),
            categories: default_categories(),
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn build(
    data: NewTransaction,
    id: String,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Transaction {
    Transaction {
        id,
        r#type: data.r#type,
        amount: data.amount,
        description: data.description,
        category_id: data.category_id,
        category_name: data.category_name,
        subcategory: data.subcategory,
        date: data.date,
        tags: data.tags,
        payment_method: data.payment_method,
        recurring: data.recurring,
        recurring_frequency: data.recurring_frequency,
        notes: data.notes,
        created_at,
        updated_at: now,
    }
}

impl Store {
    /// New transactions go to the front, newest first.
    pub fn add_transaction(&mut self, data: NewTransaction, now: DateTime<Utc>) -> Transaction {
        let tx = build(data, new_id(), now, now);
        tracing::debug!(id = %tx.id, "added transaction");
        self.transactions.insert(0, tx.clone());
        tx
    }

    /// Replaces every user field of transaction `id`, keeping its id and
    /// creation time.
    pub fn update_transaction(
        &mut self,
        id: &str,
        data: NewTransaction,
        now: DateTime<Utc>,
    ) -> Result<Transaction> {
        let slot = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::TransactionNotFound(id.to_string()))?;
        *slot = build(data, slot.id.clone(), slot.created_at, now);
        tracing::debug!(id, "updated transaction");
        Ok(slot.clone())
    }

    pub fn delete_transaction(&mut self, id: &str) -> Result<Transaction> {
        let pos = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| Error::TransactionNotFound(id.to_string()))?;
        tracing::info!(id, "deleted transaction");
        Ok(self.transactions.remove(pos))
    }

    /// Adds a batch in input order ahead of the existing transactions.
    pub fn import_transactions(
        &mut self,
        items: Vec<NewTransaction>,
        now: DateTime<Utc>,
    ) -> Vec<Transaction> {
        let imported: Vec<Transaction> = items
            .into_iter()
            .map(|data| build(data, new_id(), now, now))
            .collect();
        tracing::info!(count = imported.len(), "imported transactions");
        let existing = std::mem::take(&mut self.transactions);
        self.transactions = imported.clone();
        self.transactions.extend(existing);
        imported
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_by_name(&self, name: &str, kind: Option<TransactionType>) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.name == name && kind.is_none_or(|k| c.r#type == k))
    }

    fn ensure_unique(&self, data: &NewCategory, except_id: Option<&str>) -> Result<()> {
        let clash = self.categories.iter().any(|c| {
            c.name == data.name && c.r#type == data.r#type && Some(c.id.as_str()) != except_id
        });
        if clash {
            return Err(Error::DuplicateCategory {
                name: data.name.clone(),
                kind: data.r#type.to_string(),
            });
        }
        Ok(())
    }

    pub fn add_category(&mut self, data: NewCategory) -> Result<Category> {
        self.ensure_unique(&data, None)?;
        let category = Category {
            id: new_id(),
            name: data.name,
            r#type: data.r#type,
            color: data.color,
            icon: data.icon,
            subcategories: data.subcategories,
        };
        tracing::debug!(name = %category.name, "added category");
        self.categories.push(category.clone());
        Ok(category)
    }

    /// Existing transactions keep their recorded category name.
    pub fn update_category(&mut self, id: &str, data: NewCategory) -> Result<Category> {
        self.ensure_unique(&data, Some(id))?;
        let slot = self
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::CategoryNotFound(id.to_string()))?;
        slot.name = data.name;
        slot.r#type = data.r#type;
        slot.color = data.color;
        slot.icon = data.icon;
        slot.subcategories = data.subcategories;
        Ok(slot.clone())
    }

    /// Refuses while any transaction of the same type still carries the
    /// category's name.
    pub fn delete_category(&mut self, id: &str) -> Result<Category> {
        let pos = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| Error::CategoryNotFound(id.to_string()))?;
        let category = &self.categories[pos];
        if self
            .transactions
            .iter()
            .any(|t| t.category_name == category.name && t.r#type == category.r#type)
        {
            return Err(Error::CategoryInUse(category.name.clone()));
        }
        tracing::info!(id, "deleted category");
        Ok(self.categories.remove(pos))
    }

    /// Drops all transactions and restores the built-in categories.
    pub fn clear(&mut self) {
        tracing::info!(transactions = self.transactions.len(), "clearing all data");
        *self = Store::default();
    }

    pub fn analytics(&self, today: NaiveDate) -> Analytics {
        analytics::calculate_analytics_at(&self.transactions, today)
    }

    pub fn filtered(&self, filter: &Filter, today: NaiveDate) -> Vec<Transaction> {
        filter::filter_transactions_at(&self.transactions, filter, today)
    }
}
