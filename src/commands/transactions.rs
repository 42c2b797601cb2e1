// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::filter::{Filter, SortKey, SortOrder, sort_transactions};
use crate::models::{
    NewTransaction, RecurringFrequency, Transaction, TransactionType, category_icon,
};
use crate::store::Store;
use crate::utils::{
    format_currency, maybe_print_json, parse_amount, parse_date, parse_decimal, parse_tags,
    pretty_table,
};
use anyhow::{Context, Result, anyhow};
use chrono::{Local, Utc};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn required<'a>(sub: &'a clap::ArgMatches, id: &str) -> Result<&'a str> {
    sub.get_one::<String>(id)
        .map(|s| s.trim())
        .ok_or_else(|| anyhow!("--{} is required", id))
}

fn optional(sub: &clap::ArgMatches, id: &str) -> Option<String> {
    sub.get_one::<String>(id)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

fn parse_type(s: &str) -> Result<TransactionType> {
    s.parse::<TransactionType>().map_err(|e| anyhow!(e))
}

pub fn new_transaction_from(store: &Store, sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let kind = parse_type(required(sub, "type")?)?;
    let amount = parse_amount(required(sub, "amount")?)?;
    let description = required(sub, "description")?;
    let category = required(sub, "category")?;
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => Local::now().date_naive(),
    };

    let mut tx = NewTransaction::new(kind, amount, description, category, date);
    tx.category_id = store
        .category_by_name(category, Some(kind))
        .map(|c| c.id.clone());
    tx.subcategory = optional(sub, "subcategory");
    tx.tags = sub
        .get_one::<String>("tags")
        .map(|s| parse_tags(s.as_str()))
        .unwrap_or_default();
    tx.payment_method = optional(sub, "payment_method");
    tx.notes = optional(sub, "notes");
    if let Some(freq) = optional(sub, "recurring") {
        tx.recurring = true;
        tx.recurring_frequency = Some(freq.parse::<RecurringFrequency>().map_err(|e| anyhow!(e))?);
    }
    Ok(tx)
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let data = new_transaction_from(store, sub)?;
    let tx = store.add_transaction(data, Utc::now());
    println!(
        "Recorded {} {} on {} for '{}' ({}) [id: {}]",
        tx.r#type,
        format_currency(tx.amount),
        tx.date,
        tx.description,
        tx.category_name,
        tx.id
    );
    Ok(())
}

fn edit(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?;
    let data = new_transaction_from(store, sub)?;
    let tx = store.update_transaction(id, data, Utc::now())?;
    println!("Updated transaction {}", tx.id);
    Ok(())
}

fn rm(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?;
    let tx = store.delete_transaction(id)?;
    println!("Removed '{}' ({})", tx.description, tx.id);
    Ok(())
}

/// Builds a filter from `tx list` arguments; `--type all` means any type.
pub fn filter_from_args(sub: &clap::ArgMatches) -> Result<Filter> {
    let r#type = match optional(sub, "type").as_deref() {
        None | Some("all") => None,
        Some(t) => Some(parse_type(t)?),
    };
    let date = |id: &str| -> Result<_> { optional(sub, id).map(|d| parse_date(&d)).transpose() };
    let amount = |id: &str| -> Result<_> {
        optional(sub, id)
            .map(|a| parse_decimal(&a).with_context(|| format!("--{}", id)))
            .transpose()
    };
    Ok(Filter {
        r#type,
        category: optional(sub, "category"),
        date_from: date("from")?,
        date_to: date("to")?,
        amount_min: amount("min")?,
        amount_max: amount("max")?,
        search_term: optional(sub, "search"),
        tags: sub
            .get_many::<String>("tag")
            .map(|tags| tags.map(|t| t.trim().to_string()).collect())
            .unwrap_or_default(),
    })
}

pub fn query_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let filter = filter_from_args(sub)?;
    let key = sub
        .get_one::<String>("sort")
        .map(|s| s.parse::<SortKey>())
        .transpose()
        .map_err(|e| anyhow!(e))?
        .unwrap_or(SortKey::Date);
    let order = sub
        .get_one::<String>("order")
        .map(|s| s.parse::<SortOrder>())
        .transpose()
        .map_err(|e| anyhow!(e))?
        .unwrap_or(SortOrder::Desc);

    let mut rows = store.filtered(&filter, Local::now().date_naive());
    sort_transactions(&mut rows, key, order);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                let signed = match t.r#type {
                    TransactionType::Expense => -t.amount,
                    TransactionType::Revenue => t.amount,
                };
                vec![
                    t.date.format("%b %d, %Y").to_string(),
                    t.description.clone(),
                    format!(
                        "{} {}",
                        category_icon(&store.categories, &t.category_name),
                        t.category_name
                    ),
                    format_currency(signed),
                    t.tags.join(", "),
                    t.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Description", "Category", "Amount", "Tags", "ID"],
                rows
            )
        );
    }
    Ok(())
}
