// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Error;
use crate::models::{NewCategory, TransactionType};
use crate::store::Store;
use crate::utils::pretty_table;
use anyhow::{Result, anyhow};

fn parse_type(s: Option<&String>) -> Result<Option<TransactionType>> {
    s.map(|t| t.parse::<TransactionType>().map_err(|e| anyhow!(e)))
        .transpose()
}

fn required_name(sub: &clap::ArgMatches) -> Result<&str> {
    sub.get_one::<String>("name")
        .map(|s| s.trim())
        .ok_or_else(|| anyhow!("--name is required"))
}

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = required_name(sub)?;
            let kind = parse_type(sub.get_one::<String>("type"))?
                .ok_or_else(|| anyhow!("--type is required"))?;
            let category = store.add_category(NewCategory {
                name: name.to_string(),
                r#type: kind,
                color: sub.get_one::<String>("color").cloned().unwrap_or_default(),
                icon: sub.get_one::<String>("icon").cloned().unwrap_or_default(),
                subcategories: sub
                    .get_many::<String>("sub")
                    .map(|s| s.map(|v| v.trim().to_string()).collect())
                    .unwrap_or_default(),
            })?;
            println!("Added {} category '{}'", category.r#type, category.name);
        }
        Some(("list", sub)) => {
            let kind = parse_type(sub.get_one::<String>("type"))?;
            let data: Vec<Vec<String>> = store
                .categories
                .iter()
                .filter(|c| kind.is_none_or(|k| c.r#type == k))
                .map(|c| {
                    vec![
                        format!("{} {}", c.icon, c.name),
                        c.r#type.to_string(),
                        c.color.clone(),
                        c.subcategories.join(", "),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Category", "Type", "Color", "Subcategories"], data)
            );
        }
        Some(("rm", sub)) => {
            let name = required_name(sub)?;
            let kind = parse_type(sub.get_one::<String>("type"))?;
            let id = store
                .category_by_name(name, kind)
                .map(|c| c.id.clone())
                .ok_or_else(|| Error::CategoryNotFound(name.to_string()))?;
            store.delete_category(&id)?;
            println!("Removed category '{}'", name);
        }
        _ => {}
    }
    Ok(())
}
