// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Category;
use crate::store::{NewTransaction, Store, TransactionPatch};
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<u64>("id").unwrap();
            store.delete(id)?;
            println!("Deleted transaction {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap().trim();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let account = store.account_id(sub.get_one::<String>("account").unwrap().trim())?;
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.parse::<Category>())
        .transpose()?;

    let txn = store.add(NewTransaction {
        date,
        description: description.to_string(),
        amount,
        category,
        account,
    })?;
    println!(
        "Recorded #{}: {} on {} '{}' ({})",
        txn.id,
        fmt_money(&txn.amount),
        txn.date,
        txn.description,
        txn.category
    );
    Ok(())
}

fn edit(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<u64>("id").unwrap();
    let patch = TransactionPatch {
        date: sub
            .get_one::<String>("date")
            .map(|s| parse_date(s))
            .transpose()?,
        description: sub
            .get_one::<String>("description")
            .map(|s| s.trim().to_string()),
        amount: sub
            .get_one::<String>("amount")
            .map(|s| parse_decimal(s))
            .transpose()?,
        category: sub
            .get_one::<String>("category")
            .map(|s| s.parse::<Category>())
            .transpose()?,
        account: sub
            .get_one::<String>("account")
            .map(|s| store.account_id(s.trim()))
            .transpose()?,
    };
    store.update(id, patch)?;
    println!("Updated transaction {}", id);
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.account.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Account", "Description", "Amount", "Category"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: u64,
    pub date: String,
    pub account: String,
    pub description: String,
    pub amount: String,
    pub category: String,
}

pub fn query_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let month = sub.get_one::<String>("month").map(|s| s.trim().to_string());
    let account = sub
        .get_one::<String>("account")
        .map(|s| store.account_id(s.trim()))
        .transpose()?;
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.parse::<Category>())
        .transpose()?;

    // Listing copies out of the ledger; the ledger itself keeps insertion order.
    let mut picked: Vec<_> = store
        .transactions()
        .iter()
        .filter(|t| {
            month
                .as_deref()
                .is_none_or(|m| t.date.format("%Y-%m").to_string() == m)
                && account.is_none_or(|a| t.account == a)
                && category.is_none_or(|c| t.category == c)
        })
        .collect();
    picked.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        picked.truncate(*limit);
    }

    Ok(picked
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.to_string(),
            account: store
                .account(t.account)
                .map(|a| a.name.clone())
                .unwrap_or_default(),
            description: t.description.clone(),
            amount: fmt_money(&t.amount),
            category: t.category.to_string(),
        })
        .collect())
}
