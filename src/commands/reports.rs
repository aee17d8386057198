// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::report::month_summary;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("balances", sub)) => balances(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month_raw = sub.get_one::<String>("month").unwrap();
    let (year, month) = parse_month(month_raw)?;

    let summary = month_summary(store.transactions(), year, month);
    if maybe_print_json(json_flag, jsonl_flag, &summary)? {
        return Ok(());
    }

    println!(
        "{}",
        pretty_table(
            &["Month", "Income", "Expenses", "Net"],
            vec![vec![
                month_raw.trim().to_string(),
                fmt_money(&summary.income),
                fmt_money(&summary.expenses.abs()),
                fmt_money(&summary.net),
            ]],
        )
    );
    let rows: Vec<Vec<String>> = summary
        .by_category
        .iter()
        .map(|(cat, spent)| vec![cat.to_string(), fmt_money(spent)])
        .collect();
    if !rows.is_empty() {
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}

fn balances(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    // Balances come straight off the accounts; the reconciler keeps them
    // current, nothing is summed here.
    let data: Vec<Vec<String>> = store
        .accounts()
        .iter()
        .map(|a| vec![a.name.clone(), a.kind.to_string(), fmt_money(&a.balance)])
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Account", "Type", "Balance"], data));
    }
    Ok(())
}
