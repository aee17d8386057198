// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use tallybook::models::AccountType;
use tallybook::persist::Discard;
use tallybook::store::{NewTransaction, Store};
use tallybook::utils::parse_date;
use tallybook::{cli, commands::transactions};

fn setup() -> Store {
    let mut store = Store::new(vec![], vec![], Box::new(Discard));
    store
        .add_account("Checking", AccountType::Checking, Decimal::ZERO)
        .unwrap();
    for day in 1..=3 {
        store
            .add(NewTransaction {
                date: parse_date(&format!("2025-01-0{}", day)).unwrap(),
                description: "P".to_string(),
                amount: "-10".parse().unwrap(),
                category: None,
                account: 1,
            })
            .unwrap();
    }
    store
}

fn list_rows(store: &Store, args: &[&str]) -> Vec<transactions::TransactionRow> {
    let mut argv = vec!["tallybook", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            return transactions::query_rows(store, list_m).unwrap();
        }
    }
    panic!("tx list not parsed");
}

#[test]
fn list_limit_respected() {
    let store = setup();
    let rows = list_rows(&store, &["--limit", "2"]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2025-01-03");
}

#[test]
fn list_filters_by_month() {
    let mut store = setup();
    store
        .add(NewTransaction {
            date: parse_date("2025-02-01").unwrap(),
            description: "February".to_string(),
            amount: "-1".parse().unwrap(),
            category: None,
            account: 1,
        })
        .unwrap();

    let rows = list_rows(&store, &["--month", "2025-01"]);
    assert_eq!(rows.len(), 3);
    let rows = list_rows(&store, &["--month", "2025-02"]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "February");
}
