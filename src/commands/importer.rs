// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::decode::{decode, ImportFormat};
use crate::store::Store;
use anyhow::{anyhow, Context, Result};
use std::fs;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(store, sub),
        _ => Ok(()),
    }
}

fn import_transactions(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let account_name = sub.get_one::<String>("account").unwrap().trim();
    let format = parse_format(
        sub.get_one::<String>("format").unwrap(),
        sub.get_one::<String>("delimiter").unwrap(),
    )?;

    let text = fs::read_to_string(path).with_context(|| format!("Open import file {}", path))?;
    let account = store.account_id(account_name)?;

    let outcome = decode(&text, format);
    if outcome.accepted() == 0 {
        println!(
            "No usable records in {} ({} rows rejected)",
            path, outcome.rejected
        );
        return Ok(());
    }

    let rejected = outcome.rejected;
    let inserted = store.bulk_import(outcome.records, account)?;
    println!(
        "Imported {} transactions into '{}' ({} rows rejected)",
        inserted.len(),
        account_name,
        rejected
    );
    Ok(())
}

fn parse_format(format: &str, delimiter: &str) -> Result<ImportFormat> {
    match format.trim().to_ascii_lowercase().as_str() {
        "csv" => {
            let delim = delimiter.as_bytes();
            if delim.len() != 1 {
                return Err(anyhow!(
                    "Delimiter must be a single byte, got '{}'",
                    delimiter
                ));
            }
            Ok(ImportFormat::Delimited { delimiter: delim[0] })
        }
        "json" => Ok(ImportFormat::Json),
        other => Err(anyhow!("Unknown import format '{}', expected csv or json", other)),
    }
}
