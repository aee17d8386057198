// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Account, AccountType, Transaction};
use crate::store::Store;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.tallybook", "Tallybook", "tallybook"));

const ACCOUNTS_FILE: &str = "accounts.json";
const TRANSACTIONS_FILE: &str = "transactions.json";

pub fn data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let dir = proj.data_dir().to_path_buf();
    fs::create_dir_all(&dir).context("Failed to create data dir")?;
    Ok(dir)
}

/// Receives the whole state after every successful mutation. Injected into
/// the store so the ledger logic never touches the filesystem itself.
pub trait Persister {
    fn persist(&self, accounts: &[Account], transactions: &[Transaction]) -> Result<()>;
}

/// Snapshot persistence: the two collections are serialized independently,
/// each rewritten whole via a temp-file rename so a snapshot on disk is
/// never half-written.
pub struct JsonDir {
    dir: PathBuf,
}

impl JsonDir {
    pub fn new(dir: impl Into<PathBuf>) -> JsonDir {
        JsonDir { dir: dir.into() }
    }

    /// Read back both collections. A missing or unreadable file falls back:
    /// empty ledger, default account set.
    pub fn load(&self) -> (Vec<Account>, Vec<Transaction>) {
        let accounts =
            read_collection(&self.dir.join(ACCOUNTS_FILE)).unwrap_or_else(default_accounts);
        let transactions =
            read_collection(&self.dir.join(TRANSACTIONS_FILE)).unwrap_or_default();
        (accounts, transactions)
    }
}

impl Persister for JsonDir {
    fn persist(&self, accounts: &[Account], transactions: &[Transaction]) -> Result<()> {
        write_collection(&self.dir.join(ACCOUNTS_FILE), accounts)?;
        write_collection(&self.dir.join(TRANSACTIONS_FILE), transactions)?;
        Ok(())
    }
}

/// Keeps nothing. Backs tests and dry runs.
pub struct Discard;

impl Persister for Discard {
    fn persist(&self, _accounts: &[Account], _transactions: &[Transaction]) -> Result<()> {
        Ok(())
    }
}

fn read_collection<T: serde::de::DeserializeOwned>(path: &Path) -> Option<Vec<T>> {
    let text = fs::read_to_string(path).ok()?;
    serde_json::from_str(&text).ok()
}

fn write_collection<T: serde::Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("Write snapshot {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("Commit snapshot {}", path.display()))?;
    Ok(())
}

/// The account set seeded on first launch or when accounts.json is unusable.
pub fn default_accounts() -> Vec<Account> {
    let account = |id: u64, name: &str, kind: AccountType| Account {
        id,
        name: name.to_string(),
        kind,
        balance: Decimal::ZERO,
    };
    vec![
        account(1, "Checking", AccountType::Checking),
        account(2, "Savings", AccountType::Savings),
        account(3, "Credit Card", AccountType::Credit),
    ]
}

/// Open the store backed by the given directory.
pub fn open_at(dir: impl Into<PathBuf>) -> Store {
    let backend = JsonDir::new(dir);
    let (accounts, transactions) = backend.load();
    Store::new(accounts, transactions, Box::new(backend))
}

/// Open the store at the platform data dir, seeding defaults on first run.
pub fn open_or_init() -> Result<Store> {
    Ok(open_at(data_dir()?))
}
