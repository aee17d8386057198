// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categorize;
use crate::decode::ImportRecord;
use crate::models::{Account, AccountType, Category, Transaction};
use crate::persist::Persister;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("account id {0} not found")]
    UnknownAccount(u64),
    #[error("account '{0}' not found")]
    UnknownAccountName(String),
    #[error("account '{0}' already exists")]
    DuplicateAccount(String),
    #[error("account '{0}' still has transactions attributed to it")]
    AccountInUse(String),
    #[error("failed to persist snapshot: {0}")]
    Persist(anyhow::Error),
}

/// A transaction as submitted by the caller, before the store assigns an id.
/// With no explicit category, the keyword rules decide.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub category: Option<Category>,
    pub account: u64,
}

/// Partial edit of an existing transaction. Absent fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub category: Option<Category>,
    pub account: Option<u64>,
}

/// The ledger and the accounts it reconciles against, behind one mutation
/// surface. Every successful mutation keeps each account's balance equal to
/// its seed balance plus the sum of amounts currently attributed to it, and
/// hands the whole state to the injected persister.
pub struct Store {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    next_account_id: u64,
    next_transaction_id: u64,
    persister: Box<dyn Persister>,
}

impl Store {
    pub fn new(
        accounts: Vec<Account>,
        transactions: Vec<Transaction>,
        persister: Box<dyn Persister>,
    ) -> Store {
        let next_account_id = accounts.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let next_transaction_id = transactions.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Store {
            accounts,
            transactions,
            next_account_id,
            next_transaction_id,
            persister,
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Insertion-ordered ledger snapshot.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn account(&self, id: u64) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn account_by_name(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.name == name)
    }

    pub fn account_id(&self, name: &str) -> Result<u64, StoreError> {
        self.account_by_name(name)
            .map(|a| a.id)
            .ok_or_else(|| StoreError::UnknownAccountName(name.to_string()))
    }

    pub fn transaction(&self, id: u64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn add_account(
        &mut self,
        name: &str,
        kind: AccountType,
        opening_balance: Decimal,
    ) -> Result<Account, StoreError> {
        if self.account_by_name(name).is_some() {
            return Err(StoreError::DuplicateAccount(name.to_string()));
        }
        let account = Account {
            id: self.next_account_id,
            name: name.to_string(),
            kind,
            balance: opening_balance,
        };
        self.next_account_id += 1;
        self.accounts.push(account.clone());
        self.persist()?;
        Ok(account)
    }

    /// Removing an account its transactions still point at would strand
    /// their amounts, so that is refused rather than silently unbalanced.
    pub fn remove_account(&mut self, name: &str) -> Result<(), StoreError> {
        let id = self.account_id(name)?;
        if self.transactions.iter().any(|t| t.account == id) {
            return Err(StoreError::AccountInUse(name.to_string()));
        }
        self.accounts.retain(|a| a.id != id);
        self.persist()
    }

    /// Append one transaction and credit its amount to the target account.
    pub fn add(&mut self, new: NewTransaction) -> Result<Transaction, StoreError> {
        self.require_account(new.account)?;
        let txn = Transaction {
            id: self.take_transaction_id(),
            date: new.date,
            description: new.description.clone(),
            amount: new.amount,
            category: new
                .category
                .unwrap_or_else(|| categorize::categorize(&new.description)),
            account: new.account,
        };
        self.credit(txn.account, txn.amount);
        self.transactions.push(txn.clone());
        self.persist()?;
        Ok(txn)
    }

    /// Append a decoded batch. Every record is categorized from its
    /// description and forced into the target account; the account is
    /// credited once with the batch total.
    pub fn bulk_import(
        &mut self,
        records: Vec<ImportRecord>,
        account: u64,
    ) -> Result<Vec<Transaction>, StoreError> {
        self.require_account(account)?;
        let mut batch_total = Decimal::ZERO;
        let mut inserted = Vec::with_capacity(records.len());
        for rec in records {
            batch_total += rec.amount;
            inserted.push(Transaction {
                id: self.take_transaction_id(),
                date: rec.date,
                category: categorize::categorize(&rec.description),
                description: rec.description,
                amount: rec.amount,
                account,
            });
        }
        self.credit(account, batch_total);
        self.transactions.extend(inserted.iter().cloned());
        self.persist()?;
        Ok(inserted)
    }

    /// Remove a transaction and debit its amount back out of its account.
    /// Unknown ids are a no-op.
    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        let Some(pos) = self.transactions.iter().position(|t| t.id == id) else {
            return Ok(());
        };
        let removed = self.transactions.remove(pos);
        self.credit(removed.account, -removed.amount);
        self.persist()
    }

    /// Apply a partial edit. Unknown ids are a no-op. The balance move is
    /// computed once from the old and new snapshots, so re-pointing a
    /// transaction at another account debits the old one and credits the
    /// new one in the same step.
    pub fn update(&mut self, id: u64, patch: TransactionPatch) -> Result<(), StoreError> {
        let Some(pos) = self.transactions.iter().position(|t| t.id == id) else {
            return Ok(());
        };
        if let Some(account) = patch.account {
            self.require_account(account)?;
        }

        let old = self.transactions[pos].clone();
        let new = apply_patch(&old, patch);
        for (account, delta) in rebook_deltas(&old, &new) {
            self.credit(account, delta);
        }
        self.transactions[pos] = new;
        self.persist()
    }

    /// Write the current snapshot without mutating anything. Used to seed
    /// the on-disk state on first launch.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.persist()
    }

    fn require_account(&self, id: u64) -> Result<(), StoreError> {
        if self.account(id).is_none() {
            return Err(StoreError::UnknownAccount(id));
        }
        Ok(())
    }

    fn take_transaction_id(&mut self) -> u64 {
        let id = self.next_transaction_id;
        self.next_transaction_id += 1;
        id
    }

    // Callers validate the account id before booking a delta.
    fn credit(&mut self, account: u64, delta: Decimal) {
        if let Some(a) = self.accounts.iter_mut().find(|a| a.id == account) {
            a.balance += delta;
        }
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.persister
            .persist(&self.accounts, &self.transactions)
            .map_err(StoreError::Persist)
    }
}

/// Apply a partial edit to a snapshot, leaving id untouched.
fn apply_patch(old: &Transaction, patch: TransactionPatch) -> Transaction {
    Transaction {
        id: old.id,
        date: patch.date.unwrap_or(old.date),
        description: patch.description.unwrap_or_else(|| old.description.clone()),
        amount: patch.amount.unwrap_or(old.amount),
        category: patch.category.unwrap_or(old.category),
        account: patch.account.unwrap_or(old.account),
    }
}

/// The per-account balance moves implied by replacing `old` with `new`:
/// a single net delta when the account is unchanged, otherwise a debit of
/// the old account and a credit of the new one.
pub fn rebook_deltas(old: &Transaction, new: &Transaction) -> Vec<(u64, Decimal)> {
    if old.account == new.account {
        vec![(new.account, new.amount - old.amount)]
    } else {
        vec![(old.account, -old.amount), (new.account, new.amount)]
    }
}
