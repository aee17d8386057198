// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::anyhow;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
    Credit,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AccountType::Checking => "checking",
            AccountType::Savings => "savings",
            AccountType::Credit => "credit",
        };
        f.write_str(s)
    }
}

impl FromStr for AccountType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "checking" => Ok(AccountType::Checking),
            "savings" => Ok(AccountType::Savings),
            "credit" => Ok(AccountType::Credit),
            other => Err(anyhow!(
                "Invalid account type '{}', expected checking, savings or credit",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    Housing,
    Transportation,
    Utilities,
    Shopping,
    Income,
    Entertainment,
    Other,
    Subscriptions,
    Travel,
    Education,
    Healthcare,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::FoodAndDining => "Food & Dining",
            Category::Housing => "Housing",
            Category::Transportation => "Transportation",
            Category::Utilities => "Utilities",
            Category::Shopping => "Shopping",
            Category::Income => "Income",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
            Category::Subscriptions => "Subscriptions",
            Category::Travel => "Travel",
            Category::Education => "Education",
            Category::Healthcare => "Healthcare",
        }
    }

    pub const ALL: [Category; 12] = [
        Category::FoodAndDining,
        Category::Housing,
        Category::Transportation,
        Category::Utilities,
        Category::Shopping,
        Category::Income,
        Category::Entertainment,
        Category::Other,
        Category::Subscriptions,
        Category::Travel,
        Category::Education,
        Category::Healthcare,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| anyhow!("Unknown category '{}'", wanted))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub name: String,
    pub kind: AccountType,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub category: Category,
    pub account: u64,
}
