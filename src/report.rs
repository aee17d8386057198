// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, Transaction};
use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Income, expense and per-category totals for one calendar month.
/// `expenses` keeps its sign (a sum of negative amounts); the category map
/// holds expense magnitudes and never sees income transactions.
#[derive(Debug, Serialize, PartialEq)]
pub struct MonthSummary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
    pub by_category: BTreeMap<Category, Decimal>,
}

pub fn month_summary(transactions: &[Transaction], year: i32, month: u32) -> MonthSummary {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    let mut by_category: BTreeMap<Category, Decimal> = BTreeMap::new();

    for t in transactions {
        if t.date.year() != year || t.date.month() != month {
            continue;
        }
        if t.amount > Decimal::ZERO {
            income += t.amount;
        } else if t.amount < Decimal::ZERO {
            expenses += t.amount;
            *by_category.entry(t.category).or_insert(Decimal::ZERO) += -t.amount;
        }
    }

    MonthSummary {
        income,
        expenses,
        net: income + expenses,
        by_category,
    }
}
