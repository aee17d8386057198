// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use serde_json::Value;

/// Source format of an import payload. The format is declared by the caller,
/// never sniffed from the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Delimited { delimiter: u8 },
    Json,
}

/// A decoded, validated row: no category or account yet, those are assigned
/// when the batch lands in the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportRecord {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}

#[derive(Debug, Default)]
pub struct DecodeOutcome {
    pub records: Vec<ImportRecord>,
    pub rejected: usize,
}

impl DecodeOutcome {
    pub fn accepted(&self) -> usize {
        self.records.len()
    }

    fn keep(&mut self, screened: Option<ImportRecord>) {
        match screened {
            Some(rec) => self.records.push(rec),
            None => self.rejected += 1,
        }
    }
}

/// Decode raw import text into validated records. Unusable rows are dropped
/// and counted; a payload that cannot be decoded at all yields an empty
/// outcome rather than an error.
pub fn decode(text: &str, format: ImportFormat) -> DecodeOutcome {
    match format {
        ImportFormat::Delimited { delimiter } => decode_delimited(text, delimiter),
        ImportFormat::Json => decode_json(text),
    }
}

fn decode_delimited(text: &str, delimiter: u8) -> DecodeOutcome {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = match rdr.headers() {
        Ok(h) => h.clone(),
        Err(_) => return DecodeOutcome::default(),
    };
    let col = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    };
    let (date_col, desc_col, amount_col) = (col("date"), col("description"), col("amount"));

    let mut out = DecodeOutcome::default();
    for result in rdr.records() {
        let rec = match result {
            Ok(rec) => rec,
            Err(_) => {
                out.rejected += 1;
                continue;
            }
        };
        let field = |idx: Option<usize>| idx.and_then(|i| rec.get(i)).unwrap_or("").trim();
        out.keep(screen(
            field(date_col),
            field(desc_col),
            field(amount_col),
        ));
    }
    out
}

fn decode_json(text: &str) -> DecodeOutcome {
    let items = match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items,
        // Unparsable text or a non-array shape decodes to zero records.
        _ => return DecodeOutcome::default(),
    };

    let mut out = DecodeOutcome::default();
    for item in items {
        let Value::Object(obj) = item else {
            out.rejected += 1;
            continue;
        };
        let field = |name: &str| {
            obj.iter()
                .find(|(k, _)| k.trim().eq_ignore_ascii_case(name))
                .map(|(_, v)| json_text(v))
                .unwrap_or_default()
        };
        out.keep(screen(
            field("date").trim(),
            field("description").trim(),
            field("amount").trim(),
        ));
    }
    out
}

fn json_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Post-decode validation, identical for every format: reject rows with a
/// missing or unparsable date or a non-numeric amount. A missing amount
/// field defaults to zero.
fn screen(date_raw: &str, description: &str, amount_raw: &str) -> Option<ImportRecord> {
    if date_raw.is_empty() {
        return None;
    }
    let date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d").ok()?;
    let amount = if amount_raw.is_empty() {
        Decimal::ZERO
    } else {
        amount_raw.parse::<Decimal>().ok()?
    };
    Some(ImportRecord {
        date,
        description: description.to_string(),
        amount,
    })
}
