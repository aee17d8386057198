// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use tallybook::decode::{decode, ImportFormat};
use tallybook::utils::parse_date;

const CSV: ImportFormat = ImportFormat::Delimited { delimiter: b',' };

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn decodes_a_delimited_row() {
    let out = decode("Date,Description,Amount\n2024-01-05,Coffee,-4.50", CSV);
    assert_eq!(out.accepted(), 1);
    assert_eq!(out.rejected, 0);
    let rec = &out.records[0];
    assert_eq!(rec.date, parse_date("2024-01-05").unwrap());
    assert_eq!(rec.description, "Coffee");
    assert_eq!(rec.amount, d("-4.50"));
}

#[test]
fn header_names_decide_columns_not_positions() {
    let out = decode(
        "Amount,Date,Description\n-12.00,2024-02-01,Lunch",
        CSV,
    );
    assert_eq!(out.accepted(), 1);
    assert_eq!(out.records[0].description, "Lunch");
    assert_eq!(out.records[0].amount, d("-12.00"));
}

#[test]
fn caller_supplied_delimiter_is_honored() {
    let out = decode(
        "Date;Description;Amount\n2024-01-05;Coffee;-4.50",
        ImportFormat::Delimited { delimiter: b';' },
    );
    assert_eq!(out.accepted(), 1);
    assert_eq!(out.records[0].amount, d("-4.50"));
}

#[test]
fn bad_rows_are_dropped_and_counted() {
    let text = "Date,Description,Amount\n\
                2024-01-05,Coffee,-4.50\n\
                ,No date,-1.00\n\
                2024-01-06,Bad amount,abc\n\
                2024-01-07,Fine,10";
    let out = decode(text, CSV);
    assert_eq!(out.accepted(), 2);
    assert_eq!(out.rejected, 2);
}

#[test]
fn missing_amount_column_defaults_to_zero() {
    let out = decode("Date,Description\n2024-01-05,Coffee", CSV);
    assert_eq!(out.accepted(), 1);
    assert_eq!(out.records[0].amount, Decimal::ZERO);
}

#[test]
fn unparsable_dates_are_rejected() {
    let out = decode("Date,Description,Amount\nJan 5,Coffee,-4.50", CSV);
    assert_eq!(out.accepted(), 0);
    assert_eq!(out.rejected, 1);
}

#[test]
fn decodes_a_json_array() {
    let text = r#"[
        {"Date": "2024-01-05", "Description": "Coffee", "Amount": -4.5},
        {"date": "2024-01-06", "description": "Refund", "amount": "12.30"}
    ]"#;
    let out = decode(text, ImportFormat::Json);
    assert_eq!(out.accepted(), 2);
    assert_eq!(out.records[0].amount, d("-4.5"));
    assert_eq!(out.records[1].description, "Refund");
    assert_eq!(out.records[1].amount, d("12.30"));
}

#[test]
fn malformed_json_yields_an_empty_outcome() {
    let out = decode("{not json", ImportFormat::Json);
    assert_eq!(out.accepted(), 0);
    assert_eq!(out.rejected, 0);

    // Parsable but the wrong shape behaves the same.
    let out = decode(r#"{"Date": "2024-01-05"}"#, ImportFormat::Json);
    assert_eq!(out.accepted(), 0);
    assert_eq!(out.rejected, 0);
}

#[test]
fn json_rows_are_screened_like_delimited_rows() {
    let text = r#"[
        {"Date": "", "Description": "no date", "Amount": 1},
        {"Date": "2024-01-05", "Description": "bad amount", "Amount": "oops"},
        {"Date": "2024-01-05", "Description": "no amount field"},
        "not an object"
    ]"#;
    let out = decode(text, ImportFormat::Json);
    assert_eq!(out.accepted(), 1);
    assert_eq!(out.rejected, 3);
    assert_eq!(out.records[0].amount, Decimal::ZERO);
}
