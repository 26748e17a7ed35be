// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerlens::commands::Session;
use ledgerlens::commands::exporter::{STATEMENT_HEADER, export_statement};
use ledgerlens::db;
use ledgerlens::models::{NewTransaction, PaymentMethod, TransactionType};
use ledgerlens::store::{RecordStore, SqliteStore};
use rusqlite::Connection;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    let store = SqliteStore::new(&conn);
    store.ensure_user("me").unwrap();
    let rows = [
        ("2024-03-01", dec!(1000), TransactionType::Income, "Salary", Some("March pay")),
        ("2024-03-05", dec!(20.5), TransactionType::Expense, "Food", Some("lunch, with team")),
        ("2024-04-01", dec!(99), TransactionType::Expense, "Rent", None),
    ];
    for (date, amount, r#type, category, description) in rows {
        store
            .create_transaction(
                "me",
                NewTransaction {
                    amount,
                    category: category.into(),
                    r#type,
                    date: d(date),
                    payment_method: PaymentMethod::Bank,
                    description: description.map(String::from),
                },
            )
            .unwrap();
    }
    conn
}

#[test]
fn csv_statement_for_one_month() {
    let conn = setup();
    let session = Session::new(&conn, "me", d("2024-04-10"));
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("march.csv");
    let n = export_statement(&session, "2024-03", out.to_str().unwrap(), "csv").unwrap();
    assert_eq!(n, 2);

    let mut rdr = csv::Reader::from_path(&out).unwrap();
    let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, STATEMENT_HEADER);
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(&records[0][0], "2024-03-01");
    assert_eq!(&records[1][4], "20.50");
    assert_eq!(&records[1][5], "lunch, with team");
}

#[test]
fn json_statement_and_bad_input() {
    let conn = setup();
    let session = Session::new(&conn, "me", d("2024-04-10"));
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("april.json");
    let out = out.to_str().unwrap();
    assert_eq!(export_statement(&session, "2024-04", out, "json").unwrap(), 1);
    let v: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
    let items = v.as_array().unwrap();
    assert_eq!(items[0]["category"], "Rent");
    assert_eq!(items[0]["amount"].as_str().unwrap().parse::<Decimal>().unwrap(), dec!(99));

    assert!(export_statement(&session, "2024-13", out, "csv").is_err());
    assert!(export_statement(&session, "2024-04", out, "xml").is_err());
}
