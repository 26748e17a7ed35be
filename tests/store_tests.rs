// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerlens::db;
use ledgerlens::models::{MAX_AMOUNT, ModelError, NewTransaction, PaymentMethod, TransactionType};
use ledgerlens::store::{RecordStore, SqliteStore, StoreError};
use rusqlite::{Connection, params};
use rust_decimal_macros::dec;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn groceries() -> NewTransaction {
    NewTransaction {
        amount: dec!(42.50),
        category: "  Groceries ".into(),
        r#type: TransactionType::Expense,
        date: d("2024-03-05"),
        payment_method: PaymentMethod::Card,
        description: None,
    }
}

#[test]
fn unknown_user_is_unauthorized() {
    let conn = setup();
    let store = SqliteStore::new(&conn);
    assert!(matches!(
        store.list_transactions("ghost"),
        Err(StoreError::Unauthorized(_))
    ));
    assert!(matches!(
        store.create_transaction("ghost", groceries()),
        Err(StoreError::Unauthorized(_))
    ));
}

#[test]
fn create_then_list_per_user() {
    let conn = setup();
    let store = SqliteStore::new(&conn);
    store.register_user("ana").unwrap();
    store.register_user("ben").unwrap();
    assert!(matches!(
        store.register_user("ana"),
        Err(StoreError::UserExists(_))
    ));

    let created = store.create_transaction("ana", groceries()).unwrap();
    assert_eq!(created.category, "Groceries");

    let listed = store.list_transactions("ana").unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);
    assert!(store.list_transactions("ben").unwrap().is_empty());
    assert_eq!(store.list_users().unwrap(), vec!["ana", "ben"]);
}

#[test]
fn invalid_payloads_are_rejected() {
    let conn = setup();
    let store = SqliteStore::new(&conn);
    store.ensure_user("me").unwrap();

    let zero = NewTransaction {
        amount: dec!(0),
        ..groceries()
    };
    assert!(matches!(
        store.create_transaction("me", zero),
        Err(StoreError::Invalid(ModelError::NonPositiveAmount(_)))
    ));
    let blank = NewTransaction {
        category: "   ".into(),
        ..groceries()
    };
    assert!(matches!(
        store.create_transaction("me", blank),
        Err(StoreError::Invalid(ModelError::EmptyCategory))
    ));
    let huge = NewTransaction {
        amount: MAX_AMOUNT + dec!(0.01),
        ..groceries()
    };
    assert!(matches!(
        store.create_transaction("me", huge),
        Err(StoreError::Invalid(ModelError::AmountTooLarge(_)))
    ));
}

#[test]
fn malformed_rows_are_skipped() {
    let conn = setup();
    let store = SqliteStore::new(&conn);
    let uid = store.ensure_user("me").unwrap();
    let raw = [
        ("2024-03-01", "100", "expense", "crypto"),
        ("2024-03-02", "abc", "expense", "card"),
        ("2024-03-03", "10", "transfer", "card"),
        ("2024-13-01", "10", "expense", "card"),
        ("2024-03-04", "-5", "income", "card"),
        ("2024-03-05", "50000000000000000000000000000", "expense", "card"),
    ];
    for (date, amount, ty, method) in raw {
        conn.execute(
            "INSERT INTO transactions(user_id, date, amount, category, type, payment_method)
             VALUES (?1,?2,?3,'rent',?4,?5)",
            params![uid, date, amount, ty, method],
        )
        .unwrap();
    }
    let listed = store.list_transactions("me").unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].amount, dec!(100));
    assert_eq!(listed[0].payment_method, PaymentMethod::Other);
}

#[test]
fn notes_lifecycle() {
    let conn = setup();
    let store = SqliteStore::new(&conn);
    store.ensure_user("me").unwrap();
    let n = store
        .add_note("me", "Bonus", TransactionType::Income, dec!(300), d("2024-04-01"))
        .unwrap();
    assert!(store
        .add_note("me", " ", TransactionType::Income, dec!(1), d("2024-04-01"))
        .is_err());
    assert_eq!(store.list_notes("me").unwrap(), vec![n.clone()]);
    store.remove_note("me", n.id).unwrap();
    assert!(matches!(
        store.remove_note("me", n.id),
        Err(StoreError::NoteNotFound(_))
    ));
}
