// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use ledgerlens::db;
use ledgerlens::models::Envelope;
use ledgerlens::settings::{self, DEFAULT_CURRENCY, Settings, SettingsError};
use rusqlite::Connection;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

#[test]
fn fresh_database_uses_defaults() {
    let conn = setup();
    let s = settings::load(&conn).unwrap();
    assert_eq!(s, Settings::default());
    assert_eq!(s.currency, DEFAULT_CURRENCY);
    assert_eq!(s.plan_total(), Decimal::ONE);
    assert_eq!(s.salary_plan.len(), 6);
    assert!(s.auto_suggest);
}

#[test]
fn save_and_reload() {
    let conn = setup();
    let mut s = Settings::default();
    s.currency = "USD".into();
    s.auto_suggest = false;
    s.upsert_envelope(Envelope::new("travel", "Travel", dec!(0.05), "#06b6d4"))
        .unwrap();
    s.set_bucket("Flights", "travel").unwrap();
    settings::save(&conn, &s).unwrap();

    let loaded = settings::load(&conn).unwrap();
    assert_eq!(loaded, s);
    assert_eq!(loaded.bucket_for("flights"), "travel");
    assert_eq!(loaded.bucket_for("Groceries"), "needs");
}

#[test]
fn editing_rules() {
    let mut s = Settings::default();
    assert!(matches!(
        s.upsert_envelope(Envelope::new("fun", "Fun", dec!(-0.1), "#000")),
        Err(SettingsError::NegativePercentage(_))
    ));
    assert!(matches!(
        s.set_bucket("food", "nope"),
        Err(SettingsError::UnknownEnvelope(_))
    ));
    s.upsert_envelope(Envelope::new("fun", "Play", dec!(0.15), "#000"))
        .unwrap();
    assert_eq!(s.salary_plan[4].label, "Play");
    assert_eq!(s.plan_total(), dec!(1.10));
    assert_eq!(s.remove_envelope("giving").unwrap().id, "giving");
    assert!(s.remove_envelope("giving").is_err());
}

#[test]
fn corrupt_plan_is_reported() {
    let conn = setup();
    conn.execute(
        "INSERT INTO settings(key, value) VALUES ('salary_plan', 'not json')",
        [],
    )
    .unwrap();
    assert!(matches!(
        settings::load(&conn),
        Err(SettingsError::Corrupt { .. })
    ));
}
