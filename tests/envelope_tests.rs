// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerlens::analytics::budget_envelopes;
use ledgerlens::models::{Envelope, PaymentMethod, Transaction, TransactionType};
use ledgerlens::settings::Settings;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use TransactionType::{Expense, Income};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn tx(date: &str, amount: Decimal, r#type: TransactionType, category: &str) -> Transaction {
    Transaction {
        id: 0,
        amount,
        category: category.into(),
        r#type,
        date: d(date),
        payment_method: PaymentMethod::Other,
        description: None,
    }
}

fn half_half() -> Settings {
    Settings {
        salary_plan: vec![
            Envelope::new("needs", "Needs", dec!(0.5), "#16a34a"),
            Envelope::new("fun", "Fun", dec!(0.5), "#ec4899"),
        ],
        ..Settings::default()
    }
}

#[test]
fn salary_split_against_spend() {
    let data = vec![
        tx("2024-03-01", dec!(1000), Income, "Salary"),
        tx("2024-03-05", dec!(200), Expense, "food"),
        tx("2024-03-10", dec!(100), Expense, "transport"),
    ];
    let summary = budget_envelopes(&data, &half_half(), d("2024-03-20")).unwrap();
    assert_eq!(summary.total_salary, dec!(1000));
    assert_eq!(summary.rows.len(), 2);

    let needs = &summary.rows[0];
    assert_eq!(needs.id, "needs");
    assert_eq!(needs.allocated, dec!(500));
    assert_eq!(needs.spent, dec!(300));
    assert_eq!(needs.remaining, dec!(200));
    assert_eq!(needs.percent_used, 60);

    let fun = &summary.rows[1];
    assert_eq!(fun.allocated, dec!(500));
    assert_eq!(fun.spent, Decimal::ZERO);
    assert_eq!(fun.remaining, dec!(500));
    assert_eq!(fun.percent_used, 0);
}

#[test]
fn no_salary_this_month_is_no_data() {
    let data = vec![
        tx("2024-02-01", dec!(1000), Income, "Salary"),
        tx("2024-03-02", dec!(300), Income, "Freelance"),
        tx("2024-03-05", dec!(200), Expense, "food"),
    ];
    assert!(budget_envelopes(&data, &half_half(), d("2024-03-20")).is_none());
}

#[test]
fn plan_is_used_as_entered() {
    let settings = Settings {
        salary_plan: vec![
            Envelope::new("needs", "Needs", dec!(0.3), "#16a34a"),
            Envelope::new("fun", "Fun", dec!(0.3), "#ec4899"),
        ],
        ..Settings::default()
    };
    let data = vec![tx("2024-03-01", dec!(1000), Income, "Paycheck")];
    let summary = budget_envelopes(&data, &settings, d("2024-03-02")).unwrap();
    let allocated: Decimal = summary.rows.iter().map(|r| r.allocated).sum();
    assert_eq!(allocated, dec!(600));
}

#[test]
fn overspend_caps_percent_and_goes_negative() {
    let data = vec![
        tx("2024-03-01", dec!(1000), Income, "Salary"),
        tx("2024-03-03", dec!(650), Expense, "Shopping"),
        // unmapped envelope ids are ignored
        tx("2024-03-04", dec!(80), Expense, "Education"),
    ];
    let summary = budget_envelopes(&data, &half_half(), d("2024-03-31")).unwrap();
    let fun = summary.rows.iter().find(|r| r.id == "fun").unwrap();
    assert_eq!(fun.spent, dec!(650));
    assert_eq!(fun.remaining, dec!(-150));
    assert_eq!(fun.percent_used, 100);
    let spent: Decimal = summary.rows.iter().map(|r| r.spent).sum();
    assert_eq!(spent, dec!(650));
}

#[test]
fn overrides_redirect_categories() {
    let mut settings = half_half();
    settings.set_bucket("Groceries", "fun").unwrap();
    let data = vec![
        tx("2024-03-01", dec!(1000), Income, "Salary"),
        tx("2024-03-05", dec!(120), Expense, "food"),
    ];
    let summary = budget_envelopes(&data, &settings, d("2024-03-06")).unwrap();
    assert_eq!(summary.rows[0].spent, Decimal::ZERO);
    assert_eq!(summary.rows[1].spent, dec!(120));
    assert_eq!(summary.rows[1].percent_used, 24);
}

#[test]
fn zero_share_envelope_reports_zero_used() {
    let settings = Settings {
        salary_plan: vec![
            Envelope::new("needs", "Needs", dec!(1), "#16a34a"),
            Envelope::new("fun", "Fun", dec!(0), "#ec4899"),
        ],
        ..Settings::default()
    };
    let data = vec![
        tx("2024-03-01", dec!(1000), Income, "Salary"),
        tx("2024-03-08", dec!(45), Expense, "Travel"),
    ];
    let summary = budget_envelopes(&data, &settings, d("2024-03-09")).unwrap();
    let fun = summary.rows.iter().find(|r| r.id == "fun").unwrap();
    assert_eq!(fun.allocated, Decimal::ZERO);
    assert_eq!(fun.spent, dec!(45));
    assert_eq!(fun.remaining, dec!(-45));
    assert_eq!(fun.percent_used, 0);
}
