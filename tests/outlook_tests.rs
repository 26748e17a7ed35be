// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerlens::analytics::outlook::{insights, notes_impact, projection, upcoming_notes};
use ledgerlens::analytics::{by_category, monthly_series};
use ledgerlens::models::{Note, PaymentMethod, Transaction, TransactionType};
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

fn two_months() -> Vec<Transaction> {
    vec![
        tx("2024-01-01", dec!(1000), Income, "Salary"),
        tx("2024-01-04", dec!(400), Expense, "food"),
        tx("2024-01-06", dec!(200), Expense, "rent"),
        tx("2024-02-01", dec!(2000), Income, "Salary"),
        tx("2024-02-04", dec!(200), Expense, "food"),
        tx("2024-02-06", dec!(200), Expense, "rent"),
    ]
}

#[test]
fn projection_averages_active_months() {
    let data = two_months();
    let series = monthly_series(&data, 6, d("2024-03-10"));
    let p = projection(&series, &by_category(&data, Expense));
    assert_eq!(p.income, dec!(4500));
    assert_eq!(p.expenses, dec!(1500));
    assert_eq!(p.net, dec!(3000));
    assert_eq!(p.trim_category, "Food");
    assert_eq!(p.trim_saving, dec!(135));
    assert_eq!(p.trimmed_expenses, dec!(1365));
    assert_eq!(p.trimmed_net, dec!(3135));
    assert_eq!(p.grown_income, dec!(4965));
    assert_eq!(p.grown_net, dec!(3465));
}

#[test]
fn projection_without_data() {
    let series = monthly_series(&[], 6, d("2024-03-10"));
    let p = projection(&series, &[]);
    assert_eq!(p.income, Decimal::ZERO);
    assert_eq!(p.trimmed_expenses, Decimal::ZERO);
    assert_eq!(p.trim_category, "General");
}

#[test]
fn insights_summary() {
    let data = two_months();
    let series = monthly_series(&data, 6, d("2024-03-10"));
    let i = insights(&data, &series, &by_category(&data, Expense));
    assert_eq!(i.avg_monthly_income, dec!(1500));
    assert_eq!(i.avg_monthly_expenses, dec!(500));
    assert_eq!(i.savings_rate_percent, 67);
    assert_eq!(i.top_category, "Food");
    assert_eq!(i.top_category_percent, 60);
    assert_eq!(i.deficit_months, 0);
    assert_eq!(i.surplus_months + i.deficit_months, 6);
}

#[test]
fn upcoming_notes_shift_balance() {
    let note = |id, r#type, amount, date: &str| Note {
        id,
        title: format!("note {}", id),
        r#type,
        amount,
        date: d(date),
    };
    let notes = vec![
        note(1, Income, dec!(500), "2024-03-10"),
        note(2, Expense, dec!(200), "2024-04-01"),
        note(3, Expense, dec!(1000), "2024-03-01"),
    ];
    let today = d("2024-03-10");
    assert_eq!(upcoming_notes(&notes, today).len(), 2);
    let impact = notes_impact(&notes, dec!(2000), today);
    assert_eq!(impact.incoming, dec!(500));
    assert_eq!(impact.outgoing, dec!(200));
    assert_eq!(impact.projected_balance, dec!(2300));
}
