// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerlens::analytics::recap::{Direction, recaps};
use ledgerlens::models::{PaymentMethod, Transaction, TransactionType};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use TransactionType::{Expense, Income};

fn tx(date: &str, amount: Decimal, r#type: TransactionType, category: &str) -> Transaction {
    Transaction {
        id: 0,
        amount,
        category: category.into(),
        r#type,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        payment_method: PaymentMethod::Other,
        description: None,
    }
}

#[test]
fn first_month_holds_steady() {
    let data = vec![
        tx("2024-03-01", dec!(1000), Income, "Salary"),
        tx("2024-03-05", dec!(200), Expense, "Groceries"),
        tx("2024-03-10", dec!(100), Expense, "transport"),
    ];
    let all = recaps(&data, "LKR");
    assert_eq!(all.len(), 1);
    let r = &all[0];
    assert_eq!(r.month, "Mar 2024");
    assert_eq!(r.direction, Direction::Surplus);
    assert_eq!(r.top_category, "Food");
    assert_eq!(
        r.text,
        "In Mar 2024, you earned LKR 1000 and spent LKR 300, leaving a surplus of LKR 700. Your biggest spend was on Food. Spending held steady (0% vs previous data month)."
    );
}

#[test]
fn change_is_against_previous_data_month() {
    let data = vec![
        tx("2024-01-05", dec!(300), Expense, "food"),
        // February has no data and is skipped
        tx("2024-03-07", dec!(450), Expense, "rent"),
    ];
    let all = recaps(&data, "USD");
    assert_eq!(all.len(), 2);
    let r = &all[1];
    assert_eq!(r.expense_change_percent, 50);
    assert_eq!(r.direction, Direction::Deficit);
    assert_eq!(
        r.text,
        "In Mar 2024, you earned USD 0 and spent USD 450, leaving a deficit of USD 450. Your biggest spend was on Rent. Spending rose 50% vs previous data month."
    );
}

#[test]
fn falling_spend_and_ties() {
    let data = vec![
        tx("2024-05-01", dec!(400), Expense, "travel"),
        tx("2024-06-02", dec!(100), Expense, "shopping"),
        tx("2024-06-03", dec!(100), Expense, "rent"),
    ];
    let r = &recaps(&data, "LKR")[1];
    assert_eq!(r.top_category, "Shopping");
    assert_eq!(r.expense_change_percent, -50);
    assert!(r.text.ends_with("Spending fell 50% vs previous data month."));
}

#[test]
fn income_only_month_uses_general() {
    let data = vec![tx("2024-04-01", dec!(500), Income, "Salary")];
    let r = &recaps(&data, "LKR")[0];
    assert_eq!(r.top_category, "General");
    assert_eq!(r.net, dec!(500));
    assert!(recaps(&[], "LKR").is_empty());
}

#[test]
fn negative_half_percent_rounds_toward_zero() {
    let data = vec![
        tx("2024-07-01", dec!(200), Expense, "rent"),
        tx("2024-08-01", dec!(195), Expense, "rent"),
    ];
    let r = &recaps(&data, "LKR")[1];
    assert_eq!(r.expense_change_percent, -2);
    assert!(r.text.ends_with("Spending fell 2% vs previous data month."));
}
