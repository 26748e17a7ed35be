// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::analytics::category::{looks_like_income, normalize};
use crate::models::{Transaction, TransactionType};
use crate::utils::{capitalize, fmt_money};

pub fn type_history(transactions: &[Transaction]) -> HashMap<String, TransactionType> {
    let mut tally: HashMap<String, (usize, usize)> = HashMap::new();
    for t in transactions {
        let entry = tally.entry(normalize(&t.category)).or_default();
        match t.r#type {
            TransactionType::Income => entry.0 += 1,
            TransactionType::Expense => entry.1 += 1,
        }
    }
    tally
        .into_iter()
        .map(|(k, (income, expense))| {
            let ty = if income >= expense {
                TransactionType::Income
            } else {
                TransactionType::Expense
            };
            (k, ty)
        })
        .collect()
}

pub fn infer_type(
    category: &str,
    history: &HashMap<String, TransactionType>,
) -> Option<TransactionType> {
    if category.trim().is_empty() {
        return None;
    }
    if let Some(ty) = history.get(&normalize(category)) {
        return Some(*ty);
    }
    if looks_like_income(category) {
        Some(TransactionType::Income)
    } else {
        Some(TransactionType::Expense)
    }
}

fn month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

fn pretty_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn suggest_description(
    category: &str,
    date: NaiveDate,
    amount: Decimal,
    currency: &str,
) -> String {
    let key = normalize(category);
    if ["salary", "paycheck", "wage"].iter().any(|w| key.contains(w)) {
        return format!("Salary - {} ({})", month_year(date), fmt_money(&amount, currency));
    }
    let label = [
        ("rent", "Rent"),
        ("food", "Groceries"),
        ("transport", "Transport"),
        ("utilities", "Utilities"),
        ("healthcare", "Healthcare"),
    ]
    .into_iter()
    .find(|(needle, _)| key.contains(needle));

    match label {
        Some(("rent", l)) => format!("{} - {}", l, month_year(date)),
        Some((_, l)) => format!("{} - {}", l, pretty_date(date)),
        None => {
            let name = if category.trim().is_empty() {
                "Transaction".to_string()
            } else {
                capitalize(category.trim())
            };
            format!("{} - {}", name, pretty_date(date))
        }
    }
}
