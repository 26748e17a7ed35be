// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::analytics::category::{is_salary, normalize};
use crate::models::{PaymentMethod, Transaction, TransactionType};
use crate::utils::round_percent;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Sums into `(key, total)` pairs in first-seen key order, then stable-sorts
/// descending so equal totals keep that order.
fn group_sorted<K, I>(items: I) -> Vec<(K, Decimal)>
where
    K: Eq + std::hash::Hash + Clone,
    I: IntoIterator<Item = (K, Decimal)>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut out: Vec<(K, Decimal)> = Vec::new();
    for (key, amount) in items {
        match index.get(&key) {
            Some(&i) => out[i].1 += amount,
            None => {
                index.insert(key.clone(), out.len());
                out.push((key, amount));
            }
        }
    }
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

pub fn by_category(transactions: &[Transaction], r#type: TransactionType) -> Vec<CategoryTotal> {
    group_sorted(
        transactions
            .iter()
            .filter(|t| t.r#type == r#type)
            .map(|t| (normalize(&t.category), t.amount)),
    )
    .into_iter()
    .map(|(category, total)| CategoryTotal { category, total })
    .collect()
}

pub fn percentage_of(total: Decimal, grand_total: Decimal) -> i64 {
    if grand_total.is_zero() {
        return 0;
    }
    round_percent(total / grand_total * Decimal::ONE_HUNDRED)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodTotal {
    pub method: PaymentMethod,
    pub total: Decimal,
}

pub fn payment_method_split(transactions: &[Transaction]) -> Vec<MethodTotal> {
    group_sorted(
        transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| (t.payment_method, t.amount)),
    )
    .into_iter()
    .map(|(method, total)| MethodTotal { method, total })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

pub fn totals(transactions: &[Transaction]) -> Totals {
    let sum = |ty: TransactionType| -> Decimal {
        transactions
            .iter()
            .filter(|t| t.r#type == ty)
            .map(|t| t.amount)
            .sum()
    };
    let income = sum(TransactionType::Income);
    let expenses = sum(TransactionType::Expense);
    Totals {
        income,
        expenses,
        balance: income - expenses,
    }
}

pub fn recent(transactions: &[Transaction], n: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(n);
    sorted
}

pub fn last_salary(transactions: &[Transaction]) -> Option<&Transaction> {
    recent(transactions, transactions.len())
        .into_iter()
        .find(|t| t.is_income() && is_salary(&t.category))
}
