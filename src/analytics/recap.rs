// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::analytics::category::{display_name, normalize};
use crate::analytics::monthly::{MonthlyAggregate, available_monthly_series, transactions_in_month};
use crate::models::Transaction;
use crate::utils::{fmt_money, percent_change, round_percent};

pub const NO_CATEGORY: &str = "General";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Surplus,
    Deficit,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Surplus => "surplus",
            Direction::Deficit => "deficit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recap {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
    pub direction: Direction,
    pub top_category: String,
    pub expense_change_percent: i64,
    pub text: String,
}

/// Largest expense category by summed amount. The first category seen wins a tie.
fn top_category(transactions: &[&Transaction]) -> Option<String> {
    let mut totals: Vec<(String, Decimal)> = Vec::new();
    for t in transactions.iter().filter(|t| t.is_expense()) {
        let key = normalize(&t.category);
        match totals.iter_mut().find(|(k, _)| *k == key) {
            Some((_, total)) => *total += t.amount,
            None => totals.push((key, t.amount)),
        }
    }
    let mut best: Option<&(String, Decimal)> = None;
    for entry in &totals {
        if best.is_none_or(|b| entry.1 > b.1) {
            best = Some(entry);
        }
    }
    best.map(|(k, _)| display_name(k))
}

fn change_sentence(change: i64) -> String {
    match change {
        0 => "Spending held steady (0% vs previous data month).".to_string(),
        c if c > 0 => format!("Spending rose {}% vs previous data month.", c),
        c => format!("Spending fell {}% vs previous data month.", c.abs()),
    }
}

pub fn recap(
    aggregate: &MonthlyAggregate,
    previous: Option<&MonthlyAggregate>,
    transactions_in_month: &[&Transaction],
    currency: &str,
) -> Recap {
    let net = aggregate.net();
    let direction = if net >= Decimal::ZERO {
        Direction::Surplus
    } else {
        Direction::Deficit
    };
    let top = top_category(transactions_in_month).unwrap_or_else(|| NO_CATEGORY.to_string());
    let change = previous
        .map(|p| round_percent(percent_change(aggregate.expenses, p.expenses)))
        .unwrap_or(0);
    let month = format!("{} {}", aggregate.label(), aggregate.year);

    let text = format!(
        "In {}, you earned {} and spent {}, leaving a {} of {}. Your biggest spend was on {}. {}",
        month,
        fmt_money(&aggregate.income, currency),
        fmt_money(&aggregate.expenses, currency),
        direction.as_str(),
        fmt_money(&net.abs(), currency),
        top,
        change_sentence(change),
    );

    Recap {
        month,
        income: aggregate.income,
        expenses: aggregate.expenses,
        net,
        direction,
        top_category: top,
        expense_change_percent: change,
        text,
    }
}

pub fn recaps(transactions: &[Transaction], currency: &str) -> Vec<Recap> {
    let months = available_monthly_series(transactions);
    months
        .iter()
        .enumerate()
        .map(|(idx, m)| {
            let previous = idx.checked_sub(1).and_then(|i| months.get(i));
            let in_month = transactions_in_month(transactions, m);
            recap(m, previous, &in_month, currency)
        })
        .collect()
}
