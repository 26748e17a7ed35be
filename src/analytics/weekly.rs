// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Transaction;
use crate::utils::percent_change;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekSpend {
    pub current_week_total: Decimal,
    pub previous_week_total: Decimal,
    pub delta_percent: Decimal,
}

fn spend_between(transactions: &[Transaction], start: NaiveDate, end: NaiveDate) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.date >= start && t.date <= end)
        .map(|t| t.amount)
        .sum()
}

pub fn week_spend(transactions: &[Transaction], today: NaiveDate) -> WeekSpend {
    let start_this = today - Duration::days(6);
    let end_prev = start_this - Duration::days(1);
    let start_prev = start_this - Duration::days(7);

    let current = spend_between(transactions, start_this, today);
    let previous = spend_between(transactions, start_prev, end_prev);
    WeekSpend {
        current_week_total: current,
        previous_week_total: previous,
        delta_percent: percent_change(current, previous),
    }
}
