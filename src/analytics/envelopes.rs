// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::analytics::category::is_salary;
use crate::models::Transaction;
use crate::settings::Settings;
use crate::utils::{round_percent, round_whole, same_month};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvelopeStatus {
    pub id: String,
    pub label: String,
    pub color: String,
    pub percentage: Decimal,
    pub allocated: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub percent_used: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub total_salary: Decimal,
    pub rows: Vec<EnvelopeStatus>,
}

pub fn salary_this_month(transactions: &[Transaction], today: NaiveDate) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.is_income() && is_salary(&t.category))
        .filter(|t| same_month(t.date, today.year(), today.month()))
        .map(|t| t.amount)
        .sum()
}

/// Allocation against spend per envelope, or `None` when no salary was
/// recorded this month.
pub fn budget_envelopes(
    transactions: &[Transaction],
    settings: &Settings,
    today: NaiveDate,
) -> Option<BudgetSummary> {
    let total_salary = salary_this_month(transactions, today);
    if total_salary.is_zero() {
        return None;
    }

    let mut spent_by_bucket: HashMap<String, Decimal> = HashMap::new();
    for t in transactions
        .iter()
        .filter(|t| t.is_expense() && same_month(t.date, today.year(), today.month()))
    {
        *spent_by_bucket
            .entry(settings.bucket_for(&t.category))
            .or_insert(Decimal::ZERO) += t.amount;
    }

    let rows = settings
        .salary_plan
        .iter()
        .map(|env| {
            let allocated = round_whole(
                total_salary
                    .checked_mul(env.percentage)
                    .unwrap_or(Decimal::MAX),
            );
            let spent = round_whole(spent_by_bucket.get(&env.id).copied().unwrap_or_default());
            let percent_used = if allocated.is_zero() {
                0
            } else {
                round_percent(spent / allocated * Decimal::ONE_HUNDRED).min(100)
            };
            EnvelopeStatus {
                id: env.id.clone(),
                label: env.label.clone(),
                color: env.color.clone(),
                percentage: env.percentage,
                allocated,
                spent,
                remaining: allocated - spent,
                percent_used,
            }
        })
        .collect();

    Some(BudgetSummary { total_salary, rows })
}
