// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::analytics::DASHBOARD_MONTHS;
use crate::analytics::breakdown::by_category;
use crate::analytics::category::{color_for, display_name, normalize};
use crate::models::{Transaction, TransactionType};
use crate::utils::{month_start_back, round_whole, same_month};

const STACKED_TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyAggregate {
    pub year: i32,
    pub month: u32, // 1..=12
    pub income: Decimal,
    pub expenses: Decimal,
}

impl MonthlyAggregate {
    pub fn empty(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
        }
    }

    pub fn key(&self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }

    fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn label(&self) -> String {
        self.first_day()
            .map(|d| d.format("%b").to_string())
            .unwrap_or_default()
    }

    pub fn long_label(&self) -> String {
        self.first_day()
            .map(|d| d.format("%B").to_string())
            .unwrap_or_default()
    }

    pub fn net(&self) -> Decimal {
        self.income - self.expenses
    }

    pub fn has_data(&self) -> bool {
        !self.income.is_zero() || !self.expenses.is_zero()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        same_month(date, self.year, self.month)
    }

    fn add(&mut self, t: &Transaction) {
        match t.r#type {
            TransactionType::Income => self.income += t.amount,
            TransactionType::Expense => self.expenses += t.amount,
        }
    }

    fn rounded(mut self) -> Self {
        self.income = round_whole(self.income);
        self.expenses = round_whole(self.expenses);
        self
    }
}

/// Exactly `month_count` consecutive months ending with `today`'s month,
/// oldest first. Months without transactions are zero-filled.
pub fn monthly_series(
    transactions: &[Transaction],
    month_count: u32,
    today: NaiveDate,
) -> Vec<MonthlyAggregate> {
    (0..month_count)
        .rev()
        .map(|back| {
            let start = month_start_back(today, back);
            let (year, month) = (start.year(), start.month());
            let mut agg = MonthlyAggregate::empty(year, month);
            for t in transactions.iter().filter(|t| same_month(t.date, year, month)) {
                agg.add(t);
            }
            agg.rounded()
        })
        .collect()
}

pub fn available_monthly_series(transactions: &[Transaction]) -> Vec<MonthlyAggregate> {
    let mut map: BTreeMap<(i32, u32), MonthlyAggregate> = BTreeMap::new();
    for t in transactions {
        let key = (t.date.year(), t.date.month());
        map.entry(key)
            .or_insert_with(|| MonthlyAggregate::empty(key.0, key.1))
            .add(t);
    }
    map.into_values().map(MonthlyAggregate::rounded).collect()
}

pub fn transactions_in_month<'a>(
    transactions: &'a [Transaction],
    aggregate: &MonthlyAggregate,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|t| aggregate.contains(t.date))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySeries {
    pub category: String,
    pub label: String,
    pub color: &'static str,
    pub values: Vec<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedSeries {
    pub months: Vec<String>,
    pub series: Vec<CategorySeries>,
}

pub fn stacked_category_series(transactions: &[Transaction], today: NaiveDate) -> StackedSeries {
    let window: Vec<NaiveDate> = (0..DASHBOARD_MONTHS)
        .rev()
        .map(|back| month_start_back(today, back))
        .collect();

    let top = by_category(transactions, TransactionType::Expense);
    let series = top
        .into_iter()
        .take(STACKED_TOP_N)
        .enumerate()
        .map(|(idx, entry)| {
            let values: Vec<Decimal> = window
                .iter()
                .map(|start| {
                    transactions
                        .iter()
                        .filter(|t| t.is_expense())
                        .filter(|t| same_month(t.date, start.year(), start.month()))
                        .filter(|t| normalize(&t.category) == entry.category)
                        .map(|t| t.amount)
                        .sum::<Decimal>()
                })
                .collect();
            CategorySeries {
                label: display_name(&entry.category),
                color: color_for(&entry.category, idx),
                category: entry.category,
                values,
            }
        })
        .collect();

    StackedSeries {
        months: window.iter().map(|d| d.format("%b").to_string()).collect(),
        series,
    }
}
