// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::analytics::breakdown::{CategoryTotal, percentage_of, totals};
use crate::analytics::category::display_name;
use crate::analytics::monthly::MonthlyAggregate;
use crate::analytics::recap::NO_CATEGORY;
use crate::models::{Note, Transaction, TransactionType};
use crate::utils::{round_percent, round_whole};

const PROJECTION_MONTHS: i64 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
    pub trim_category: String,
    pub trim_saving: Decimal,
    pub trimmed_expenses: Decimal,
    pub trimmed_net: Decimal,
    pub grown_income: Decimal,
    pub grown_net: Decimal,
}

fn active_months(series: &[MonthlyAggregate]) -> Decimal {
    let n = series.iter().filter(|m| m.has_data()).count().max(1);
    Decimal::from(n)
}

pub fn projection(series: &[MonthlyAggregate], expense_by_category: &[CategoryTotal]) -> Projection {
    let base = active_months(series);
    let active = series.iter().filter(|m| m.has_data());
    let avg_income = active.clone().map(|m| m.income).sum::<Decimal>() / base;
    let avg_expense = active.map(|m| m.expenses).sum::<Decimal>() / base;
    let months = Decimal::from(PROJECTION_MONTHS);

    let income = round_whole(avg_income * months);
    let expenses = round_whole(avg_expense * months);

    let (trim_category, top_total) = match expense_by_category.first() {
        Some(c) => (display_name(&c.category), c.total),
        None => (NO_CATEGORY.to_string(), Decimal::ZERO),
    };
    let trim_saving = round_whole(top_total / base * Decimal::new(15, 2) * months);
    let trimmed_expenses = (expenses - trim_saving).max(Decimal::ZERO);

    let growth = Decimal::new(105, 2);
    let grown_income = round_whole(avg_income * (growth + growth * growth + growth * growth * growth));

    Projection {
        income,
        expenses,
        net: income - expenses,
        trim_category,
        trim_saving,
        trimmed_expenses,
        trimmed_net: income - trimmed_expenses,
        grown_income,
        grown_net: grown_income - expenses,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub avg_monthly_income: Decimal,
    pub avg_monthly_expenses: Decimal,
    pub savings_rate_percent: i64,
    pub top_category: String,
    pub top_category_percent: i64,
    pub surplus_months: usize,
    pub deficit_months: usize,
}

pub fn insights(
    transactions: &[Transaction],
    series: &[MonthlyAggregate],
    expense_by_category: &[CategoryTotal],
) -> Insights {
    let all = totals(transactions);
    let base = active_months(series);
    let avg_income = round_whole(all.income / base);
    let avg_expenses = round_whole(all.expenses / base);
    let savings_rate = if avg_income.is_zero() {
        0
    } else {
        round_percent((avg_income - avg_expenses) / avg_income * Decimal::ONE_HUNDRED)
    };

    let (top_category, top_category_percent) = match expense_by_category.first() {
        Some(c) => (display_name(&c.category), percentage_of(c.total, all.expenses)),
        None => (NO_CATEGORY.to_string(), 0),
    };
    let surplus_months = series.iter().filter(|m| m.net() >= Decimal::ZERO).count();

    Insights {
        avg_monthly_income: avg_income,
        avg_monthly_expenses: avg_expenses,
        savings_rate_percent: savings_rate,
        top_category,
        top_category_percent,
        surplus_months,
        deficit_months: series.len() - surplus_months,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotesImpact {
    pub incoming: Decimal,
    pub outgoing: Decimal,
    pub projected_balance: Decimal,
}

pub fn upcoming_notes(notes: &[Note], today: NaiveDate) -> Vec<&Note> {
    notes.iter().filter(|n| n.date >= today).collect()
}

pub fn notes_impact(notes: &[Note], balance: Decimal, today: NaiveDate) -> NotesImpact {
    let upcoming = upcoming_notes(notes, today);
    let sum = |ty: TransactionType| -> Decimal {
        upcoming
            .iter()
            .filter(|n| n.r#type == ty)
            .map(|n| n.amount)
            .sum()
    };
    let incoming = sum(TransactionType::Income);
    let outgoing = sum(TransactionType::Expense);
    NotesImpact {
        incoming,
        outgoing,
        projected_balance: balance + incoming - outgoing,
    }
}
