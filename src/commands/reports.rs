// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::analytics::breakdown::{payment_method_split, percentage_of, totals};
use crate::analytics::category::color_for;
use crate::analytics::monthly::stacked_category_series;
use crate::analytics::{
    DASHBOARD_MONTHS, available_monthly_series, by_category, monthly_series, trend_deltas,
    week_spend,
};
use crate::commands::Session;
use crate::models::TransactionType;
use crate::utils::{capitalize, fmt_money, maybe_print_json, pretty_table};

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("monthly", sub)) => monthly(session, sub)?,
        Some(("statements", sub)) => statements(session, sub)?,
        Some(("categories", sub)) => categories(session, sub)?,
        Some(("stacked", sub)) => stacked(session, sub)?,
        Some(("methods", sub)) => methods(session, sub)?,
        Some(("week", sub)) => week(session, sub)?,
        Some(("trends", sub)) => trends(session, sub)?,
        Some(("totals", sub)) => show_totals(session, sub)?,
        _ => {}
    }
    Ok(())
}

fn json_or<T: Serialize>(sub: &clap::ArgMatches, v: &T) -> Result<bool> {
    maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), v)
}

fn monthly(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let months = sub
        .get_one::<u32>("months")
        .copied()
        .unwrap_or(DASHBOARD_MONTHS);
    let series = monthly_series(&session.snapshot()?, months, session.today);
    if !json_or(sub, &series)? {
        let rows = series
            .iter()
            .map(|m| {
                vec![
                    m.key(),
                    m.label(),
                    m.income.to_string(),
                    m.expenses.to_string(),
                    m.net().to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Label", "Income", "Expenses", "Net"], rows)
        );
    }
    Ok(())
}

fn statements(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let series = available_monthly_series(&session.snapshot()?);
    if !json_or(sub, &series)? {
        if series.is_empty() {
            println!("No statements yet. Add transactions to generate monthly summaries.");
            return Ok(());
        }
        let rows = series
            .iter()
            .map(|m| {
                let net = m.net();
                let sign = if net.is_sign_negative() { "-" } else { "+" };
                vec![
                    format!("{} {}", m.long_label(), m.year),
                    m.income.to_string(),
                    format!("-{}", m.expenses),
                    format!("{}{}", sign, net.abs()),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expenses", "Net"], rows)
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub total: String,
    pub percent: i64,
    pub color: &'static str,
}

pub fn category_rows(session: &Session, sub: &clap::ArgMatches) -> Result<Vec<CategoryRow>> {
    let r#type = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<TransactionType>())
        .transpose()?
        .unwrap_or(TransactionType::Expense);
    let entries = by_category(&session.snapshot()?, r#type);
    let grand: Decimal = entries.iter().map(|e| e.total).sum();
    Ok(entries
        .iter()
        .enumerate()
        .map(|(idx, e)| CategoryRow {
            category: capitalize(&e.category),
            total: format!("{:.2}", e.total),
            percent: percentage_of(e.total, grand),
            color: color_for(&e.category, idx),
        })
        .collect())
}

fn categories(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let data = category_rows(session, sub)?;
    if !json_or(sub, &data)? {
        let rows = data
            .into_iter()
            .map(|r| vec![r.category, r.total, format!("{}%", r.percent), r.color.into()])
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Total", "Share", "Color"], rows)
        );
    }
    Ok(())
}

fn stacked(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let stacked = stacked_category_series(&session.snapshot()?, session.today);
    if !json_or(sub, &stacked)? {
        let mut headers = vec!["Category"];
        headers.extend(stacked.months.iter().map(|m| m.as_str()));
        let rows = stacked
            .series
            .iter()
            .map(|s| {
                let mut row = vec![s.label.clone()];
                row.extend(s.values.iter().map(|v| format!("{:.2}", v)));
                row
            })
            .collect();
        println!("{}", pretty_table(&headers, rows));
    }
    Ok(())
}

fn methods(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let split = payment_method_split(&session.snapshot()?);
    if !json_or(sub, &split)? {
        let grand: Decimal = split.iter().map(|s| s.total).sum();
        let rows = split
            .iter()
            .map(|s| {
                vec![
                    capitalize(s.method.as_str()),
                    format!("{:.2}", s.total),
                    format!("{}%", percentage_of(s.total, grand)),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Method", "Spent", "Share"], rows));
    }
    Ok(())
}

fn week(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let w = week_spend(&session.snapshot()?, session.today);
    if !json_or(sub, &w)? {
        println!(
            "{}",
            pretty_table(
                &["This week", "Previous week", "Change"],
                vec![vec![
                    format!("{:.2}", w.current_week_total),
                    format!("{:.2}", w.previous_week_total),
                    format!("{:.1}%", w.delta_percent),
                ]],
            )
        );
    }
    Ok(())
}

fn trends(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let series = monthly_series(&session.snapshot()?, DASHBOARD_MONTHS, session.today);
    let d = trend_deltas(&series);
    if !json_or(sub, &d)? {
        println!(
            "{}",
            pretty_table(
                &["Income Δ", "Expense Δ", "Turnover", "Prev Turnover", "Turnover Δ"],
                vec![vec![
                    format!("{:.1}%", d.income_delta_percent),
                    format!("{:.1}%", d.expense_delta_percent),
                    d.turnover_now.to_string(),
                    d.turnover_previous.to_string(),
                    format!("{:.1}%", d.turnover_delta_percent),
                ]],
            )
        );
    }
    Ok(())
}

fn show_totals(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let t = totals(&session.snapshot()?);
    if !json_or(sub, &t)? {
        let ccy = session.settings()?.currency;
        println!(
            "{}",
            pretty_table(
                &["Income", "Expenses", "Balance"],
                vec![vec![
                    fmt_money(&t.income, &ccy),
                    fmt_money(&t.expenses, &ccy),
                    fmt_money(&t.balance, &ccy),
                ]],
            )
        );
    }
    Ok(())
}
