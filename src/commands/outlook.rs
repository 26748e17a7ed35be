// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::analytics::breakdown::totals;
use crate::analytics::outlook::{insights, notes_impact, projection};
use crate::analytics::{DASHBOARD_MONTHS, by_category, monthly_series};
use crate::commands::Session;
use crate::models::TransactionType;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("projection", sub)) => show_projection(session, sub)?,
        Some(("insights", sub)) => show_insights(session, sub)?,
        _ => {}
    }
    Ok(())
}

fn show_projection(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let tx = session.snapshot()?;
    let series = monthly_series(&tx, DASHBOARD_MONTHS, session.today);
    let p = projection(&series, &by_category(&tx, TransactionType::Expense));
    let notes = session.store().list_notes(&session.user)?;
    let impact = notes_impact(&notes, totals(&tx).balance, session.today);

    let out = serde_json::json!({ "projection": p, "notes": impact });
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &out)? {
        return Ok(());
    }
    let ccy = session.settings()?.currency;
    let money = |d: Decimal| fmt_money(&d, &ccy);
    let rows = vec![
        vec!["Current pace".into(), money(p.income), money(p.expenses), money(p.net)],
        vec![
            format!("Trim {} by 15%", p.trim_category),
            money(p.income),
            money(p.trimmed_expenses),
            money(p.trimmed_net),
        ],
        vec![
            "Income +5% / month".into(),
            money(p.grown_income),
            money(p.expenses),
            money(p.grown_net),
        ],
    ];
    println!("Next 3 months");
    println!(
        "{}",
        pretty_table(&["Scenario", "Income", "Expenses", "Net"], rows)
    );
    println!(
        "Planned notes: +{} / -{}, projected balance {}",
        money(impact.incoming),
        money(impact.outgoing),
        money(impact.projected_balance)
    );
    Ok(())
}

fn show_insights(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let tx = session.snapshot()?;
    let series = monthly_series(&tx, DASHBOARD_MONTHS, session.today);
    let i = insights(&tx, &series, &by_category(&tx, TransactionType::Expense));
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &i)? {
        return Ok(());
    }
    let ccy = session.settings()?.currency;
    let rows = vec![
        vec!["Avg monthly income".into(), fmt_money(&i.avg_monthly_income, &ccy)],
        vec!["Avg monthly expenses".into(), fmt_money(&i.avg_monthly_expenses, &ccy)],
        vec!["Savings rate".into(), format!("{}%", i.savings_rate_percent)],
        vec![
            "Top category".into(),
            format!("{} ({}%)", i.top_category, i.top_category_percent),
        ],
        vec![
            "Surplus / deficit months".into(),
            format!("{} / {}", i.surplus_months, i.deficit_months),
        ],
    ];
    println!("{}", pretty_table(&["Insight", "Value"], rows));
    Ok(())
}
