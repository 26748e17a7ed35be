// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::analytics::{BudgetSummary, budget_envelopes};
use crate::commands::Session;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("status", sub)) => status(session, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn summary(session: &Session) -> Result<Option<BudgetSummary>> {
    let settings = session.settings()?;
    Ok(budget_envelopes(&session.snapshot()?, &settings, session.today))
}

fn status(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let summary = summary(session)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &summary)? {
        return Ok(());
    }
    let Some(summary) = summary else {
        println!("No salary recorded this month. Add one with `tx salary` to fund envelopes.");
        return Ok(());
    };
    let ccy = session.settings()?.currency;
    println!("Salary this month: {}", fmt_money(&summary.total_salary, &ccy));
    let rows = summary
        .rows
        .iter()
        .map(|r| {
            vec![
                r.label.clone(),
                format!("{}%", (r.percentage * Decimal::ONE_HUNDRED).normalize()),
                fmt_money(&r.allocated, &ccy),
                fmt_money(&r.spent, &ccy),
                fmt_money(&r.remaining, &ccy),
                format!("{}%", r.percent_used),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Envelope", "Share", "Allocated", "Spent", "Remaining", "Used"],
            rows
        )
    );
    Ok(())
}
