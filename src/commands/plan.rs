// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use rust_decimal::Decimal;

use crate::analytics::category::{FALLBACK_PALETTE, display_name};
use crate::commands::Session;
use crate::models::Envelope;
use crate::settings::{self, Settings, default_salary_plan};
use crate::utils::{capitalize, maybe_print_json, parse_decimal, pretty_table, required};

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(session, sub)?,
        Some((name, sub)) => {
            let mut s = session.settings()?;
            apply(&mut s, name, sub)?;
            settings::save(session.conn, &s)?;
            let total = s.plan_total();
            if total != Decimal::ONE {
                tracing::warn!(%total, "salary plan does not add up to 100%");
                println!(
                    "Note: plan percentages add up to {}%, not 100%",
                    (total * Decimal::ONE_HUNDRED).normalize()
                );
            }
        }
        None => {}
    }
    Ok(())
}

pub fn apply(s: &mut Settings, name: &str, sub: &clap::ArgMatches) -> Result<()> {
    match name {
        "set" => {
            let id = required(sub, "id")?.trim().to_lowercase();
            let pct = parse_decimal(required(sub, "pct")?)?;
            let existing = s.salary_plan.iter().find(|e| e.id == id).cloned();
            let label = match sub.get_one::<String>("label") {
                Some(l) => l.trim().to_string(),
                None => existing
                    .as_ref()
                    .map(|e| e.label.clone())
                    .unwrap_or_else(|| capitalize(&id)),
            };
            let color = match sub.get_one::<String>("color") {
                Some(c) => c.trim().to_string(),
                None => existing.map(|e| e.color).unwrap_or_else(|| {
                    FALLBACK_PALETTE[s.salary_plan.len() % FALLBACK_PALETTE.len()].to_string()
                }),
            };
            s.upsert_envelope(Envelope::new(&id, &label, pct, &color))?;
            println!("Envelope {} set to {}%", label, (pct * Decimal::ONE_HUNDRED).normalize());
        }
        "rm" => {
            let removed = s.remove_envelope(required(sub, "id")?.trim())?;
            s.bucket_overrides.retain(|_, env| *env != removed.id);
            println!("Removed envelope {}", removed.label);
        }
        "reset" => {
            s.salary_plan = default_salary_plan();
            s.bucket_overrides.clear();
            println!("Salary plan reset to defaults");
        }
        "bucket" => {
            let category = required(sub, "category")?;
            let envelope = required(sub, "envelope")?.trim();
            s.set_bucket(category, envelope)?;
            println!("{} now counts against {}", display_name(category), envelope);
        }
        "currency" => {
            let code = required(sub, "code")?.trim().to_uppercase();
            if code.is_empty() {
                bail!("Currency code must not be empty");
            }
            println!("Currency set to {}", code);
            s.currency = code;
        }
        "suggest" => {
            s.auto_suggest = sub.get_one::<bool>("enabled").copied().unwrap_or(true);
            println!(
                "Suggestions {}",
                if s.auto_suggest { "enabled" } else { "disabled" }
            );
        }
        other => bail!("Unknown plan command '{}'", other),
    }
    Ok(())
}

fn show(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let s = session.settings()?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        return Ok(());
    }
    let rows = s
        .salary_plan
        .iter()
        .map(|e| {
            vec![
                e.id.clone(),
                e.label.clone(),
                format!("{}%", (e.percentage * Decimal::ONE_HUNDRED).normalize()),
                e.color.clone(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Id", "Label", "Share", "Color"], rows));
    if !s.bucket_overrides.is_empty() {
        let rows = s
            .bucket_overrides
            .iter()
            .map(|(cat, env)| vec![display_name(cat), env.clone()])
            .collect();
        println!("{}", pretty_table(&["Category", "Envelope"], rows));
    }
    println!(
        "Currency: {}  Suggestions: {}",
        s.currency,
        if s.auto_suggest { "on" } else { "off" }
    );
    Ok(())
}
