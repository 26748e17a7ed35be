// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};

use crate::commands::Session;
use crate::commands::transactions::TransactionRow;
use crate::utils::{parse_month, required, same_month};

pub const STATEMENT_HEADER: [&str; 6] =
    ["Date", "Type", "Category", "Method", "Amount", "Description"];

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("statement", sub)) => {
            let out = required(sub, "out")?;
            let n = export_statement(
                session,
                required(sub, "month")?,
                out,
                sub.get_one::<String>("format").map(|s| s.as_str()).unwrap_or("csv"),
            )?;
            println!("Exported {} transactions to {}", n, out);
        }
        _ => {}
    }
    Ok(())
}

pub fn export_statement(session: &Session, month: &str, out: &str, format: &str) -> Result<usize> {
    let (year, mon) = parse_month(month)?;
    let rows: Vec<TransactionRow> = session
        .snapshot()?
        .iter()
        .filter(|t| same_month(t.date, year, mon))
        .map(TransactionRow::from)
        .collect();

    match format.to_lowercase().as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Create statement file {}", out))?;
            wtr.write_record(STATEMENT_HEADER)?;
            for r in &rows {
                wtr.write_record([
                    &r.date,
                    &r.r#type,
                    &r.category,
                    &r.method,
                    &r.amount,
                    &r.description,
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)
                .with_context(|| format!("Write statement file {}", out))?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    tracing::info!(month, rows = rows.len(), out, "exported statement");
    Ok(rows.len())
}
