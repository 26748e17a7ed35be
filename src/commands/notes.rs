// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::commands::Session;
use crate::models::TransactionType;
use crate::utils::{maybe_print_json, parse_date, parse_decimal, pretty_table, required};

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    let store = session.store();
    match m.subcommand() {
        Some(("add", sub)) => {
            let r#type = required(sub, "type")?.parse::<TransactionType>()?;
            let amount = parse_decimal(required(sub, "amount")?)?;
            let date = parse_date(required(sub, "date")?)?;
            let note = store.add_note(&session.user, required(sub, "title")?, r#type, amount, date)?;
            println!("Added note {} ({} {} on {})", note.id, note.r#type, note.amount, note.date);
        }
        Some(("list", sub)) => {
            let notes = store.list_notes(&session.user)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &notes)? {
                let rows = notes
                    .iter()
                    .map(|n| {
                        let when = if n.date < session.today { "past" } else { "upcoming" };
                        vec![
                            n.id.to_string(),
                            n.date.to_string(),
                            n.title.clone(),
                            n.r#type.to_string(),
                            format!("{:.2}", n.amount),
                            when.to_string(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Id", "Date", "Title", "Type", "Amount", "When"], rows)
                );
            }
        }
        Some(("rm", sub)) => {
            let id: i64 = required(sub, "id")?.trim().parse()?;
            store.remove_note(&session.user, id)?;
            println!("Removed note {}", id);
        }
        _ => {}
    }
    Ok(())
}
