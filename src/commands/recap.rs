// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::analytics::recap::recaps;
use crate::commands::Session;
use crate::utils::maybe_print_json;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    let currency = session.settings()?.currency;
    let all = recaps(&session.snapshot()?, &currency);
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &all)? {
        return Ok(());
    }
    if all.is_empty() {
        println!("No recaps yet. Add transactions to see a monthly summary.");
        return Ok(());
    }
    // Newest month on top.
    for r in all.iter().rev() {
        println!("{}\n  {}\n", r.month, r.text);
    }
    Ok(())
}
