// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::commands::Session;
use crate::utils::{pretty_table, required};

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = required(sub, "name")?.trim();
            session.store().register_user(name)?;
            println!("Added user {}", name);
        }
        Some(("list", _)) => {
            let rows = session
                .store()
                .list_users()?
                .into_iter()
                .map(|name| {
                    let marker = if name == session.user { "*" } else { "" };
                    vec![name, marker.to_string()]
                })
                .collect();
            println!("{}", pretty_table(&["User", "Active"], rows));
        }
        _ => {}
    }
    Ok(())
}
