// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use ledgerlens::commands::{self, Session};
use ledgerlens::{cli, db};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;
    let session = Session::from_matches(&conn, &matches, chrono::Local::now().date_naive())?;

    match matches.subcommand() {
        Some(("init", _)) => {
            session.store().ensure_user(&session.user)?;
            println!(
                "Database initialized at {} (user '{}')",
                db::db_path()?.display(),
                session.user
            );
        }
        Some(("user", sub)) => commands::users::handle(&session, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&session, sub)?,
        Some(("report", sub)) => commands::reports::handle(&session, sub)?,
        Some(("envelope", sub)) => commands::envelopes::handle(&session, sub)?,
        Some(("plan", sub)) => commands::plan::handle(&session, sub)?,
        Some(("recap", sub)) => commands::recap::handle(&session, sub)?,
        Some(("outlook", sub)) => commands::outlook::handle(&session, sub)?,
        Some(("note", sub)) => commands::notes::handle(&session, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&session, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&session)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
