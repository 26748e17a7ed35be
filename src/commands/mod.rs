// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::Connection;

use crate::models::Transaction;
use crate::settings::{self, Settings};
use crate::store::{RecordStore, SqliteStore};
use crate::utils::parse_date;

pub mod doctor;
pub mod envelopes;
pub mod exporter;
pub mod notes;
pub mod outlook;
pub mod plan;
pub mod recap;
pub mod reports;
pub mod transactions;
pub mod users;

pub struct Session<'a> {
    pub conn: &'a Connection,
    pub user: String,
    pub today: NaiveDate,
}

impl<'a> Session<'a> {
    pub fn new(conn: &'a Connection, user: &str, today: NaiveDate) -> Self {
        Self {
            conn,
            user: user.trim().to_string(),
            today,
        }
    }

    pub fn from_matches(
        conn: &'a Connection,
        m: &clap::ArgMatches,
        fallback_today: NaiveDate,
    ) -> Result<Self> {
        let user = m
            .get_one::<String>("user")
            .map(|s| s.as_str())
            .unwrap_or(crate::cli::DEFAULT_USER);
        let today = match m.get_one::<String>("today") {
            Some(s) => parse_date(s)?,
            None => fallback_today,
        };
        Ok(Self::new(conn, user, today))
    }

    pub fn store(&self) -> SqliteStore<'a> {
        SqliteStore::new(self.conn)
    }

    pub fn snapshot(&self) -> Result<Vec<Transaction>> {
        self.store()
            .list_transactions(&self.user)
            .with_context(|| format!("Load transactions for '{}'", self.user))
    }

    pub fn settings(&self) -> Result<Settings> {
        settings::load(self.conn).context("Load settings")
    }
}
