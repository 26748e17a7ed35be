// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analytics::category::{bucket_for, normalize};
use crate::models::Envelope;

pub const DEFAULT_CURRENCY: &str = "LKR";

const KEY_PLAN: &str = "salary_plan";
const KEY_BUCKETS: &str = "bucket_overrides";
const KEY_CURRENCY: &str = "currency";
const KEY_AUTO_SUGGEST: &str = "auto_suggest";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Envelope percentage must not be negative, got {0}")]
    NegativePercentage(Decimal),
    #[error("Envelope id must not be empty")]
    EmptyEnvelopeId,
    #[error("Envelope '{0}' not found in salary plan")]
    UnknownEnvelope(String),
    #[error("Corrupt setting '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
    #[error(transparent)]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub salary_plan: Vec<Envelope>,
    pub bucket_overrides: BTreeMap<String, String>,
    pub currency: String,
    pub auto_suggest: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            salary_plan: default_salary_plan(),
            bucket_overrides: BTreeMap::new(),
            currency: DEFAULT_CURRENCY.to_string(),
            auto_suggest: true,
        }
    }
}

pub fn default_salary_plan() -> Vec<Envelope> {
    vec![
        Envelope::new("needs", "Needs", Decimal::new(50, 2), "#16a34a"),
        Envelope::new("savings", "Savings", Decimal::new(20, 2), "#2563eb"),
        Envelope::new("investments", "Investments", Decimal::new(10, 2), "#f59e0b"),
        Envelope::new("education", "Education", Decimal::new(10, 2), "#a855f7"),
        Envelope::new("fun", "Fun", Decimal::new(5, 2), "#ec4899"),
        Envelope::new("giving", "Giving", Decimal::new(5, 2), "#ef4444"),
    ]
}

impl Settings {
    pub fn bucket_for(&self, category: &str) -> String {
        let key = normalize(category);
        match self.bucket_overrides.get(&key) {
            Some(id) => id.clone(),
            None => bucket_for(&key).to_string(),
        }
    }

    pub fn plan_total(&self) -> Decimal {
        self.salary_plan.iter().map(|e| e.percentage).sum()
    }

    pub fn upsert_envelope(&mut self, envelope: Envelope) -> Result<(), SettingsError> {
        if envelope.id.trim().is_empty() {
            return Err(SettingsError::EmptyEnvelopeId);
        }
        if envelope.percentage < Decimal::ZERO {
            return Err(SettingsError::NegativePercentage(envelope.percentage));
        }
        match self.salary_plan.iter_mut().find(|e| e.id == envelope.id) {
            Some(existing) => *existing = envelope,
            None => self.salary_plan.push(envelope),
        }
        Ok(())
    }

    pub fn remove_envelope(&mut self, id: &str) -> Result<Envelope, SettingsError> {
        let idx = self
            .salary_plan
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| SettingsError::UnknownEnvelope(id.to_string()))?;
        Ok(self.salary_plan.remove(idx))
    }

    pub fn set_bucket(&mut self, category: &str, envelope_id: &str) -> Result<(), SettingsError> {
        if !self.salary_plan.iter().any(|e| e.id == envelope_id) {
            return Err(SettingsError::UnknownEnvelope(envelope_id.to_string()));
        }
        self.bucket_overrides
            .insert(normalize(category), envelope_id.to_string());
        Ok(())
    }
}

fn get_raw(conn: &Connection, key: &str) -> Result<Option<String>, SettingsError> {
    let v = conn
        .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v)
}

fn set_raw(conn: &Connection, key: &str, value: &str) -> Result<(), SettingsError> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

fn decode<T: for<'de> Deserialize<'de>>(key: &str, raw: &str) -> Result<T, SettingsError> {
    serde_json::from_str(raw).map_err(|source| SettingsError::Corrupt {
        key: key.to_string(),
        source,
    })
}

pub fn load(conn: &Connection) -> Result<Settings, SettingsError> {
    let mut s = Settings::default();
    if let Some(raw) = get_raw(conn, KEY_PLAN)? {
        s.salary_plan = decode(KEY_PLAN, &raw)?;
    }
    if let Some(raw) = get_raw(conn, KEY_BUCKETS)? {
        s.bucket_overrides = decode(KEY_BUCKETS, &raw)?;
    }
    if let Some(ccy) = get_raw(conn, KEY_CURRENCY)? {
        s.currency = ccy;
    }
    if let Some(flag) = get_raw(conn, KEY_AUTO_SUGGEST)? {
        s.auto_suggest = flag != "false";
    }
    Ok(s)
}

pub fn save(conn: &Connection, s: &Settings) -> Result<(), SettingsError> {
    set_raw(conn, KEY_PLAN, &serde_json::to_string(&s.salary_plan)?)?;
    set_raw(conn, KEY_BUCKETS, &serde_json::to_string(&s.bucket_overrides)?)?;
    set_raw(conn, KEY_CURRENCY, &s.currency)?;
    set_raw(
        conn,
        KEY_AUTO_SUGGEST,
        if s.auto_suggest { "true" } else { "false" },
    )?;
    tracing::info!(envelopes = s.salary_plan.len(), "saved settings");
    Ok(())
}
