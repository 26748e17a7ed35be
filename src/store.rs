// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{
    MAX_AMOUNT, ModelError, NewTransaction, Note, PaymentMethod, Transaction, TransactionType,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unauthorized: unknown user '{0}'")]
    Unauthorized(String),
    #[error("User '{0}' already exists")]
    UserExists(String),
    #[error("Note {0} not found")]
    NoteNotFound(i64),
    #[error(transparent)]
    Invalid(#[from] ModelError),
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

pub trait RecordStore {
    fn list_transactions(&self, user: &str) -> Result<Vec<Transaction>, StoreError>;
    fn create_transaction(
        &self,
        user: &str,
        new: NewTransaction,
    ) -> Result<Transaction, StoreError>;
}

pub struct SqliteStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn user_id(&self, user: &str) -> Result<i64, StoreError> {
        self.conn
            .query_row(
                "SELECT id FROM users WHERE name=?1",
                params![user.trim()],
                |r| r.get(0),
            )
            .optional()?
            .ok_or_else(|| StoreError::Unauthorized(user.to_string()))
    }

    pub fn register_user(&self, name: &str) -> Result<i64, StoreError> {
        let name = name.trim();
        if self.user_id(name).is_ok() {
            return Err(StoreError::UserExists(name.to_string()));
        }
        self.conn
            .execute("INSERT INTO users(name) VALUES (?1)", params![name])?;
        tracing::info!(user = name, "registered user");
        Ok(self.conn.last_insert_rowid())
    }

    pub fn ensure_user(&self, name: &str) -> Result<i64, StoreError> {
        match self.user_id(name) {
            Ok(id) => Ok(id),
            Err(StoreError::Unauthorized(_)) => self.register_user(name),
            Err(e) => Err(e),
        }
    }

    pub fn list_users(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT name FROM users ORDER BY name")?;
        let rows = stmt.query_map([], |r| r.get::<_, String>(0))?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    pub fn list_notes(&self, user: &str) -> Result<Vec<Note>, StoreError> {
        let uid = self.user_id(user)?;
        let mut stmt = self.conn.prepare(
            "SELECT id, title, type, amount, date FROM notes WHERE user_id=?1 ORDER BY date, id",
        )?;
        let rows = stmt.query_map(params![uid], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, String>(3)?,
                r.get::<_, String>(4)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (id, title, ty, amount, date) = row?;
            match parse_fields(&ty, &amount, &date) {
                Some((r#type, amount, date)) => out.push(Note {
                    id,
                    title,
                    r#type,
                    amount,
                    date,
                }),
                None => tracing::warn!(id, "skipping malformed note"),
            }
        }
        Ok(out)
    }

    pub fn add_note(
        &self,
        user: &str,
        title: &str,
        r#type: TransactionType,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<Note, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ModelError::EmptyTitle.into());
        }
        if amount <= Decimal::ZERO {
            return Err(ModelError::NonPositiveAmount(amount).into());
        }
        if amount > MAX_AMOUNT {
            return Err(ModelError::AmountTooLarge(amount).into());
        }
        let uid = self.user_id(user)?;
        self.conn.execute(
            "INSERT INTO notes(user_id, title, type, amount, date) VALUES (?1,?2,?3,?4,?5)",
            params![uid, title, r#type.as_str(), amount.to_string(), date],
        )?;
        Ok(Note {
            id: self.conn.last_insert_rowid(),
            title: title.to_string(),
            r#type,
            amount,
            date,
        })
    }

    pub fn remove_note(&self, user: &str, id: i64) -> Result<(), StoreError> {
        let uid = self.user_id(user)?;
        let n = self.conn.execute(
            "DELETE FROM notes WHERE id=?1 AND user_id=?2",
            params![id, uid],
        )?;
        if n == 0 {
            return Err(StoreError::NoteNotFound(id));
        }
        Ok(())
    }
}

/// Parses the stored text columns; `None` means the row is unusable.
fn parse_fields(ty: &str, amount: &str, date: &str) -> Option<(TransactionType, Decimal, NaiveDate)> {
    let r#type = ty.parse::<TransactionType>().ok()?;
    let amount = amount.parse::<Decimal>().ok()?;
    if amount < Decimal::ZERO || amount > MAX_AMOUNT {
        return None;
    }
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    Some((r#type, amount, date))
}

impl RecordStore for SqliteStore<'_> {
    fn list_transactions(&self, user: &str) -> Result<Vec<Transaction>, StoreError> {
        let uid = self.user_id(user)?;
        let mut stmt = self.conn.prepare(
            "SELECT id, amount, category, type, date, payment_method, description
             FROM transactions WHERE user_id=?1 ORDER BY date, id",
        )?;
        let rows = stmt.query_map(params![uid], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, String>(3)?,
                r.get::<_, String>(4)?,
                r.get::<_, String>(5)?,
                r.get::<_, Option<String>>(6)?,
            ))
        })?;

        let mut out = Vec::new();
        let mut skipped = 0usize;
        for row in rows {
            let (id, amount, category, ty, date, method, description) = row?;
            match parse_fields(&ty, &amount, &date) {
                Some((r#type, amount, date)) => out.push(Transaction {
                    id,
                    amount,
                    category,
                    r#type,
                    date,
                    payment_method: PaymentMethod::parse_lenient(&method),
                    description,
                }),
                None => {
                    skipped += 1;
                    tracing::warn!(
                        id,
                        amount = %amount,
                        date = %date,
                        kind = %ty,
                        "skipping malformed transaction"
                    );
                }
            }
        }
        tracing::debug!(user, loaded = out.len(), skipped, "loaded transactions");
        Ok(out)
    }

    fn create_transaction(
        &self,
        user: &str,
        new: NewTransaction,
    ) -> Result<Transaction, StoreError> {
        new.validate()?;
        let uid = self.user_id(user)?;
        let category = new.category.trim().to_string();
        self.conn.execute(
            "INSERT INTO transactions(user_id, date, amount, category, type, payment_method, description)
             VALUES (?1,?2,?3,?4,?5,?6,?7)",
            params![
                uid,
                new.date,
                new.amount.to_string(),
                category,
                new.r#type.as_str(),
                new.payment_method.as_str(),
                new.description,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::info!(user, id, "created transaction");
        Ok(NewTransaction { category, ..new }.into_transaction(id))
    }
}
