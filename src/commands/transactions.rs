// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use serde::Serialize;

use crate::analytics::breakdown::recent;
use crate::analytics::suggest::{infer_type, suggest_description, type_history};
use crate::commands::Session;
use crate::models::{NewTransaction, PaymentMethod, Transaction, TransactionType};
use crate::store::RecordStore;
use crate::utils::{
    maybe_print_json, parse_date, parse_decimal, parse_month, pretty_table, required, same_month,
};

pub const SALARY_CATEGORY: &str = "Salary";

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let t = add(session, sub)?;
            println!(
                "Recorded {} {} '{}' on {} ({})",
                t.r#type,
                t.amount,
                t.category,
                t.date,
                t.description.as_deref().unwrap_or("")
            );
        }
        Some(("salary", sub)) => {
            let t = add_salary(session, sub)?;
            println!("Recorded salary {} on {}", t.amount, t.date);
        }
        Some(("list", sub)) => list(session, sub)?,
        Some(("recent", sub)) => list_recent(session, sub)?,
        _ => {}
    }
    Ok(())
}

fn entry_date(session: &Session, sub: &clap::ArgMatches) -> Result<NaiveDate> {
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => session.today,
    };
    if date > session.today {
        bail!("Date {} is in the future", date);
    }
    Ok(date)
}

pub fn add(session: &Session, sub: &clap::ArgMatches) -> Result<Transaction> {
    let amount = parse_decimal(required(sub, "amount")?)?;
    let category = required(sub, "category")?.trim().to_string();
    let date = entry_date(session, sub)?;
    let settings = session.settings()?;

    let r#type = match sub.get_one::<String>("type") {
        Some(s) => s.parse::<TransactionType>()?,
        None if settings.auto_suggest => {
            let history = type_history(&session.snapshot()?);
            infer_type(&category, &history).unwrap_or(TransactionType::Expense)
        }
        None => TransactionType::Expense,
    };
    let description = sub
        .get_one::<String>("description")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            settings
                .auto_suggest
                .then(|| suggest_description(&category, date, amount, &settings.currency))
        });
    let method = sub
        .get_one::<String>("method")
        .map(|s| PaymentMethod::parse_lenient(s))
        .unwrap_or_default();

    let new = NewTransaction {
        amount,
        category,
        r#type,
        date,
        payment_method: method,
        description,
    };
    Ok(session.store().create_transaction(&session.user, new)?)
}

pub fn add_salary(session: &Session, sub: &clap::ArgMatches) -> Result<Transaction> {
    let amount = parse_decimal(required(sub, "amount")?)?;
    let date = entry_date(session, sub)?;
    let currency = session.settings()?.currency;
    let description = sub
        .get_one::<String>("description")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| suggest_description(SALARY_CATEGORY, date, amount, &currency));
    let new = NewTransaction {
        amount,
        category: SALARY_CATEGORY.to_string(),
        r#type: TransactionType::Income,
        date,
        payment_method: PaymentMethod::Bank,
        description: Some(description),
    };
    Ok(session.store().create_transaction(&session.user, new)?)
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub r#type: String,
    pub category: String,
    pub method: String,
    pub amount: String,
    pub description: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        Self {
            id: t.id,
            date: t.date.to_string(),
            r#type: t.r#type.to_string(),
            category: t.category.clone(),
            method: t.payment_method.to_string(),
            amount: format!("{:.2}", t.amount),
            description: t.description.clone().unwrap_or_default(),
        }
    }
}

fn print_rows(sub: &clap::ArgMatches, data: &[TransactionRow]) -> Result<()> {
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.r#type.clone(),
                    r.category.clone(),
                    r.method.clone(),
                    r.amount.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Category", "Method", "Amount", "Description"],
                rows
            )
        );
    }
    Ok(())
}

pub fn query_rows(session: &Session, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let snapshot = session.snapshot()?;
    let month = sub
        .get_one::<String>("month")
        .map(|s| parse_month(s))
        .transpose()?;
    let r#type = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<TransactionType>())
        .transpose()?;
    let limit = sub.get_one::<usize>("limit").copied();

    let rows = recent(&snapshot, snapshot.len())
        .into_iter()
        .filter(|t| month.is_none_or(|(y, m)| same_month(t.date, y, m)))
        .filter(|t| r#type.is_none_or(|ty| t.r#type == ty))
        .take(limit.unwrap_or(usize::MAX))
        .map(TransactionRow::from)
        .collect();
    Ok(rows)
}

fn list(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(session, sub)?;
    print_rows(sub, &data)
}

fn list_recent(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let snapshot = session.snapshot()?;
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(12);
    let data: Vec<TransactionRow> = recent(&snapshot, limit)
        .into_iter()
        .map(TransactionRow::from)
        .collect();
    print_rows(sub, &data)
}
