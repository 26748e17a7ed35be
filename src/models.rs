// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted amount. Keeps every sum and ratio the analytics take
/// within `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0); // 1_000_000_000_000

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("Invalid transaction type '{0}', expected income or expense")]
    InvalidType(String),
    #[error("Amount must be greater than 0, got {0}")]
    NonPositiveAmount(Decimal),
    #[error("Amount must not exceed 1000000000000, got {0}")]
    AmountTooLarge(Decimal),
    #[error("Category must not be empty")]
    EmptyCategory,
    #[error("Title must not be empty")]
    EmptyTitle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(ModelError::InvalidType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Cash,
    Bank,
    Bill,
    Upi,
    Wallet,
    #[default]
    Other,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 7] = [
        PaymentMethod::Card,
        PaymentMethod::Cash,
        PaymentMethod::Bank,
        PaymentMethod::Bill,
        PaymentMethod::Upi,
        PaymentMethod::Wallet,
        PaymentMethod::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
            PaymentMethod::Bank => "bank",
            PaymentMethod::Bill => "bill",
            PaymentMethod::Upi => "upi",
            PaymentMethod::Wallet => "wallet",
            PaymentMethod::Other => "other",
        }
    }

    pub fn parse_lenient(s: &str) -> PaymentMethod {
        let s = s.trim().to_lowercase();
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .unwrap_or_default()
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub amount: Decimal, // always a positive magnitude
    pub category: String,
    pub r#type: TransactionType,
    pub date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub description: Option<String>,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.r#type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.r#type == TransactionType::Expense
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: Decimal,
    pub category: String,
    pub r#type: TransactionType,
    pub date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub description: Option<String>,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.amount <= Decimal::ZERO {
            return Err(ModelError::NonPositiveAmount(self.amount));
        }
        if self.amount > MAX_AMOUNT {
            return Err(ModelError::AmountTooLarge(self.amount));
        }
        if self.category.trim().is_empty() {
            return Err(ModelError::EmptyCategory);
        }
        Ok(())
    }

    pub fn into_transaction(self, id: i64) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            category: self.category,
            r#type: self.r#type,
            date: self.date,
            payment_method: self.payment_method,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub r#type: TransactionType,
    pub amount: Decimal,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub id: String,
    pub label: String,
    pub percentage: Decimal, // fraction of salary, 0.5 == 50%
    pub color: String,
}

impl Envelope {
    pub fn new(id: &str, label: &str, percentage: Decimal, color: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            percentage,
            color: color.to_string(),
        }
    }
}
