//! Account and transaction records for the finance simulator.
//!
//! Amounts are integer cents to keep arithmetic exact.

use crate::model::record::{Dependent, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type AccountNumber = String;
pub type TransactionId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub number: AccountNumber,
    pub owner: String,
    pub balance_cents: i64,
}

impl Account {
    pub fn new(number: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            owner: owner.into(),
            balance_cents: 0,
        }
    }
}

impl Record for Account {
    type Key = AccountNumber;

    fn key(&self) -> AccountNumber {
        self.number.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

/// Immutable ledger entry. Created only after the balance change succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub account: AccountNumber,
    pub kind: TransactionKind,
    pub amount_cents: i64,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn new(account: impl Into<String>, kind: TransactionKind, amount_cents: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            account: account.into(),
            kind,
            amount_cents,
            timestamp: Utc::now(),
        }
    }
}

impl Record for Transaction {
    type Key = TransactionId;

    fn key(&self) -> TransactionId {
        self.id
    }
}

impl Dependent for Transaction {
    type OwnerKey = AccountNumber;

    fn owner_key(&self) -> AccountNumber {
        self.account.clone()
    }
}
