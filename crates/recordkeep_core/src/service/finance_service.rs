//! Toy finance transaction simulator.
//!
//! # Responsibility
//! - Keep account balances and an append-only transaction ledger.
//! - Answer per-account history through a rebuilt group index.
//!
//! # Invariants
//! - Balances never go negative.
//! - A ledger entry is appended only after its balance change succeeded.
//! - Balances never wrap: a credit past `i64::MAX` is rejected.
//! - `transfer` checks both accounts, available funds and the destination's
//!   headroom before touching either balance.

use crate::index::group_index::GroupIndex;
use crate::model::finance::{Account, Transaction, TransactionKind};
use crate::repo::keyed_repo::{MemoryRepository, RepoError, Repository};
use crate::repo::mutator::{non_negative, positive, ValidatedMutator};
use crate::service::logged;
use thiserror::Error;

const MODULE: &str = "finance";

pub type FinanceResult<T> = Result<T, FinanceError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinanceError {
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error(
        "insufficient funds in {account}: balance {balance_cents}, requested {requested_cents}"
    )]
    InsufficientFunds {
        account: String,
        balance_cents: i64,
        requested_cents: i64,
    },
    #[error("cannot transfer from {0} to itself")]
    SameAccount(String),
}

#[derive(Debug, Default)]
pub struct FinanceService {
    accounts: MemoryRepository<Account>,
    ledger: Vec<Transaction>,
    by_account: GroupIndex<Transaction>,
}

impl FinanceService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an account with a zero balance.
    pub fn open_account(&mut self, number: &str, owner: &str) -> FinanceResult<Account> {
        let account = Account::new(number, owner);
        let result = self
            .accounts
            .add(account.clone())
            .map(|()| account)
            .map_err(FinanceError::from);
        logged(MODULE, "account_open", number, result)
    }

    pub fn account(&self, number: &str) -> FinanceResult<Account> {
        Ok(self.accounts.get_by_id(&number.to_string())?)
    }

    pub fn accounts(&self) -> Vec<Account> {
        self.accounts.list_all()
    }

    pub fn deposit(&mut self, number: &str, amount_cents: i64) -> FinanceResult<Transaction> {
        let result = self.credit(number, amount_cents);
        logged(MODULE, "deposit", number, result)
    }

    pub fn withdraw(&mut self, number: &str, amount_cents: i64) -> FinanceResult<Transaction> {
        let result = self.withdraw_inner(number, amount_cents);
        logged(MODULE, "withdraw", number, result)
    }

    /// Moves funds between two distinct accounts.
    ///
    /// Returns the withdrawal and deposit entries, in that order.
    pub fn transfer(
        &mut self,
        from: &str,
        to: &str,
        amount_cents: i64,
    ) -> FinanceResult<(Transaction, Transaction)> {
        let result = self.transfer_inner(from, to, amount_cents);
        logged(MODULE, "transfer", format!("{from}->{to}"), result)
    }

    /// Ledger entries of `number` in the order they were recorded.
    pub fn history(&mut self, number: &str) -> FinanceResult<Vec<Transaction>> {
        let number = number.to_string();
        if !self.accounts.contains(&number) {
            return Err(RepoError::not_found(&number).into());
        }
        // Why: the ledger is append-only and the index is not maintained per
        // entry, so a lookup is only valid right after a rebuild.
        self.by_account.rebuild(self.ledger.iter().cloned());
        Ok(self.by_account.lookup(&number).to_vec())
    }

    /// Sum of all balances, widened so it cannot overflow.
    pub fn total_balance_cents(&self) -> i128 {
        self.accounts
            .iter()
            .map(|account| i128::from(account.balance_cents))
            .sum()
    }

    fn withdraw_inner(&mut self, number: &str, amount_cents: i64) -> FinanceResult<Transaction> {
        positive("amount_cents", amount_cents)?;
        self.ensure_funds(number, amount_cents)?;
        self.debit(number, amount_cents)
    }

    fn transfer_inner(
        &mut self,
        from: &str,
        to: &str,
        amount_cents: i64,
    ) -> FinanceResult<(Transaction, Transaction)> {
        positive("amount_cents", amount_cents)?;
        if from == to {
            return Err(FinanceError::SameAccount(from.to_string()));
        }
        self.ensure_funds(from, amount_cents)?;
        self.credited_balance(to, amount_cents)?;

        let withdrawal = self.debit(from, amount_cents)?;
        let deposit = self.credit(to, amount_cents)?;
        Ok((withdrawal, deposit))
    }

    fn ensure_funds(&self, number: &str, amount_cents: i64) -> FinanceResult<()> {
        let balance_cents = self.account(number)?.balance_cents;
        if balance_cents < amount_cents {
            return Err(FinanceError::InsufficientFunds {
                account: number.to_string(),
                balance_cents,
                requested_cents: amount_cents,
            });
        }
        Ok(())
    }

    /// Balance of `number` after crediting `amount_cents`, without applying it.
    fn credited_balance(&self, number: &str, amount_cents: i64) -> FinanceResult<i64> {
        positive("amount_cents", amount_cents)?;
        let balance_cents = self.account(number)?.balance_cents;
        balance_cents.checked_add(amount_cents).ok_or_else(|| {
            RepoError::invalid(
                "amount_cents",
                amount_cents,
                format!("overflows balance of {balance_cents}"),
            )
            .into()
        })
    }

    fn credit(&mut self, number: &str, amount_cents: i64) -> FinanceResult<Transaction> {
        let balance_cents = self.credited_balance(number, amount_cents)?;
        self.set_balance(number, balance_cents)?;
        Ok(self.record(number, TransactionKind::Deposit, amount_cents))
    }

    fn debit(&mut self, number: &str, amount_cents: i64) -> FinanceResult<Transaction> {
        positive("amount_cents", amount_cents)?;
        let balance_cents = self.account(number)?.balance_cents - amount_cents;
        self.set_balance(number, balance_cents)?;
        Ok(self.record(number, TransactionKind::Withdrawal, amount_cents))
    }

    fn set_balance(&mut self, number: &str, balance_cents: i64) -> FinanceResult<()> {
        self.accounts.update_validated(
            &number.to_string(),
            balance_cents,
            |balance| non_negative("balance_cents", *balance),
            |account, balance| account.balance_cents = balance,
        )?;
        Ok(())
    }

    fn record(&mut self, number: &str, kind: TransactionKind, amount_cents: i64) -> Transaction {
        let transaction = Transaction::new(number, kind, amount_cents);
        self.ledger.push(transaction.clone());
        transaction
    }
}
