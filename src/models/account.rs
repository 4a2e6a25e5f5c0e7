use std::fmt;
use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::info;

use crate::models::errors::AccountError;
use crate::models::{Operation, Record};
use crate::types::{amount_from_value, Amount};

/// Represents a single holder's account.
///
/// The holder is fixed once the account is opened and the balance never drops
/// below zero: every mutation validates its input before touching the balance,
/// so a failed operation leaves the account exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Name of the account owner.
    holder: String,
    /// Current funds, always zero or more.
    balance: Amount
}

impl Account {
    /// Opens an account for `holder` with a starting balance.
    ///
    /// # Errors
    /// Returns `AccountError::InvalidArgument` if the holder is blank or the
    /// initial balance is negative.
    pub fn new(holder: impl Into<String>, initial_balance: Amount) -> Result<Self, AccountError> {
        let holder = holder.into();

        if holder.trim().is_empty() {
            return Err(AccountError::blank_holder())
        }

        if initial_balance < Decimal::ZERO {
            return Err(AccountError::negative_initial_balance(initial_balance))
        }

        Ok(Self {
            holder,
            balance: initial_balance
        })
    }

    /// Builds an account from a record carrying `holder` and an optional `balance` (default 0).
    pub fn from_record(record: &Record) -> Result<Self, AccountError> {
        let holder = holder_from_record(record)?;
        let balance = amount_from_record(record, "balance", Decimal::ZERO)?;

        Self::new(holder, balance)
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Overrides the balance directly, bypassing the deposit and withdrawal rules and their journal.
    pub fn set_balance(&mut self, value: Amount) -> Result<(), AccountError> {
        if value < Decimal::ZERO {
            return Err(AccountError::negative_balance(value))
        }

        self.balance = value;

        Ok(())
    }

    /// Adds a strictly positive amount to the balance.
    pub fn deposit(&mut self, amount: Amount) -> Result<(), AccountError> {
        self.journal(Operation::Deposit, amount, |account| {
            if amount <= Decimal::ZERO {
                return Err(AccountError::non_positive_amount(Operation::Deposit, amount))
            }

            account.credit(Operation::Deposit, amount)
        })
    }

    /// Removes a strictly positive amount, never more than the current balance.
    ///
    /// # Errors
    /// - `AccountError::InvalidArgument` if the amount is zero or negative.
    /// - `AccountError::InsufficientFunds` if the amount exceeds the balance.
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), AccountError> {
        self.journal(Operation::Withdrawal, amount, |account| {
            if amount <= Decimal::ZERO {
                return Err(AccountError::non_positive_amount(Operation::Withdrawal, amount))
            }

            if amount > account.balance {
                return Err(AccountError::insufficient_funds(&account.holder, amount, account.balance))
            }

            account.balance = account.balance.checked_sub(amount)
                .ok_or_else(|| AccountError::overflow(&account.holder, Operation::Withdrawal))?;

            Ok(())
        })
    }

    /// Adds `amount` to the balance without validating its sign.
    pub(super) fn credit(&mut self, operation: Operation, amount: Amount) -> Result<(), AccountError> {
        self.balance = self.balance.checked_add(amount)
            .ok_or_else(|| AccountError::overflow(&self.holder, operation))?;

        Ok(())
    }

    fn journal<F>(&mut self, operation: Operation, amount: Amount, apply: F) -> Result<(), AccountError>
    where
        F: FnOnce(&mut Self) -> Result<(), AccountError>
    {
        info!("Operation [{operation}] started: [{amount:.2}] for holder [{}]", self.holder);

        apply(self)?;

        info!("Operation [{operation}] finished for holder [{}] with balance [{:.2}]", self.holder, self.balance);

        Ok(())
    }
}

impl Display for Account {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "Account of {} | Balance: {:.2}€", self.holder, self.balance)
    }
}

pub(super) fn holder_from_record(record: &Record) -> Result<&str, AccountError> {
    match record.get("holder") {
        Some(Value::String(holder)) => Ok(holder),
        Some(other) => Err(AccountError::holder_not_a_string(other)),
        None => Err(AccountError::missing_holder())
    }
}

/// Reads a numeric field, falling back to `default` only when the key is absent.
pub(super) fn amount_from_record(record: &Record, field: &str, default: Amount) -> Result<Amount, AccountError> {
    match record.get(field) {
        Some(value) => amount_from_value(value).map_err(|error| AccountError::invalid_field(field, error)),
        None => Ok(default)
    }
}
