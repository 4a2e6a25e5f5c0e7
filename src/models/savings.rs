use std::fmt;
use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::models::account::{amount_from_record, holder_from_record};
use crate::models::errors::AccountError;
use crate::models::export::{to_indented_json, ExportJson};
use crate::models::{Account, Operation, Record};
use crate::types::{as_percentage, Amount, Rate};

/// Rate applied when none is given: 2%.
pub const DEFAULT_INTEREST_RATE: Rate = Decimal::from_parts(2, 0, 0, false, 2);

/// An interest-bearing account.
///
/// Wraps a plain `Account` and adds a fixed, non-negative interest rate.
#[derive(Debug, Clone)]
pub struct SavingsAccount {
    account: Account,
    interest_rate: Rate
}

#[derive(Serialize)]
struct SavingsSnapshot<'a> {
    holder: &'a str,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    balance: Amount,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    interest_rate: Rate
}

impl SavingsAccount {
    /// Opens a savings account, validating the base account before the rate.
    pub fn new(holder: impl Into<String>, initial_balance: Amount, interest_rate: Rate) -> Result<Self, AccountError> {
        let account = Account::new(holder, initial_balance)?;

        if interest_rate < Decimal::ZERO {
            return Err(AccountError::negative_interest_rate(interest_rate))
        }

        Ok(Self {
            account,
            interest_rate
        })
    }

    pub fn with_default_rate(holder: impl Into<String>, initial_balance: Amount) -> Result<Self, AccountError> {
        Self::new(holder, initial_balance, DEFAULT_INTEREST_RATE)
    }

    /// Builds a savings account from a record carrying `holder`, and optionally
    /// `balance` (default 0) and `interest_rate` (default 2%).
    pub fn from_record(record: &Record) -> Result<Self, AccountError> {
        let holder = holder_from_record(record)?;
        let balance = amount_from_record(record, "balance", Decimal::ZERO)?;
        let interest_rate = amount_from_record(record, "interest_rate", DEFAULT_INTEREST_RATE)?;

        Self::new(holder, balance, interest_rate)
    }

    pub fn as_account(&self) -> &Account {
        &self.account
    }

    pub fn holder(&self) -> &str {
        self.account.holder()
    }

    pub fn balance(&self) -> Amount {
        self.account.balance()
    }

    pub fn interest_rate(&self) -> Rate {
        self.interest_rate
    }

    pub fn set_balance(&mut self, value: Amount) -> Result<(), AccountError> {
        self.account.set_balance(value)
    }

    pub fn deposit(&mut self, amount: Amount) -> Result<(), AccountError> {
        self.account.deposit(amount)
    }

    pub fn withdraw(&mut self, amount: Amount) -> Result<(), AccountError> {
        self.account.withdraw(amount)
    }

    /// Credits one period of interest (`balance * interest_rate`) onto the balance.
    pub fn add_interest(&mut self) -> Result<(), AccountError> {
        let overflow = || AccountError::overflow(self.account.holder(), Operation::Interest);

        let interest = self.account.balance().checked_mul(self.interest_rate).ok_or_else(overflow)?;
        let percentage = as_percentage(self.interest_rate).ok_or_else(overflow)?;

        self.account.credit(Operation::Interest, interest)?;

        info!("Interest credited to holder [{}] at [{percentage:.2}%]: [{interest:.2}]", self.account.holder());

        Ok(())
    }
}

impl ExportJson for SavingsAccount {
    fn to_json(&self) -> Result<String, AccountError> {
        to_indented_json(&SavingsSnapshot {
            holder: self.account.holder(),
            balance: self.account.balance(),
            interest_rate: self.interest_rate
        })
    }
}

//NOTE: Equality only looks at the holder and balance of the wrapped account. The interest rate is
//      not compared, so two savings accounts differing only by rate are equal, and a savings account
//      equals a plain account with the same holder and balance.
impl PartialEq for SavingsAccount {
    fn eq(&self, other: &SavingsAccount) -> bool {
        self.account == other.account
    }
}

impl PartialEq<Account> for SavingsAccount {
    fn eq(&self, other: &Account) -> bool {
        self.account == *other
    }
}

impl PartialEq<SavingsAccount> for Account {
    fn eq(&self, other: &SavingsAccount) -> bool {
        *self == other.account
    }
}

impl Display for SavingsAccount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.account, formatter)
    }
}
