mod account;
mod errors;
mod export;
mod savings;

use std::fmt;
use std::fmt::{Display, Formatter};

use serde_json::{Map, Value};

pub use account::Account;
pub use errors::AccountError;
pub use export::ExportJson;
pub use savings::SavingsAccount;

/// A string-keyed record used as the input shape for building accounts from external data.
pub type Record = Map<String, Value>;

/// The balance mutations that are journaled and reported in errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Operation {
    Deposit,
    Withdrawal,
    Interest
}

impl Display for Operation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Deposit => "deposit",
            Operation::Withdrawal => "withdrawal",
            Operation::Interest => "interest"
        };

        formatter.write_str(name)
    }
}
