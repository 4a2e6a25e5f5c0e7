use serde_json::Value;
use thiserror::Error;

use crate::models::Operation;
use crate::types::{Amount, AmountError, Rate};

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Insufficient funds for withdrawal of [{amount}] from account of [{holder}] with balance [{balance}]")]
    InsufficientFunds {
        holder: String,
        amount: Amount,
        balance: Amount
    },
    #[error("Numeric overflow occurred for [{operation}] on account of [{holder}]")]
    Overflow {
        holder: String,
        operation: Operation
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error)
}

impl AccountError {
    pub fn blank_holder() -> Self {
        Self::InvalidArgument("holder must be a non-empty string".to_string())
    }

    pub fn missing_holder() -> Self {
        Self::InvalidArgument("holder is required".to_string())
    }

    pub fn holder_not_a_string(found: &Value) -> Self {
        Self::InvalidArgument(format!("holder must be a string, found {found}"))
    }

    pub fn negative_initial_balance(amount: Amount) -> Self {
        Self::InvalidArgument(format!("initial balance cannot be negative [{amount}]"))
    }

    pub fn non_positive_amount(operation: Operation, amount: Amount) -> Self {
        Self::InvalidArgument(format!("{operation} amount must be strictly positive [{amount}]"))
    }

    pub fn negative_balance(value: Amount) -> Self {
        Self::InvalidArgument(format!("balance cannot be negative [{value}]"))
    }

    pub fn negative_interest_rate(rate: Rate) -> Self {
        Self::InvalidArgument(format!("interest rate cannot be negative [{rate}]"))
    }

    pub fn invalid_field(field: &str, error: AmountError) -> Self {
        Self::InvalidArgument(format!("{field} is invalid: {error}"))
    }

    pub fn insufficient_funds(holder: &str, amount: Amount, balance: Amount) -> Self {
        Self::InsufficientFunds {
            holder: holder.to_string(),
            amount,
            balance
        }
    }

    pub fn overflow(holder: &str, operation: Operation) -> Self {
        Self::Overflow {
            holder: holder.to_string(),
            operation
        }
    }
}
