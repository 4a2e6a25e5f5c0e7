use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmountError {
    #[error("Amount error: expected a number, found {0}")]
    NotANumber(String),
    #[error("Amount error: {0} is out of range")]
    OutOfRange(String)
}
