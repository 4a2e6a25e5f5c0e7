mod amount;
mod errors;

use rust_decimal::Decimal;

pub use amount::{amount_from_value, as_percentage};
pub use errors::AmountError;

pub type Amount = Decimal;
pub type Rate = Decimal;
