use crate::types::errors::AmountError;
use crate::types::{Amount, Rate};
use rust_decimal::Decimal;
use serde_json::{Number, Value};
use std::str::FromStr;

/// Converts a JSON value into an exact decimal amount.
///
/// The number's literal text is parsed, so `0.03` becomes exactly `0.03` rather than the
/// nearest binary fraction, and long decimals keep all of their digits.
pub fn amount_from_value(value: &Value) -> Result<Amount, AmountError> {
    match value {
        Value::Number(number) => amount_from_number(number),
        other => Err(AmountError::NotANumber(other.to_string()))
    }
}

/// Expresses a fractional rate as a percentage (`0.03` -> `3`).
pub fn as_percentage(rate: Rate) -> Option<Decimal> {
    rate.checked_mul(Decimal::ONE_HUNDRED)
}

fn amount_from_number(number: &Number) -> Result<Amount, AmountError> {
    //NOTE: Numbers keep their source text, so every digit the writer produced is parsed back.
    //      Exponent forms (1e40, 1.5e-7) are only accepted by from_scientific.
    let text = number.to_string();

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|error| AmountError::OutOfRange(format!("{text} ({error})")))
}
