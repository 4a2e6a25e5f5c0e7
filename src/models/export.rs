use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::models::errors::AccountError;

const INDENT: &[u8] = b"    ";

/// Capability for exporting an account's complete state as an indented JSON document.
pub trait ExportJson {
    fn to_json(&self) -> Result<String, AccountError>;
}

pub(super) fn to_indented_json<T: Serialize>(value: &T) -> Result<String, AccountError> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));

    value.serialize(&mut serializer)?;

    //NOTE: serde_json only ever writes UTF-8, so the lossy conversion never substitutes anything
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
