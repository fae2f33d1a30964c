//! Canonical (compact) JSON text.
//!
//! Matches ArduinoJson's `serializeJson` output: no whitespace, `,` and `:`
//! separators, object keys in insertion order, non-ASCII left unescaped.
//! Key order relies on serde_json's `preserve_order` feature.

use serde::Serialize;
use serde_json::Value;

use crate::error::PacketResult;

/// Serialize any value to canonical text.
pub fn to_canonical<T>(value: &T) -> PacketResult<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string(value)?)
}

/// Canonical text of an already-parsed JSON value.
pub fn canonical_json(value: &Value) -> String {
    // Display for Value is the compact writer and cannot fail.
    value.to_string()
}

/// Canonical text of a packet's `data` field, `null` when absent.
pub fn canonical_data(data: Option<&Value>) -> String {
    match data {
        Some(value) => canonical_json(value),
        None => "null".to_string(),
    }
}
