//! Response verification.
//!
//! The device signs its response with the request's id_src, id_des, opcode
//! and data but its own `time`, so verification needs both documents.

use serde_json::Value;
use tracing::debug;

use crate::error::{Document, MalformedInputKind, PacketError, PacketResult};
use crate::protocol::VerifyReport;

use super::AuthFields;

/// Verify a response's auth code against the request it answers.
///
/// Both arguments are JSON text. Fails with `MalformedInput` when either
/// document does not parse or lacks a required field.
pub fn verify_response(
    request_json: &str,
    response_json: &str,
    key: &str,
) -> PacketResult<VerifyReport> {
    let request = parse_document(Document::Request, request_json)?;
    let response = parse_document(Document::Response, response_json)?;

    let id_src = int_field(Document::Request, &request, "id_src")?;
    let id_des = int_field(Document::Request, &request, "id_des")?;
    let opcode = int_field(Document::Request, &request, "opcode")?;
    let data = required_field(Document::Request, &request, "data")?;
    check_integer_range(Document::Request, "data", data)?;

    let time = int_field(Document::Response, &response, "time")?;
    let response_auth = text_field(Document::Response, &response, "auth")?;
    let status = response.get("status").cloned();

    let expected = AuthFields {
        id_src,
        id_des,
        opcode,
        data: Some(data),
        time,
    }
    .derive(key);

    let report = VerifyReport::new(expected, response_auth, status);
    debug!(
        md5_match = report.md5_match,
        opcode,
        time,
        "Verified response auth"
    );

    Ok(report)
}

fn parse_document(document: Document, text: &str) -> PacketResult<Value> {
    serde_json::from_str(text).map_err(|e| {
        PacketError::malformed(MalformedInputKind::InvalidJson {
            document,
            message: e.to_string(),
        })
    })
}

fn required_field<'a>(
    document: Document,
    value: &'a Value,
    field: &'static str,
) -> PacketResult<&'a Value> {
    value
        .get(field)
        .ok_or_else(|| PacketError::malformed(MalformedInputKind::MissingField { document, field }))
}

/// Read an integer field, accepting the loose forms the firmware and
/// hand-typed JSON produce: integers, integral floats, numeric strings, bools.
fn int_field(document: Document, value: &Value, field: &'static str) -> PacketResult<i64> {
    let raw = required_field(document, value, field)?;
    let invalid = |message: String| {
        PacketError::malformed(MalformedInputKind::InvalidField {
            document,
            field,
            message,
        })
    };

    match raw {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() && f.abs() < i64::MAX as f64 => Ok(f.trunc() as i64),
                    _ => Err(invalid(format!("{} is out of integer range", n))),
                }
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid(format!("'{}' is not an integer", s))),
        Value::Bool(b) => Ok(i64::from(*b)),
        other => Err(invalid(format!("expected an integer, got {}", other))),
    }
}

/// Reject integers beyond the 64-bit range.
///
/// serde_json parses them as f64, so their canonical text would no longer be
/// the digits the sender hashed.
fn check_integer_range(document: Document, field: &'static str, value: &Value) -> PacketResult<()> {
    match value {
        Value::Number(n) if !n.is_i64() && !n.is_u64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() >= 9_223_372_036_854_775_808.0 => {
                Err(PacketError::malformed(MalformedInputKind::InvalidField {
                    document,
                    field,
                    message: format!("integer {} exceeds 64-bit range", n),
                }))
            }
            _ => Ok(()),
        },
        Value::Array(items) => items
            .iter()
            .try_for_each(|item| check_integer_range(document, field, item)),
        Value::Object(map) => map
            .values()
            .try_for_each(|item| check_integer_range(document, field, item)),
        _ => Ok(()),
    }
}

fn text_field(document: Document, value: &Value, field: &'static str) -> PacketResult<String> {
    match required_field(document, value, field)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(PacketError::malformed(MalformedInputKind::InvalidField {
            document,
            field,
            message: format!("expected a string, got {}", other),
        })),
    }
}
