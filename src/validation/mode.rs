//! Controller mode validation.

use crate::error::{PacketError, ValidationErrorKind};
use crate::protocol::Mode;

/// Parse a `--set` value. Only the exact lowercase words are accepted.
pub fn validate_mode(value: &str) -> Result<Mode, PacketError> {
    match value {
        "auto" => Ok(Mode::Auto),
        "manual" => Ok(Mode::Manual),
        _ => Err(PacketError::validation(ValidationErrorKind::InvalidMode {
            mode: value.to_string(),
        })),
    }
}
