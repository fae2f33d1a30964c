//! Opcode range validation.

use crate::error::{PacketError, ValidationErrorKind};

pub const MIN_OPCODE: u8 = 1;
pub const MAX_OPCODE: u8 = 5;

/// Validate that an opcode is one the firmware understands.
///
/// Returns the opcode narrowed to `u8`.
pub fn validate_opcode(opcode: i64) -> Result<u8, PacketError> {
    match u8::try_from(opcode) {
        Ok(op) if (MIN_OPCODE..=MAX_OPCODE).contains(&op) => Ok(op),
        _ => Err(PacketError::validation(ValidationErrorKind::InvalidOpcode {
            opcode,
        })),
    }
}
