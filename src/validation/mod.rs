//! Input validation module.
//!
//! Provides validators for opcodes, lamp colors, controller modes, and
//! `lamp:color` pair tokens.

mod color;
mod mode;
mod opcode;
mod pair;

pub use color::validate_color;
pub use mode::validate_mode;
pub use opcode::{validate_opcode, MAX_OPCODE, MIN_OPCODE};
pub use pair::{validate_pair, validate_pairs};
