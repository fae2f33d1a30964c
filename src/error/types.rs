//! Error types for packet building, verification, and transport.

use std::fmt;

use thiserror::Error;

/// Main error type for the packet tool.
#[derive(Error, Debug)]
pub enum PacketError {
    /// Configuration-related errors.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Build arguments do not fit the opcode's payload shape.
    #[error("Validation error: {kind}")]
    Validation { kind: ValidationErrorKind },

    /// JSON handed to `verify` is unparseable or missing fields.
    #[error("Malformed input: {kind}")]
    MalformedInput { kind: MalformedInputKind },

    /// Serial endpoint errors.
    #[error("Transport error: {kind}")]
    Transport { kind: TransportErrorKind },

    /// I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PacketError {
    pub(crate) fn validation(kind: ValidationErrorKind) -> Self {
        Self::Validation { kind }
    }

    pub(crate) fn malformed(kind: MalformedInputKind) -> Self {
        Self::MalformedInput { kind }
    }

    pub(crate) fn transport(kind: TransportErrorKind) -> Self {
        Self::Transport { kind }
    }
}

/// Validation error kinds.
#[derive(Error, Debug)]
pub enum ValidationErrorKind {
    #[error("opcode must be 1..5 (got {opcode})")]
    InvalidOpcode { opcode: i64 },

    #[error("opcode {opcode} requires --{param}")]
    MissingParameter { opcode: u8, param: String },

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("opcode 2 requires --pairs like: 1:R 2:Y 3:G")]
    EmptyPairs,

    #[error("Bad --pairs item: {pair}. Expected lamp:color")]
    InvalidPair { pair: String },

    #[error("Invalid color '{color}', expected R|Y|G")]
    InvalidColor { color: String },

    #[error("Invalid mode '{mode}', expected auto|manual")]
    InvalidMode { mode: String },
}

/// Which JSON document a malformed-input error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    Request,
    Response,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Request => f.write_str("request"),
            Document::Response => f.write_str("response"),
        }
    }
}

/// Malformed input error kinds.
#[derive(Error, Debug)]
pub enum MalformedInputKind {
    #[error("{document} JSON parse error: {message}")]
    InvalidJson { document: Document, message: String },

    #[error("{document} JSON is missing field '{field}'")]
    MissingField {
        document: Document,
        field: &'static str,
    },

    #[error("{document} JSON field '{field}' is invalid: {message}")]
    InvalidField {
        document: Document,
        field: &'static str,
        message: String,
    },
}

/// Transport error kinds.
#[derive(Error, Debug)]
pub enum TransportErrorKind {
    #[error("cannot open port {port} @ {baud} bps: {message}")]
    OpenFailed {
        port: String,
        baud: u32,
        message: String,
    },

    #[error("write failed: {message}")]
    WriteFailed { message: String },

    #[error("read failed: {message}")]
    ReadFailed { message: String },
}

/// Result type alias for packet operations.
pub type PacketResult<T> = Result<T, PacketError>;
