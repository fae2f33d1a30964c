//! Error types for the packet tool.
//!
//! Provides a unified error handling system using thiserror.

mod types;

pub use types::*;
