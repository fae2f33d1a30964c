//! Configuration module for the packet tool.
//!
//! Handles loading and validating tool defaults from TOML files.

mod settings;

pub use settings::*;
