//! ESP32 packet tool library
//!
//! Builds MD5-authenticated JSON command packets for ESP32 lamp
//! controllers, sends them over a serial link, and verifies the auth code
//! on device responses.

pub mod auth;
pub mod builder;
pub mod config;
pub mod error;
pub mod protocol;
pub mod transport;
pub mod validation;
