//! Line terminator selection.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{PacketError, ValidationErrorKind};

/// Terminator appended to each packet written to the device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Newline {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl Newline {
    pub fn terminator(&self) -> &'static str {
        match self {
            Newline::Lf => "\n",
            Newline::CrLf => "\r\n",
            Newline::Cr => "\r",
        }
    }

    /// Strip any trailing CR/LF run and append exactly one terminator.
    pub fn frame(&self, text: &str) -> String {
        let mut framed = text.trim_end_matches(&['\r', '\n'][..]).to_string();
        framed.push_str(self.terminator());
        framed
    }
}

impl FromStr for Newline {
    type Err = PacketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LF" => Ok(Newline::Lf),
            "CRLF" => Ok(Newline::CrLf),
            "CR" => Ok(Newline::Cr),
            _ => Err(PacketError::validation(
                ValidationErrorKind::InvalidParameter {
                    param: "newline".to_string(),
                    message: format!("expected LF | CRLF | CR, got '{}'", s),
                },
            )),
        }
    }
}

impl TryFrom<String> for Newline {
    type Error = PacketError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Newline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Newline::Lf => "LF",
            Newline::CrLf => "CRLF",
            Newline::Cr => "CR",
        };
        f.write_str(name)
    }
}
