//! Opcode-keyed payload shapes.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Lamp color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Color {
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "Y")]
    Yellow,
    #[serde(rename = "G")]
    Green,
}

impl Color {
    /// Single-letter wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "R",
            Color::Yellow => "Y",
            Color::Green => "G",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Controller operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Auto,
    Manual,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Auto => "auto",
            Mode::Manual => "manual",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lamp/color assignment. Serializes as `{"lamp":N,"color":"R"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LampCommand {
    pub lamp: i64,
    pub color: Color,
}

impl LampCommand {
    pub fn new(lamp: i64, color: Color) -> Self {
        Self { lamp, color }
    }
}

/// Packet payload. Each variant is exactly one opcode's shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Opcode 1: `{"lamp":N,"color":"R"}`.
    SetLamp(LampCommand),
    /// Opcode 2: `{"commands":[...]}`, never empty, order kept.
    SetLamps(Vec<LampCommand>),
    /// Opcode 3: `{}`.
    Opcode3,
    /// Opcode 4: `{}`.
    Opcode4,
    /// Opcode 5: `{"set":"auto"}` or `{"set":"manual"}`.
    SetMode(Mode),
}

impl Payload {
    /// Numeric opcode carried in the packet header.
    pub fn opcode(&self) -> u8 {
        match self {
            Payload::SetLamp(_) => 1,
            Payload::SetLamps(_) => 2,
            Payload::Opcode3 => 3,
            Payload::Opcode4 => 4,
            Payload::SetMode(_) => 5,
        }
    }
}

impl Serialize for Payload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Payload::SetLamp(command) => command.serialize(serializer),
            Payload::SetLamps(commands) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("commands", commands)?;
                map.end()
            }
            Payload::Opcode3 | Payload::Opcode4 => serializer.serialize_map(Some(0))?.end(),
            Payload::SetMode(mode) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("set", mode)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(payload: &Payload) -> String {
        serde_json::to_string(payload).unwrap()
    }

    #[test]
    fn test_set_lamp_shape() {
        let payload = Payload::SetLamp(LampCommand::new(1, Color::Red));
        assert_eq!(text(&payload), r#"{"lamp":1,"color":"R"}"#);
        assert_eq!(payload.opcode(), 1);
    }

    #[test]
    fn test_set_lamps_keeps_order() {
        let payload = Payload::SetLamps(vec![
            LampCommand::new(3, Color::Green),
            LampCommand::new(1, Color::Red),
            LampCommand::new(2, Color::Yellow),
        ]);
        assert_eq!(
            text(&payload),
            r#"{"commands":[{"lamp":3,"color":"G"},{"lamp":1,"color":"R"},{"lamp":2,"color":"Y"}]}"#
        );
    }

    #[test]
    fn test_empty_shapes() {
        assert_eq!(text(&Payload::Opcode3), "{}");
        assert_eq!(text(&Payload::Opcode4), "{}");
        assert_eq!(Payload::Opcode4.opcode(), 4);
    }

    #[test]
    fn test_set_mode_shape() {
        assert_eq!(text(&Payload::SetMode(Mode::Manual)), r#"{"set":"manual"}"#);
        assert_eq!(Payload::SetMode(Mode::Auto).opcode(), 5);
    }
}
