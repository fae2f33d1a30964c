//! Lamp color validation.

use crate::error::{PacketError, ValidationErrorKind};
use crate::protocol::Color;

/// Parse a color token. Case-insensitive; surrounding whitespace is ignored.
///
/// # Example
///
/// ```
/// use esp32_pkt::protocol::Color;
/// use esp32_pkt::validation::validate_color;
///
/// assert_eq!(validate_color("y").unwrap(), Color::Yellow);
/// assert!(validate_color("blue").is_err());
/// ```
pub fn validate_color(token: &str) -> Result<Color, PacketError> {
    match token.trim().to_uppercase().as_str() {
        "R" => Ok(Color::Red),
        "Y" => Ok(Color::Yellow),
        "G" => Ok(Color::Green),
        _ => Err(PacketError::validation(ValidationErrorKind::InvalidColor {
            color: token.to_string(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_colors() {
        assert_eq!(validate_color("R").unwrap(), Color::Red);
        assert_eq!(validate_color("g").unwrap(), Color::Green);
        assert_eq!(validate_color(" Y ").unwrap(), Color::Yellow);
    }

    #[test]
    fn test_invalid_colors() {
        for token in ["", "RED", "B", "R Y"] {
            assert!(matches!(
                validate_color(token),
                Err(PacketError::Validation {
                    kind: ValidationErrorKind::InvalidColor { .. }
                })
            ));
        }
    }
}
