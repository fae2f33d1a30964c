//! `lamp:color` pair validation.

use crate::error::{PacketError, ValidationErrorKind};
use crate::protocol::LampCommand;

use super::validate_color;

/// Parse one `lamp:color` token, splitting on the first `:`.
pub fn validate_pair(token: &str) -> Result<LampCommand, PacketError> {
    let bad_pair = || {
        PacketError::validation(ValidationErrorKind::InvalidPair {
            pair: token.to_string(),
        })
    };

    let (lamp, color) = token.split_once(':').ok_or_else(bad_pair)?;
    let lamp = lamp.trim().parse::<i64>().map_err(|_| bad_pair())?;
    let color = validate_color(color).map_err(|_| bad_pair())?;

    Ok(LampCommand::new(lamp, color))
}

/// Parse a non-empty list of pair tokens, keeping their order.
pub fn validate_pairs<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<LampCommand>, PacketError> {
    if tokens.is_empty() {
        return Err(PacketError::validation(ValidationErrorKind::EmptyPairs));
    }

    tokens.iter().map(|t| validate_pair(t.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Color;

    #[test]
    fn test_valid_pair() {
        assert_eq!(
            validate_pair("3:g").unwrap(),
            LampCommand::new(3, Color::Green)
        );
    }

    #[test]
    fn test_invalid_pairs() {
        for token in ["abc", "x:R", "1:", ":R", "1:Q", "1:R:Y"] {
            assert!(
                matches!(
                    validate_pair(token),
                    Err(PacketError::Validation {
                        kind: ValidationErrorKind::InvalidPair { .. }
                    })
                ),
                "token {:?} should be rejected",
                token
            );
        }
    }

    #[test]
    fn test_pairs_keep_order() {
        let commands = validate_pairs(&["2:Y", "1:R", "3:G"]).unwrap();
        let lamps: Vec<i64> = commands.iter().map(|c| c.lamp).collect();
        assert_eq!(lamps, vec![2, 1, 3]);
    }

    #[test]
    fn test_empty_pairs() {
        let tokens: [&str; 0] = [];
        assert!(matches!(
            validate_pairs(&tokens),
            Err(PacketError::Validation {
                kind: ValidationErrorKind::EmptyPairs
            })
        ));
    }
}
