//! Controller samples
//!
//! The handheld controller sends its joystick and button state as a short
//! text payload, `[x|y|z]`, where each field is a decimal number.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One sampled input frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ControllerInput {
    /// Raw horizontal tilt
    pub x: u32,
    /// Raw vertical tilt (unused by the game)
    pub y: u32,
    /// Non-zero while the attack button is held
    pub attack: u8,
}

impl ControllerInput {
    pub const fn new(x: u32, y: u32, attack: u8) -> Self {
        Self { x, y, attack }
    }

    #[inline]
    pub fn is_attacking(&self) -> bool {
        self.attack > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("payload is not wrapped in brackets: {0:?}")]
    MissingBrackets(String),
    #[error("expected 3 fields, found {0}")]
    FieldCount(usize),
    #[error("field {field} is not a number: {value:?}")]
    InvalidNumber { field: usize, value: String },
}

impl FromStr for ControllerInput {
    type Err = InputError;

    fn from_str(payload: &str) -> Result<Self, Self::Err> {
        // Payloads arrive in fixed-size buffers padded with NULs
        let trimmed = payload.trim_matches(|c: char| c == '\0' || c.is_whitespace());
        let body = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| InputError::MissingBrackets(trimmed.to_string()))?;

        let fields: Vec<&str> = body.split('|').collect();
        if fields.len() != 3 {
            return Err(InputError::FieldCount(fields.len()));
        }

        let number = |field: usize| -> Result<u32, InputError> {
            let value = fields[field].trim();
            value.parse::<u32>().map_err(|_| InputError::InvalidNumber {
                field,
                value: value.to_string(),
            })
        };

        Ok(Self {
            x: number(0)?,
            y: number(1)?,
            attack: number(2)?.min(u8::MAX as u32) as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload() {
        let input: ControllerInput = "[3100|2048|1]".parse().unwrap();
        assert_eq!(input, ControllerInput::new(3100, 2048, 1));
        assert!(input.is_attacking());
    }

    #[test]
    fn test_parse_padded_payload() {
        let input: ControllerInput = "[0|4095|0]\0\0\0".parse().unwrap();
        assert_eq!(input, ControllerInput::new(0, 4095, 0));
        assert!(!input.is_attacking());
    }

    #[test]
    fn test_attack_flag_saturates() {
        let input: ControllerInput = "[1|2|4000]".parse().unwrap();
        assert_eq!(input.attack, u8::MAX);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "1|2|3".parse::<ControllerInput>(),
            Err(InputError::MissingBrackets(_))
        ));
        assert_eq!(
            "[1|2]".parse::<ControllerInput>(),
            Err(InputError::FieldCount(2))
        );
        assert_eq!(
            "[1|a|3]".parse::<ControllerInput>(),
            Err(InputError::InvalidNumber {
                field: 1,
                value: "a".to_string()
            })
        );
    }
}
