//! Instruction literals as they appear in listing files and on the command line.

use crate::word::Word;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("empty literal")]
    Empty,
    #[error("{literal:?} is not a hexadecimal or decimal number")]
    Invalid { literal: String },
    #[error("{literal:?} does not fit in a 32-bit instruction word")]
    Overflow { literal: String },
}

/// Parse `0x`-prefixed hexadecimal or plain unsigned decimal.
pub fn parse_literal(literal: &str) -> Result<Word, LiteralError> {
    let s = literal.trim();
    if s.is_empty() {
        return Err(LiteralError::Empty);
    }
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(LiteralError::Invalid { literal: s.to_string() });
    }
    // Every character is a digit, so the only remaining failure is overflow.
    u32::from_str_radix(digits, radix)
        .map(Word)
        .map_err(|_| LiteralError::Overflow { literal: s.to_string() })
}
