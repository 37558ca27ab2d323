//! Conversions between bit strings, hex literals and unsigned decimals.
//!
//! Bit strings are MSB-first runs of `0`/`1` of at most 32 digits. Hex
//! literals are lowercase, `0x`-prefixed and carry at least two digits.

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("empty bit string")]
    Empty,
    #[error("bit string of {len} digits does not fit in 32 bits")]
    TooWide { len: usize },
    #[error("instruction words have 32 binary digits, got {len}")]
    WordWidth { len: usize },
    #[error("{input:?} is not a binary number")]
    NotBinary { input: String },
}

/// Unsigned value of a bit string.
pub fn bits_to_dec(bits: &str) -> Result<u32, CodecError> {
    if bits.is_empty() {
        return Err(CodecError::Empty);
    }
    if bits.len() > 32 {
        return Err(CodecError::TooWide { len: bits.len() });
    }
    if !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(CodecError::NotBinary { input: bits.to_string() });
    }
    u32::from_str_radix(bits, 2).map_err(|_| CodecError::NotBinary { input: bits.to_string() })
}

pub fn bits_to_hex(bits: &str) -> Result<String, CodecError> {
    bits_to_dec(bits).map(dec_to_hex)
}

/// `5 -> "0x05"`, `171 -> "0xab"`.
pub fn dec_to_hex(value: u32) -> String {
    format!("{value:#04x}")
}
