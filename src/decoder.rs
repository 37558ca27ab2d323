use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::{dec_to_hex, CodecError};
use crate::instructions::{Format, Table};
use crate::word::Word;

/// Field values extracted from one instruction word, in encoding order.
///
/// The hexadecimal and decimal decompositions are both renderings of this one
/// list, so they always agree in length, order and value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition(Vec<u32>);

impl Decomposition {
    pub fn new(fields: Vec<u32>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &[u32] {
        &self.0
    }

    /// `[0x08 0x00 0x08 0x05]`
    pub fn hex(&self) -> String {
        bracketed(self.0.iter().map(|&v| dec_to_hex(v)))
    }

    /// `[8 0 8 5]`
    pub fn dec(&self) -> String {
        bracketed(self.0.iter().map(u32::to_string))
    }
}

impl From<Vec<u32>> for Decomposition {
    fn from(fields: Vec<u32>) -> Self {
        Self(fields)
    }
}

fn bracketed(items: impl Iterator<Item = String>) -> String {
    format!("[{}]", items.collect::<Vec<_>>().join(" "))
}

/// Result of decoding one instruction word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoded {
    pub format: Format,
    pub fields: Decomposition,
    pub mnemonic: String,
    /// Caller-supplied line identifier.
    pub line: u32,
    /// Original literal the word was read from. Set by the caller.
    pub input: Option<String>,
}

impl Decoded {
    pub fn new(format: Format, fields: Decomposition, mnemonic: String, line: u32) -> Self {
        Self { format, fields, mnemonic, line, input: None }
    }

    pub fn hex_decomposition(&self) -> String {
        self.fields.hex()
    }

    pub fn dec_decomposition(&self) -> String {
        self.fields.dec()
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.format, self.dec_decomposition(), self.hex_decomposition(), self.mnemonic)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("line {line}: function key {key} does not exist in table {table}")]
    UnresolvedKey { line: u32, table: Table, key: String },
    #[error("line {line}: malformed instruction word: {source}")]
    MalformedWord {
        line: u32,
        #[source]
        source: CodecError,
    },
}

impl DecodeError {
    pub fn line(&self) -> u32 {
        match self {
            DecodeError::UnresolvedKey { line, .. } | DecodeError::MalformedWord { line, .. } => *line,
        }
    }
}

pub trait Decoder {
    /// Decode `word`, tagging the record with `line`.
    ///
    /// `Ok(None)` means the word names no defined instruction but is not an
    /// error either (undefined coprocessor combinations).
    fn decode(&self, word: Word, line: u32) -> Result<Option<Decoded>, DecodeError>;

    /// Decode a 32-character, MSB-first bit string.
    fn decode_bits(&self, bits: &str, line: u32) -> Result<Option<Decoded>, DecodeError> {
        let word = Word::from_bits(bits).map_err(|source| DecodeError::MalformedWord { line, source })?;
        self.decode(word, line)
    }
}
