use std::fmt;
use std::ops::Range;

use bitvec::prelude::*;

use crate::codec::{self, CodecError};

/// A 32-bit instruction word.
///
/// Bit ranges are numbered MSB-first: bit 0 is the most significant bit, so
/// the primary opcode lives in `0..6` and the R-format function in `26..32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word(pub u32);

impl Word {
    pub const OP: Range<usize> = 0..6;
    pub const RS: Range<usize> = 6..11;
    pub const RT: Range<usize> = 11..16;
    pub const RD: Range<usize> = 16..21;
    pub const SHAMT: Range<usize> = 21..26;
    pub const FUNCT: Range<usize> = 26..32;
    pub const IMM16: Range<usize> = 16..32;
    pub const TARGET: Range<usize> = 6..32;

    /// Parse a 32-character, zero-padded binary string.
    pub fn from_bits(bits: &str) -> Result<Self, CodecError> {
        if bits.len() != 32 {
            return Err(CodecError::WordWidth { len: bits.len() });
        }
        codec::bits_to_dec(bits).map(Word)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    /// Unsigned value of the MSB-first bit range `bits`.
    pub fn field(self, bits: Range<usize>) -> u32 {
        self.0.view_bits::<Msb0>()[bits].load_be::<u32>()
    }

    pub fn bit(self, index: usize) -> u32 {
        self.0.view_bits::<Msb0>()[index] as u32
    }

    pub fn opcode(self) -> u32 {
        self.field(Self::OP)
    }

    pub fn rs(self) -> u32 {
        self.field(Self::RS)
    }

    pub fn rt(self) -> u32 {
        self.field(Self::RT)
    }

    pub fn rd(self) -> u32 {
        self.field(Self::RD)
    }

    pub fn shamt(self) -> u32 {
        self.field(Self::SHAMT)
    }

    pub fn funct(self) -> u32 {
        self.field(Self::FUNCT)
    }

    pub fn bit_string(self) -> String {
        format!("{:032b}", self.0)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
