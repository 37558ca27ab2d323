pub mod codec;
pub mod decoder;
pub mod disasm;
pub mod input;
pub mod instructions;
pub mod registers;
pub mod word;

pub mod isa {
    pub mod mips32; // MIPS32 op-map decoder
}

pub use decoder::{DecodeError, Decoded, Decoder, Decomposition};
pub use instructions::Format;
pub use isa::mips32::Mips32Decoder;
pub use word::Word;
