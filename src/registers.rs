/// General-purpose register names, indexed by register number.
pub const GPR: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Floating-point register names.
pub const FPR: [&str; 32] = [
    "$f0", "$f1", "$f2", "$f3", "$f4", "$f5", "$f6", "$f7", "$f8", "$f9", "$f10", "$f11", "$f12",
    "$f13", "$f14", "$f15", "$f16", "$f17", "$f18", "$f19", "$f20", "$f21", "$f22", "$f23",
    "$f24", "$f25", "$f26", "$f27", "$f28", "$f29", "$f30", "$f31",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegFile {
    Int,
    Float,
}

impl RegFile {
    /// Integer names for coprocessor 0, float names for the others.
    pub fn for_coprocessor(z: u8) -> Self {
        if z == 0 { RegFile::Int } else { RegFile::Float }
    }

    pub fn name(self, index: u32) -> &'static str {
        let i = (index & 0x1F) as usize;
        match self {
            RegFile::Int => GPR[i],
            RegFile::Float => FPR[i],
        }
    }
}
