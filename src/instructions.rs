//! Static MIPS32 op-map.
//!
//! Each [`Table`] is a `const` slice of [`InstrDesc`] keyed by the function
//! bits that select an instruction within it. Mnemonics may carry a
//! placeholder: `z` stands for the coprocessor numeral and a trailing `f` for
//! the floating-point precision. Specializing a placeholder always yields a
//! fresh `String`; the tables themselves are never written to.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    R,
    I,
    J,
    /// Placeholder format of the `nop` shortcut.
    #[serde(rename = "?")]
    Unknown,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::R => "R",
            Format::I => "I",
            Format::J => "J",
            Format::Unknown => "?",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Single,
    Double,
}

impl Precision {
    pub fn suffix(self) -> char {
        match self {
            Precision::Single => 's',
            Precision::Double => 'd',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstrDesc {
    pub key: u8,
    pub format: Format,
    pub mnemonic: &'static str,
}

impl InstrDesc {
    const fn new(key: u8, format: Format, mnemonic: &'static str) -> Self {
        Self { key, format, mnemonic }
    }

    /// `mfcz` -> `mfc1` for `z == 1`.
    pub fn for_coprocessor(&self, z: u8) -> String {
        self.mnemonic.replacen('z', &z.to_string(), 1)
    }

    /// `mov.f` -> `mov.d`. Only the trailing placeholder is replaced.
    pub fn for_precision(&self, precision: Precision) -> String {
        match self.mnemonic.strip_suffix('f') {
            Some(stem) => format!("{stem}{}", precision.suffix()),
            None => self.mnemonic.to_string(),
        }
    }

    /// Branches are recognised by name: `b*` except the `bc*` coprocessor
    /// family. Their immediate is rendered relative to the next instruction.
    pub fn is_branch(&self) -> bool {
        self.mnemonic.starts_with('b') && !self.mnemonic.starts_with("bc")
    }

    /// Coprocessor-1 load/store variants (`lwc1`, `sdc1`, ...) address a
    /// float register in their rt slot.
    pub fn uses_float_rt(&self) -> bool {
        self.mnemonic.ends_with('1')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// Opcode `0x00`, keyed by the function field.
    Special,
    /// Opcode `0x00` with function `0x01`, keyed by bit 15.
    MovCi,
    /// Opcode `0x01`, keyed by the rt field.
    RegImm,
    /// Opcode `0x1c`, keyed by the function field.
    Special2,
    /// Coprocessor moves, keyed by the rs field.
    CopMove,
    /// Branch on coprocessor condition (rs `0x08`), keyed by bit 14.
    CopBranch,
    /// Coprocessor 0 CO-space (rs `0x10`), keyed by the low five function bits.
    Cop0Co,
    /// Coprocessor 1 single precision (rs `0x10`).
    FpSingle,
    /// Coprocessor 1 double precision (rs `0x11`).
    FpDouble,
    /// Every remaining primary opcode, keyed by the opcode itself.
    Opcode,
}

impl Table {
    pub const ALL: [Table; 10] = [
        Table::Special,
        Table::MovCi,
        Table::RegImm,
        Table::Special2,
        Table::CopMove,
        Table::CopBranch,
        Table::Cop0Co,
        Table::FpSingle,
        Table::FpDouble,
        Table::Opcode,
    ];

    /// Stable textual key, as used in diagnostics.
    pub fn key(self) -> &'static str {
        match self {
            Table::Special => "0x00",
            Table::MovCi => "0x00/1",
            Table::RegImm => "0x01",
            Table::Special2 => "0x1c",
            Table::CopMove => "rs",
            Table::CopBranch => "rs/0x08",
            Table::Cop0Co => "rs/0x10/0",
            Table::FpSingle => "rs/0x10/1",
            Table::FpDouble => "rs/0x11/1",
            Table::Opcode => "op",
        }
    }

    pub fn entries(self) -> &'static [InstrDesc] {
        match self {
            Table::Special => SPECIAL,
            Table::MovCi => MOVCI,
            Table::RegImm => REGIMM,
            Table::Special2 => SPECIAL2,
            Table::CopMove => COP_MOVE,
            Table::CopBranch => COP_BRANCH,
            Table::Cop0Co => COP0_CO,
            Table::FpSingle | Table::FpDouble => FP,
            Table::Opcode => OPCODE,
        }
    }

    pub fn lookup(self, key: u32) -> Option<&'static InstrDesc> {
        self.entries().iter().find(|d| u32::from(d.key) == key)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

use Format::{I, J, R};

pub const SPECIAL: &[InstrDesc] = &[
    InstrDesc::new(0x00, R, "sll"),
    InstrDesc::new(0x02, R, "srl"),
    InstrDesc::new(0x03, R, "sra"),
    InstrDesc::new(0x04, R, "sllv"),
    InstrDesc::new(0x06, R, "srlv"),
    InstrDesc::new(0x07, R, "srav"),
    InstrDesc::new(0x08, R, "jr"),
    InstrDesc::new(0x09, R, "jalr"),
    InstrDesc::new(0x0a, R, "movz"),
    InstrDesc::new(0x0b, R, "movn"),
    InstrDesc::new(0x0c, R, "syscall"),
    InstrDesc::new(0x0d, R, "break"),
    InstrDesc::new(0x0f, R, "sync"),
    InstrDesc::new(0x10, R, "mfhi"),
    InstrDesc::new(0x11, R, "mthi"),
    InstrDesc::new(0x12, R, "mflo"),
    InstrDesc::new(0x13, R, "mtlo"),
    InstrDesc::new(0x18, R, "mult"),
    InstrDesc::new(0x19, R, "multu"),
    InstrDesc::new(0x1a, R, "div"),
    InstrDesc::new(0x1b, R, "divu"),
    InstrDesc::new(0x20, R, "add"),
    InstrDesc::new(0x21, R, "addu"),
    InstrDesc::new(0x22, R, "sub"),
    InstrDesc::new(0x23, R, "subu"),
    InstrDesc::new(0x24, R, "and"),
    InstrDesc::new(0x25, R, "or"),
    InstrDesc::new(0x26, R, "xor"),
    InstrDesc::new(0x27, R, "nor"),
    InstrDesc::new(0x2a, R, "slt"),
    InstrDesc::new(0x2b, R, "sltu"),
    InstrDesc::new(0x30, R, "tge"),
    InstrDesc::new(0x31, R, "tgeu"),
    InstrDesc::new(0x32, R, "tlt"),
    InstrDesc::new(0x33, R, "tltu"),
    InstrDesc::new(0x34, R, "teq"),
    InstrDesc::new(0x36, R, "tne"),
];

pub const MOVCI: &[InstrDesc] = &[
    InstrDesc::new(0x00, R, "movf"),
    InstrDesc::new(0x01, R, "movt"),
];

pub const REGIMM: &[InstrDesc] = &[
    InstrDesc::new(0x00, I, "bltz"),
    InstrDesc::new(0x01, I, "bgez"),
    InstrDesc::new(0x02, I, "bltzl"),
    InstrDesc::new(0x03, I, "bgezl"),
    InstrDesc::new(0x08, I, "tgei"),
    InstrDesc::new(0x09, I, "tgeiu"),
    InstrDesc::new(0x0a, I, "tlti"),
    InstrDesc::new(0x0b, I, "tltiu"),
    InstrDesc::new(0x0c, I, "teqi"),
    InstrDesc::new(0x0e, I, "tnei"),
    InstrDesc::new(0x10, I, "bltzal"),
    InstrDesc::new(0x11, I, "bgezal"),
    InstrDesc::new(0x12, I, "bltzall"),
    InstrDesc::new(0x13, I, "bgezall"),
];

pub const SPECIAL2: &[InstrDesc] = &[
    InstrDesc::new(0x00, R, "madd"),
    InstrDesc::new(0x01, R, "maddu"),
    InstrDesc::new(0x02, R, "mul"),
    InstrDesc::new(0x04, R, "msub"),
    InstrDesc::new(0x05, R, "msubu"),
    InstrDesc::new(0x20, R, "clz"),
    InstrDesc::new(0x21, R, "clo"),
];

pub const COP_MOVE: &[InstrDesc] = &[
    InstrDesc::new(0x00, R, "mfcz"),
    InstrDesc::new(0x02, R, "cfcz"),
    InstrDesc::new(0x04, R, "mtcz"),
    InstrDesc::new(0x06, R, "ctcz"),
];

pub const COP_BRANCH: &[InstrDesc] = &[
    InstrDesc::new(0x00, J, "bczf"),
    InstrDesc::new(0x01, J, "bczt"),
    InstrDesc::new(0x02, J, "bczfl"),
    InstrDesc::new(0x03, J, "bcztl"),
];

pub const COP0_CO: &[InstrDesc] = &[
    InstrDesc::new(0x01, J, "tlbr"),
    InstrDesc::new(0x02, J, "tlbwi"),
    InstrDesc::new(0x06, J, "tlbwr"),
    InstrDesc::new(0x08, J, "tlbp"),
    InstrDesc::new(0x18, J, "eret"),
    InstrDesc::new(0x1f, J, "deret"),
];

pub const FP: &[InstrDesc] = &[
    InstrDesc::new(0x00, R, "add.f"),
    InstrDesc::new(0x01, R, "sub.f"),
    InstrDesc::new(0x02, R, "mul.f"),
    InstrDesc::new(0x03, R, "div.f"),
    InstrDesc::new(0x04, R, "sqrt.f"),
    InstrDesc::new(0x05, R, "abs.f"),
    InstrDesc::new(0x06, R, "mov.f"),
    InstrDesc::new(0x07, R, "neg.f"),
    InstrDesc::new(0x0c, R, "round.w.f"),
    InstrDesc::new(0x0d, R, "trunc.w.f"),
    InstrDesc::new(0x0e, R, "ceil.w.f"),
    InstrDesc::new(0x0f, R, "floor.w.f"),
    InstrDesc::new(0x12, R, "movz.f"),
    InstrDesc::new(0x13, R, "movn.f"),
    InstrDesc::new(0x20, R, "cvt.s.f"),
    InstrDesc::new(0x21, R, "cvt.d.f"),
    InstrDesc::new(0x24, R, "cvt.w.f"),
    InstrDesc::new(0x30, R, "c.f.f"),
    InstrDesc::new(0x31, R, "c.un.f"),
    InstrDesc::new(0x32, R, "c.eq.f"),
    InstrDesc::new(0x33, R, "c.ueq.f"),
    InstrDesc::new(0x34, R, "c.olt.f"),
    InstrDesc::new(0x35, R, "c.ult.f"),
    InstrDesc::new(0x36, R, "c.ole.f"),
    InstrDesc::new(0x37, R, "c.ule.f"),
    InstrDesc::new(0x38, R, "c.sf.f"),
    InstrDesc::new(0x39, R, "c.ngle.f"),
    InstrDesc::new(0x3a, R, "c.seq.f"),
    InstrDesc::new(0x3b, R, "c.ngl.f"),
    InstrDesc::new(0x3c, R, "c.lt.f"),
    InstrDesc::new(0x3d, R, "c.nge.f"),
    InstrDesc::new(0x3e, R, "c.le.f"),
    InstrDesc::new(0x3f, R, "c.ngt.f"),
];

pub const OPCODE: &[InstrDesc] = &[
    InstrDesc::new(0x02, J, "j"),
    InstrDesc::new(0x03, J, "jal"),
    InstrDesc::new(0x04, I, "beq"),
    InstrDesc::new(0x05, I, "bne"),
    InstrDesc::new(0x06, I, "blez"),
    InstrDesc::new(0x07, I, "bgtz"),
    InstrDesc::new(0x08, I, "addi"),
    InstrDesc::new(0x09, I, "addiu"),
    InstrDesc::new(0x0a, I, "slti"),
    InstrDesc::new(0x0b, I, "sltiu"),
    InstrDesc::new(0x0c, I, "andi"),
    InstrDesc::new(0x0d, I, "ori"),
    InstrDesc::new(0x0e, I, "xori"),
    InstrDesc::new(0x0f, I, "lui"),
    InstrDesc::new(0x14, I, "beql"),
    InstrDesc::new(0x15, I, "bnel"),
    InstrDesc::new(0x16, I, "blezl"),
    InstrDesc::new(0x17, I, "bgtzl"),
    InstrDesc::new(0x20, I, "lb"),
    InstrDesc::new(0x21, I, "lh"),
    InstrDesc::new(0x22, I, "lwl"),
    InstrDesc::new(0x23, I, "lw"),
    InstrDesc::new(0x24, I, "lbu"),
    InstrDesc::new(0x25, I, "lhu"),
    InstrDesc::new(0x26, I, "lwr"),
    InstrDesc::new(0x28, I, "sb"),
    InstrDesc::new(0x29, I, "sh"),
    InstrDesc::new(0x2a, I, "swl"),
    InstrDesc::new(0x2b, I, "sw"),
    InstrDesc::new(0x2e, I, "swr"),
    InstrDesc::new(0x2f, I, "cache"),
    InstrDesc::new(0x30, I, "ll"),
    InstrDesc::new(0x31, I, "lwc1"),
    InstrDesc::new(0x32, I, "lwc2"),
    InstrDesc::new(0x33, I, "pref"),
    InstrDesc::new(0x35, I, "ldc1"),
    InstrDesc::new(0x36, I, "ldc2"),
    InstrDesc::new(0x38, I, "sc"),
    InstrDesc::new(0x39, I, "swc1"),
    InstrDesc::new(0x3a, I, "swc2"),
    InstrDesc::new(0x3d, I, "sdc1"),
    InstrDesc::new(0x3e, I, "sdc2"),
];
