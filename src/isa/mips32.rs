use tracing::{debug, trace};

use crate::codec::dec_to_hex;
use crate::decoder::{DecodeError, Decoded, Decoder, Decomposition};
use crate::disasm::{assemble, Layout, Operands};
use crate::instructions::{Format, InstrDesc, Precision, Table};
use crate::registers::RegFile;
use crate::word::Word;

/// MIPS32 decoder over the static op-map in [`crate::instructions`].
///
/// Stateless; one value can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mips32Decoder;

impl Mips32Decoder {
    pub fn new() -> Self {
        Self
    }
}

/// Top-level class selected by the primary opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpClass {
    Special,
    RegImm,
    Special2,
    /// Opcodes `0x10`..=`0x12`, carrying the coprocessor id.
    Coprocessor(u8),
    Other(u32),
}

impl OpClass {
    fn of(opcode: u32) -> Self {
        match opcode {
            0x00 => OpClass::Special,
            0x01 => OpClass::RegImm,
            0x1c => OpClass::Special2,
            0x10..=0x12 => OpClass::Coprocessor((opcode - 0x10) as u8),
            op => OpClass::Other(op),
        }
    }
}

/// Coprocessor sub-class selected by the rs field and the coprocessor id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopOp {
    Move,
    BranchOnCondition,
    Co,
    Fp(Precision),
}

impl CopOp {
    /// `None` for combinations with no defined instruction.
    fn of(rs: u32, z: u8) -> Option<Self> {
        match (rs, z) {
            (0x00 | 0x02 | 0x04 | 0x06, _) => Some(CopOp::Move),
            (0x08, 1 | 2) => Some(CopOp::BranchOnCondition),
            (0x10, 0) => Some(CopOp::Co),
            (0x10, 1) => Some(CopOp::Fp(Precision::Single)),
            (0x11, 1) => Some(CopOp::Fp(Precision::Double)),
            _ => None,
        }
    }
}

impl Decoder for Mips32Decoder {
    fn decode(&self, word: Word, line: u32) -> Result<Option<Decoded>, DecodeError> {
        // The all-zero word is reported as `nop` rather than `sll $zero, $zero, $zero`.
        if word.raw() == 0 {
            return Ok(Some(Decoded::new(Format::Unknown, vec![0].into(), "nop".to_string(), line)));
        }

        let opcode = word.opcode();
        trace!(line, %word, opcode = %dec_to_hex(opcode), "decoding");
        match OpClass::of(opcode) {
            OpClass::Special => special(word, line).map(Some),
            OpClass::RegImm => regimm(word, line).map(Some),
            OpClass::Special2 => special2(word, line).map(Some),
            OpClass::Coprocessor(z) => coprocessor(word, z, line),
            OpClass::Other(op) => other(word, op, line).map(Some),
        }
    }
}

fn lookup(table: Table, key: u32, line: u32) -> Result<&'static InstrDesc, DecodeError> {
    table.lookup(key).ok_or_else(|| DecodeError::UnresolvedKey { line, table, key: dec_to_hex(key) })
}

fn record(desc: &InstrDesc, text: String, fields: Vec<u32>, line: u32) -> Decoded {
    Decoded::new(desc.format, Decomposition::new(fields), text, line)
}

/// `[op rs rt rd shamt funct]`
fn r_fields(word: Word) -> Vec<u32> {
    vec![word.opcode(), word.rs(), word.rt(), word.rd(), word.shamt(), word.funct()]
}

fn special(word: Word, line: u32) -> Result<Decoded, DecodeError> {
    let funct = word.funct();
    // movf/movt share function 0x01 and are told apart by the tf bit.
    let desc = if funct == 0x01 {
        lookup(Table::MovCi, word.bit(15), line)?
    } else {
        lookup(Table::Special, funct, line)?
    };

    let rd = Some(RegFile::Int.name(word.rd()));
    let rs = Some(RegFile::Int.name(word.rs()));
    let rt = Some(RegFile::Int.name(word.rt()));
    let ops = match funct {
        // jr
        0x08 => Operands { rs, ..Default::default() },
        // jalr
        0x09 => Operands { rd, rs, ..Default::default() },
        // syscall, break, sync
        0x0c | 0x0d | 0x0f => Operands::default(),
        // hi/lo moves, multiply/divide, traps
        0x0c..=0x1b | 0x30..=0x36 => Operands { rs, rt, ..Default::default() },
        _ => Operands { rd, rs, rt, ..Default::default() },
    };

    let text = assemble(Layout::Register, desc.mnemonic, &ops);
    Ok(record(desc, text, r_fields(word), line))
}

fn regimm(word: Word, line: u32) -> Result<Decoded, DecodeError> {
    let desc = lookup(Table::RegImm, word.rt(), line)?;

    // The label is the low 15 bits for this class.
    let label = word.field(17..32);
    let label_hex = dec_to_hex(label);
    let ops = Operands {
        rs: Some(RegFile::Int.name(word.rs())),
        imm: Some(label_hex.as_str()),
        ..Default::default()
    };

    let text = assemble(Layout::Immediate, desc.mnemonic, &ops);
    Ok(record(desc, text, vec![word.opcode(), word.rs(), word.rt(), label], line))
}

fn special2(word: Word, line: u32) -> Result<Decoded, DecodeError> {
    let funct = word.funct();
    let desc = lookup(Table::Special2, funct, line)?;

    let rd = Some(RegFile::Int.name(word.rd()));
    let rs = Some(RegFile::Int.name(word.rs()));
    let rt = Some(RegFile::Int.name(word.rt()));
    let ops = match funct {
        // mul
        2 => Operands { rd, rs, rt, ..Default::default() },
        // clz, clo
        f if f > 6 => Operands { rd, rs, ..Default::default() },
        _ => Operands { rs, rt, ..Default::default() },
    };

    let text = assemble(Layout::Register, desc.mnemonic, &ops);
    Ok(record(desc, text, r_fields(word), line))
}

fn coprocessor(word: Word, z: u8, line: u32) -> Result<Option<Decoded>, DecodeError> {
    let rs = word.rs();
    let Some(class) = CopOp::of(rs, z) else {
        debug!(line, z, rs = %dec_to_hex(rs), "no instruction defined for coprocessor combination");
        return Ok(None);
    };

    let decoded = match class {
        CopOp::Move => {
            let desc = lookup(Table::CopMove, rs, line)?;
            let regs = RegFile::for_coprocessor(z);
            let ops = Operands {
                rs: Some(regs.name(word.rd())),
                rt: Some(regs.name(word.rt())),
                ..Default::default()
            };
            let text = assemble(Layout::Register, &desc.for_coprocessor(z), &ops);
            let fields = vec![word.opcode(), rs, word.rt(), word.rd(), word.field(21..32)];
            record(desc, text, fields, line)
        }
        CopOp::BranchOnCondition => {
            let func = word.bit(14);
            let desc = lookup(Table::CopBranch, func, line)?;
            let target = word.field(Word::TARGET);
            let target_hex = dec_to_hex(target);
            let ops = Operands { target: Some(target_hex.as_str()), ..Default::default() };
            let text = assemble(Layout::Jump, &desc.for_coprocessor(z), &ops);
            // Not the canonical [op target] jump layout.
            record(desc, text, vec![word.opcode(), func, rs, target], line)
        }
        CopOp::Co => {
            let desc = lookup(Table::Cop0Co, word.field(27..32), line)?;
            let text = assemble(Layout::Bare, desc.mnemonic, &Operands::default());
            // Keyed by the low five bits; the full six-bit funct is recorded.
            record(desc, text, vec![word.opcode(), word.field(6..26), word.funct()], line)
        }
        CopOp::Fp(precision) => {
            let table = match precision {
                Precision::Single => Table::FpSingle,
                Precision::Double => Table::FpDouble,
            };
            let desc = lookup(table, word.field(27..32), line)?;
            let ops = Operands {
                rd: Some(RegFile::Float.name(word.shamt())),
                rs: Some(RegFile::Float.name(word.rd())),
                rt: Some(RegFile::Float.name(word.rt())),
                ..Default::default()
            };
            let text = assemble(Layout::Register, &desc.for_precision(precision), &ops);
            // [op fmt ft fs fd funct], with the full six-bit funct even though
            // only its low five bits selected the entry.
            record(desc, text, r_fields(word), line)
        }
    };
    Ok(Some(decoded))
}

fn other(word: Word, opcode: u32, line: u32) -> Result<Decoded, DecodeError> {
    let desc = lookup(Table::Opcode, opcode, line)?;

    if opcode < 4 {
        let target = word.field(Word::TARGET);
        let target_hex = dec_to_hex(target);
        let ops = Operands { target: Some(target_hex.as_str()), ..Default::default() };
        let text = assemble(Layout::Jump, desc.mnemonic, &ops);
        return Ok(record(desc, text, vec![opcode, target], line));
    }

    let rt_file = if desc.uses_float_rt() { RegFile::Float } else { RegFile::Int };
    let raw = word.field(Word::IMM16);
    // Branch offsets count from the following instruction.
    let imm = if desc.is_branch() { raw + 1 } else { raw };
    let imm_text = imm.to_string();
    let ops = Operands {
        rs: Some(RegFile::Int.name(word.rs())),
        rt: Some(rt_file.name(word.rt())),
        imm: Some(imm_text.as_str()),
        ..Default::default()
    };

    let layout = if opcode >= 0x0f {
        Layout::BaseOffset
    } else if desc.is_branch() {
        Layout::ImmediateReversed
    } else {
        Layout::Immediate
    };
    let text = assemble(layout, desc.mnemonic, &ops);
    Ok(record(desc, text, vec![opcode, word.rs(), word.rt(), raw], line))
}
