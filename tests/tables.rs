use std::collections::HashSet;

use mips_decode::instructions::{Precision, Table};
use mips_decode::Format;
use mips_decode::registers::{RegFile, FPR, GPR};
use pretty_assertions::assert_eq;

#[test]
fn keys_are_unique_within_each_table() {
    for table in Table::ALL {
        let mut seen = HashSet::new();
        for desc in table.entries() {
            assert!(seen.insert(desc.key), "duplicate key {:#04x} in {table}", desc.key);
        }
    }
}

#[test]
fn formats_match_their_table() {
    for table in Table::ALL {
        for desc in table.entries() {
            let expected = match table {
                Table::RegImm => Format::I,
                Table::CopBranch | Table::Cop0Co => Format::J,
                Table::Opcode if desc.key < 4 => Format::J,
                Table::Opcode => Format::I,
                _ => Format::R,
            };
            assert_eq!(desc.format, expected, "{} in {table}", desc.mnemonic);
        }
    }
}

#[test]
fn table_keys() {
    let keys: Vec<&str> = Table::ALL.iter().map(|t| t.key()).collect();
    assert_eq!(
        keys,
        vec!["0x00", "0x00/1", "0x01", "0x1c", "rs", "rs/0x08", "rs/0x10/0", "rs/0x10/1", "rs/0x11/1", "op"]
    );
}

#[test]
fn placeholders_specialize_into_fresh_strings() {
    let mfcz = Table::CopMove.lookup(0x00).unwrap();
    assert_eq!(mfcz.for_coprocessor(2), "mfc2");
    assert_eq!(mfcz.mnemonic, "mfcz");

    let compare = Table::FpDouble.lookup(0x30).unwrap();
    assert_eq!(compare.for_precision(Precision::Single), "c.f.s");
    assert_eq!(compare.mnemonic, "c.f.f");

    let ceil = Table::FpSingle.lookup(0x0e).unwrap();
    assert_eq!(ceil.for_precision(Precision::Double), "ceil.w.d");
}

#[test]
fn branch_and_float_classification() {
    assert!(Table::Opcode.lookup(0x04).unwrap().is_branch());
    assert!(!Table::CopBranch.lookup(0x00).unwrap().is_branch());
    assert!(!Table::Opcode.lookup(0x08).unwrap().is_branch());
    assert!(Table::Opcode.lookup(0x35).unwrap().uses_float_rt());
    assert!(!Table::Opcode.lookup(0x36).unwrap().uses_float_rt());
}

#[test]
fn missing_keys() {
    assert!(Table::Special.lookup(0x05).is_none());
    assert!(Table::Opcode.lookup(0x00).is_none());
    assert!(Table::MovCi.lookup(2).is_none());
}

#[test]
fn register_names() {
    assert_eq!(GPR[0], "$zero");
    assert_eq!(GPR[29], "$sp");
    assert_eq!(GPR[30], "$fp");
    assert_eq!(FPR[31], "$f31");
    assert_eq!(RegFile::for_coprocessor(0), RegFile::Int);
    assert_eq!(RegFile::for_coprocessor(2), RegFile::Float);
    assert_eq!(RegFile::Float.name(12), "$f12");
}
