use mips_decode::decoder::{DecodeError, Decoder};
use mips_decode::instructions::Table;
use mips_decode::{Format, Mips32Decoder, Word};
use pretty_assertions::assert_eq;

fn cop(z: u32, rs: u32, rt: u32, rd: u32, shamt: u32, funct: u32) -> Word {
    Word((0x10 + z) << 26 | rs << 21 | rt << 16 | rd << 11 | shamt << 6 | funct)
}

fn mnemonic(word: Word) -> String {
    Mips32Decoder::new().decode(word, 1).unwrap().unwrap().mnemonic
}

#[test]
fn moves_name_registers_by_coprocessor() {
    let d = Mips32Decoder::new().decode(cop(1, 0x00, 8, 2, 0, 0), 1).unwrap().unwrap();
    assert_eq!(d.format, Format::R);
    assert_eq!(d.mnemonic, "mfc1 $f2, $f8");
    assert_eq!(d.dec_decomposition(), "[17 0 8 2 0]");

    assert_eq!(mnemonic(cop(0, 0x00, 26, 12, 0, 0)), "mfc0 $t4, $k0");
    assert_eq!(mnemonic(cop(1, 0x04, 8, 2, 0, 0)), "mtc1 $f2, $f8");
    assert_eq!(mnemonic(cop(2, 0x02, 3, 5, 0, 0)), "cfc2 $f5, $f3");
    assert_eq!(mnemonic(cop(0, 0x06, 3, 5, 0, 0)), "ctc0 $a1, $v1");
}

#[test]
fn branch_on_condition() {
    let word = Word(0x4502_0010);
    let d = Mips32Decoder::new().decode(word, 1).unwrap().unwrap();
    assert_eq!(d.format, Format::J);
    assert_eq!(d.mnemonic, "bc1t 0x1020010");
    assert_eq!(d.dec_decomposition(), "[17 1 8 16908304]");

    assert_eq!(mnemonic(Word(0x4900_0004)), "bc2f 0x1000004");
}

#[test]
fn cop0_co_operations() {
    let d = Mips32Decoder::new().decode(Word(0x4200_0018), 1).unwrap().unwrap();
    assert_eq!(d.mnemonic, "eret");
    assert_eq!(d.dec_decomposition(), "[16 524288 24]");
    assert_eq!(mnemonic(Word(0x4200_0001)), "tlbr");
    assert_eq!(mnemonic(Word(0x4200_0008)), "tlbp");
}

#[test]
fn fp_precision_does_not_leak_between_decodes() {
    let single = cop(1, 0x10, 0, 2, 4, 0x06);
    let double = cop(1, 0x11, 0, 2, 4, 0x06);
    assert_eq!(mnemonic(single), "mov.s $f4, $f2, $f0");
    assert_eq!(mnemonic(double), "mov.d $f4, $f2, $f0");
    assert_eq!(mnemonic(single), "mov.s $f4, $f2, $f0");
    assert_eq!(Table::FpSingle.lookup(0x06).unwrap().mnemonic, "mov.f");
}

#[test]
fn fp_decomposition_is_register_layout() {
    let d = Mips32Decoder::new().decode(cop(1, 0x10, 0, 2, 4, 0x06), 1).unwrap().unwrap();
    assert_eq!(d.dec_decomposition(), "[17 16 0 2 4 6]");
    assert_eq!(d.hex_decomposition(), "[0x11 0x10 0x00 0x02 0x04 0x06]");
}

#[test]
fn fp_lookup_uses_low_five_function_bits() {
    assert_eq!(mnemonic(cop(1, 0x11, 6, 4, 0, 0x00)), "add.d $f0, $f4, $f6");
    let d = Mips32Decoder::new().decode(cop(1, 0x10, 0, 2, 4, 0x25), 1).unwrap().unwrap();
    assert_eq!(d.mnemonic, "abs.s $f4, $f2, $f0");
    // The decomposition keeps the whole function field.
    assert_eq!(d.hex_decomposition(), "[0x11 0x10 0x00 0x02 0x04 0x25]");
}

#[test]
fn cop0_co_records_full_function_field() {
    let d = Mips32Decoder::new().decode(cop(0, 0x10, 0, 0, 0, 0x21), 1).unwrap().unwrap();
    assert_eq!(d.mnemonic, "tlbr");
    assert_eq!(d.dec_decomposition(), "[16 524288 33]");
}

#[test]
fn undefined_combinations_yield_no_record() {
    let dec = Mips32Decoder::new();
    for word in [
        cop(2, 0x10, 0, 0, 0, 0),  // rs 0x10 on coprocessor 2
        cop(1, 0x14, 0, 0, 0, 0),  // fixed-point format
        cop(0, 0x11, 0, 0, 0, 0),  // double precision on coprocessor 0
        cop(0, 0x08, 0, 0, 0, 0),  // no condition branch on coprocessor 0
        cop(2, 0x01, 0, 0, 0, 0),
    ] {
        assert_eq!(dec.decode(word, 1), Ok(None), "{word}");
    }
}

#[test]
fn unknown_fp_function() {
    let err = Mips32Decoder::new().decode(cop(1, 0x10, 0, 0, 0, 0x08), 5).unwrap_err();
    assert_eq!(err, DecodeError::UnresolvedKey { line: 5, table: Table::FpSingle, key: "0x08".to_string() });
    assert_eq!(err.to_string(), "line 5: function key 0x08 does not exist in table rs/0x10/1");
}

#[test]
fn unknown_cop0_co_function() {
    let err = Mips32Decoder::new().decode(cop(0, 0x10, 0, 0, 0, 0x03), 1).unwrap_err();
    assert!(matches!(err, DecodeError::UnresolvedKey { table: Table::Cop0Co, .. }));
}
