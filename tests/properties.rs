use std::thread;

use mips_decode::decoder::Decoder;
use mips_decode::{Format, Mips32Decoder, Word};
use pretty_assertions::assert_eq;

/// One word per primary opcode with every other field populated.
fn sweep() -> impl Iterator<Item = Word> {
    (0u32..64).flat_map(|op| [0x0000_0000u32, 0x0123_4567, 0x02a5_8020, 0x03ff_ffff].map(move |low| Word(op << 26 | low)))
}

fn parse_hex(s: &str) -> u32 {
    u32::from_str_radix(s.trim_start_matches("0x"), 16).unwrap()
}

#[test]
fn decoding_is_deterministic() {
    let dec = Mips32Decoder::new();
    for word in sweep() {
        assert_eq!(dec.decode(word, 1), dec.decode(word, 1), "{word}");
    }
}

#[test]
fn hex_and_decimal_decompositions_agree() {
    let dec = Mips32Decoder::new();
    for word in sweep() {
        let Ok(Some(d)) = dec.decode(word, 1) else { continue };
        let hex = d.hex_decomposition();
        let dec_text = d.dec_decomposition();
        let hex_vals: Vec<u32> = hex.trim_matches(&['[', ']'][..]).split(' ').map(parse_hex).collect();
        let dec_vals: Vec<u32> = dec_text.trim_matches(&['[', ']'][..]).split(' ').map(|v| v.parse().unwrap()).collect();
        assert_eq!(hex_vals, dec_vals, "{word}");
        assert_eq!(dec_vals, d.fields.fields().to_vec());
        if d.format != Format::Unknown {
            assert_eq!(dec_vals[0], word.opcode(), "{word}");
        }
    }
}

#[test]
fn every_record_has_a_mnemonic() {
    let dec = Mips32Decoder::new();
    for word in sweep() {
        if let Ok(Some(d)) = dec.decode(word, 1) {
            assert!(!d.mnemonic.is_empty());
            assert!(!d.mnemonic.ends_with(' '), "{:?}", d.mnemonic);
        }
    }
}

#[test]
fn decoder_is_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Mips32Decoder>();

    let dec = Mips32Decoder::new();
    let expected: Vec<_> = sweep().map(|w| dec.decode(w, 1)).collect();
    thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| sweep().map(|w| dec.decode(w, 1)).collect::<Vec<_>>())).collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
