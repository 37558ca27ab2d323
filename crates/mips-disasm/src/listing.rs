use serde::Serialize;
use tracing::{debug, warn};

use mips_decode::decoder::{DecodeError, Decoded, Decoder};
use mips_decode::Format;

use crate::model::Source;

const HEADER: [&str; 5] = ["Instruction", "Format", "DecComp", "HexComp", "Mnemonic"];

/// One decoded listing line, with both decompositions already rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub line: u32,
    pub input: String,
    pub format: Format,
    pub dec: String,
    pub hex: String,
    pub mnemonic: String,
}

impl From<&Decoded> for Row {
    fn from(d: &Decoded) -> Self {
        Row {
            line: d.line,
            input: d.input.clone().unwrap_or_default(),
            format: d.format,
            dec: d.dec_decomposition(),
            hex: d.hex_decomposition(),
            mnemonic: d.mnemonic.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure { pub line: u32, pub literal: String, pub reason: String }

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub rows: Vec<Row>,
    pub failures: Vec<Failure>,
}

/// Decode every entry of `src`. Unparsable lines and unresolved keys become
/// failures; words with no defined instruction are dropped.
pub fn decode_all<D: Decoder>(dec: &D, src: &Source) -> Listing {
    let mut out = Listing::default();
    for bad in &src.bad_lines {
        warn!(line = bad.line, error = %bad.error, "skipping line");
        out.failures.push(Failure { line: bad.line, literal: bad.literal.clone(), reason: bad.error.to_string() });
    }
    for e in &src.entries {
        match dec.decode(e.word, e.line) {
            Ok(Some(d)) => out.rows.push(Row::from(&d.with_input(e.literal.as_str()))),
            Ok(None) => debug!(line = e.line, literal = %e.literal, "no instruction defined"),
            Err(err) => {
                warn!(%err, "decode failed");
                out.failures.push(failure(e.literal.as_str(), &err));
            }
        }
    }
    out.failures.sort_by_key(|f| f.line);
    out
}

fn failure(literal: &str, err: &DecodeError) -> Failure {
    Failure { line: err.line(), literal: literal.to_string(), reason: err.to_string() }
}

fn table_line(cols: [&str; 5]) -> String {
    let [instr, fmt, dec, hex, mnem] = cols;
    format!("{instr:<10}\t\t{fmt:<5}\t{dec:<25} {hex:<35} {mnem:<35}").trim_end().to_string()
}

/// Fixed-width table, one row per decoded instruction.
pub fn render_text(listing: &Listing) -> String {
    let mut buf = String::new();
    buf.push_str(&table_line(HEADER));
    buf.push('\n');
    for r in &listing.rows {
        let format = r.format.to_string();
        buf.push_str(&table_line([&r.input, &format, &r.dec, &r.hex, &r.mnemonic]));
        buf.push('\n');
    }
    buf
}

pub fn render_json(listing: &Listing) -> serde_json::Result<String> {
    serde_json::to_string_pretty(listing)
}
