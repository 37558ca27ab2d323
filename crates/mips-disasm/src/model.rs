use anyhow::{Context, Result};
use std::path::Path;

use mips_decode::input::{parse_literal, LiteralError};
use mips_decode::Word;

/// One instruction literal from a listing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub line: u32, // 1-based line in the source file
    pub literal: String,
    pub word: Word,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadLine {
    pub line: u32,
    pub literal: String,
    pub error: LiteralError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Source {
    pub entries: Vec<Entry>,
    pub bad_lines: Vec<BadLine>,
}

/// One literal per line; blank lines and `#` comments are skipped.
pub fn parse_listing(text: &str) -> Source {
    let mut src = Source::default();
    for (i, raw) in text.lines().enumerate() {
        let line = (i + 1) as u32;
        let literal = raw.split('#').next().unwrap_or("").trim();
        if literal.is_empty() {
            continue;
        }
        match parse_literal(literal) {
            Ok(word) => src.entries.push(Entry { line, literal: literal.to_string(), word }),
            Err(error) => src.bad_lines.push(BadLine { line, literal: literal.to_string(), error }),
        }
    }
    src
}

pub fn load_listing(path: &Path) -> Result<Source> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_listing(&text))
}
