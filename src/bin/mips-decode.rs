use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mips_decode::input::parse_literal;
use mips_decode::{Decoder, Mips32Decoder};

#[derive(Parser, Debug)]
#[command(author, version, about = "Decode MIPS32 instruction words given on the command line")]
struct Opts {
    /// Instruction words, `0x`-prefixed hex or unsigned decimal
    #[arg(value_name = "WORD", required = true)]
    words: Vec<String>,
    /// Print one JSON record per word instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let dec = Mips32Decoder::new();

    for (i, literal) in opts.words.iter().enumerate() {
        let line = (i + 1) as u32;
        let word = match parse_literal(literal) {
            Ok(w) => w,
            Err(err) => {
                tracing::warn!(line, %err, "skipping argument");
                continue;
            }
        };
        match dec.decode(word, line) {
            Ok(Some(d)) if opts.json => println!("{}", serde_json::to_string(&d.with_input(literal.as_str()))?),
            Ok(Some(d)) => println!("{literal:<12} {d}"),
            Ok(None) if opts.json => println!("null"),
            Ok(None) => println!("{literal:<12} <undefined>"),
            Err(err) => tracing::warn!(%err, "decode failed"),
        }
    }

    Ok(())
}
