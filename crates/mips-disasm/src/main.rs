use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

use mips_decode::Mips32Decoder;
use mips_disasm::{decode_all, load_listing, render_json, render_text};

#[derive(Parser, Debug)]
#[command(author, version, about = "MIPS32 listing disassembler CLI", long_about = None)]
struct Cli {
    /// Listing file, one `0x`-hex or decimal instruction word per line
    #[arg(value_name = "FILE")]
    input: PathBuf,
    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat { Text, Json }

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let src = load_listing(&cli.input)?;
    let listing = decode_all(&Mips32Decoder::new(), &src);
    tracing::info!(rows = listing.rows.len(), failures = listing.failures.len(), "decoded listing");

    let buf = match cli.format {
        OutputFormat::Text => render_text(&listing),
        OutputFormat::Json => render_json(&listing)? + "\n",
    };
    if let Some(path) = cli.out { std::fs::write(path, buf)?; } else { print!("{}", buf); }
    Ok(())
}
