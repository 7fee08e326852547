//! fasm CLI: convert FASM files to the TLV record stream.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fasm_encoder::encode;
use fasm_parser::parse;
use fasm_spec::to_fasm_string;

#[derive(Parser)]
#[command(name = "fasm", about = "Convert FASM files to a TLV record stream")]
struct Cli {
    /// FASM source file
    file: PathBuf,

    /// Re-render as FASM text instead of TLV records
    #[arg(long)]
    text: bool,

    /// Re-render as canonical FASM text (one bit per line, sorted)
    #[arg(long)]
    canonical: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let source = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("reading {}", cli.file.display()))?;
    let lines = parse(&source)
        .with_context(|| format!("parsing {}", cli.file.display()))?;
    tracing::debug!("parsed {} statements from {}", lines.len(), cli.file.display());

    let stdout = std::io::stdout();
    let mut sink = stdout.lock();

    if cli.text || cli.canonical {
        let rendered = to_fasm_string(&lines, cli.canonical).context("rendering FASM text")?;
        sink.write_all(rendered.as_bytes())
            .context("writing to stdout")?;
    } else {
        encode(&lines, &mut sink).context("encoding records")?;
    }

    Ok(())
}
