//! `huffcode` - write the Huffman code listing, encoding, decoding and size
//! report for a text file.

use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use huffcode::Report;

#[derive(Parser)]
#[command(name = "huffcode")]
#[command(about = "Huffman-code a text file and report the result", long_about = None)]
#[command(version)]
struct Cli {
    /// Input text file
    input: PathBuf,

    /// Output file (stdout if omitted or "-")
    output: Option<PathBuf>,

    /// Keep line breaks instead of joining the input's lines
    #[arg(long, default_value_t = false)]
    keep_newlines: bool,
}

fn read_text(cli: &Cli) -> Result<String> {
    let path = &cli.input;
    if cli.keep_newlines {
        return fs::read_to_string(path).with_context(|| format!("reading {}", path.display()));
    }

    let file = fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut text = String::new();
    for line in BufReader::new(file).lines() {
        text.push_str(&line.with_context(|| format!("reading {}", path.display()))?);
    }
    Ok(text)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let text = read_text(&cli)?;
    let report = Report::from_text(&text)
        .with_context(|| format!("encoding {}", cli.input.display()))?;

    match cli.output.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let mut file = fs::File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            report
                .write_to(&mut file)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        _ => report.write_to(&mut io::stdout().lock())?,
    }

    Ok(())
}
