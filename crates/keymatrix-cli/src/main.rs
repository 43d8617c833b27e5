//! keymatrix - generate a piano scan-matrix keymap literal from a wiring
//! description
//!
//! Reads 88 wiring groups (note name + GND pin, n1 pin, n2 pin) from stdin or
//! a file, prints the matrix literal to stdout (or a file) and the summary to
//! stderr. Paste the literal into the firmware source and run `cargo fmt`.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use keymatrix_core::{generate, PIANO_KEYS};

#[derive(Parser)]
#[command(name = "keymatrix")]
#[command(author, version, about = "Piano scan-matrix keymap generator", long_about = None)]
struct Cli {
    /// Wiring description file ("-" or absent reads stdin)
    input: Option<PathBuf>,

    /// Write the matrix literal to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let reader: Box<dyn BufRead> = match cli.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => open_input(path)?,
        _ => Box::new(stdin.lock()),
    };

    let mut diag = io::stderr();
    match cli.output.as_deref() {
        Some(path) => {
            let mut out = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            generate(reader, &mut out, &mut diag, PIANO_KEYS)?;
            out.flush()?;
            log::info!("wrote matrix literal to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            generate(reader, &mut out, &mut diag, PIANO_KEYS)?;
        }
    }

    Ok(())
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}
