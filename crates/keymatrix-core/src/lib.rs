//! keymatrix-core - Scan-matrix keymap generation for piano firmware
//!
//! Turns a textual pin-wiring description of an 88-key piano into the
//! row/column scan-matrix literal the firmware compiles in. The pipeline:
//!
//! - Parse one 3-line wiring group per key (note name + GND pin, n1 pin, n2 pin)
//! - Deduplicate GND pins into columns and n1/n2 pins into rows, preserving
//!   first-seen order
//! - Place a `NOP` or `N(<note>, 64)` action into every matrix cell
//! - Emit the matrix as a nested array literal plus a four-line summary
//!
//! # Usage as a Library
//!
//! ```
//! use std::io::Cursor;
//! use keymatrix_core::generate;
//!
//! let wiring = "C1 1\n2\n3\n";
//! let (mut out, mut diag) = (Vec::new(), Vec::new());
//! let matrix = generate(Cursor::new(wiring), &mut out, &mut diag, 1).unwrap();
//! assert_eq!(matrix.rows(), 2);
//! ```

pub mod emit;
pub mod error;
pub mod matrix;
pub mod wiring;

// Re-export main types
pub use emit::{write_matrix, write_summary};
pub use error::{Error, Result};
pub use matrix::{KeyAction, ScanMatrix, FIXED_VELOCITY};
pub use wiring::{parse_wiring, NoteRecord, PIANO_KEYS};

use std::io::{BufRead, Write};

/// Run the whole pipeline: parse `keys` wiring groups from `input`, build the
/// scan matrix, write the literal to `out` and the summary to `diag`.
///
/// Any parse or IO error aborts the run; nothing is written to `out` before
/// parsing has succeeded in full.
pub fn generate<R, W, D>(input: R, out: &mut W, diag: &mut D, keys: usize) -> Result<ScanMatrix>
where
    R: BufRead,
    W: Write,
    D: Write,
{
    let records = parse_wiring(input, keys)?;
    let matrix = ScanMatrix::build(&records);
    write_matrix(&matrix, out)?;
    write_summary(&matrix, diag)?;
    Ok(matrix)
}
