//! Matrix literal and summary emission
//!
//! The matrix literal is a nested Rust array literal: one line per row, each
//! line listing that row's actions across all columns. Run the pasted output
//! through `cargo fmt` in the firmware source. The summary is four diagnostic
//! lines meant for a secondary stream such as stderr.

use std::io::Write;

use crate::error::Result;
use crate::matrix::ScanMatrix;

/// Write the matrix as a nested bracketed literal, one line per row.
pub fn write_matrix<W: Write>(matrix: &ScanMatrix, out: &mut W) -> Result<()> {
    writeln!(out, "[")?;
    for row in matrix.cells() {
        let tokens: Vec<String> = row.iter().map(|action| action.to_string()).collect();
        writeln!(out, "[{}],", tokens.join(", "))?;
    }
    writeln!(out, "]")?;
    Ok(())
}

/// Write the four-line summary: dimensions, row pins, column pins, and the
/// number of cells that received the no-op fill.
pub fn write_summary<W: Write>(matrix: &ScanMatrix, diag: &mut W) -> Result<()> {
    writeln!(diag, "{} rows, {} cols", matrix.rows(), matrix.cols())?;
    writeln!(diag, "row pins: [{}]", join_pins(matrix.row_pins()))?;
    writeln!(diag, "col pins: [{}]", join_pins(matrix.col_pins()))?;
    writeln!(diag, "{} empty cells", matrix.filled_cells())?;
    Ok(())
}

fn join_pins(pins: &[u8]) -> String {
    pins.iter()
        .map(|pin| pin.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
