//! Scan matrix construction
//!
//! Deduplicates the physical pins seen in the wiring description into row and
//! column index spaces and places a key action into every matrix cell. GND
//! pins form the columns; n1 and n2 pins share a single row index space, so a
//! pin wired as n1 for one key and n2 for another occupies one row slot.

use std::fmt;

use crate::wiring::NoteRecord;

/// Velocity baked into every generated note action
pub const FIXED_VELOCITY: u8 = 64;

/// Action the firmware takes for a matrix cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// No scan action for this cell
    Nop,
    /// This cell triggers a note at a fixed velocity
    Note {
        /// Note name as written in the wiring description
        name: String,
        /// Fixed velocity
        velocity: u8,
    },
}

impl KeyAction {
    /// Note action for `name` at the fixed velocity
    pub fn note(name: &str) -> Self {
        KeyAction::Note {
            name: name.to_string(),
            velocity: FIXED_VELOCITY,
        }
    }
}

impl fmt::Display for KeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyAction::Nop => write!(f, "NOP"),
            KeyAction::Note { name, velocity } => write!(f, "N({}, {})", name, velocity),
        }
    }
}

/// A populated scan matrix
///
/// Cells are addressed `[row][column]`. After construction every cell holds a
/// [`KeyAction`]; cells never targeted by any wiring group are filled with
/// [`KeyAction::Nop`] and counted in [`ScanMatrix::filled_cells`].
#[derive(Debug, Clone)]
pub struct ScanMatrix {
    row_pins: Vec<u8>,
    col_pins: Vec<u8>,
    cells: Vec<Vec<KeyAction>>,
    filled_cells: usize,
}

impl ScanMatrix {
    /// Build the scan matrix from wiring records.
    ///
    /// Pin index spaces preserve first-seen input order, so identical input
    /// always produces an identical matrix. For each record the n1 cell is
    /// set to `Nop` (first-contact cells carry no action in this firmware)
    /// and the n2 cell to the note action, in that order; a later record
    /// targeting an already-set cell silently overwrites it.
    pub fn build(records: &[NoteRecord]) -> Self {
        let mut col_pins: Vec<u8> = Vec::new();
        let mut row_pins: Vec<u8> = Vec::new();
        for record in records {
            push_unique(&mut col_pins, record.gnd_pin);
            push_unique(&mut row_pins, record.n1_pin);
            push_unique(&mut row_pins, record.n2_pin);
        }

        let mut staging: Vec<Vec<Option<KeyAction>>> =
            vec![vec![None; col_pins.len()]; row_pins.len()];
        for record in records {
            let col = position(&col_pins, record.gnd_pin);
            staging[position(&row_pins, record.n1_pin)][col] = Some(KeyAction::Nop);
            staging[position(&row_pins, record.n2_pin)][col] =
                Some(KeyAction::note(&record.note_name));
        }

        let mut filled_cells = 0;
        let mut cells = Vec::with_capacity(row_pins.len());
        for staged_row in staging {
            let mut row = Vec::with_capacity(col_pins.len());
            for cell in staged_row {
                match cell {
                    Some(action) => row.push(action),
                    None => {
                        filled_cells += 1;
                        row.push(KeyAction::Nop);
                    }
                }
            }
            cells.push(row);
        }

        log::debug!(
            "built {}x{} scan matrix, {} unassigned cells filled",
            row_pins.len(),
            col_pins.len(),
            filled_cells
        );

        ScanMatrix {
            row_pins,
            col_pins,
            cells,
            filled_cells,
        }
    }

    /// Number of rows (distinct n1/n2 pins)
    pub fn rows(&self) -> usize {
        self.row_pins.len()
    }

    /// Number of columns (distinct GND pins)
    pub fn cols(&self) -> usize {
        self.col_pins.len()
    }

    /// Row pins in first-seen input order
    pub fn row_pins(&self) -> &[u8] {
        &self.row_pins
    }

    /// Column pins in first-seen input order
    pub fn col_pins(&self) -> &[u8] {
        &self.col_pins
    }

    /// Matrix cells, addressed `[row][column]`
    pub fn cells(&self) -> &[Vec<KeyAction>] {
        &self.cells
    }

    /// Number of cells that received the no-op fill because no wiring group
    /// targeted them
    pub fn filled_cells(&self) -> usize {
        self.filled_cells
    }

    /// Cell action at `(row_pin, col_pin)`, if both pins are known
    pub fn cell_for_pins(&self, row_pin: u8, col_pin: u8) -> Option<&KeyAction> {
        let row = self.row_pins.iter().position(|&p| p == row_pin)?;
        let col = self.col_pins.iter().position(|&p| p == col_pin)?;
        Some(&self.cells[row][col])
    }
}

fn push_unique(pins: &mut Vec<u8>, pin: u8) {
    if !pins.contains(&pin) {
        pins.push(pin);
    }
}

// Linear scan; the pin sets are tiny.
fn position(pins: &[u8], pin: u8) -> usize {
    pins.iter()
        .position(|&p| p == pin)
        .expect("pin interned before lookup")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, gnd: u8, n1: u8, n2: u8) -> NoteRecord {
        NoteRecord {
            note_name: name.to_string(),
            gnd_pin: gnd,
            n1_pin: n1,
            n2_pin: n2,
        }
    }

    #[test]
    fn test_single_note() {
        let matrix = ScanMatrix::build(&[record("C1", 1, 2, 3)]);

        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.cols(), 1);
        assert_eq!(matrix.row_pins(), &[2, 3]);
        assert_eq!(matrix.col_pins(), &[1]);

        // n1 cell is always a no-op; n2 cell carries the note.
        assert_eq!(matrix.cell_for_pins(2, 1), Some(&KeyAction::Nop));
        assert_eq!(matrix.cell_for_pins(3, 1), Some(&KeyAction::note("C1")));
        assert_eq!(matrix.filled_cells(), 0);
    }

    #[test]
    fn test_first_seen_pin_order() {
        let records = [
            record("A0", 9, 30, 31),
            record("AS0", 7, 32, 30),
            record("B0", 9, 33, 34),
        ];
        let matrix = ScanMatrix::build(&records);

        assert_eq!(matrix.col_pins(), &[9, 7]);
        assert_eq!(matrix.row_pins(), &[30, 31, 32, 33, 34]);
    }

    #[test]
    fn test_shared_row_space() {
        // Pin 30 is n2 for one key and n1 for another: one row slot.
        let records = [record("C2", 1, 29, 30), record("CS2", 2, 30, 31)];
        let matrix = ScanMatrix::build(&records);

        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cell_for_pins(30, 1), Some(&KeyAction::note("C2")));
        assert_eq!(matrix.cell_for_pins(30, 2), Some(&KeyAction::Nop));
    }

    #[test]
    fn test_unassigned_cells_filled_and_counted() {
        // Two columns, three rows; pins (31, 1) and (29, 2) are never wired.
        let records = [record("D2", 1, 29, 30), record("DS2", 2, 30, 31)];
        let matrix = ScanMatrix::build(&records);

        assert_eq!(matrix.filled_cells(), 2);
        assert_eq!(matrix.cell_for_pins(31, 1), Some(&KeyAction::Nop));
        assert_eq!(matrix.cell_for_pins(29, 2), Some(&KeyAction::Nop));
    }

    #[test]
    fn test_collision_last_write_wins() {
        // Same GND and n2 pin: the later record's note silently replaces the
        // earlier one's.
        let records = [record("E2", 1, 28, 30), record("F2", 1, 29, 30)];
        let matrix = ScanMatrix::build(&records);

        assert_eq!(matrix.cell_for_pins(30, 1), Some(&KeyAction::note("F2")));
    }

    #[test]
    fn test_n2_overwrites_own_n1() {
        // A key wired with n1 == n2 keeps the note action, matching the
        // n1-then-n2 assignment order.
        let matrix = ScanMatrix::build(&[record("G2", 1, 5, 5)]);

        assert_eq!(matrix.rows(), 1);
        assert_eq!(matrix.cell_for_pins(5, 1), Some(&KeyAction::note("G2")));
        assert_eq!(matrix.filled_cells(), 0);
    }

    #[test]
    fn test_every_cell_holds_an_action() {
        let records = [
            record("A0", 9, 30, 31),
            record("AS0", 7, 32, 30),
            record("B0", 9, 33, 34),
        ];
        let matrix = ScanMatrix::build(&records);

        assert_eq!(matrix.cells().len(), matrix.rows());
        for row in matrix.cells() {
            assert_eq!(row.len(), matrix.cols());
        }
    }

    #[test]
    fn test_action_rendering() {
        assert_eq!(KeyAction::Nop.to_string(), "NOP");
        assert_eq!(KeyAction::note("C4").to_string(), "N(C4, 64)");
        assert_eq!(KeyAction::note("AS2").to_string(), "N(AS2, 64)");
    }
}
