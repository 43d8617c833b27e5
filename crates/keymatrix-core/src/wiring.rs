//! Wiring description parser
//!
//! The wiring description is a line-oriented stream with one 3-line group per
//! piano key:
//!
//! ```text
//! <note_name> <gnd_pin>
//! <n1_pin>
//! <n2_pin>
//! ```
//!
//! The GND pin selects the key's column; n1 and n2 are the row-sense pins for
//! the key's two contact depths (n1 fires on first contact, n2 when the key
//! bottoms out).

use std::io::BufRead;

use crate::error::{Error, Result};

/// Number of keys on a full-size piano
pub const PIANO_KEYS: usize = 88;

/// The wiring of a single key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRecord {
    /// Note name as written in the input (e.g. "C4", "AS2")
    pub note_name: String,
    /// GND pin at the top of the key's column
    pub gnd_pin: u8,
    /// Input pin for the first-contact switch
    pub n1_pin: u8,
    /// Input pin for the bottom-out switch
    pub n2_pin: u8,
}

/// Parse `keys` wiring groups from a line-oriented reader.
///
/// Records are returned in input order. The first malformed group aborts the
/// parse; there is no partial-success mode. Content after the final group is
/// ignored.
pub fn parse_wiring<R: BufRead>(reader: R, keys: usize) -> Result<Vec<NoteRecord>> {
    let mut lines = reader.lines();
    let mut line_no = 0usize;
    let mut records = Vec::with_capacity(keys);

    while records.len() < keys {
        let header = next_line(&mut lines, &mut line_no, keys, records.len())?;
        let fields: Vec<&str> = header.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(Error::MalformedNoteLine {
                line: line_no,
                content: header.clone(),
            });
        }
        let note_name = fields[0].to_string();
        let gnd_pin = parse_pin(fields[1], line_no)?;

        let n1_line = next_line(&mut lines, &mut line_no, keys, records.len())?;
        let n1_pin = parse_pin(&n1_line, line_no)?;
        let n2_line = next_line(&mut lines, &mut line_no, keys, records.len())?;
        let n2_pin = parse_pin(&n2_line, line_no)?;

        records.push(NoteRecord {
            note_name,
            gnd_pin,
            n1_pin,
            n2_pin,
        });
    }

    log::debug!("parsed {} wiring groups over {} lines", records.len(), line_no);
    Ok(records)
}

fn next_line<B: BufRead>(
    lines: &mut std::io::Lines<B>,
    line_no: &mut usize,
    expected: usize,
    got: usize,
) -> Result<String> {
    *line_no += 1;
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(Error::UnexpectedEof {
            line: *line_no,
            expected,
            got,
        }),
    }
}

fn parse_pin(field: &str, line: usize) -> Result<u8> {
    let field = field.trim();
    field.parse().map_err(|_| Error::InvalidPin {
        line,
        value: field.to_string(),
    })
}
