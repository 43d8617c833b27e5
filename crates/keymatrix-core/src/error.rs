//! Error types for keymap generation

use thiserror::Error;

/// Result type alias for keymap generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing a wiring description or emitting a matrix
#[derive(Debug, Error)]
pub enum Error {
    /// IO error while reading input or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before all wiring groups were read
    #[error("unexpected end of input at line {line}: read {got} of {expected} wiring groups")]
    UnexpectedEof {
        /// 1-based line number where input ran out
        line: usize,
        /// Number of wiring groups the input should contain
        expected: usize,
        /// Number of complete groups read before input ended
        got: usize,
    },

    /// A note line did not have the `<note_name> <gnd_pin>` shape
    #[error("malformed note line {line}: expected `<note_name> <gnd_pin>`, got {content:?}")]
    MalformedNoteLine {
        /// 1-based line number of the offending line
        line: usize,
        /// The offending line content
        content: String,
    },

    /// A pin field could not be parsed as a pin number
    #[error("invalid pin number {value:?} at line {line}")]
    InvalidPin {
        /// 1-based line number of the offending field
        line: usize,
        /// The offending field content
        value: String,
    },
}
