//! see [`PuzzleError`]

use std::{io, num::ParseIntError, path::PathBuf};

/// Everything that can go wrong while reading or solving a puzzle input
///
/// Line numbers are 1-based and count blank lines.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    /// The input file couldn't be read
    #[error("failed to read {}", .path.display())]
    Io {
        /// The file that was being read
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A token on a line is not an unsigned 64-bit integer
    #[error("line {line}: {token:?} is not a level")]
    ParseLevel {
        /// The line holding the token
        line: usize,
        /// The token as it appears in the input
        token: String,
        #[source]
        source: ParseIntError,
    },
    /// A line of location ids doesn't hold exactly two values
    #[error("line {line}: expected a pair of location ids, found {found} values")]
    MalformedRow {
        /// The offending line
        line: usize,
        /// How many values the line held
        found: usize,
    },
    /// A report line holds nothing but whitespace
    #[error("line {line}: report has no levels")]
    EmptyReport {
        /// The offending line
        line: usize,
    },
    /// The input parsed, but an answer is too large for a `u64`
    #[error("part {part} answer does not fit in 64 bits")]
    Overflow {
        /// Which answer overflowed, 1 or 2
        part: u8,
    },
}
