//! Reading puzzle input into [`TypedVec`] rows

use std::{fs, path::Path};

use typed_vec::TypedVec;

use crate::error::PuzzleError;

/// Read a whole input file
pub fn read_input(path: &Path) -> Result<String, PuzzleError> {
    fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// The non-empty lines of `input`, paired with their 1-based line numbers
///
/// Lines holding only whitespace are kept, so the solvers can reject them.
pub fn numbered_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.is_empty())
}

/// Parse the whitespace separated levels on one line
pub fn parse_levels(line: usize, text: &str) -> Result<TypedVec<u64>, PuzzleError> {
    let mut levels = TypedVec::new();

    for token in text.split_whitespace() {
        let level = token.parse().map_err(|source| PuzzleError::ParseLevel {
            line,
            token: token.to_owned(),
            source,
        })?;
        levels.push_owned(level);
    }

    Ok(levels)
}
