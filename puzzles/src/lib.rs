//! # puzzles
//!
//! Solvers for two line-oriented number puzzles, built on [`typed_vec::TypedVec`]
//! and [`rh_map::RobinHoodMap`].
//!
//! ```
//! use puzzles::Day;
//!
//! let answers = Day::Day01.solve("3 4\n4 3\n2 5\n1 3\n3 9\n3 3\n").unwrap();
//! assert_eq!(answers.to_string(), "Answer 1: 11\nAnswer 2: 31");
//! ```

use std::fmt;

pub mod day01;
pub mod day02;
pub mod error;
pub mod input;

pub use error::PuzzleError;

/// The two answers every puzzle has
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers {
    pub first: u64,
    pub second: u64,
}

impl fmt::Display for Answers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Answer 1: {}\nAnswer 2: {}", self.first, self.second)
    }
}

/// Which puzzle to solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Day {
    /// Distances and similarity between two columns of location ids
    Day01,
    /// Safe reactor reports, with and without the problem dampener
    Day02,
}

impl Day {
    pub fn solve(self, input: &str) -> Result<Answers, PuzzleError> {
        match self {
            Day::Day01 => day01::solve(input),
            Day::Day02 => day02::solve(input),
        }
    }
}
