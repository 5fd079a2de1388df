//! Pairs of location ids, one pair per line
//!
//! The first answer pairs the smallest left id with the smallest right id, the
//! second smallest with the second smallest, and so on, summing how far apart
//! each pair is. The second answer weighs every left id by how often it shows
//! up on the right.

use rh_map::RobinHoodMap;
use tracing::{debug, trace};
use typed_vec::TypedVec;

use crate::{
    error::PuzzleError,
    input::{numbered_lines, parse_levels},
    Answers,
};

struct Columns {
    lefts: TypedVec<u64>,
    rights: TypedVec<u64>,
}

fn parse(input: &str) -> Result<Columns, PuzzleError> {
    let mut lefts = TypedVec::new();
    let mut rights = TypedVec::new();

    for (line, text) in numbered_lines(input) {
        let row = parse_levels(line, text)?;
        let &[left, right] = row.as_slice() else {
            return Err(PuzzleError::MalformedRow {
                line,
                found: row.len(),
            });
        };

        lefts.push(&left);
        rights.push(&right);
    }

    Ok(Columns { lefts, rights })
}

fn total_distance(columns: &Columns) -> Result<u64, PuzzleError> {
    let lefts = columns.lefts.sorted();
    let rights = columns.rights.sorted();
    trace!(%lefts, %rights, "sorted columns");

    lefts
        .iter()
        .zip(&rights)
        .try_fold(0u64, |total, (left, right)| {
            total.checked_add(left.abs_diff(*right))
        })
        .ok_or(PuzzleError::Overflow { part: 1 })
}

fn similarity(columns: &Columns) -> Result<u64, PuzzleError> {
    let mut counts = RobinHoodMap::<u64, u64>::new();
    for id in &columns.rights {
        match counts.get_mut(id) {
            Some(count) => *count += 1,
            None => {
                counts.insert(id, &1);
            }
        }
    }
    trace!(%counts, "right column counts");

    columns
        .lefts
        .iter()
        .try_fold(0u64, |total, id| {
            let count = counts.get(id).copied().unwrap_or(0);
            total.checked_add(id.checked_mul(count)?)
        })
        .ok_or(PuzzleError::Overflow { part: 2 })
}

/// Solve both parts for the given puzzle input
pub fn solve(input: &str) -> Result<Answers, PuzzleError> {
    let columns = parse(input)?;
    debug!(rows = columns.lefts.len(), "parsed location ids");

    let answers = Answers {
        first: total_distance(&columns)?,
        second: similarity(&columns)?,
    };
    debug!(?answers, "solved");

    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    #[test]
    fn test_sample() {
        let answers = solve(SAMPLE).unwrap();
        assert_eq!(answers.first, 11);
        assert_eq!(answers.second, 31);
    }

    #[test]
    fn test_empty_input() {
        let answers = solve("").unwrap();
        assert_eq!(answers.first, 0);
        assert_eq!(answers.second, 0);
    }

    #[test]
    fn test_ids_missing_on_the_right() {
        let answers = solve("10 1\n20 2\n").unwrap();
        assert_eq!(answers.first, 27);
        assert_eq!(answers.second, 0);
    }

    #[test]
    fn test_distance_overflow() {
        let err = solve("18446744073709551615 0\n18446744073709551615 0\n").unwrap_err();
        assert!(matches!(err, PuzzleError::Overflow { part: 1 }));
        assert_eq!(err.to_string(), "part 1 answer does not fit in 64 bits");
    }

    #[test]
    fn test_similarity_overflow() {
        // the distances are all zero, but each left id is seen twice on the right
        let max = u64::MAX / 2 + 1;
        let err = solve(&format!("{max} {max}\n{max} {max}\n")).unwrap_err();
        assert!(matches!(err, PuzzleError::Overflow { part: 2 }));
    }

    #[test]
    fn test_malformed_row() {
        let err = solve("1 2\n3 4 5\n").unwrap_err();
        assert!(matches!(err, PuzzleError::MalformedRow { line: 2, found: 3 }));

        let err = solve("1 2\n\n   \n").unwrap_err();
        assert!(matches!(err, PuzzleError::MalformedRow { line: 3, found: 0 }));
    }
}
