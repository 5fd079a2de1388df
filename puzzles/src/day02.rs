//! Reports of reactor levels, one report per line
//!
//! A report is safe when its levels only ever increase or only ever decrease,
//! by at least one and at most three per step. The second answer also accepts
//! reports that become safe once a single level is dropped.

use tracing::{debug, trace};
use typed_vec::TypedVec;

use crate::{
    error::PuzzleError,
    input::{numbered_lines, parse_levels},
    Answers,
};

const MAX_STEP: u64 = 3;

fn parse(input: &str) -> Result<TypedVec<TypedVec<u64>>, PuzzleError> {
    let mut reports = TypedVec::new();

    for (line, text) in numbered_lines(input) {
        let report = parse_levels(line, text)?;
        if report.is_empty() {
            return Err(PuzzleError::EmptyReport { line });
        }
        reports.push_owned(report);
    }

    Ok(reports)
}

/// Returns true if the levels move in one direction, in steps of one to three
pub fn is_safe(report: &[u64]) -> bool {
    let Some(&[first, second]) = report.first_chunk() else {
        return true;
    };
    let increasing = second > first;

    report.windows(2).all(|pair| {
        let (from, to) = (pair[0], pair[1]);
        let step_ok = (1..=MAX_STEP).contains(&from.abs_diff(to));
        step_ok && (to > from) == increasing
    })
}

/// Returns true if the report is safe, or becomes safe once one level is removed
pub fn is_safe_dampened(report: &TypedVec<u64>) -> bool {
    if is_safe(report) {
        return true;
    }

    (0..report.len()).any(|index| {
        let mut dampened = report.duplicate();
        dampened.try_remove(index);
        let safe = is_safe(&dampened);
        if safe {
            trace!(%report, %dampened, "safe once level {index} is removed");
        }
        safe
    })
}

/// Solve both parts for the given puzzle input
pub fn solve(input: &str) -> Result<Answers, PuzzleError> {
    let reports = parse(input)?;
    debug!(reports = reports.len(), "parsed reports");
    trace!(%reports);

    let answers = Answers {
        first: reports.iter().filter(|report| is_safe(report)).count() as u64,
        second: reports
            .iter()
            .filter(|report| is_safe_dampened(report))
            .count() as u64,
    };
    debug!(?answers, "solved");

    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn test_sample() {
        let answers = solve(SAMPLE).unwrap();
        assert_eq!(answers.first, 2);
        assert_eq!(answers.second, 4);
    }

    #[test]
    fn test_is_safe() {
        assert!(is_safe(&[7, 6, 4, 2, 1]));
        assert!(is_safe(&[1, 3, 6, 7, 9]));
        assert!(!is_safe(&[1, 2, 7, 8, 9]));
        assert!(!is_safe(&[8, 6, 4, 4, 1]));
        assert!(!is_safe(&[1, 3, 2, 4, 5]));
        assert!(is_safe(&[4]));
        assert!(is_safe(&[]));
    }

    #[test]
    fn test_dampener_removes_first_level() {
        let report: TypedVec<u64> = [9, 1, 2, 3].into_iter().collect();
        assert!(!is_safe(&report));
        assert!(is_safe_dampened(&report));
        // the original report is left alone
        assert_eq!(report.as_slice(), [9, 1, 2, 3]);
    }

    #[test]
    fn test_dampener_only_removes_one_level() {
        let report: TypedVec<u64> = [1, 9, 2, 9, 3].into_iter().collect();
        assert!(!is_safe_dampened(&report));
    }

    #[test]
    fn test_empty_report() {
        let err = solve("1 2 3\n\t\n").unwrap_err();
        assert!(matches!(err, PuzzleError::EmptyReport { line: 2 }));
    }
}
