//! Solutions implemented for Advent of Code puzzles, grouped by year.
//!
//! This module provides [`run_puzzle`] to dynamically run a solution by its year and day.
//!
//! Steps to make a solution available to run:
//! 1. Make a submodule under the year's module to hold the solution implementation.
//! 2. Have the submodule implement [`AdventOfCode<YEAR, DAY>`] as a [`SolutionRunner`].
//! 3. Add a match case to run [`AdventOfCode<YEAR, DAY>`], below `MATCH SOLUTIONS HERE`:
//!
//! ```ignore
//! // matching for 2025 day 1
//! (2025, 1) => AdventOfCode::<2025, 1>::run(input, handler, timed),
//! ```

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use aoc_framework::DynamicResult;
use aoc_framework::runner::{OutputHandler, SolutionRunner};
use thiserror::Error;

// --- IMPORT YEARS HERE ---
mod year2025;

/// A structure collecting solutions by year and day.
///
/// In a submodule, implement this as a [`SolutionRunner`] for the puzzle.
///
/// Use [`#[solution_runner]`][aoc_framework::runner::solution_runner] for convenience:
///
/// ```ignore
/// // in a submodule "year2025/day01.rs"
/// use aoc_framework::runner::solution_runner;
///
/// #[solution_runner(name = "Day 1", parsed = Instructions, part_one = Day01, part_two = Day01)]
/// impl crate::solutions::AdventOfCode<2025, 1> {}
/// ```
struct AdventOfCode<const YEAR: u16, const DAY: u8>;

/// A solution for a puzzle is not available.
#[derive(Error, Debug)]
#[error("no solution available for {year} day {day}")]
pub struct PuzzleNotAvailable {
    year: u16,
    day: u8,
}

/// Run a solution based on the year and day.
///
/// # Errors
///
/// If the solution for the given puzzle is not available, a [`PuzzleNotAvailable`] error is
/// returned.
///
/// Any dynamically dispatched error from running the solution is propagated.
pub fn run_puzzle(
    year: u16,
    day: u8,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()> {
    match (year, day) {
        // --- MATCH SOLUTIONS HERE ---
        (2025, 1) => AdventOfCode::<2025, 1>::run(input, handler, timed),
        _ => Err(PuzzleNotAvailable { year, day }.into()),
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Display;
    use std::time::Duration;

    use aoc_framework::PartKind;

    use super::*;

    /// Keeps only the name and part answers.
    #[derive(Default)]
    struct AnswerHandler {
        name: Option<String>,
        answers: Vec<(PartKind, String)>,
    }

    impl OutputHandler for AnswerHandler {
        fn solution_name(&mut self, name: &str) {
            self.name = Some(name.to_string());
        }

        fn parse_start(&mut self) {}

        fn parse_end(&mut self, _duration_opt: Option<Duration>) {}

        fn part_start(&mut self, _part: PartKind) {}

        fn part_output(
            &mut self,
            part: PartKind,
            output: &dyn Display,
            _duration_opt: Option<Duration>,
        ) {
            self.answers.push((part, output.to_string()));
        }
    }

    #[test]
    fn runs_registered_puzzle() -> DynamicResult<()> {
        let mut handler = AnswerHandler::default();
        run_puzzle(2025, 1, "R50\nL5\nR105\n", &mut handler, false)?;
        assert_eq!(handler.name.as_deref(), Some("Day 1: Secret Entrance"));
        assert_eq!(
            handler.answers,
            [
                (PartKind::One, "2".to_string()),
                (PartKind::Two, "3".to_string())
            ]
        );
        Ok(())
    }

    #[test]
    fn unknown_puzzle_is_not_available() {
        let mut handler = AnswerHandler::default();
        let result = run_puzzle(2024, 1, "", &mut handler, false);
        let Err(error) = result else {
            panic!("2024 day 1 is not registered");
        };
        assert!(error.is::<PuzzleNotAvailable>());
        assert_eq!(error.to_string(), "no solution available for 2024 day 1");
        assert!(handler.name.is_none());
    }
}
