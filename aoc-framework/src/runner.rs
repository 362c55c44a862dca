//! Functions and traits for running puzzle solutions.
//!
//! # Quick Start
//!
//! Annotate a structure or impl-block with the [`#[solution_runner]`][solution_runner] attribute
//! macro to implement [`SolutionRunner`]:
//!
//! ```
//! # use aoc_framework::runner::solution_runner;
//! # use aoc_framework::{DynamicResult, PartOne, PartTwo, Solution};
//! #
//! struct LineCount;
//!
//! impl Solution<PartOne> for LineCount {
//!     type Input = str;
//!     type Output = usize;
//!
//!     fn solve(input: &str) -> DynamicResult<usize> {
//!         Ok(input.lines().count())
//!     }
//! }
//!
//! impl Solution<PartTwo> for LineCount {
//!     type Input = str;
//!     type Output = usize;
//!
//!     fn solve(input: &str) -> DynamicResult<usize> {
//!         Ok(input.lines().filter(|line| line.is_empty()).count())
//!     }
//! }
//!
//! #[solution_runner(name = "Line Count", part_one = LineCount, part_two = LineCount)]
//! struct LineCountRunner;
//! ```

use std::fmt::Display;
use std::time::Duration;

use crate::{DynamicResult, ParseData, Part, PartKind, PartOne, PartTwo, Solution};

// re-export procedural macro
pub use aoc_framework_macros::solution_runner;

/// A handler of output events.
///
/// Running a solution emits events for each step, which the handler reports as feedback.
pub trait OutputHandler {
    /// Called with the name of the solution, before any other step.
    fn solution_name(&mut self, name: &str);

    /// Called when the solution starts parsing input.
    fn parse_start(&mut self);

    /// Called when parsing input is finished, with the parse duration if timed.
    fn parse_end(&mut self, duration_opt: Option<Duration>);

    /// Called when a solution part starts.
    fn part_start(&mut self, part: PartKind);

    /// Called when a part finishes with its answer, and the duration to solve if timed.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);
}

/// Evaluate an expression, measuring the elapsed [`Duration`][std::time::Duration] when `$timed`
/// is true.
///
/// Returns a tuple of the expression's result and an optional duration.
macro_rules! measure_with_optional_duration {
    ($expr:expr, $timed:expr) => {{
        if $timed {
            let start = ::std::time::Instant::now();
            let result = $expr;
            (result, Some(start.elapsed()))
        } else {
            ($expr, None)
        }
    }};
}

/// Run a solution part, outputting events through the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution is propagated.
fn run_part<S, P>(
    input: &S::Input,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P>,
{
    let part = P::kind();
    handler.part_start(part);
    let (result, duration_opt) = measure_with_optional_duration!(S::solve(input), timed);
    let output = result?;
    handler.part_output(part, &output, duration_opt);
    Ok(())
}

/// Run a parse step, outputting events through the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing is propagated.
fn run_parse<D: ParseData>(
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<D> {
    handler.parse_start();
    let (result, duration_opt) = measure_with_optional_duration!(D::parse(input), timed);
    let parsed = result?;
    handler.parse_end(duration_opt);
    Ok(parsed)
}

/// Run both parts of a solution that accepts string input.
///
/// # Arguments
///
/// - `name` - The solution's name to output.
/// - `input` - The input string to solve.
/// - `handler` - The output handler to output events to.
/// - `timed` - A flag to measure the time to solve parts then output the elapsed times to the
///   handler.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution parts is propagated. Part two is not run if
/// part one fails.
pub fn solve_full_solution<S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
    S2: Solution<PartTwo, Input = str>,
{
    handler.solution_name(name);
    run_part::<S1, PartOne>(input, handler, timed)?;
    run_part::<S2, PartTwo>(input, handler, timed)
}

/// Parse input once, then run both parts of a solution against the parsed data.
///
/// # Arguments
///
/// - `name` - The solution's name to output.
/// - `input` - The input string to parse.
/// - `handler` - The output handler to output events to.
/// - `timed` - A flag to measure the time to parse data & solve parts then output the elapsed times
///   to the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing or the solution parts is propagated. No part runs
/// if parsing fails.
pub fn solve_parsed_full_solution<D, S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)?;
    run_part::<S2, PartTwo>(&parsed, handler, timed)
}

/// A solution that can be run from raw input.
///
/// The trait can be implemented with the [`solution_runner`] attribute macro.
pub trait SolutionRunner {
    /// Run the solution.
    ///
    /// # Arguments
    ///
    /// - `input` - The input string to solve.
    /// - `handler` - The output handler to output events to.
    /// - `timed` - A flag to measure the time to process steps then output the elapsed times to the
    ///   handler.
    ///
    /// # Errors
    ///
    /// Any dynamically dispatched error from running the solution is propagated.
    fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{parse_input_lines, parse_with_context};

    /// Records events as strings, in order.
    #[derive(Default)]
    struct RecordingHandler {
        events: Vec<String>,
        durations: Vec<Option<Duration>>,
    }

    impl OutputHandler for RecordingHandler {
        fn solution_name(&mut self, name: &str) {
            self.events.push(format!("name {name}"));
        }

        fn parse_start(&mut self) {
            self.events.push("parse start".to_string());
        }

        fn parse_end(&mut self, duration_opt: Option<Duration>) {
            self.events.push("parse end".to_string());
            self.durations.push(duration_opt);
        }

        fn part_start(&mut self, part: PartKind) {
            self.events.push(format!("start {part}"));
        }

        fn part_output(
            &mut self,
            part: PartKind,
            output: &dyn Display,
            duration_opt: Option<Duration>,
        ) {
            self.events.push(format!("{part}: {output}"));
            self.durations.push(duration_opt);
        }
    }

    struct Offsets(Vec<i32>);

    impl ParseData for Offsets {
        fn parse(input: &str) -> DynamicResult<Self> {
            let offsets = parse_input_lines(input, |_, line| parse_with_context(line))
                .collect::<Result<_, _>>()?;
            Ok(Self(offsets))
        }
    }

    struct SumOffsets;

    impl Solution<PartOne> for SumOffsets {
        type Input = Offsets;
        type Output = i32;

        fn solve(input: &Offsets) -> DynamicResult<i32> {
            Ok(input.0.iter().sum())
        }
    }

    impl Solution<PartTwo> for SumOffsets {
        type Input = Offsets;
        type Output = usize;

        fn solve(input: &Offsets) -> DynamicResult<usize> {
            Ok(input.0.iter().filter(|offset| **offset < 0).count())
        }
    }

    struct CharCount;

    impl Solution<PartOne> for CharCount {
        type Input = str;
        type Output = usize;

        fn solve(input: &str) -> DynamicResult<usize> {
            Ok(input.chars().count())
        }
    }

    impl Solution<PartTwo> for CharCount {
        type Input = str;
        type Output = usize;

        fn solve(_input: &str) -> DynamicResult<usize> {
            Err("part two always fails".into())
        }
    }

    #[test]
    fn parsed_solution_emits_events_in_order() -> DynamicResult<()> {
        let mut handler = RecordingHandler::default();
        solve_parsed_full_solution::<Offsets, SumOffsets, SumOffsets>(
            "Offsets",
            "5\n-2\n-1\n",
            &mut handler,
            false,
        )?;
        assert_eq!(
            handler.events,
            [
                "name Offsets",
                "parse start",
                "parse end",
                "start Part 1",
                "Part 1: 2",
                "start Part 2",
                "Part 2: 2",
            ]
        );
        assert!(handler.durations.iter().all(Option::is_none));
        Ok(())
    }

    #[test]
    fn timed_run_reports_durations() -> DynamicResult<()> {
        let mut handler = RecordingHandler::default();
        solve_parsed_full_solution::<Offsets, SumOffsets, SumOffsets>(
            "Offsets",
            "1",
            &mut handler,
            true,
        )?;
        assert_eq!(handler.durations.len(), 3);
        assert!(handler.durations.iter().all(Option::is_some));
        Ok(())
    }

    #[test]
    fn parse_failure_skips_parts() {
        let mut handler = RecordingHandler::default();
        let result = solve_parsed_full_solution::<Offsets, SumOffsets, SumOffsets>(
            "Offsets",
            "1\nnope\n",
            &mut handler,
            false,
        );
        assert!(result.is_err());
        assert_eq!(handler.events, ["name Offsets", "parse start"]);
    }

    #[test]
    fn part_failure_propagates_after_earlier_output() {
        let mut handler = RecordingHandler::default();
        let result =
            solve_full_solution::<CharCount, CharCount>("Chars", "abc", &mut handler, false);
        assert!(result.is_err());
        assert_eq!(
            handler.events,
            ["name Chars", "start Part 1", "Part 1: 3", "start Part 2"]
        );
    }
}
