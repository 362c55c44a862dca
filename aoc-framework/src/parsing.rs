//! Utility functions and errors for parsing puzzle input.

use std::str::FromStr;

use thiserror::Error;

use crate::DynamicError;

/// A string parsing error with context of the string that was being parsed.
#[derive(Error, Debug)]
#[error("failed to parse string: {string:?}")]
pub struct ParseContextError<E>
where
    E: std::error::Error,
{
    /// The string that was being parsed.
    string: String,
    source: E,
}

/// Parse a string slice into another type.
///
/// This wraps [`str::parse`] and maps errors to [`ParseContextError`].
///
/// # Errors
///
/// Will return a [`ParseContextError`] with the given string as context and
/// [`F::Err`][FromStr::Err] as the source if it's not possible to parse the string into the desired
/// type.
pub fn parse_with_context<F>(string: &str) -> Result<F, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    string.parse::<F>().map_err(|source| ParseContextError {
        string: string.to_string(),
        source,
    })
}

/// A line in an input string caused a parsing error.
#[derive(Error, Debug)]
#[error("failure parsing line {}: {line:?}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// The line index, zero based.
    /// This will be formatted to a one-based number for display.
    line_index: usize,
    /// The text of the line that failed.
    line: String,
    source: DynamicError,
}

impl InvalidLine {
    /// The one-based line number that failed to parse.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_index.saturating_add(1)
    }
}

/// Parse each line of input with a closure, mapping any line's error into an [`InvalidLine`].
///
/// Trailing whitespace of the whole input is ignored, so a final newline (or trailing blank lines)
/// does not produce an empty line to parse. Lines within the input are passed as-is.
///
/// The closure receives the zero-based line index and the line string.
///
/// # Errors
///
/// If parsing a line fails, that item is an [`InvalidLine`] error sourcing the original error.
/// Collecting into a `Result` stops at the first failing line.
///
/// # Examples
///
/// ```
/// # use aoc_framework::DynamicResult;
/// use aoc_framework::parsing::{parse_input_lines, parse_with_context};
///
/// # fn main() -> DynamicResult<()> {
/// let values: Vec<u8> =
///     parse_input_lines("1\n2\n3\n", |_, line| parse_with_context(line)).collect::<Result<_, _>>()?;
/// assert_eq!(values, [1, 2, 3]);
/// # Ok(())
/// # }
/// ```
pub fn parse_input_lines<T, E, F>(
    input: &str,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    E: Into<DynamicError>,
    F: FnMut(usize, &str) -> Result<T, E>,
{
    input
        .trim_end()
        .lines()
        .enumerate()
        .map(move |(line_index, line)| {
            parser(line_index, line).map_err(|source| InvalidLine {
                line_index,
                line: line.to_string(),
                source: source.into(),
            })
        })
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::num::ParseIntError;

    use super::*;
    use crate::DynamicResult;

    #[test]
    fn parse_with_context_keeps_source_string() {
        let result: Result<u8, ParseContextError<ParseIntError>> = parse_with_context("300");
        let Err(error) = result else {
            panic!("300 should overflow a u8");
        };
        assert_eq!(error.to_string(), "failed to parse string: \"300\"");
        assert!(error.source().is_some());
    }

    #[test]
    fn parse_input_lines_ignores_trailing_newlines() -> DynamicResult<()> {
        let values: Vec<u16> =
            parse_input_lines("10\n20\n\n", |_, line| parse_with_context(line))
                .collect::<Result<_, _>>()?;
        assert_eq!(values, [10, 20]);
        Ok(())
    }

    #[test]
    fn parse_input_lines_passes_line_indices() -> DynamicResult<()> {
        let indices: Vec<usize> =
            parse_input_lines("a\nb\nc", |index, _| Ok::<_, DynamicError>(index))
                .collect::<Result<_, _>>()?;
        assert_eq!(indices, [0, 1, 2]);
        Ok(())
    }

    #[test]
    fn parse_input_lines_reports_first_invalid_line() {
        let result: Result<Vec<u8>, InvalidLine> =
            parse_input_lines("1\nx\ny", |_, line| parse_with_context(line)).collect();
        let Err(error) = result else {
            panic!("second line is not a number");
        };
        assert_eq!(error.line_number(), 2);
        assert_eq!(error.to_string(), "failure parsing line 2: \"x\"");
    }

    #[test]
    fn parse_input_lines_empty_input_yields_nothing() {
        let count = parse_input_lines("", |_, line| parse_with_context::<u8>(line)).count();
        assert_eq!(count, 0);
    }
}
