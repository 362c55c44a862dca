//! Framework of traits and utilities for Advent of Code puzzles.
//!
//! A puzzle is solved in up to three steps: parse the input string into a data type, solve part
//! one, then solve part two from the same parsed data.
//!
//! # Quick Start
//!
//! 1. Define your input type and implement [`ParseData`]:
//!
//! ```
//! # use aoc_framework::DynamicResult;
//! use aoc_framework::ParseData;
//! use aoc_framework::parsing::{parse_input_lines, parse_with_context};
//!
//! struct Steps(Vec<i64>);
//!
//! impl ParseData for Steps {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         let steps = parse_input_lines(input, |_, line| parse_with_context(line))
//!             .collect::<Result<_, _>>()?;
//!         Ok(Self(steps))
//!     }
//! }
//! ```
//!
//! 2. Implement [`Solution`] for each part:
//!
//! ```
//! # use aoc_framework::{DynamicResult, ParseData};
//! # struct Steps(Vec<i64>);
//! # impl ParseData for Steps {
//! #     fn parse(input: &str) -> DynamicResult<Self> {
//! #         Ok(Self(input.lines().map(str::parse).collect::<Result<_, _>>()?))
//! #     }
//! # }
//! use aoc_framework::{PartOne, PartTwo, Solution};
//!
//! struct Walk;
//!
//! impl Solution<PartOne> for Walk {
//!     type Input = Steps;
//!     type Output = i64;
//!
//!     fn solve(input: &Steps) -> DynamicResult<i64> {
//!         Ok(input.0.iter().sum())
//!     }
//! }
//!
//! impl Solution<PartTwo> for Walk {
//!     type Input = Steps;
//!     type Output = usize;
//!
//!     fn solve(input: &Steps) -> DynamicResult<usize> {
//!         Ok(input.0.iter().filter(|step| **step < 0).count())
//!     }
//! }
//! ```
//!
//! 3. Use the [`runner`] module to execute your solution.
//!
//! Solutions that work on the raw input can set `Input = str` and skip [`ParseData`].

#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;

pub mod parsing;
pub mod runner;

mod private {
    /// Seals [`Part`][super::Part] so only [`PartOne`][super::PartOne] and
    /// [`PartTwo`][super::PartTwo] exist.
    pub trait Sealed {}
}

/// A dynamically dispatched error, wrapped in a [`Box`].
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result that can return a [`DynamicError`] as an error.
pub type DynamicResult<T> = Result<T, DynamicError>;

/// An enum to identify a puzzle part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    One,
    Two,
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "Part 1"),
            Self::Two => write!(f, "Part 2"),
        }
    }
}

/// A marker trait used to identify a part for a solution.
///
/// Types implementing this trait are used as generic parameters to [`Solution<P>`] to indicate
/// which part the solution implements.
pub trait Part: private::Sealed {
    /// Get the related [`PartKind`] for this part.
    fn kind() -> PartKind;
}

/// Indicates a [`Solution`] implements part one.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Indicates a [`Solution`] implements part two.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// A solution that solves a [`Part`] of a puzzle.
///
/// Implement for the marker structs [`PartOne`] and [`PartTwo`].
pub trait Solution<P: Part> {
    /// The input data type passed to the solution.
    ///
    /// [`Solution::solve`] accepts a reference to this type, so avoid reference nesting.
    /// For direct string input, set to `str`.
    type Input: ?Sized;

    /// The answer type returned from the solution.
    type Output: Display;

    /// Solve with the given input.
    ///
    /// # Errors
    ///
    /// Invalid input or a failed calculation (such as an overflowing tally) is returned as a
    /// dynamically dispatched error.
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// A data structure created by parsing puzzle input.
///
/// Solutions receive the parsed data by setting [`Solution::Input`] to the implementing type.
pub trait ParseData {
    /// Parse an input string into an instance of self.
    ///
    /// # Errors
    ///
    /// If parsing fails, the resulting error is returned as a dynamically dispatched error.
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}
