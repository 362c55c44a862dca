use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::LazyLock;

use aoc_framework::parsing::{ParseContextError, parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use regex::Regex;

#[solution_runner(
    name = "Day 1: Secret Entrance",
    parsed = Instructions,
    part_one = Day01,
    part_two = Day01
)]
impl crate::solutions::AdventOfCode<2025, 1> {}

/*
Input is a sequence of rotations for the dial of a safe. The dial has the numbers 0 through 99 in a
circle and starts pointing at 50.

Each line is one rotation: a direction, `L` toward lower numbers or `R` toward higher numbers,
followed by a distance in clicks. Turning left from 0 reaches 99, turning right from 99 reaches 0.
*/

/// The count of positions on the dial.
const DIAL_SIZE: u8 = 100;
/// The position the dial points at before any rotation.
const START_POSITION: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

#[derive(thiserror::Error, Debug)]
#[error("unrecognized rotation direction (expected \"L\" or \"R\"): {0:?}")]
struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" => Ok(Self::Left),
            "R" => Ok(Self::Right),
            other => Err(ParseDirectionError(other.to_owned())),
        }
    }
}

/// A single rotation of the dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Instruction {
    direction: Direction,
    /// Clicks to turn; can exceed the dial size for multiple laps.
    distance: u32,
}

#[derive(thiserror::Error, Debug)]
enum ParseInstructionError {
    #[error("expected a direction letter followed by a distance, found {0:?}")]
    Malformed(String),

    #[error("failed to parse rotation direction")]
    Direction(#[from] ParseDirectionError),

    #[error("failed to parse rotation distance")]
    Distance(#[from] ParseContextError<ParseIntError>),
}

static INSTRUCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<direction>[^0-9])(?<distance>[0-9]+)$").expect("pattern should be valid")
});

impl FromStr for Instruction {
    type Err = ParseInstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = INSTRUCTION_RE
            .captures(s)
            .ok_or_else(|| ParseInstructionError::Malformed(s.to_owned()))?;
        let direction = captures["direction"].parse()?;
        let distance = parse_with_context(&captures["distance"])?;
        Ok(Self {
            direction,
            distance,
        })
    }
}

/// The rotations to apply, in order.
#[derive(Debug)]
struct Instructions(Vec<Instruction>);

impl ParseData for Instructions {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let instructions = parse_input_lines(input, |_, line| line.parse::<Instruction>())
            .collect::<Result<_, _>>()?;
        Ok(Self(instructions))
    }
}

/*
The actual password is hidden in how the dial moves.

For part 1, the password is the number of rotations that leave the dial pointing at 0.

For part 2, the password is the number of clicks that point the dial at 0, whether the dial stops
there or passes it mid-rotation. A large rotation can pass 0 several times.
*/

/// The dial's state: the position it points at, always within `0..DIAL_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dial {
    position: u8,
}

impl Default for Dial {
    fn default() -> Self {
        Self {
            position: START_POSITION,
        }
    }
}

/// What happened during one rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Rotation {
    /// Clicks during the rotation that pointed the dial at 0, including where it stopped.
    crossings: u32,
    /// The rotation stopped with the dial at 0.
    landed: bool,
}

impl Dial {
    /// Apply a rotation, returning the resulting dial and what happened along the way.
    fn rotate(self, instruction: &Instruction) -> (Self, Rotation) {
        let dial_size = u32::from(DIAL_SIZE);
        let start = self.position;

        let offset = i64::from(instruction.distance);
        let raw_position = match instruction.direction {
            Direction::Left => i64::from(start) - offset,
            Direction::Right => i64::from(start) + offset,
        };
        let position = u8::try_from(raw_position.rem_euclid(i64::from(DIAL_SIZE)))
            .expect("floored modulo should be within the dial");

        // every full lap passes 0 once, then the rest of the turn may reach it one more time
        let full_laps = instruction.distance / dial_size;
        let remainder = u8::try_from(instruction.distance % dial_size)
            .expect("remainder should be within the dial");
        let partial_crossing = match instruction.direction {
            // leaving 0 does not count
            Direction::Left => start != 0 && remainder >= start,
            Direction::Right => start + remainder >= DIAL_SIZE,
        };

        let rotation = Rotation {
            crossings: full_laps + u32::from(partial_crossing),
            landed: position == 0,
        };
        (Self { position }, rotation)
    }

    /// Apply rotations in order, yielding what happened during each.
    fn replay<'a>(
        self,
        instructions: impl IntoIterator<Item = &'a Instruction>,
    ) -> impl Iterator<Item = Rotation> {
        instructions
            .into_iter()
            .scan(self, |dial, instruction| {
                let (next, rotation) = dial.rotate(instruction);
                *dial = next;
                Some(rotation)
            })
    }
}

#[derive(thiserror::Error, Debug)]
enum Day01Error {
    #[error("crossings tally overflowed")]
    CrossingsOverflow,
}

/// Totals over a sequence of rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Tallies {
    /// Rotations that stopped at 0.
    landings: usize,
    /// Clicks that pointed at 0.
    crossings: u64,
}

impl Tallies {
    fn from_rotations(rotations: &[Rotation]) -> Result<Self, Day01Error> {
        let landings = rotations.iter().filter(|rotation| rotation.landed).count();
        let crossings = rotations
            .iter()
            .map(|rotation| u64::from(rotation.crossings))
            .checked_sum()
            .ok_or(Day01Error::CrossingsOverflow)?;
        Ok(Self {
            landings,
            crossings,
        })
    }
}

/// Simulate the instructions on a dial.
fn simulate(dial: Dial, instructions: &[Instruction]) -> Result<Tallies, Day01Error> {
    let rotations: Vec<Rotation> = dial.replay(instructions).collect();
    Tallies::from_rotations(&rotations)
}

struct Day01;

impl Solution<PartOne> for Day01 {
    type Input = Instructions;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let tallies = simulate(Dial::default(), &input.0)?;
        Ok(tallies.landings)
    }
}

impl Solution<PartTwo> for Day01 {
    type Input = Instructions;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let tallies = simulate(Dial::default(), &input.0)?;
        Ok(tallies.crossings)
    }
}
