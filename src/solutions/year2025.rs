//! Solutions for Advent of Code 2025.

mod day01;
