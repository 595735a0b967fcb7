//! Dice notation parsing and rolling.
//!
//! Notation is the compact `XdY` form (`2d20`, `1d4`). Parsing and
//! range validation happen before any roll, so an out-of-range request
//! never reaches the random source.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use thiserror::Error;

pub const MIN_COUNT: u32 = 1;
pub const MAX_COUNT: u32 = 100;
pub const MIN_SIDES: u32 = 2;
pub const MAX_SIDES: u32 = 1000;

static NOTATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)[dD](\d+)$").expect("static regex compile"));

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DiceError {
    /// The input does not match the `XdY` grammar at all.
    #[error("Invalid notation. Use the format like 2d20 or 1d4.")]
    InvalidNotation,

    /// The grammar matched but a bound was violated.
    #[error("Number of dice must be 1–100 and sides must be 2–1000.")]
    OutOfRange,
}

/// A validated dice request: `count` dice with `sides` faces each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceNotation {
    pub count: u32,
    pub sides: u32,
}

/// The individual draws of one roll plus their arithmetic total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollResult {
    pub rolls: Vec<u32>,
    pub total: u32,
}

impl DiceNotation {
    /// Parse a notation string like `2d20`.
    ///
    /// The separator letter is case-insensitive. Grammar failures and
    /// range failures are reported distinctly; a numeral too large to
    /// represent is a range failure, not a grammar failure.
    ///
    /// # Errors
    ///
    /// Returns `DiceError::InvalidNotation` when the input does not
    /// match `^(\d+)d(\d+)$`, and `DiceError::OutOfRange` when either
    /// bound is violated.
    pub fn parse(notation: &str) -> Result<Self, DiceError> {
        let caps = NOTATION_RE
            .captures(notation)
            .ok_or(DiceError::InvalidNotation)?;

        let count: u32 = caps[1].parse().map_err(|_| DiceError::OutOfRange)?;
        let sides: u32 = caps[2].parse().map_err(|_| DiceError::OutOfRange)?;

        if !(MIN_COUNT..=MAX_COUNT).contains(&count) || !(MIN_SIDES..=MAX_SIDES).contains(&sides) {
            return Err(DiceError::OutOfRange);
        }

        Ok(Self { count, sides })
    }

    /// Draw `count` independent uniform integers in `[1, sides]`.
    ///
    /// The random source is injected so callers and tests control
    /// reproducibility.
    pub fn roll(self, rng: &mut impl Rng) -> RollResult {
        let rolls: Vec<u32> = (0..self.count)
            .map(|_| rng.gen_range(1..=self.sides))
            .collect();
        let total = rolls.iter().sum();

        RollResult { rolls, total }
    }
}

impl RollResult {
    /// User-facing summary listing each draw and the total.
    #[must_use]
    pub fn describe(&self) -> String {
        let rolls: Vec<String> = self.rolls.iter().map(u32::to_string).collect();
        format!(
            "🎲 You rolled: {} (Total: {})",
            rolls.join(", "),
            self.total
        )
    }
}
