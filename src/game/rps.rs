//! Rock-paper-scissors domain: the closed choice set, result
//! resolution, and the shuffled presentation list for select menus.

use rand::Rng;
use rand::seq::SliceRandom;

/// The closed three-element choice domain. No extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

/// Result of an ordered match-up, from the first player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Tie,
}

/// One entry of the shuffled selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub choice: Choice,
    pub label: String,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Wire value, as registered in the command's choice list.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }

    /// Presentation label for select menus.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }

    /// The choice this one defeats.
    #[must_use]
    pub fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
        }
    }

    /// Parse a wire value, case-insensitively. `None` for anything
    /// outside the closed domain.
    #[must_use]
    pub fn parse(value: &str) -> Option<Choice> {
        match value.to_ascii_lowercase().as_str() {
            "rock" => Some(Choice::Rock),
            "paper" => Some(Choice::Paper),
            "scissors" => Some(Choice::Scissors),
            _ => None,
        }
    }
}

/// Resolve an ordered pair of choices.
///
/// Total over all nine ordered pairs and antisymmetric: swapping the
/// arguments swaps `FirstWins` and `SecondWins`, and ties are
/// reflexive.
#[must_use]
pub fn resolve(a: Choice, b: Choice) -> Outcome {
    if a == b {
        Outcome::Tie
    } else if a.beats() == b {
        Outcome::FirstWins
    } else {
        Outcome::SecondWins
    }
}

/// The full choice domain in a freshly randomized order.
///
/// Pure presentation helper for the choice select menu; every call
/// covers exactly the three choices.
pub fn shuffled_options(rng: &mut impl Rng) -> Vec<ChoiceOption> {
    let mut all = Choice::ALL;
    all.shuffle(rng);

    all.iter()
        .map(|&choice| ChoiceOption {
            choice,
            label: choice.label().to_string(),
        })
        .collect()
}
