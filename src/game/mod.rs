//! Game logic: dice rolling, rock-paper-scissors resolution, duel sessions.

pub mod dice;
pub mod rps;
pub mod session;

// Re-export main types for convenience
pub use dice::{DiceError, DiceNotation, RollResult};
pub use rps::{Choice, ChoiceOption, Outcome, resolve, shuffled_options};
pub use session::{GameSession, SessionStore};
