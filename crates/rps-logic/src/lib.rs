//! Rock Paper Scissors game logic
//!
//! Core rules and session state for the wallet-gated mini-game.
//! This crate is compiled to:
//! - Native (for tests and host applications)
//! - WASM (for the browser front end)

mod choice;
mod config;
mod error;
mod game;
mod random;
mod session;

#[cfg(feature = "wasm")]
mod wasm;

pub use choice::{Choice, Outcome};
pub use config::GameConfig;
pub use error::GameError;
pub use game::{play_round, Round};
pub use random::{random_choice, random_choice_with, seeded_rng};
pub use session::{Session, SessionView};

/// Outcome for `player` against `opponent`
pub fn resolve(player: Choice, opponent: Choice) -> Outcome {
    if player == opponent {
        Outcome::Tie
    } else if player.beats(opponent) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
