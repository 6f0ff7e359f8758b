//! Single round execution

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::choice::{Choice, Outcome};
use crate::random::random_choice_with;
use crate::resolve;

/// Result of a single round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub player_choice: Choice,
    pub opponent_choice: Choice,
    pub outcome: Outcome,
}

impl Round {
    /// Build a round from both choices, resolving the outcome.
    pub fn new(player_choice: Choice, opponent_choice: Choice) -> Self {
        Self {
            player_choice,
            opponent_choice,
            outcome: resolve(player_choice, opponent_choice),
        }
    }

    /// A winning round makes the prize available.
    pub fn is_win(&self) -> bool {
        self.outcome == Outcome::Win
    }
}

/// Play one round against a random opponent drawn from `rng`
pub fn play_round<R: Rng + ?Sized>(player_choice: Choice, rng: &mut R) -> Round {
    let opponent_choice = random_choice_with(rng);
    Round::new(player_choice, opponent_choice)
}
