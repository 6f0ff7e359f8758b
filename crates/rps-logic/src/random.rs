//! Opponent choice generation
//!
//! Production play draws from the thread-local generator. Seeded generators
//! give reproducible sequences for tests and replays.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::choice::Choice;

/// Pick a choice uniformly at random from the thread-local generator.
pub fn random_choice() -> Choice {
    random_choice_with(&mut rand::rng())
}

/// Pick a choice uniformly at random from `rng`.
pub fn random_choice_with<R: Rng + ?Sized>(rng: &mut R) -> Choice {
    rng.random()
}

/// Deterministic generator: same seed = same sequence of choices.
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
