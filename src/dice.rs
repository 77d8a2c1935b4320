//! d6 dice sources for the attack sequence.
//!
//! Randomness is an injected capability: the resolver works against any
//! [`DiceSource`], so simulation runs roll a seeded fast RNG while tests
//! replay a scripted sequence to pin exact outcomes.

use std::collections::VecDeque;

/// Number of faces on every die rolled in the attack sequence.
pub const FACES: i32 = 6;

/// A source of independent, uniformly distributed d6 rolls.
pub trait DiceSource {
    /// Roll a single die, returning a face in `1..=6`.
    fn roll(&mut self) -> i32;

    /// Roll `n` dice. `n = 0` yields an empty vector; later stages of the
    /// sequence legitimately request zero rolls when the prior stage
    /// produced no successes.
    fn roll_n(&mut self, n: usize) -> Vec<i32> {
        (0..n).map(|_| self.roll()).collect()
    }
}

/// Fast PRNG-backed dice for simulation runs.
#[derive(Debug, Clone)]
pub struct FastDice {
    inner: fastrand::Rng,
}

impl FastDice {
    #[inline(always)]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            inner: fastrand::Rng::with_seed(seed),
        }
    }

    /// Seed from OS entropy; each call yields an independent stream.
    pub fn from_entropy() -> Self {
        Self::with_seed(rand::random::<u64>())
    }
}

impl DiceSource for FastDice {
    #[inline(always)]
    fn roll(&mut self) -> i32 {
        self.inner.i32(1..=FACES)
    }
}

/// Replays a fixed sequence of faces.
///
/// Requesting more rolls than the script holds panics.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: VecDeque<i32>,
}

impl ScriptedDice {
    pub fn new(faces: impl IntoIterator<Item = i32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    /// Faces left in the script.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> i32 {
        self.faces.pop_front().expect("scripted dice exhausted")
    }
}
