//! Roller implementations.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{D6, DiceRoll};

/// Something that can throw dice.
pub trait Roller {
    /// Roll `count` dice with `sides` faces each.
    fn roll(&mut self, count: u32, sides: u32) -> DiceRoll;

    /// Roll `count` six-sided dice.
    fn roll_d6(&mut self, count: u32) -> DiceRoll {
        self.roll(count, D6)
    }
}

/// Rolls with a random number generator.
#[derive(Debug, Clone)]
pub struct RngRoller<R = StdRng> {
    rng: R,
}

impl RngRoller<StdRng> {
    /// A roller that repeats the same sequence for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A roller seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl<R: Rng> RngRoller<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Roller for RngRoller<R> {
    fn roll(&mut self, count: u32, sides: u32) -> DiceRoll {
        let sides = sides.max(1);
        let rolls = (0..count)
            .map(|_| self.rng.random_range(1..=sides))
            .collect();
        DiceRoll { sides, rolls }
    }
}

/// Replays a fixed sequence of die faces, cycling when it runs out.
///
/// Faces larger than the die are wrapped onto it (`7` on a d6 reads as `1`),
/// and an empty script rolls all ones.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRoller {
    faces: VecDeque<u32>,
}

impl ScriptedRoller {
    /// A roller that returns `faces` in order.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    fn next_face(&mut self, sides: u32) -> u32 {
        let Some(face) = self.faces.pop_front() else {
            return 1;
        };
        self.faces.push_back(face);
        (face.max(1) - 1) % sides + 1
    }
}

impl Roller for ScriptedRoller {
    fn roll(&mut self, count: u32, sides: u32) -> DiceRoll {
        let sides = sides.max(1);
        let rolls = (0..count).map(|_| self.next_face(sides)).collect();
        DiceRoll { sides, rolls }
    }
}
