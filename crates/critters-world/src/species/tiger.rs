//! Tiger: wanders in random three-step bursts, fierce only once sated.

use super::{NeighborView, Strategy};
use critters_core::{Attack, Direction};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

pub struct Tiger {
    hunger: u32,
    steps: u32,
    direction: Direction,
    rng: ChaCha8Rng,
}

impl Tiger {
    /// `hunger` is the starting hunger level (0-9 at placement); `rng` is the
    /// tiger's private randomness, seeded from the world RNG at spawn.
    pub fn new(hunger: u32, rng: ChaCha8Rng) -> Self {
        Self {
            hunger,
            steps: 3,
            direction: Direction::Center,
            rng,
        }
    }
}

impl Strategy for Tiger {
    fn next_move(&mut self, _neighbors: &NeighborView) -> Direction {
        if self.steps == 3 {
            self.steps = 0;
            self.direction = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];
        }
        self.steps += 1;
        self.direction
    }

    fn fight(&mut self, _opponent: &str) -> Attack {
        if self.hunger > 0 {
            Attack::Scratch
        } else {
            Attack::Pounce
        }
    }

    fn wants_food(&mut self) -> bool {
        if self.hunger > 0 {
            self.hunger -= 1;
            return true;
        }
        false
    }

    fn glyph(&self) -> String {
        if self.hunger > 0 {
            self.hunger.to_string()
        } else {
            "T".to_string()
        }
    }

    fn color(&self) -> &'static str {
        "yellow"
    }
}
