//! Lion: patrols a square, roars at bears, gets hungry from fighting.

use super::{NeighborView, Strategy};
use critters_core::{Attack, Direction};

pub struct Lion {
    is_hungry: bool,
    steps: u32,
}

impl Lion {
    pub fn new() -> Self {
        Self {
            is_hungry: false,
            steps: 0,
        }
    }
}

impl Default for Lion {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Lion {
    fn next_move(&mut self, _neighbors: &NeighborView) -> Direction {
        self.steps += 1;
        match self.steps {
            1..=5 => Direction::South,
            6..=11 => Direction::West,
            12..=17 => Direction::North,
            18..=23 => Direction::East,
            _ => {
                self.steps = 0;
                Direction::South
            }
        }
    }

    fn fight(&mut self, opponent: &str) -> Attack {
        self.is_hungry = true;
        if opponent == "B" {
            Attack::Roar
        } else {
            Attack::Pounce
        }
    }

    fn wants_food(&mut self) -> bool {
        if self.is_hungry {
            self.is_hungry = false;
            return true;
        }
        false
    }

    fn glyph(&self) -> String {
        "L".to_string()
    }

    fn color(&self) -> &'static str {
        "red"
    }
}
