//! Sloth: the inert default. Stays put, forfeits, never eats.

use super::{NeighborView, Strategy};
use critters_core::{Attack, Direction};

pub struct Sloth;

impl Sloth {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Sloth {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Sloth {
    fn next_move(&mut self, _neighbors: &NeighborView) -> Direction {
        Direction::Center
    }

    fn fight(&mut self, _opponent: &str) -> Attack {
        Attack::Forfeit
    }

    fn wants_food(&mut self) -> bool {
        false
    }

    fn glyph(&self) -> String {
        "?".to_string()
    }

    fn color(&self) -> &'static str {
        "#000000"
    }
}
