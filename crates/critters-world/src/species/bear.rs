//! Bear: eats everything, scratches everyone, ambles north then west.

use super::{NeighborView, Strategy};
use critters_core::{Attack, Direction};

pub struct Bear {
    color: &'static str,
    traveled_north: bool,
}

impl Bear {
    pub fn new(is_grizzly: bool) -> Self {
        Self {
            color: if is_grizzly { "rgb(190,110,50)" } else { "white" },
            traveled_north: false,
        }
    }
}

impl Strategy for Bear {
    fn next_move(&mut self, _neighbors: &NeighborView) -> Direction {
        if !self.traveled_north {
            self.traveled_north = true;
            Direction::North
        } else {
            self.traveled_north = false;
            Direction::West
        }
    }

    fn fight(&mut self, _opponent: &str) -> Attack {
        Attack::Scratch
    }

    fn wants_food(&mut self) -> bool {
        true
    }

    fn glyph(&self) -> String {
        "B".to_string()
    }

    fn color(&self) -> &'static str {
        self.color
    }
}
