//! Toroidal coordinate space and initial placement.

use critters_core::{Error, Position, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// A 2D toroidal grid: pure coordinate math, no cell storage.
#[derive(Debug, Clone, Copy)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Reduce a position into bounds (with toroidal wrapping)
    pub fn wrap(&self, pos: Position) -> Position {
        pos.wrap(self.width, self.height)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Get position from flat cell index
    pub fn index_to_position(&self, index: usize) -> Position {
        let x = (index as i32) % self.width;
        let y = (index as i32) / self.width;
        Position::new(x, y)
    }

    pub fn random_position(&self, rng: &mut ChaCha8Rng) -> Position {
        Position::new(
            rng.gen_range(0..self.width),
            rng.gen_range(0..self.height),
        )
    }

    /// Assign `count` entities distinct cells in one pass.
    ///
    /// Fills the head of a flat slot list, shuffles the whole list uniformly,
    /// then reads each entity's coordinate off its slot index. The shuffle
    /// guarantees at most one occupant per cell, so there are no retries.
    /// Entity `i`'s cell is `positions[i]`.
    pub fn scatter(&self, count: usize, rng: &mut ChaCha8Rng) -> Result<Vec<Position>> {
        if count > self.cell_count() {
            return Err(Error::CapacityExceeded {
                required: count,
                capacity: self.cell_count(),
            });
        }

        let mut slots: Vec<Option<usize>> = (0..self.cell_count())
            .map(|i| if i < count { Some(i) } else { None })
            .collect();
        slots.shuffle(rng);

        let mut positions = vec![Position::new(0, 0); count];
        for (cell, slot) in slots.iter().enumerate() {
            if let Some(ordinal) = slot {
                positions[*ordinal] = self.index_to_position(cell);
            }
        }

        Ok(positions)
    }
}
