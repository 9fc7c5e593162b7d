//! Animal and food entity records.

use crate::species::Strategy;
use critters_core::{AnimalId, FoodId, Position, SpeciesKind};

/// A living, species-typed grid occupant.
///
/// Species-private mutable state (hunger, step counters, fear flags) lives
/// inside the strategy; the engine owns everything else and applies all
/// position and counter mutations.
pub struct Animal {
    pub id: AnimalId,
    pub kind: SpeciesKind,
    pub position: Position,
    pub alive: bool,
    /// Equals the global turn number while the animal has not yet moved that
    /// tick; incremented by the engine when its move resolves.
    pub last_moved_turn: u64,
    pub food_eaten: u32,
    pub kill_count: u32,
    /// Meals eaten since the animal last slept.
    pub meals_since_sleep: u32,
    /// Set while napping: first turn the animal is awake again.
    pub asleep_until: Option<u64>,
    pub strategy: Box<dyn Strategy>,
}

impl Animal {
    pub fn new(kind: SpeciesKind, position: Position, strategy: Box<dyn Strategy>) -> Self {
        Self {
            id: AnimalId::new(),
            kind,
            position,
            alive: true,
            last_moved_turn: 0,
            food_eaten: 0,
            kill_count: 0,
            meals_since_sleep: 0,
            asleep_until: None,
            strategy,
        }
    }

    pub fn glyph(&self) -> String {
        self.strategy.glyph()
    }

    pub fn is_asleep(&self, turn: u64) -> bool {
        self.asleep_until.map_or(false, |until| turn < until)
    }

    /// Settle the animal on `position` and advance its per-entity turn
    /// counter, which is what lets it participate in the next global tick.
    pub fn move_to(&mut self, position: Position) {
        self.position = position;
        self.last_moved_turn += 1;
    }

    pub fn record_meal(&mut self) {
        self.food_eaten += 1;
    }

    pub fn record_kill(&mut self) {
        self.kill_count += 1;
    }
}

/// A piece of food. No behavior beyond being consumed.
#[derive(Debug, Clone, Copy)]
pub struct Food {
    pub id: FoodId,
    pub position: Position,
    pub alive: bool,
}

impl Food {
    pub fn new(position: Position) -> Self {
        Self {
            id: FoodId::new(),
            position,
            alive: true,
        }
    }
}
