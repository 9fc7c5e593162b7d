//! Read-only world snapshot handed to renderers and score consumers.

use critters_core::{Position, ScoreRecord, SpeciesKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Renderer-facing view of one animal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalView {
    pub species: SpeciesKind,
    pub glyph: String,
    pub color: String,
    pub position: Position,
    pub alive: bool,
    pub asleep: bool,
}

/// Renderer-facing view of one piece of food.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FoodView {
    pub position: Position,
    pub alive: bool,
}

/// Everything a host needs after a tick completes.
///
/// Taken only between ticks; the engine never hands out a view of a
/// half-resolved world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub turn: u64,
    pub width: i32,
    pub height: i32,
    pub animals: Vec<AnimalView>,
    pub food: Vec<FoodView>,
    pub scores: BTreeMap<SpeciesKind, ScoreRecord>,
}

impl WorldSnapshot {
    /// Live animals only.
    pub fn alive_count(&self) -> usize {
        self.animals.iter().filter(|view| view.alive).count()
    }

    /// Live food only.
    pub fn food_count(&self) -> usize {
        self.food.iter().filter(|view| view.alive).count()
    }
}
