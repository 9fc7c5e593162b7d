//! Species strategies: the per-species decision logic the engine dispatches to.
//!
//! Each [`SpeciesKind`] maps to exactly one [`Strategy`] implementation, so
//! adding a species means adding one enum variant and one implementation.
//! Strategies see only their [`NeighborView`] — never global world state.

mod bear;
mod lion;
mod sloth;
mod tiger;
mod vegan;

pub use bear::Bear;
pub use lion::Lion;
pub use sloth::Sloth;
pub use tiger::Tiger;
pub use vegan::Vegan;

use critters_core::{Attack, Direction, SpeciesKind, BLANK_GLYPH};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Glyphs of the eight neighboring cells plus the critter's own cell,
/// frozen at the start of the tick.
#[derive(Debug, Clone)]
pub struct NeighborView {
    glyphs: [String; 9],
}

impl NeighborView {
    pub fn new(glyphs: [String; 9]) -> Self {
        Self { glyphs }
    }

    /// A view of nothing but empty cells.
    pub fn blank() -> Self {
        Self {
            glyphs: std::array::from_fn(|_| BLANK_GLYPH.to_string()),
        }
    }

    pub fn glyph(&self, direction: Direction) -> &str {
        &self.glyphs[direction.index()]
    }

    /// Walk the view in scan order (the [`Direction::ALL`] order).
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &str)> + '_ {
        Direction::ALL
            .iter()
            .map(move |direction| (*direction, self.glyph(*direction)))
    }
}

/// The capability contract every species implements.
///
/// `next_move`, `fight` and `wants_food` may mutate species-private state;
/// that state survives across ticks and is never touched by the engine
/// except through `on_reset`. The lifecycle hooks default to no-ops.
pub trait Strategy: Send {
    /// Choose a direction for this tick, given the neighbor view.
    fn next_move(&mut self, neighbors: &NeighborView) -> Direction;

    /// Choose an attack, given the opponent's display glyph.
    fn fight(&mut self, opponent: &str) -> Attack;

    /// Whether the animal eats food it has stepped onto.
    fn wants_food(&mut self) -> bool;

    /// Display glyph.
    fn glyph(&self) -> String;

    /// Display color (CSS color string).
    fn color(&self) -> &'static str;

    // Lifecycle notifications from the engine.

    /// Won a fight; `_opponent` is the loser's glyph.
    fn on_win(&mut self, _opponent: &str) {}
    /// Lost a fight (and died); `_opponent` is the winner's glyph.
    fn on_lose(&mut self, _opponent: &str) {}
    /// Put to sleep for eating too much food.
    fn on_sleep(&mut self) {}
    /// Woke up from sleeping.
    fn on_wakeup(&mut self) {}
    /// The world was reset.
    fn on_reset(&mut self) {}
    /// Collided with an animal of the same species.
    fn on_mate_start(&mut self) {}
    /// The same-species encounter ended.
    fn on_mate_end(&mut self) {}
}

/// Construct the strategy for a species, drawing any species-specific
/// constructor parameters (grizzly flag, starting hunger, private RNG seed)
/// from the world RNG.
pub fn instantiate(kind: SpeciesKind, rng: &mut ChaCha8Rng) -> Box<dyn Strategy> {
    match kind {
        SpeciesKind::Bear => Box::new(Bear::new(rng.gen())),
        SpeciesKind::Lion => Box::new(Lion::new()),
        SpeciesKind::Tiger => {
            let hunger = rng.gen_range(0..10);
            Box::new(Tiger::new(hunger, ChaCha8Rng::seed_from_u64(rng.gen())))
        }
        SpeciesKind::Vegan => Box::new(Vegan::new()),
        SpeciesKind::Sloth => Box::new(Sloth::new()),
    }
}
