//! Configuration types for the simulation.

use crate::types::SpeciesKind;
use serde::{Deserialize, Serialize};

/// One species entry in the initial roster
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpeciesSlot {
    pub kind: SpeciesKind,
    pub count: usize,
}

impl SpeciesSlot {
    pub fn new(kind: SpeciesKind, count: usize) -> Self {
        Self { kind, count }
    }
}

/// Food regeneration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegenConfig {
    /// Whether food regenerates at all
    pub enabled: bool,
    /// How many pieces of food appear per batch
    pub batch_size: usize,
    /// A batch spawns once every this many ticks
    pub turns_per_batch: u64,
}

impl Default for RegenConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            batch_size: 10,
            turns_per_batch: 20,
        }
    }
}

/// Sleep-after-eating parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepConfig {
    /// Whether animals are put to sleep for eating too much
    pub enabled: bool,
    /// Meals eaten since the last nap before an animal falls asleep
    pub meals_per_sleep: u32,
    /// How many ticks a nap lasts
    pub sleep_ticks: u64,
}

impl Default for SleepConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            meals_per_sleep: 5,
            sleep_ticks: 3,
        }
    }
}

/// World configuration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Width of the world grid
    pub width: i32,
    /// Height of the world grid
    pub height: i32,
    /// Initial species roster
    pub roster: Vec<SpeciesSlot>,
    /// Initial food count
    pub food_count: usize,
    /// Food regeneration
    pub regen: RegenConfig,
    /// Sleep rules
    pub sleep: SleepConfig,
    /// Random seed for reproducibility
    pub seed: u64,
}

impl WorldConfig {
    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Number of entities the initial placement must fit.
    pub fn entity_count(&self) -> usize {
        self.roster.iter().map(|slot| slot.count).sum::<usize>() + self.food_count
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 50,
            roster: vec![
                SpeciesSlot::new(SpeciesKind::Bear, 25),
                SpeciesSlot::new(SpeciesKind::Lion, 25),
                SpeciesSlot::new(SpeciesKind::Tiger, 25),
                SpeciesSlot::new(SpeciesKind::Vegan, 25),
            ],
            food_count: 250,
            regen: RegenConfig::default(),
            sleep: SleepConfig::default(),
            seed: 0,
        }
    }
}

/// Host configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// World configuration
    pub world: WorldConfig,
    /// Scheduler pulse rate (ticks per second)
    pub tick_rate_hz: f64,
    /// Log a score summary every this many ticks
    pub log_every_ticks: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            tick_rate_hz: 10.0,
            log_every_ticks: 50,
        }
    }
}
