//! Critter world simulation engine.
//!
//! This crate implements the toroidal 2D grid world where typed critters
//! move, compete for food, and fight under a cyclic attack dominance rule.

pub mod animal;
pub mod combat;
pub mod grid;
pub mod scoreboard;
pub mod session;
pub mod simulation;
pub mod snapshot;
pub mod species;

pub use animal::{Animal, Food};
pub use grid::Grid;
pub use session::{Session, SharedSession};
pub use simulation::Simulation;
pub use snapshot::WorldSnapshot;
pub use species::{NeighborView, Strategy};
