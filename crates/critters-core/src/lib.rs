//! Core types and utilities for the critters grid simulation.

pub mod config;
pub mod error;
pub mod score;
pub mod types;

pub use config::*;
pub use error::{Error, Result};
pub use score::*;
pub use types::*;
