//! Host-facing control wrapper: start/stop gating, reset, shared access.

use crate::simulation::Simulation;
use crate::snapshot::WorldSnapshot;
use critters_core::{Result, WorldConfig};
use parking_lot::Mutex;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use tracing::info;

/// A session shared with a multi-threaded host. Each lock hold must span a
/// whole [`Session::pulse`], never part of one.
pub type SharedSession = Arc<Mutex<Session>>;

/// Owns the original configuration and the live world, and gates the
/// scheduler's pulses.
///
/// The session RNG (seeded from `WorldConfig::seed`) hands each world build
/// its placement seed, so a run is reproducible end to end while every
/// `reset` still deals a fresh board.
pub struct Session {
    config: WorldConfig,
    simulation: Simulation,
    rng: ChaCha8Rng,
    running: bool,
}

impl Session {
    pub fn new(config: WorldConfig) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let simulation = Self::build_world(&config, &mut rng)?;
        Ok(Self {
            config,
            simulation,
            rng,
            running: false,
        })
    }

    fn build_world(config: &WorldConfig, rng: &mut ChaCha8Rng) -> Result<Simulation> {
        let mut world_config = config.clone();
        world_config.seed = rng.gen();
        Simulation::new(world_config)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin forwarding scheduler pulses to the engine.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            info!(turn = self.simulation.turn(), "session started");
        }
    }

    /// Stop forwarding pulses. The world keeps its state.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            info!(turn = self.simulation.turn(), "session stopped");
        }
    }

    /// One scheduler pulse: steps the world if the session is running and
    /// returns the post-tick snapshot, or `None` while stopped.
    pub fn pulse(&mut self) -> Result<Option<WorldSnapshot>> {
        if !self.running {
            return Ok(None);
        }
        self.simulation.step()?;
        Ok(Some(self.simulation.snapshot()))
    }

    /// Rebuild the world from the original configuration, notifying every
    /// surviving strategy first.
    pub fn reset(&mut self) -> Result<()> {
        self.simulation.notify_reset();
        self.simulation = Self::build_world(&self.config, &mut self.rng)?;
        info!("session reset");
        Ok(())
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        self.simulation.snapshot()
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn into_shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use critters_core::{SpeciesKind, SpeciesSlot};

    fn small_config() -> WorldConfig {
        let mut config = WorldConfig::default();
        config.width = 8;
        config.height = 8;
        config.roster = vec![
            SpeciesSlot::new(SpeciesKind::Bear, 2),
            SpeciesSlot::new(SpeciesKind::Vegan, 2),
        ];
        config.food_count = 6;
        config.seed = 5;
        config
    }

    #[test]
    fn test_pulses_are_gated_by_start_stop() {
        let mut session = Session::new(small_config()).unwrap();
        assert!(!session.is_running());
        assert!(session.pulse().unwrap().is_none());
        assert_eq!(session.snapshot().turn, 0);

        session.start();
        let snapshot = session.pulse().unwrap().unwrap();
        assert_eq!(snapshot.turn, 1);

        session.stop();
        assert!(session.pulse().unwrap().is_none());
        assert_eq!(session.snapshot().turn, 1);
    }

    #[test]
    fn test_reset_rebuilds_the_world() {
        let mut session = Session::new(small_config()).unwrap();
        session.start();
        for _ in 0..5 {
            session.pulse().unwrap();
        }
        assert_eq!(session.snapshot().turn, 5);

        session.reset().unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.turn, 0);
        assert_eq!(snapshot.alive_count(), 4);
        assert_eq!(snapshot.food_count(), 6);
    }

    #[test]
    fn test_sessions_with_the_same_seed_match() {
        let mut a = Session::new(small_config()).unwrap();
        let mut b = Session::new(small_config()).unwrap();
        a.start();
        b.start();

        for _ in 0..10 {
            let left = a.pulse().unwrap().unwrap();
            let right = b.pulse().unwrap().unwrap();
            assert_eq!(left.scores, right.scores);
            assert_eq!(
                left.animals.iter().map(|v| v.position).collect::<Vec<_>>(),
                right.animals.iter().map(|v| v.position).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn test_shared_session_locks_around_a_pulse() {
        let shared = Session::new(small_config()).unwrap().into_shared();
        shared.lock().start();

        let snapshot = shared.lock().pulse().unwrap().unwrap();
        assert_eq!(snapshot.turn, 1);
    }
}
