//! Tick engine: the per-tick decision/move/resolve/score pipeline.

use crate::animal::{Animal, Food};
use crate::combat::{self, Outcome};
use crate::grid::Grid;
use crate::scoreboard;
use crate::snapshot::{AnimalView, FoodView, WorldSnapshot};
use crate::species::{self, NeighborView};
use critters_core::{
    AnimalId, Attack, Direction, Error, Position, Result, ScoreRecord, SpeciesKind, WorldConfig,
    BLANK_GLYPH, FOOD_GLYPH,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::{BTreeMap, HashMap};
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, info, warn};

/// One animal's resolved decision for the tick.
struct Intent {
    idx: usize,
    destination: Position,
    asleep: bool,
}

/// The world: grid, entity store, and the tick pipeline.
///
/// Exclusively owned and mutated through [`Simulation::step`]; consumers read
/// the [`WorldSnapshot`] taken after a tick completes.
pub struct Simulation {
    grid: Grid,
    animals: Vec<Animal>,
    /// Cell -> index of the animal standing there. Inserts are
    /// last-writer-wins and removals are identity-guarded, so the transient
    /// double occupancy left by an eat-then-enter move never evicts the
    /// other occupant's entry.
    animal_cells: HashMap<Position, usize>,
    food: Vec<Food>,
    food_cells: HashMap<Position, usize>,
    config: WorldConfig,
    rng: ChaCha8Rng,
    turn: u64,
    scores: BTreeMap<SpeciesKind, ScoreRecord>,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("grid", &self.grid)
            .field("animals", &self.animals.len())
            .field("food", &self.food.len())
            .field("config", &self.config)
            .field("turn", &self.turn)
            .field("scores", &self.scores)
            .finish()
    }
}

impl Simulation {
    /// Build a world from configuration: construct the roster and the food,
    /// scatter everything over distinct cells in one shuffle pass.
    pub fn new(config: WorldConfig) -> Result<Self> {
        let grid = Grid::new(config.width, config.height);
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

        let positions = grid.scatter(config.entity_count(), &mut rng)?;
        let mut cursor = 0;

        let mut animals = Vec::new();
        for slot in &config.roster {
            for _ in 0..slot.count {
                let strategy = species::instantiate(slot.kind, &mut rng);
                animals.push(Animal::new(slot.kind, positions[cursor], strategy));
                cursor += 1;
            }
        }

        let mut food = Vec::new();
        for _ in 0..config.food_count {
            food.push(Food::new(positions[cursor]));
            cursor += 1;
        }

        info!(
            width = config.width,
            height = config.height,
            animals = animals.len(),
            food = food.len(),
            seed = config.seed,
            "world initialized"
        );

        let scores = scoreboard::compute_scores(&animals);
        Ok(Self {
            grid,
            animal_cells: index_of(animals.iter().map(|a| a.position)),
            animals,
            food_cells: index_of(food.iter().map(|f| f.position)),
            food,
            config,
            rng,
            turn: 0,
            scores,
        })
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn food(&self) -> &[Food] {
        &self.food
    }

    pub fn scores(&self) -> &BTreeMap<SpeciesKind, ScoreRecord> {
        &self.scores
    }

    /// Advance the world by one tick.
    ///
    /// Runs the fixed five-phase pipeline: decisions (from a tick-start
    /// sensing snapshot), resolution in placement order, food regeneration,
    /// score aggregation, turn advance.
    pub fn step(&mut self) -> Result<()> {
        let glyphs = self.glyph_index();
        let intents = self.collect_intents(&glyphs);
        self.resolve_intents(intents);
        self.verify_invariants()?;

        self.regenerate_food();
        self.scores = scoreboard::compute_scores(&self.animals);
        self.turn += 1;

        if self.turn % 100 == 0 {
            let alive = self.animals.iter().filter(|a| a.alive).count();
            info!(
                turn = self.turn,
                alive,
                food = self.food_cells.len(),
                "population snapshot"
            );
        }

        Ok(())
    }

    /// Read-only view of the world as of the last completed tick.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            turn: self.turn,
            width: self.grid.width,
            height: self.grid.height,
            animals: self
                .animals
                .iter()
                .map(|animal| AnimalView {
                    species: animal.kind,
                    glyph: animal.glyph(),
                    color: animal.strategy.color().to_string(),
                    position: animal.position,
                    alive: animal.alive,
                    asleep: animal.is_asleep(self.turn),
                })
                .collect(),
            food: self
                .food
                .iter()
                .map(|food| FoodView {
                    position: food.position,
                    alive: food.alive,
                })
                .collect(),
            scores: self.scores.clone(),
        }
    }

    /// Fire the reset hook on every surviving strategy.
    pub fn notify_reset(&mut self) {
        for idx in 0..self.animals.len() {
            if !self.animals[idx].alive {
                continue;
            }
            let (id, kind) = (self.animals[idx].id, self.animals[idx].kind);
            let animal = &mut self.animals[idx];
            isolate("reset", id, kind, (), || animal.strategy.on_reset());
        }
    }

    /// Phase 1: ask every animal that has not yet moved this tick for a
    /// direction, sensing through the tick-start glyph snapshot so decisions
    /// are consistent regardless of processing order.
    fn collect_intents(&mut self, glyphs: &HashMap<Position, String>) -> Vec<Intent> {
        let turn = self.turn;
        let mut intents = Vec::new();

        for idx in 0..self.animals.len() {
            let animal = &mut self.animals[idx];
            if !animal.alive || animal.last_moved_turn != turn {
                continue;
            }

            if let Some(until) = animal.asleep_until {
                if turn < until {
                    intents.push(Intent {
                        idx,
                        destination: animal.position,
                        asleep: true,
                    });
                    continue;
                }
                animal.asleep_until = None;
                let (id, kind) = (animal.id, animal.kind);
                let animal = &mut self.animals[idx];
                isolate("wakeup", id, kind, (), || animal.strategy.on_wakeup());
                debug!(animal = %id, species = %kind, turn, "woke up");
            }

            let origin = self.animals[idx].position;
            let view = self.neighbor_view(origin, glyphs);
            let (id, kind) = (self.animals[idx].id, self.animals[idx].kind);
            let animal = &mut self.animals[idx];
            let direction = isolate("move", id, kind, Direction::Center, || {
                animal.strategy.next_move(&view)
            });

            intents.push(Intent {
                idx,
                destination: self.grid.wrap(origin.offset(direction)),
                asleep: false,
            });
        }

        intents
    }

    /// Phase 2: apply intents in placement order. Eating wins over fighting
    /// at the same destination; combat losers leave the board immediately.
    fn resolve_intents(&mut self, intents: Vec<Intent>) {
        for Intent {
            idx,
            destination,
            asleep,
        } in intents
        {
            // Killed earlier this tick: out of consideration.
            if !self.animals[idx].alive {
                continue;
            }

            if asleep {
                // Holds position; the turn counter still advances.
                self.relocate(idx, destination);
                continue;
            }

            let ate = self.try_eat(idx, destination);
            if !ate {
                if let Some(defender_idx) = self.live_animal_at(destination) {
                    if defender_idx != idx {
                        if self.animals[defender_idx].kind == self.animals[idx].kind {
                            // Same species: a momentary encounter, nothing
                            // more than the mate notifications.
                            self.notify_mate(idx);
                            self.notify_mate(defender_idx);
                        } else {
                            self.fight(idx, defender_idx);
                        }
                    }
                }
            }

            if self.animals[idx].alive {
                self.relocate(idx, destination);
            }
        }
    }

    /// Food is checked, and consumed, before any combat at the same
    /// destination. Returns whether the mover ate.
    fn try_eat(&mut self, idx: usize, destination: Position) -> bool {
        let Some(food_idx) = self.live_food_at(destination) else {
            return false;
        };

        let (id, kind) = (self.animals[idx].id, self.animals[idx].kind);
        let animal = &mut self.animals[idx];
        let wants = isolate("eat", id, kind, false, || animal.strategy.wants_food());
        if !wants {
            return false;
        }

        self.food[food_idx].alive = false;
        self.food_cells.remove(&destination);
        self.animals[idx].record_meal();
        debug!(animal = %id, species = %kind, turn = self.turn, ?destination, "ate");

        if self.config.sleep.enabled {
            let animal = &mut self.animals[idx];
            animal.meals_since_sleep += 1;
            if animal.meals_since_sleep >= self.config.sleep.meals_per_sleep {
                animal.meals_since_sleep = 0;
                animal.asleep_until = Some(self.turn + self.config.sleep.sleep_ticks + 1);
                isolate("sleep", id, kind, (), || animal.strategy.on_sleep());
                debug!(animal = %id, species = %kind, turn = self.turn, "fell asleep");
            }
        }

        true
    }

    /// Combat between the mover and a rival-species occupant.
    fn fight(&mut self, attacker_idx: usize, defender_idx: usize) {
        let attacker_glyph = self.animals[attacker_idx].glyph();
        let defender_glyph = self.animals[defender_idx].glyph();
        let defender_sleeping = self.animals[defender_idx].is_asleep(self.turn);

        let (attacker_id, attacker_kind) =
            (self.animals[attacker_idx].id, self.animals[attacker_idx].kind);
        let (defender_id, defender_kind) =
            (self.animals[defender_idx].id, self.animals[defender_idx].kind);

        let attacker = &mut self.animals[attacker_idx];
        let attacker_attack = isolate("fight", attacker_id, attacker_kind, Attack::Forfeit, || {
            attacker.strategy.fight(&defender_glyph)
        });

        // A sleeping defender cannot answer and forfeits.
        let defender_attack = if defender_sleeping {
            Attack::Forfeit
        } else {
            let defender = &mut self.animals[defender_idx];
            isolate("fight", defender_id, defender_kind, Attack::Forfeit, || {
                defender.strategy.fight(&attacker_glyph)
            })
        };

        let outcome = combat::resolve(attacker_attack, defender_attack, &mut self.rng);
        let (winner_idx, loser_idx) = match outcome {
            Outcome::AttackerWins => (attacker_idx, defender_idx),
            Outcome::DefenderWins => (defender_idx, attacker_idx),
        };

        self.animals[loser_idx].alive = false;
        let loser_pos = self.animals[loser_idx].position;
        if self.animal_cells.get(&loser_pos).copied() == Some(loser_idx) {
            self.animal_cells.remove(&loser_pos);
        }
        self.animals[winner_idx].record_kill();

        let winner_glyph = self.animals[winner_idx].glyph();
        let loser_glyph = self.animals[loser_idx].glyph();
        let (winner_id, winner_kind) =
            (self.animals[winner_idx].id, self.animals[winner_idx].kind);
        let (loser_id, loser_kind) = (self.animals[loser_idx].id, self.animals[loser_idx].kind);

        let winner = &mut self.animals[winner_idx];
        isolate("win", winner_id, winner_kind, (), || {
            winner.strategy.on_win(&loser_glyph)
        });
        let loser = &mut self.animals[loser_idx];
        isolate("lose", loser_id, loser_kind, (), || {
            loser.strategy.on_lose(&winner_glyph)
        });

        debug!(
            winner = %winner_id,
            winner_species = %winner_kind,
            loser = %loser_id,
            loser_species = %loser_kind,
            ?attacker_attack,
            ?defender_attack,
            turn = self.turn,
            "fight resolved"
        );
    }

    /// Same-species encounter notifications.
    fn notify_mate(&mut self, idx: usize) {
        let (id, kind) = (self.animals[idx].id, self.animals[idx].kind);
        let animal = &mut self.animals[idx];
        isolate("mate", id, kind, (), || {
            animal.strategy.on_mate_start();
            animal.strategy.on_mate_end();
        });
    }

    /// Settle the mover on its destination and advance its turn counter.
    fn relocate(&mut self, idx: usize, destination: Position) {
        let origin = self.animals[idx].position;
        if self.animal_cells.get(&origin).copied() == Some(idx) {
            self.animal_cells.remove(&origin);
        }
        self.animal_cells.insert(destination, idx);
        self.animals[idx].move_to(destination);
    }

    /// Phase 3: spawn a food batch every `turns_per_batch` ticks on cells
    /// free of food, redrawing on collisions, bounded by grid capacity.
    fn regenerate_food(&mut self) {
        let regen = self.config.regen.clone();
        if !regen.enabled || regen.turns_per_batch == 0 {
            return;
        }
        if (self.turn + 1) % regen.turns_per_batch != 0 {
            return;
        }

        let capacity = self.grid.cell_count();
        let mut spawned = 0;
        for _ in 0..regen.batch_size {
            if self.food_cells.len() >= capacity {
                warn!(
                    turn = self.turn,
                    spawned,
                    batch = regen.batch_size,
                    "food regeneration truncated, every cell already holds food"
                );
                break;
            }
            let position = loop {
                let candidate = self.grid.random_position(&mut self.rng);
                if !self.food_cells.contains_key(&candidate) {
                    break candidate;
                }
            };
            self.food_cells.insert(position, self.food.len());
            self.food.push(Food::new(position));
            spawned += 1;
        }

        if spawned > 0 {
            debug!(turn = self.turn, spawned, "food regenerated");
        }
    }

    /// Build the tick-start sensing index: cell -> displayed glyph, food
    /// first so animals show on top.
    fn glyph_index(&self) -> HashMap<Position, String> {
        let mut glyphs = HashMap::new();
        for food in &self.food {
            if food.alive {
                glyphs.insert(food.position, FOOD_GLYPH.to_string());
            }
        }
        for animal in &self.animals {
            if animal.alive {
                glyphs.insert(animal.position, animal.glyph());
            }
        }
        glyphs
    }

    /// The eight wrapped neighbor glyphs plus the cell beneath the critter.
    /// Center never shows the sensing animal itself, only food under it.
    /// No world state mutates during the decision phase, so the live food
    /// index still matches the tick-start snapshot here.
    fn neighbor_view(&self, origin: Position, glyphs: &HashMap<Position, String>) -> NeighborView {
        let mut view: [String; 9] = std::array::from_fn(|_| BLANK_GLYPH.to_string());
        for direction in Direction::ALL {
            if direction == Direction::Center {
                if self.live_food_at(origin).is_some() {
                    view[direction.index()] = FOOD_GLYPH.to_string();
                }
                continue;
            }
            let cell = self.grid.wrap(origin.offset(direction));
            if let Some(glyph) = glyphs.get(&cell) {
                view[direction.index()] = glyph.clone();
            }
        }
        NeighborView::new(view)
    }

    fn live_animal_at(&self, position: Position) -> Option<usize> {
        self.animal_cells
            .get(&position)
            .copied()
            .filter(|idx| self.animals[*idx].alive)
    }

    fn live_food_at(&self, position: Position) -> Option<usize> {
        self.food_cells
            .get(&position)
            .copied()
            .filter(|idx| self.food[*idx].alive)
    }

    /// Engine-bug detector: every live animal in bounds, no dead animal
    /// still holding its cell in the occupancy index.
    fn verify_invariants(&self) -> Result<()> {
        for (idx, animal) in self.animals.iter().enumerate() {
            if animal.alive && !self.grid.contains(animal.position) {
                return Err(Error::InvariantViolation(format!(
                    "animal {} ended resolution out of bounds at ({}, {})",
                    animal.id, animal.position.x, animal.position.y
                )));
            }
            if !animal.alive && self.animal_cells.get(&animal.position).copied() == Some(idx) {
                return Err(Error::InvariantViolation(format!(
                    "dead animal {} still occupies ({}, {})",
                    animal.id, animal.position.x, animal.position.y
                )));
            }
        }
        Ok(())
    }
}

fn index_of(positions: impl Iterator<Item = Position>) -> HashMap<Position, usize> {
    positions.enumerate().map(|(idx, pos)| (pos, idx)).collect()
}

/// Run a strategy callback with panic isolation: a misbehaving species is
/// logged and answered with the safe default instead of halting the tick.
fn isolate<T>(
    callback: &str,
    id: AnimalId,
    kind: SpeciesKind,
    fallback: T,
    f: impl FnOnce() -> T,
) -> T {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(_) => {
            warn!(
                animal = %id,
                species = %kind,
                callback,
                "strategy callback panicked, substituting the safe default"
            );
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::{Bear, Sloth, Strategy, Tiger};
    use critters_core::{RegenConfig, SleepConfig, SpeciesSlot};

    fn test_config(width: i32, height: i32) -> WorldConfig {
        WorldConfig {
            width,
            height,
            roster: Vec::new(),
            food_count: 0,
            regen: RegenConfig {
                enabled: false,
                batch_size: 0,
                turns_per_batch: 0,
            },
            sleep: SleepConfig {
                enabled: false,
                meals_per_sleep: 0,
                sleep_ticks: 0,
            },
            seed: 0,
        }
    }

    /// Build a world with hand-placed entities, bypassing the shuffle.
    fn world_with(config: WorldConfig, animals: Vec<Animal>, food: Vec<Food>) -> Simulation {
        let grid = Grid::new(config.width, config.height);
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let scores = scoreboard::compute_scores(&animals);
        Simulation {
            grid,
            animal_cells: index_of(animals.iter().map(|a| a.position)),
            animals,
            food_cells: index_of(food.iter().map(|f| f.position)),
            food,
            config,
            rng,
            turn: 0,
            scores,
        }
    }

    fn bear_at(x: i32, y: i32) -> Animal {
        Animal::new(
            SpeciesKind::Bear,
            Position::new(x, y),
            Box::new(Bear::new(false)),
        )
    }

    fn sloth_at(x: i32, y: i32) -> Animal {
        Animal::new(SpeciesKind::Sloth, Position::new(x, y), Box::new(Sloth::new()))
    }

    #[test]
    fn test_initialize_counts_and_distinct_cells() {
        let mut config = test_config(6, 5);
        config.roster = vec![
            SpeciesSlot::new(SpeciesKind::Bear, 3),
            SpeciesSlot::new(SpeciesKind::Vegan, 4),
        ];
        config.food_count = 5;
        config.seed = 11;

        let sim = Simulation::new(config).unwrap();
        assert_eq!(sim.animals().iter().filter(|a| a.alive).count(), 7);
        assert_eq!(sim.food().iter().filter(|f| f.alive).count(), 5);

        let mut cells: Vec<Position> = sim
            .animals()
            .iter()
            .map(|a| a.position)
            .chain(sim.food().iter().map(|f| f.position))
            .collect();
        let total = cells.len();
        cells.sort_by_key(|p| (p.x, p.y));
        cells.dedup();
        assert_eq!(cells.len(), total);
    }

    #[test]
    fn test_initialize_rejects_overfull_grid() {
        let mut config = test_config(2, 2);
        config.roster = vec![SpeciesSlot::new(SpeciesKind::Sloth, 3)];
        config.food_count = 2;

        let err = Simulation::new(config).unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded { required: 5, capacity: 4 }));
    }

    #[test]
    fn test_bear_wraps_off_the_northern_edge() {
        let mut sim = world_with(test_config(3, 3), vec![bear_at(0, 0)], Vec::new());

        sim.step().unwrap();

        // First bear move is North; off the top edge means in at the bottom.
        assert_eq!(sim.animals()[0].position, Position::new(0, 2));
        assert_eq!(sim.animals()[0].last_moved_turn, 1);
        assert_eq!(sim.turn(), 1);
    }

    #[test]
    fn test_eat_before_fight() {
        let mut sim = world_with(
            test_config(3, 3),
            vec![bear_at(0, 1)],
            vec![Food::new(Position::new(0, 0))],
        );

        sim.step().unwrap();

        let bear = &sim.animals()[0];
        assert_eq!(bear.position, Position::new(0, 0));
        assert_eq!(bear.food_eaten, 1);
        assert_eq!(bear.kill_count, 0);
        assert!(!sim.food()[0].alive);
    }

    #[test]
    fn test_same_species_collision_is_harmless() {
        // Bear A steps North into bear B's cell before B vacates it.
        let mut sim = world_with(
            test_config(3, 3),
            vec![bear_at(1, 1), bear_at(1, 0)],
            Vec::new(),
        );

        sim.step().unwrap();

        assert!(sim.animals().iter().all(|a| a.alive));
        assert!(sim.animals().iter().all(|a| a.kill_count == 0));
        assert_eq!(sim.animals()[0].position, Position::new(1, 0));
        assert_eq!(sim.animals()[1].position, Position::new(1, 2));
    }

    #[test]
    fn test_combat_kills_the_forfeiting_occupant() {
        // Bear (Scratch) steps onto a sloth (Forfeit): the sloth dies.
        let mut sim = world_with(
            test_config(3, 3),
            vec![bear_at(0, 1), sloth_at(0, 0)],
            Vec::new(),
        );

        sim.step().unwrap();

        let (bear, sloth) = (&sim.animals()[0], &sim.animals()[1]);
        assert!(bear.alive);
        assert_eq!(bear.kill_count, 1);
        assert_eq!(bear.position, Position::new(0, 0));
        assert!(!sloth.alive);
        assert_eq!(sim.scores()[&SpeciesKind::Sloth].alive, 0);
        assert_eq!(sim.scores()[&SpeciesKind::Bear].score(), 2);
    }

    #[test]
    fn test_sated_tiger_pounces_through_a_forfeit() {
        // A sated tiger surrounded by sloths: wherever its random burst
        // takes it, the occupant forfeits and dies. Across twenty seeds at
        // least one first draw is not Center.
        let mut kills = 0;
        for seed in 0..20u64 {
            let tiger = Animal::new(
                SpeciesKind::Tiger,
                Position::new(1, 1),
                Box::new(Tiger::new(0, ChaCha8Rng::seed_from_u64(seed))),
            );
            let mut animals = vec![tiger];
            for x in 0..3 {
                for y in 0..3 {
                    if (x, y) != (1, 1) {
                        animals.push(sloth_at(x, y));
                    }
                }
            }
            let mut sim = world_with(test_config(3, 3), animals, Vec::new());
            sim.step().unwrap();

            let tiger = &sim.animals()[0];
            assert!(tiger.alive);
            if tiger.position != Position::new(1, 1) {
                assert_eq!(tiger.kill_count, 1);
                let victim = sim
                    .animals()
                    .iter()
                    .find(|a| a.kind == SpeciesKind::Sloth && a.position == tiger.position)
                    .unwrap();
                assert!(!victim.alive);
                kills += 1;
            }
        }
        assert!(kills > 0);
    }

    #[test]
    fn test_meal_quota_puts_the_eater_to_sleep() {
        let mut config = test_config(3, 3);
        config.sleep = SleepConfig {
            enabled: true,
            meals_per_sleep: 1,
            sleep_ticks: 2,
        };
        let mut sim = world_with(
            config,
            vec![bear_at(0, 1)],
            vec![Food::new(Position::new(0, 0))],
        );

        // Tick 0: the bear moves North, eats, and falls asleep.
        sim.step().unwrap();
        assert_eq!(sim.animals()[0].position, Position::new(0, 0));
        assert_eq!(sim.animals()[0].food_eaten, 1);
        assert!(sim.animals()[0].is_asleep(sim.turn()));

        // Ticks 1 and 2: napping in place, turn counter still advancing.
        sim.step().unwrap();
        assert_eq!(sim.animals()[0].position, Position::new(0, 0));
        assert!(sim.animals()[0].is_asleep(sim.turn()));
        sim.step().unwrap();
        assert_eq!(sim.animals()[0].position, Position::new(0, 0));

        // Tick 3: awake again, resuming the patrol with West.
        sim.step().unwrap();
        assert_eq!(sim.animals()[0].position, Position::new(2, 0));
        assert!(!sim.animals()[0].is_asleep(sim.turn()));
        assert_eq!(sim.animals()[0].last_moved_turn, 4);
    }

    #[test]
    fn test_food_regenerates_on_schedule() {
        let mut config = test_config(3, 3);
        config.regen = RegenConfig {
            enabled: true,
            batch_size: 2,
            turns_per_batch: 2,
        };
        let mut sim = world_with(config, Vec::new(), Vec::new());

        sim.step().unwrap();
        assert_eq!(sim.food().iter().filter(|f| f.alive).count(), 0);

        sim.step().unwrap();
        let live: Vec<Position> = sim
            .food()
            .iter()
            .filter(|f| f.alive)
            .map(|f| f.position)
            .collect();
        assert_eq!(live.len(), 2);
        assert_ne!(live[0], live[1]);
        assert!(live.iter().all(|p| sim.grid().contains(*p)));

        sim.step().unwrap();
        sim.step().unwrap();
        assert_eq!(sim.food().iter().filter(|f| f.alive).count(), 4);
    }

    #[test]
    fn test_snapshot_reflects_the_completed_tick() {
        let mut sim = world_with(
            test_config(3, 3),
            vec![bear_at(0, 1), sloth_at(0, 0)],
            vec![Food::new(Position::new(2, 2))],
        );
        sim.step().unwrap();

        let snapshot = sim.snapshot();
        assert_eq!(snapshot.turn, 1);
        assert_eq!(snapshot.width, 3);
        assert_eq!(snapshot.height, 3);
        assert_eq!(snapshot.animals.len(), 2);
        assert_eq!(snapshot.alive_count(), 1);
        assert_eq!(snapshot.food_count(), 1);
        assert_eq!(snapshot.scores[&SpeciesKind::Bear].kill_count, 1);

        let bear = &snapshot.animals[0];
        assert_eq!(bear.glyph, "B");
        assert_eq!(bear.color, "white");
        assert_eq!(bear.position, Position::new(0, 0));
    }

    /// A species whose every callback panics.
    struct Berserk;

    impl Strategy for Berserk {
        fn next_move(&mut self, _neighbors: &NeighborView) -> Direction {
            panic!("move")
        }

        fn fight(&mut self, _opponent: &str) -> Attack {
            panic!("fight")
        }

        fn wants_food(&mut self) -> bool {
            panic!("eat")
        }

        fn glyph(&self) -> String {
            "!".to_string()
        }

        fn color(&self) -> &'static str {
            "#ff00ff"
        }
    }

    #[test]
    fn test_panicking_strategy_is_isolated() {
        // Substituted defaults: Center for the move, false for the meal.
        let mut sim = world_with(
            test_config(3, 3),
            vec![Animal::new(
                SpeciesKind::Sloth,
                Position::new(1, 1),
                Box::new(Berserk),
            )],
            vec![Food::new(Position::new(1, 1))],
        );

        sim.step().unwrap();

        let animal = &sim.animals()[0];
        assert!(animal.alive);
        assert_eq!(animal.position, Position::new(1, 1));
        assert_eq!(animal.food_eaten, 0);
        assert!(sim.food()[0].alive);
        assert_eq!(sim.turn(), 1);
    }
}
