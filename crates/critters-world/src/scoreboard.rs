//! Score aggregation: a pure fold over the animal store.

use crate::animal::Animal;
use critters_core::{ScoreRecord, SpeciesKind};
use std::collections::BTreeMap;

/// Compute the per-species score records.
///
/// Folds over every animal, dead ones included, since historical food and
/// kill totals persist after death. The fold is commutative, so the result
/// never depends on store iteration order.
pub fn compute_scores(animals: &[Animal]) -> BTreeMap<SpeciesKind, ScoreRecord> {
    let mut scores = BTreeMap::new();
    for animal in animals {
        scores
            .entry(animal.kind)
            .or_insert_with(ScoreRecord::new)
            .absorb(animal.alive, animal.food_eaten, animal.kill_count);
    }
    scores
}
