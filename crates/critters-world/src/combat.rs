//! Combat resolution: the cyclic attack dominance table.

use critters_core::Attack;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Who won a fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    AttackerWins,
    DefenderWins,
}

/// Resolve a fight between the mover (attacker) and the occupant (defender).
///
/// Dominance is cyclic: Roar beats Scratch, Scratch beats Pounce, Pounce
/// beats Roar. Forfeit loses to everything except another Forfeit. Matching
/// attacks are settled by an unbiased coin flip, so exactly one side always
/// wins.
pub fn resolve(attacker: Attack, defender: Attack, rng: &mut ChaCha8Rng) -> Outcome {
    use Attack::{Forfeit, Pounce, Roar, Scratch};

    let attacker_wins = match (attacker, defender) {
        (Forfeit, Forfeit) | (Roar, Roar) | (Pounce, Pounce) | (Scratch, Scratch) => rng.gen(),
        (Forfeit, _) => false,
        (_, Forfeit) => true,
        (Roar, Scratch) | (Pounce, Roar) | (Scratch, Pounce) => true,
        (Roar, Pounce) | (Pounce, Scratch) | (Scratch, Roar) => false,
    };

    if attacker_wins {
        Outcome::AttackerWins
    } else {
        Outcome::DefenderWins
    }
}
