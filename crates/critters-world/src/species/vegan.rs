//! Vegan: grazes peacefully, flees anything that isn't a vegan or food.

use super::{NeighborView, Strategy};
use critters_core::{Attack, Direction, BLANK_GLYPH, FOOD_GLYPH};

/// Glyph while calm.
pub const CALM_GLYPH: &str = "•ᴗ•";
/// Glyph while fleeing.
pub const FEAR_GLYPH: &str = "ಠ_ಠ";

fn is_harmless(glyph: &str) -> bool {
    glyph == CALM_GLYPH || glyph == FEAR_GLYPH || glyph == FOOD_GLYPH
}

pub struct Vegan {
    fear: bool,
}

impl Vegan {
    pub fn new() -> Self {
        Self { fear: false }
    }
}

impl Default for Vegan {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Vegan {
    fn next_move(&mut self, neighbors: &NeighborView) -> Direction {
        let mut threat = None;
        let mut lure = None;
        for (direction, glyph) in neighbors.iter() {
            if glyph == BLANK_GLYPH {
                continue;
            }
            if is_harmless(glyph) {
                lure.get_or_insert(direction);
            } else {
                threat.get_or_insert(direction);
            }
        }

        // The first threat in scan order decides the escape vector.
        if let Some(threat) = threat {
            self.fear = true;
            return match threat {
                Direction::North | Direction::NorthEast | Direction::NorthWest => {
                    Direction::South
                }
                Direction::East => Direction::West,
                Direction::West => Direction::East,
                Direction::South | Direction::SouthEast | Direction::SouthWest => {
                    Direction::North
                }
                Direction::Center => Direction::Center,
            };
        }

        self.fear = false;
        // Drift toward the first vegan or food in sight, else stay.
        lure.unwrap_or(Direction::Center)
    }

    fn fight(&mut self, _opponent: &str) -> Attack {
        Attack::Forfeit
    }

    fn wants_food(&mut self) -> bool {
        true
    }

    fn glyph(&self) -> String {
        if self.fear {
            FEAR_GLYPH.to_string()
        } else {
            CALM_GLYPH.to_string()
        }
    }

    fn color(&self) -> &'static str {
        "#000000"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_with(entries: &[(Direction, &str)]) -> NeighborView {
        let mut glyphs: [String; 9] = std::array::from_fn(|_| BLANK_GLYPH.to_string());
        for (direction, glyph) in entries {
            glyphs[direction.index()] = glyph.to_string();
        }
        NeighborView::new(glyphs)
    }

    #[test]
    fn test_flees_opposite_the_threat() {
        let mut vegan = Vegan::new();
        assert_eq!(
            vegan.next_move(&view_with(&[(Direction::North, "L")])),
            Direction::South
        );
        assert_eq!(
            vegan.next_move(&view_with(&[(Direction::East, "B")])),
            Direction::West
        );
        assert_eq!(
            vegan.next_move(&view_with(&[(Direction::West, "T")])),
            Direction::East
        );
        assert_eq!(
            vegan.next_move(&view_with(&[(Direction::SouthWest, "3")])),
            Direction::North
        );
        assert_eq!(vegan.glyph(), FEAR_GLYPH);
    }

    #[test]
    fn test_threat_outranks_lure() {
        let mut vegan = Vegan::new();
        let view = view_with(&[
            (Direction::NorthWest, FOOD_GLYPH),
            (Direction::North, "L"),
        ]);
        assert_eq!(vegan.next_move(&view), Direction::South);
    }

    #[test]
    fn test_drifts_toward_food_or_kin() {
        let mut vegan = Vegan::new();
        assert_eq!(
            vegan.next_move(&view_with(&[(Direction::East, FOOD_GLYPH)])),
            Direction::East
        );
        assert_eq!(
            vegan.next_move(&view_with(&[(Direction::SouthEast, CALM_GLYPH)])),
            Direction::SouthEast
        );
        assert_eq!(vegan.glyph(), CALM_GLYPH);
    }

    #[test]
    fn test_lone_vegan_stays_put() {
        let mut vegan = Vegan::new();
        assert_eq!(vegan.next_move(&view_with(&[])), Direction::Center);
        assert!(vegan.wants_food());
    }

    #[test]
    fn test_forfeits_every_fight() {
        let mut vegan = Vegan::new();
        assert_eq!(vegan.fight("B"), Attack::Forfeit);
        assert_eq!(vegan.fight("L"), Attack::Forfeit);
    }
}
