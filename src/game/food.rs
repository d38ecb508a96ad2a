use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::grid::{Cell, GRID_HEIGHT, GRID_WIDTH};

/// Picks cells for food and spawn points.
///
/// Placement is uniform over the whole grid and does not look at the snake, so food
/// can land under the body.
pub struct FoodSpawner {
    rng: StdRng,
}

impl FoodSpawner {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic spawner, mostly useful for tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn spawn(&mut self) -> Cell {
        let x = self.rng.gen_range(0..GRID_WIDTH);
        let y = self.rng.gen_range(0..GRID_HEIGHT);
        Cell::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_stays_in_bounds() {
        let mut spawner = FoodSpawner::seeded(7);
        for _ in 0..1000 {
            assert!(spawner.spawn().is_in_bounds());
        }
    }

    #[test]
    fn test_same_seed_same_cells() {
        let mut a = FoodSpawner::seeded(42);
        let mut b = FoodSpawner::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.spawn(), b.spawn());
        }
    }
}
