use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::geometry::{Cell, Grid};

/// Random attempts before falling back to enumerating the free cells
const MAX_SAMPLE_ATTEMPTS: usize = 32;

/// Places food on a random unoccupied cell.
///
/// Candidates exclude the last column and the last row of the grid, so food
/// lands in `[0, width - 1) x [0, height - 1)`.
#[derive(Debug)]
pub struct FoodSpawner<R = rand::rngs::ThreadRng> {
    grid: Grid,
    rng: R,
}

impl FoodSpawner<rand::rngs::ThreadRng> {
    pub fn new(grid: Grid) -> Self {
        Self::with_rng(grid, rand::thread_rng())
    }
}

impl<R: Rng> FoodSpawner<R> {
    pub fn with_rng(grid: Grid, rng: R) -> Self {
        Self { grid, rng }
    }

    fn columns(&self) -> i32 {
        self.grid.width.saturating_sub(1) as i32
    }

    fn rows(&self) -> i32 {
        self.grid.height.saturating_sub(1) as i32
    }

    /// Pick a uniformly random candidate cell not in `occupied`.
    /// Returns `None` when every candidate is taken.
    pub fn spawn<'a, I>(&mut self, occupied: I) -> Option<Cell>
    where
        I: IntoIterator<Item = &'a Cell>,
        I::IntoIter: Clone,
    {
        let occupied = occupied.into_iter();
        let (columns, rows) = (self.columns(), self.rows());
        if columns <= 0 || rows <= 0 {
            return None;
        }

        for attempt in 0..MAX_SAMPLE_ATTEMPTS {
            let cell = Cell::new(self.rng.gen_range(0..columns), self.rng.gen_range(0..rows));
            if !occupied.clone().any(|c| *c == cell) {
                debug!(x = cell.x, y = cell.y, attempt, "food spawned");
                return Some(cell);
            }
        }

        // Crowded board: choose directly among the free cells
        let free: Vec<Cell> = (0..rows)
            .flat_map(|y| (0..columns).map(move |x| Cell::new(x, y)))
            .filter(|cell| !occupied.clone().any(|c| c == cell))
            .collect();

        let cell = free.choose(&mut self.rng).copied();
        match cell {
            Some(cell) => {
                debug!(x = cell.x, y = cell.y, free = free.len(), "food spawned from free list")
            }
            None => debug!("no free cell left for food"),
        }
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const EMPTY: &[Cell] = &[];

    fn spawner(width: u32, height: u32, seed: u64) -> FoodSpawner<StdRng> {
        FoodSpawner::with_rng(Grid::new(width, height, 10), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_spawn_within_range() {
        let mut spawner = spawner(50, 40, 7);
        for _ in 0..500 {
            let cell = spawner.spawn(EMPTY).unwrap();
            assert!((0..49).contains(&cell.x));
            assert!((0..39).contains(&cell.y));
        }
    }

    #[test]
    fn test_spawn_avoids_occupied() {
        let mut spawner = spawner(4, 4, 3);
        // Candidates are the 3x3 block; leave only (2, 2) free
        let occupied: Vec<Cell> = (0..3)
            .flat_map(|y| (0..3).map(move |x| Cell::new(x, y)))
            .filter(|c| *c != Cell::new(2, 2))
            .collect();

        for _ in 0..20 {
            assert_eq!(spawner.spawn(&occupied), Some(Cell::new(2, 2)));
        }
    }

    #[test]
    fn test_spawn_full_board() {
        let mut spawner = spawner(3, 3, 1);
        let occupied: Vec<Cell> = (0..2)
            .flat_map(|y| (0..2).map(move |x| Cell::new(x, y)))
            .collect();

        assert_eq!(spawner.spawn(&occupied), None);
    }

    #[test]
    fn test_degenerate_grid() {
        let mut spawner = spawner(1, 5, 1);
        assert_eq!(spawner.spawn(EMPTY), None);
    }
}
