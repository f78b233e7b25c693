use crate::grid::CellState::{Alive, Dead};
use crate::{Error, Result};
use rand::distr::{Bernoulli, Distribution};
use rand::Rng;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

/// A fixed-size board of cells.
///
/// Positions outside the board count as dead neighbors, so edge cells are
/// updated like any other cell but never see anything past the border.
/// The next generation is written into `scratch` while `cells` is only read,
/// then the two buffers trade places.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
    scratch: Vec<CellState>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyGrid { width, height });
        }
        Ok(Grid {
            width,
            height,
            cells: vec![Dead; width * height],
            scratch: vec![Dead; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Seed every cell independently, alive with the given probability.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, probability: f64) -> Result<()> {
        let coin = Bernoulli::new(probability).map_err(|_| Error::InvalidDensity(probability))?;
        for cell in self.cells.iter_mut() {
            *cell = if coin.sample(rng) { Alive } else { Dead };
        }
        Ok(())
    }

    /// Advance the grid by one generation.
    ///
    /// Returns `false` when the new generation is identical to the previous one.
    pub fn step(&mut self) -> bool {
        let mut changed = false;

        for y in 0..self.height {
            for x in 0..self.width {
                let index = self.index(x, y);
                let next = match (self.cells[index], self.count_live_neighbors(x, y)) {
                    (Alive, 2..=3) => Alive, // Survives
                    (Dead, 3) => Alive,      // Becomes alive
                    _ => Dead,               // Dies or remains dead
                };
                changed |= next != self.cells[index];
                self.scratch[index] = next;
            }
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);
        changed
    }

    /// Count the live cells among the eight neighbors of `(x, y)`.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> usize {
        self.check_bounds(x, y);
        let mut count = 0;

        for dy in [-1isize, 0, 1] {
            for dx in [-1isize, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
                else {
                    continue;
                };
                if self.get(nx, ny) == Some(Alive) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Panics if `(x, y)` lies outside the grid.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.check_bounds(x, y);
        self.cells[self.index(x, y)] == Alive
    }

    pub fn get(&self, x: usize, y: usize) -> Option<CellState> {
        if x < self.width && y < self.height {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Panics if `(x, y)` lies outside the grid.
    pub fn set(&mut self, x: usize, y: usize, state: CellState) {
        self.check_bounds(x, y);
        let index = self.index(x, y);
        self.cells[index] = state;
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| **cell == Alive).count()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn check_bounds(&self, x: usize, y: usize) {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) is outside a {}x{} grid",
            self.width,
            self.height
        );
    }
}

// Equality ignores the scratch buffer, which only holds a stale generation.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Grid {}
