use crate::grid::Grid;
use image::{GrayImage, Luma};

pub const CELL_SIZE: u32 = 5;

/// Below this cell size grid lines would cover most of every cell, so none are drawn.
pub const MIN_MESH_CELL_SIZE: u32 = 3;

/// Rasterizes a generation into a two-color frame, one square per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    cell_size: u32,
    mesh: bool,
    alive: Luma<u8>,
    dead: Luma<u8>,
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer {
            cell_size: CELL_SIZE,
            mesh: true,
            alive: Luma([0]),
            dead: Luma([255]),
        }
    }
}

impl Renderer {
    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        assert!(cell_size > 0, "cell size must be positive");
        self.cell_size = cell_size;
        self
    }

    /// Draw grid lines in the alive color along the top and left edge of every cell.
    ///
    /// Ignored for cells smaller than [`MIN_MESH_CELL_SIZE`].
    pub fn with_mesh(mut self, mesh: bool) -> Self {
        self.mesh = mesh;
        self
    }

    pub fn with_colors(mut self, alive: Luma<u8>, dead: Luma<u8>) -> Self {
        self.alive = alive;
        self.dead = dead;
        self
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Pixel size of a frame, or `None` when a side does not fit in a `u32`.
    pub fn frame_size(&self, grid: &Grid) -> Option<(u32, u32)> {
        let scale = |cells: usize| u32::try_from(cells).ok()?.checked_mul(self.cell_size);
        Some((scale(grid.width())?, scale(grid.height())?))
    }

    /// Panics if the frame for `grid` is too large, see [`Renderer::frame_size`].
    pub fn render(&self, grid: &Grid) -> GrayImage {
        let Some((width, height)) = self.frame_size(grid) else {
            panic!(
                "a {}x{} grid with {} px cells does not fit in a frame",
                grid.width(),
                grid.height(),
                self.cell_size
            );
        };
        let mesh = self.mesh && self.cell_size >= MIN_MESH_CELL_SIZE;
        GrayImage::from_fn(width, height, |px, py| {
            if mesh && (px % self.cell_size == 0 || py % self.cell_size == 0) {
                return self.alive;
            }
            let (x, y) = ((px / self.cell_size) as usize, (py / self.cell_size) as usize);
            if grid.is_alive(x, y) {
                self.alive
            } else {
                self.dead
            }
        })
    }
}
