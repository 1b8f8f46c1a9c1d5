use super::Cell;
use crate::base::MAX_REFINEMENT_LEVEL;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tolerance for cell-center alignment and area closure checks
const GEOMETRY_TOLERANCE: f64 = 1e-9;

/// Holds the active leaf cells of the adaptive mesh
///
/// The cells form a non-overlapping mixed-resolution partition of a
/// square domain of side `l0`: every point of the domain belongs to
/// exactly one active cell. [Mesh::check] verifies this invariant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Mesh {
    /// Physical side length of the square domain
    pub l0: f64,

    /// Coordinates of the lower-left corner of the domain
    pub origin: [f64; 2],

    /// Refinement level of the uniform grid the state is unpacked against
    pub base_level: u32,

    /// All active leaf cells
    pub cells: Vec<Cell>,
}

impl Mesh {
    /// Allocates a uniform working grid at the given refinement level
    ///
    /// This sets the coordinate system and domain extent a snapshot is
    /// unpacked against.
    pub fn new_base(l0: f64, origin: [f64; 2], base_level: u32) -> Result<Mesh, StrError> {
        if l0 <= 0.0 {
            return Err("domain side length must be > 0.0");
        }
        if base_level > MAX_REFINEMENT_LEVEL {
            return Err("base refinement level is too deep");
        }
        let n = 1usize << base_level;
        let delta = l0 / n as f64;
        let mut cells = Vec::with_capacity(n * n);
        for j in 0..n {
            for i in 0..n {
                cells.push(Cell {
                    level: base_level,
                    x: origin[0] + (i as f64 + 0.5) * delta,
                    y: origin[1] + (j as f64 + 0.5) * delta,
                });
            }
        }
        Ok(Mesh {
            l0,
            origin,
            base_level,
            cells,
        })
    }

    /// Returns the number of active leaf cells
    pub fn ncell(&self) -> usize {
        self.cells.len()
    }

    /// Returns the local size of a cell
    pub fn delta(&self, cell: &Cell) -> f64 {
        self.l0 / (1u64 << cell.level) as f64
    }

    /// Verifies that the cells form a valid partition of the domain
    ///
    /// Checks, for every cell: the refinement level does not exceed
    /// `max_level`; the center is aligned with the grid of its level and
    /// lies inside the domain; the quadtree key is unique and no cell is
    /// a descendant of another active cell (no overlap). Finally checks
    /// that the cell areas close the domain area (no holes).
    pub fn check(&self, max_level: u32) -> Result<(), StrError> {
        if self.cells.is_empty() {
            return Err("there are no cells in the mesh");
        }
        let mut keys = HashSet::with_capacity(self.cells.len());
        let mut area = 0.0;
        for cell in &self.cells {
            if cell.level > max_level {
                return Err("a cell is refined beyond the maximum level");
            }
            let delta = self.delta(cell);
            let key = self.key_of(cell, delta)?;
            if !keys.insert(key) {
                return Err("two cells occupy the same position");
            }
            area += delta * delta;
        }
        // overlapping cells at different levels share an ancestor key
        for cell in &self.cells {
            let delta = self.delta(cell);
            let (level, mut i, mut j) = self.key_of(cell, delta)?;
            for coarser in (0..level).rev() {
                i >>= 1;
                j >>= 1;
                if keys.contains(&(coarser, i, j)) {
                    return Err("a cell overlaps a coarser cell");
                }
            }
        }
        if f64::abs(area - self.l0 * self.l0) > GEOMETRY_TOLERANCE * self.l0 * self.l0 {
            return Err("the cells do not cover the whole domain");
        }
        Ok(())
    }

    /// Returns the (level, i, j) quadtree key of a cell
    fn key_of(&self, cell: &Cell, delta: f64) -> Result<(u32, u64, u64), StrError> {
        let gx = (cell.x - self.origin[0]) / delta - 0.5;
        let gy = (cell.y - self.origin[1]) / delta - 0.5;
        let i = gx.round();
        let j = gy.round();
        if f64::abs(gx - i) > GEOMETRY_TOLERANCE || f64::abs(gy - j) > GEOMETRY_TOLERANCE {
            return Err("a cell center is not aligned with its refinement level");
        }
        let n = (1u64 << cell.level) as f64;
        if i < 0.0 || j < 0.0 || i >= n || j >= n {
            return Err("a cell lies outside the domain");
        }
        Ok((cell.level, i as u64, j as u64))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
