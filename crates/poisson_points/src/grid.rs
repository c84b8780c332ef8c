//! Uniform bucket grid over the unit square used for neighbour rejection.
//!
//! The grid stores at most one point per cell. With a cell size of `min_dist / sqrt(2)` two
//! accepted samples can never share a cell, so a plain slot per cell is enough.
use crate::point::Point;

/// Half-width, in cells, of the window scanned by [`SpatialGrid::is_in_neighbourhood`].
pub const NEIGHBOURHOOD_CELLS: i32 = 5;

/// Integer cell address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell(
    /// Column index.
    pub i32,
    /// Row index.
    pub i32,
);

/// Flat `width * height` grid of optional points, addressed `row * width + col`.
#[derive(Clone, Debug)]
pub struct SpatialGrid {
    width: usize,
    height: usize,
    cell_size: f32,
    cells: Vec<Option<Point>>,
}

impl SpatialGrid {
    /// Create an empty grid.
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize, cell_size: f32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        debug_assert!(cell_size > 0.0);
        Self {
            width,
            height,
            cell_size,
            cells: vec![None; width * height],
        }
    }

    /// Grid with `ceil(1 / cell_size)` cells per side.
    pub fn covering_unit_square(cell_size: f32) -> Self {
        let side = cells_per_unit(cell_size);
        Self::new(side, side, cell_size)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Cell address of `p`, truncating toward zero.
    #[inline]
    pub fn cell_of(&self, p: Point) -> GridCell {
        cell_address(p, self.cell_size)
    }

    /// Point stored at `cell`, or `None` for empty or out-of-range cells.
    pub fn get(&self, cell: GridCell) -> Option<Point> {
        self.index(cell).and_then(|idx| self.cells[idx])
    }

    /// Store `p` in its cell, replacing any previous occupant.
    ///
    /// Points must lie inside the unit square. Addresses are clamped to the grid, which only
    /// matters for coordinates sitting exactly on the far edge.
    pub fn insert(&mut self, p: Point) {
        debug_assert!(p.is_in_square(), "grid insert outside the unit square: {p:?}");
        let GridCell(i, j) = self.cell_of(p);
        let col = i.clamp(0, self.width as i32 - 1) as usize;
        let row = j.clamp(0, self.height as i32 - 1) as usize;
        self.cells[row * self.width + col] = Some(p);
    }

    /// `true` if a stored point lies strictly closer than `min_dist` to `p`.
    ///
    /// Scans the cells `[addr - 5, addr + 5)` on both axes. The window is one cell wider on
    /// the low side than on the high side; it still covers the two cells on each side that
    /// can hold a conflicting point when `cell_size = min_dist / sqrt(2)`.
    pub fn is_in_neighbourhood(&self, p: Point, min_dist: f32, cell_size: f32) -> bool {
        let GridCell(gi, gj) = cell_address(p, cell_size);
        let min_dist_squared = min_dist * min_dist;

        // Addresses of far-away or non-finite queries saturate at the i32 range.
        let i_start = gi.saturating_sub(NEIGHBOURHOOD_CELLS).max(0);
        let i_end = gi.saturating_add(NEIGHBOURHOOD_CELLS).min(self.width as i32);
        let j_start = gj.saturating_sub(NEIGHBOURHOOD_CELLS).max(0);
        let j_end = gj.saturating_add(NEIGHBOURHOOD_CELLS).min(self.height as i32);

        for j in j_start..j_end {
            for i in i_start..i_end {
                let idx = j as usize * self.width + i as usize;
                if let Some(existing) = self.cells[idx] {
                    if existing.distance_squared(p) < min_dist_squared {
                        return true;
                    }
                }
            }
        }

        false
    }

    #[inline]
    fn index(&self, GridCell(i, j): GridCell) -> Option<usize> {
        if i < 0 || j < 0 || i as usize >= self.width || j as usize >= self.height {
            return None;
        }
        Some(j as usize * self.width + i as usize)
    }
}

/// Cells needed to span one unit at the given cell size.
#[inline]
pub(crate) fn cells_per_unit(cell_size: f32) -> usize {
    ((1.0 / cell_size).ceil() as usize).max(1)
}

#[inline]
fn cell_address(p: Point, cell_size: f32) -> GridCell {
    GridCell((p.x / cell_size) as i32, (p.y / cell_size) as i32)
}
