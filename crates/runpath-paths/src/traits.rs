use runpath_core::{CostGrid, Point};

/// Read-only source of per-cell costs for the state space.
pub trait CostMap {
    /// Grid dimensions as (width, height). Cells span `[0, width) × [0, height)`.
    fn size(&self) -> Point;

    /// Cost of entering `p`, or `None` when `p` is outside the map.
    fn cost(&self, p: Point) -> Option<u32>;
}

impl CostMap for CostGrid {
    #[inline]
    fn size(&self) -> Point {
        CostGrid::size(self)
    }

    #[inline]
    fn cost(&self, p: Point) -> Option<u32> {
        self.cost_at(p)
    }
}
