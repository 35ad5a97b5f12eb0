use std::fmt;

use runpath_core::{CostGrid, Point};

use crate::frontier::{Frontier, FrontierError, Handle};
use crate::limits::RunLimits;
use crate::state::{Edge, StateSpace};
use crate::traits::CostMap;

/// Sentinel parent id for the start vertex.
const NO_PARENT: usize = usize::MAX;

/// Search bookkeeping for one vertex.
#[derive(Copy, Clone, Debug)]
enum Status {
    Unvisited,
    Open(Handle),
    Settled,
}

/// A minimum-cost path from the origin cell to the target cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Sum of the costs of every cell entered, excluding the origin.
    pub cost: u64,
    /// Origin, every turn point, and the target, in path order.
    pub waypoints: Vec<Point>,
    /// Number of vertices settled before the target was reached.
    pub settled: usize,
}

impl Solution {
    /// Every cell on the path, origin first.
    pub fn cells(&self) -> Vec<Point> {
        let mut cells = Vec::new();
        let Some(&first) = self.waypoints.first() else {
            return cells;
        };
        cells.push(first);
        for pair in self.waypoints.windows(2) {
            let step = (pair[1] - pair[0]).signum();
            let mut p = pair[0];
            while p != pair[1] {
                p = p + step;
                cells.push(p);
            }
        }
        cells
    }
}

/// Dijkstra search over the run-constrained state space.
///
/// Every call to [`solve`](Self::solve) builds its own state space and
/// frontier; nothing carries over between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathSolver {
    max_relaxations: Option<usize>,
}

impl PathSolver {
    /// Create a solver without a relaxation bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Give up after `n` edge relaxations. A solve cut short this way reports
    /// no path.
    pub fn with_max_relaxations(mut self, n: usize) -> Self {
        self.max_relaxations = Some(n);
        self
    }

    /// Find the cheapest path from the top-left to the bottom-right cell of
    /// `map` whose runs all respect `limits`.
    ///
    /// Returns `Ok(None)` if no such path exists.
    pub fn solve<M: CostMap + ?Sized>(
        &self,
        map: &M,
        limits: RunLimits,
    ) -> Result<Option<Solution>, SolveError> {
        let space = StateSpace::new(map);
        let target = space.target();

        let mut status = vec![Status::Unvisited; space.len()];
        let mut parent = vec![NO_PARENT; space.len()];
        let mut frontier = Frontier::with_capacity(space.len());
        let mut edges: Vec<Edge> = Vec::with_capacity(space.max_branching(limits));

        let start = space.start();
        status[start] = Status::Open(frontier.insert(start, 0));

        let mut settled = 0usize;
        let mut relaxations = 0usize;

        while !frontier.is_empty() {
            let current = frontier.extract_min()?;
            let ci = current.vertex;
            status[ci] = Status::Settled;
            settled += 1;

            let vertex = space.vertex(ci);
            if vertex.pos == target {
                log::debug!(
                    "solve {limits}: cost {} after settling {settled} vertices",
                    current.cost
                );
                return Ok(Some(Solution {
                    cost: current.cost,
                    waypoints: waypoints(&space, &parent, ci),
                    settled,
                }));
            }
            log::trace!(
                "settled {} ({:?}) at {}",
                vertex.pos,
                vertex.orientation,
                current.cost
            );

            edges.clear();
            space.edges(ci, limits, &mut edges);

            for edge in edges.iter() {
                relaxations += 1;
                if self.max_relaxations.is_some_and(|max| relaxations > max) {
                    log::warn!(
                        "solve {limits}: stopped after {} relaxations without reaching {target}",
                        relaxations - 1
                    );
                    return Ok(None);
                }

                let tentative = current
                    .cost
                    .checked_add(edge.weight)
                    .ok_or(SolveError::CostOverflow)?;
                match status[edge.to] {
                    Status::Unvisited => {
                        status[edge.to] = Status::Open(frontier.insert(edge.to, tentative));
                        parent[edge.to] = ci;
                    }
                    Status::Open(handle) => {
                        if frontier.cost(handle).is_some_and(|c| tentative < c) {
                            frontier.decrease_key(handle, tentative)?;
                            parent[edge.to] = ci;
                        }
                    }
                    Status::Settled => {}
                }
            }
        }

        log::debug!("solve {limits}: no path after settling {settled} vertices");
        Ok(None)
    }
}

/// Walk parent links back from `end` and return the visited cells in path
/// order.
fn waypoints<M: CostMap + ?Sized>(
    space: &StateSpace<'_, M>,
    parent: &[usize],
    end: usize,
) -> Vec<Point> {
    let mut path = Vec::new();
    let mut ci = end;
    while ci != NO_PARENT {
        path.push(space.vertex(ci).pos);
        ci = parent[ci];
    }
    path.reverse();
    path
}

/// Minimal cost from the top-left to the bottom-right cell of `grid` with
/// runs of `min_run..=max_run` cells, or `None` if no path exists.
pub fn solve(grid: &CostGrid, min_run: u32, max_run: u32) -> Result<Option<u64>, SolveError> {
    let limits = RunLimits::new(min_run, max_run)?;
    Ok(PathSolver::new()
        .solve(grid, limits)?
        .map(|solution| solution.cost))
}

/// Errors reported by [`PathSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// Run bounds that are zero or inverted.
    InvalidRun { min: u32, max: u32 },
    /// A path cost does not fit in `u64`.
    CostOverflow,
    /// The frontier was misused; this is a solver defect.
    Frontier(FrontierError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRun { min, max } => write!(
                f,
                "invalid run limits {min}..={max}: need 1 <= min <= max"
            ),
            Self::CostOverflow => write!(f, "path cost overflows u64"),
            Self::Frontier(e) => write!(f, "solver invariant violated: {e}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Frontier(e) => Some(e),
            Self::InvalidRun { .. } | Self::CostOverflow => None,
        }
    }
}

impl From<FrontierError> for SolveError {
    fn from(e: FrontierError) -> Self {
        Self::Frontier(e)
    }
}
