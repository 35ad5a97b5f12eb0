//! The search graph: vertices are (cell, arrival orientation) pairs and edges
//! are whole runs along the axis perpendicular to the arrival orientation.

use runpath_core::Point;

use crate::limits::RunLimits;
use crate::traits::CostMap;

/// Axis along which a path arrived at a vertex.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Only the synthetic start vertex: no previous run constrains the next one.
    Undecided,
}

impl Orientation {
    /// Runs that may leave a vertex of this orientation, each paired with
    /// the two unit steps along its axis.
    #[inline]
    fn next_runs(self) -> &'static [(Orientation, [Point; 2])] {
        const HORIZONTAL: (Orientation, [Point; 2]) = (
            Orientation::Horizontal,
            [Point::new(1, 0), Point::new(-1, 0)],
        );
        const VERTICAL: (Orientation, [Point; 2]) = (
            Orientation::Vertical,
            [Point::new(0, 1), Point::new(0, -1)],
        );
        match self {
            Self::Horizontal => &[VERTICAL],
            Self::Vertical => &[HORIZONTAL],
            Self::Undecided => &[VERTICAL, HORIZONTAL],
        }
    }
}

/// A vertex of the state space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub pos: Point,
    pub orientation: Orientation,
}

/// An outgoing run from a vertex.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    /// Destination vertex id.
    pub to: usize,
    /// Sum of the costs of every cell entered by the run, destination included.
    pub weight: u64,
}

/// Vertex arena and edge generator over a [`CostMap`].
///
/// Cell `(x, y)` owns ids `(y * width + x) * 2` (horizontal arrival) and
/// `(y * width + x) * 2 + 1` (vertical arrival). The undecided start vertex
/// sits at the origin and takes the last id, `2 * width * height`.
pub struct StateSpace<'a, M: CostMap + ?Sized> {
    map: &'a M,
    width: usize,
    height: usize,
}

impl<'a, M: CostMap + ?Sized> StateSpace<'a, M> {
    /// Create a state space over `map`.
    pub fn new(map: &'a M) -> Self {
        let size = map.size();
        Self {
            map,
            width: size.x.max(0) as usize,
            height: size.y.max(0) as usize,
        }
    }

    /// Total number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        2 * self.width * self.height + 1
    }

    /// Always false: the start vertex exists even for a degenerate map.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Id of the undecided start vertex.
    #[inline]
    pub fn start(&self) -> usize {
        2 * self.width * self.height
    }

    /// Bottom-right cell.
    #[inline]
    pub fn target(&self) -> Point {
        Point::new(self.width as i32 - 1, self.height as i32 - 1)
    }

    /// Upper bound on edges produced by a single [`edges`](Self::edges) call.
    #[inline]
    pub fn max_branching(&self, limits: RunLimits) -> usize {
        4 * limits.span()
    }

    /// Id of the vertex at `p` with the given orientation, if it exists.
    pub fn index(&self, p: Point, orientation: Orientation) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x as usize >= self.width || p.y as usize >= self.height {
            return None;
        }
        let cell = p.y as usize * self.width + p.x as usize;
        match orientation {
            Orientation::Horizontal => Some(cell * 2),
            Orientation::Vertical => Some(cell * 2 + 1),
            Orientation::Undecided => (p == Point::ZERO).then(|| self.start()),
        }
    }

    /// The vertex with id `id`.
    ///
    /// `id` must be below [`len`](Self::len); callers only hold ids handed
    /// out by this space.
    pub fn vertex(&self, id: usize) -> Vertex {
        debug_assert!(id < self.len(), "vertex id {id} out of range");
        if id == self.start() {
            return Vertex {
                pos: Point::ZERO,
                orientation: Orientation::Undecided,
            };
        }
        let cell = id / 2;
        let orientation = if id % 2 == 0 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Vertex {
            pos: Point::new((cell % self.width) as i32, (cell / self.width) as i32),
            orientation,
        }
    }

    /// Append the outgoing edges of vertex `id` into `buf`. The caller
    /// clears `buf` before calling.
    ///
    /// A run walks cell by cell away from the vertex, accumulating the cost of
    /// every cell it enters, and emits an edge for each length in
    /// `limits.min()..=limits.max()`. It stops at the grid border.
    pub fn edges(&self, id: usize, limits: RunLimits, buf: &mut Vec<Edge>) {
        let from = self.vertex(id);
        for &(run, steps) in from.orientation.next_runs() {
            for step in steps {
                let mut weight: u64 = 0;
                let mut p = from.pos;
                for k in 1..=limits.max() {
                    p = p + step;
                    let Some(cost) = self.map.cost(p) else {
                        break;
                    };
                    weight += u64::from(cost);
                    if k < limits.min() {
                        continue;
                    }
                    if let Some(to) = self.index(p, run) {
                        buf.push(Edge { to, weight });
                    }
                }
            }
        }
    }
}
