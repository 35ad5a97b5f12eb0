//! Indexed binary min-heap with in-place decrease-key.
//!
//! Entries live in an arena of slots; the heap array stores slot ids and
//! every slot records its current heap position. Each swap during a sift
//! updates both positions, so a [`Handle`] can find and re-prioritise its
//! entry without a scan.

use std::fmt;

/// Position marker for a slot that has been extracted.
const DETACHED: usize = usize::MAX;

/// Stable reference to a live frontier entry.
///
/// Valid from [`Frontier::insert`] until the entry is extracted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Handle(usize);

/// A vertex and its tentative cost, as returned by the frontier.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrontierEntry<V> {
    pub vertex: V,
    pub cost: u64,
}

#[derive(Debug)]
struct Slot<V> {
    vertex: V,
    cost: u64,
    pos: usize,
}

/// Min-priority frontier keyed by tentative cost.
#[derive(Debug)]
pub struct Frontier<V> {
    slots: Vec<Slot<V>>,
    heap: Vec<usize>,
}

impl<V: Copy> Frontier<V> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            heap: Vec::new(),
        }
    }

    /// Create an empty frontier with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether there are no live entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert a new entry and return its handle.
    pub fn insert(&mut self, vertex: V, cost: u64) -> Handle {
        let id = self.slots.len();
        let pos = self.heap.len();
        self.slots.push(Slot { vertex, cost, pos });
        self.heap.push(id);
        self.sift_up(pos);
        Handle(id)
    }

    /// The minimum entry, without removing it.
    pub fn peek(&self) -> Option<FrontierEntry<V>> {
        self.heap.first().map(|&id| self.entry(id))
    }

    /// Remove and return the minimum entry. Its handle becomes stale.
    pub fn extract_min(&mut self) -> Result<FrontierEntry<V>, FrontierError> {
        let Some(&top) = self.heap.first() else {
            return Err(FrontierError::Empty);
        };
        let last = self.heap.len() - 1;
        self.swap(0, last);
        self.heap.truncate(last);
        self.slots[top].pos = DETACHED;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(self.entry(top))
    }

    /// Lower the cost of a live entry to `cost`.
    ///
    /// `cost` must be strictly below the entry's current cost. The new cost is
    /// stored before the entry is sifted toward the root.
    pub fn decrease_key(&mut self, handle: Handle, cost: u64) -> Result<(), FrontierError> {
        let slot = self
            .slots
            .get_mut(handle.0)
            .filter(|s| s.pos != DETACHED)
            .ok_or(FrontierError::StaleHandle)?;
        if cost >= slot.cost {
            return Err(FrontierError::NotDecreasing {
                current: slot.cost,
                new: cost,
            });
        }
        slot.cost = cost;
        let pos = slot.pos;
        self.sift_up(pos);
        Ok(())
    }

    /// Current cost of a live entry, or `None` once it has been extracted.
    pub fn cost(&self, handle: Handle) -> Option<u64> {
        self.slots
            .get(handle.0)
            .filter(|s| s.pos != DETACHED)
            .map(|s| s.cost)
    }

    /// Whether `handle` still refers to a live entry.
    #[inline]
    pub fn contains(&self, handle: Handle) -> bool {
        self.cost(handle).is_some()
    }

    // -----------------------------------------------------------------------
    // Heap maintenance
    // -----------------------------------------------------------------------

    #[inline]
    fn entry(&self, id: usize) -> FrontierEntry<V> {
        let slot = &self.slots[id];
        FrontierEntry {
            vertex: slot.vertex,
            cost: slot.cost,
        }
    }

    #[inline]
    fn key(&self, pos: usize) -> u64 {
        self.slots[self.heap[pos]].cost
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a]].pos = a;
        self.slots[self.heap[b]].pos = b;
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.key(pos) >= self.key(parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.key(right) < self.key(left) {
                right
            } else {
                left
            };
            if self.key(child) >= self.key(pos) {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
    }
}

impl<V: Copy> Default for Frontier<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Misuse of a [`Frontier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierError {
    /// `extract_min` on an empty frontier.
    Empty,
    /// The handle's entry has already been extracted.
    StaleHandle,
    /// `decrease_key` with a cost that is not strictly lower.
    NotDecreasing { current: u64, new: u64 },
}

impl fmt::Display for FrontierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "frontier: extract from empty frontier"),
            Self::StaleHandle => write!(f, "frontier: handle refers to an extracted entry"),
            Self::NotDecreasing { current, new } => {
                write!(f, "frontier: cost {new} does not decrease current cost {current}")
            }
        }
    }
}

impl std::error::Error for FrontierError {}
