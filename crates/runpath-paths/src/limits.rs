use std::fmt;

use crate::solver::SolveError;

/// Bounds on how many consecutive cells a path runs along one axis before
/// it has to turn.
///
/// Both bounds are inclusive, at least 1, and `min <= max`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RunLimits {
    min: u32,
    max: u32,
}

impl RunLimits {
    /// Runs of one to three cells.
    pub const STANDARD: Self = Self { min: 1, max: 3 };

    /// Runs of four to ten cells.
    pub const ULTRA: Self = Self { min: 4, max: 10 };

    /// Validate and build a pair of run bounds.
    pub fn new(min: u32, max: u32) -> Result<Self, SolveError> {
        if min == 0 || min > max {
            return Err(SolveError::InvalidRun { min, max });
        }
        Ok(Self { min, max })
    }

    /// Shortest allowed run.
    #[inline]
    pub fn min(self) -> u32 {
        self.min
    }

    /// Longest allowed run.
    #[inline]
    pub fn max(self) -> u32 {
        self.max
    }

    /// Number of distinct run lengths.
    #[inline]
    pub fn span(self) -> usize {
        (self.max - self.min + 1) as usize
    }
}

impl fmt::Display for RunLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_bounds() {
        let l = RunLimits::new(4, 10).unwrap();
        assert_eq!(l, RunLimits::ULTRA);
        assert_eq!(l.span(), 7);
        assert_eq!(RunLimits::new(2, 2).unwrap().span(), 1);
        assert_eq!(RunLimits::STANDARD.to_string(), "1..=3");
    }

    #[test]
    fn rejects_zero_min() {
        assert_eq!(
            RunLimits::new(0, 3),
            Err(SolveError::InvalidRun { min: 0, max: 3 })
        );
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert_eq!(
            RunLimits::new(5, 4),
            Err(SolveError::InvalidRun { min: 5, max: 4 })
        );
    }
}
