//! The [`CostGrid`] type: an immutable 2D grid of non-negative cell costs.
//!
//! A grid is usually parsed from text, one row per line, each character a
//! decimal digit giving that cell's cost:
//!
//! ```
//! use runpath_core::{CostGrid, Point};
//!
//! let grid: CostGrid = "241\n321\n".parse().unwrap();
//! assert_eq!(grid.width(), 3);
//! assert_eq!(grid.cost_at(Point::new(1, 1)), Some(2));
//! assert_eq!(grid.cost_at(Point::new(3, 0)), None);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::geom::{Point, Range};

/// An immutable, rectangular, non-empty grid of cell costs.
///
/// Cells are stored row-major. Once built, a grid is never mutated; every
/// constructor validates its input so that all queries are total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    cells: Vec<u32>,
    width: i32,
    height: i32,
}

impl CostGrid {
    /// Parse a grid from digit text.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines. Both `\n` and `\r\n` line endings are accepted.
    /// Every line must have the same width and contain only `'0'..='9'`.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        let mut cells = Vec::with_capacity(s.len());
        let mut w: i32 = -1;
        let mut y: i32 = 0;

        for line in s.lines() {
            let mut x: i32 = 0;
            for ch in line.chars() {
                let Some(d) = ch.to_digit(10) else {
                    return Err(GridError::InvalidDigit {
                        ch,
                        pos: Point::new(x, y),
                    });
                };
                cells.push(d);
                x += 1;
            }
            if w < 0 {
                w = x;
            } else if x != w {
                return Err(GridError::InconsistentSize {
                    line: y,
                    expected: w,
                    found: x,
                });
            }
            y += 1;
        }

        if w <= 0 || y == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            cells,
            width: w,
            height: y,
        })
    }

    /// Build a grid from numeric rows.
    ///
    /// Unlike [`parse`](Self::parse), costs are not limited to one digit.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let w = first.as_ref().len();
        if w == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(w * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != w {
                return Err(GridError::InconsistentSize {
                    line: y as i32,
                    expected: w as i32,
                    found: row.len() as i32,
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            cells,
            width: w as i32,
            height: rows.len() as i32,
        })
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The bounding range of this grid, anchored at (0, 0).
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether `p` is inside this grid's bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Top-left cell.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::ZERO
    }

    /// Bottom-right cell.
    #[inline]
    pub fn target(&self) -> Point {
        Point::new(self.width - 1, self.height - 1)
    }

    /// Cost of the cell at `p`, or `None` if `p` is outside bounds.
    #[inline]
    pub fn cost_at(&self, p: Point) -> Option<u32> {
        if !self.contains(p) {
            return None;
        }
        self.cells
            .get((p.y * self.width + p.x) as usize)
            .copied()
    }

    /// Row-major iterator over `(Point, cost)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u32)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// Row slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks(self.width as usize)
    }
}

impl FromStr for CostGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders digit text when every cost fits in one digit, and
/// space-separated numbers otherwise.
impl fmt::Display for CostGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.cells.iter().all(|&c| c <= 9);
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, c) in row.iter().enumerate() {
                if !digits && x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CostGrid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CostGrid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<u32>>::deserialize(deserializer)?;
        CostGrid::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when building a [`CostGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows without any cell.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentSize { line: i32, expected: i32, found: i32 },
    /// A character that is not an ASCII decimal digit.
    InvalidDigit { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidDigit { ch, pos } => {
                write!(f, "grid contains invalid digit \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
2413
3215
3255";

    #[test]
    fn parse_and_size() {
        let g = CostGrid::parse(SMALL).unwrap();
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.bounds(), Range::new(0, 0, 4, 3));
        assert_eq!(g.origin(), Point::new(0, 0));
        assert_eq!(g.target(), Point::new(3, 2));
    }

    #[test]
    fn cost_queries() {
        let g = CostGrid::parse(SMALL).unwrap();
        assert_eq!(g.cost_at(Point::new(0, 0)), Some(2));
        assert_eq!(g.cost_at(Point::new(3, 0)), Some(3));
        assert_eq!(g.cost_at(Point::new(1, 2)), Some(2));
        assert_eq!(g.cost_at(Point::new(4, 0)), None);
        assert_eq!(g.cost_at(Point::new(0, -1)), None);
    }

    #[test]
    fn parse_trims_and_accepts_crlf() {
        let g: CostGrid = "\n12\r\n34\r\n\n".parse().unwrap();
        assert_eq!(g.size(), Point::new(2, 2));
        assert_eq!(g.cost_at(Point::new(1, 1)), Some(4));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = CostGrid::parse("123\n12\n123").unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentSize {
                line: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn parse_rejects_non_digit() {
        let err = CostGrid::parse("123\n1x3").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidDigit {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(CostGrid::parse(""), Err(GridError::Empty));
        assert_eq!(CostGrid::parse("  \n\n "), Err(GridError::Empty));
    }

    #[test]
    fn from_rows_validates() {
        let g = CostGrid::from_rows(&[vec![10u32, 20], vec![30, 40]]).unwrap();
        assert_eq!(g.cost_at(Point::new(1, 0)), Some(20));

        let empty: [Vec<u32>; 0] = [];
        assert_eq!(CostGrid::from_rows(&empty), Err(GridError::Empty));
        assert_eq!(CostGrid::from_rows(&[Vec::<u32>::new()]), Err(GridError::Empty));
        assert!(matches!(
            CostGrid::from_rows(&[vec![1u32, 2], vec![3]]),
            Err(GridError::InconsistentSize { line: 1, .. })
        ));
    }

    #[test]
    fn iter_is_row_major() {
        let g = CostGrid::parse("12\n34").unwrap();
        let cells: Vec<_> = g.iter().collect();
        assert_eq!(
            cells,
            vec![
                (Point::new(0, 0), 1),
                (Point::new(1, 0), 2),
                (Point::new(0, 1), 3),
                (Point::new(1, 1), 4),
            ]
        );
    }

    #[test]
    fn display_renders_text() {
        let g = CostGrid::parse(SMALL).unwrap();
        assert_eq!(g.to_string(), SMALL);

        let wide = CostGrid::from_rows(&[vec![10u32, 2], vec![3, 4]]).unwrap();
        assert_eq!(wide.to_string(), "10 2\n3 4");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_serializes_as_rows() {
        let g = CostGrid::parse("12\n34").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[1,2],[3,4]]");
        let back: CostGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn ragged_rows_fail_to_deserialize() {
        let res: Result<CostGrid, _> = serde_json::from_str("[[1,2],[3]]");
        assert!(res.is_err());
    }
}
