//! Domain shapes - the bounded region points may occupy
//!
//! A run is configured with exactly one [`Domain`]. The continuous variant
//! is a real-valued rectangle; the grid variant is a square lattice whose
//! points are snapped to cell centres.

use std::fmt;

use crate::point::Point;

/// The bounded region in which houses and hospitals may be placed.
///
/// # Examples
///
/// ```
/// use siting_core::{Domain, GridDomain, Point};
///
/// let domain = Domain::Grid(GridDomain::new(10, 50.0));
/// assert_eq!(domain.capacity(), Some(100));
/// assert!(domain.contains(&Point::new(25.0, 475.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Domain {
    /// Real-valued rectangle `[0, width] × [0, height]`.
    Continuous(ContinuousDomain),
    /// `grid_size × grid_size` lattice of square cells.
    Grid(GridDomain),
}

impl Domain {
    pub fn continuous(width: f64, height: f64) -> Self {
        Domain::Continuous(ContinuousDomain::new(width, height))
    }

    pub fn grid(grid_size: usize, cell_size: f64) -> Self {
        Domain::Grid(GridDomain::new(grid_size, cell_size))
    }

    /// Returns true if `point` lies inside the region.
    ///
    /// For grids this additionally requires the point to sit on a cell centre.
    pub fn contains(&self, point: &Point) -> bool {
        match self {
            Domain::Continuous(d) => d.contains(point),
            Domain::Grid(d) => d.contains(point),
        }
    }

    /// Maximum number of distinct points the domain can hold, if bounded.
    pub fn capacity(&self) -> Option<usize> {
        match self {
            Domain::Continuous(_) => None,
            Domain::Grid(d) => Some(d.cell_count()),
        }
    }

    /// Short name used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Domain::Continuous(_) => "continuous",
            Domain::Grid(_) => "grid",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Continuous(d) => write!(f, "continuous {}x{}", d.width, d.height),
            Domain::Grid(d) => write!(f, "grid {0}x{0} (cell {1})", d.grid_size, d.cell_size),
        }
    }
}

/// Continuous rectangle anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinuousDomain {
    pub width: f64,
    pub height: f64,
}

impl ContinuousDomain {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, point: &Point) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    /// Clamps each coordinate of `point` into the rectangle.
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            point.x.clamp(0.0, self.width),
            point.y.clamp(0.0, self.height),
        )
    }
}

/// Square lattice of `grid_size × grid_size` cells with side `cell_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDomain {
    pub grid_size: usize,
    pub cell_size: f64,
}

/// Column/row index of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

impl Cell {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl GridDomain {
    pub const fn new(grid_size: usize, cell_size: f64) -> Self {
        Self {
            grid_size,
            cell_size,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.grid_size.saturating_mul(self.grid_size)
    }

    /// Side length of the whole lattice.
    pub fn extent(&self) -> f64 {
        self.grid_size as f64 * self.cell_size
    }

    /// Centre point of `cell`.
    pub fn center(&self, cell: Cell) -> Point {
        let half = self.cell_size / 2.0;
        Point::new(
            cell.col as f64 * self.cell_size + half,
            cell.row as f64 * self.cell_size + half,
        )
    }

    /// Cell containing `point`, clamped into the lattice.
    pub fn cell_of(&self, point: &Point) -> Cell {
        let last = self.grid_size.saturating_sub(1);
        let index = |coord: f64| ((coord / self.cell_size).floor().max(0.0) as usize).min(last);
        Cell::new(index(point.x), index(point.y))
    }

    /// Moves `cell` by `(dx, dy)` with toroidal wrap on both axes.
    pub fn step(&self, cell: Cell, dx: isize, dy: isize) -> Cell {
        let size = self.grid_size as isize;
        let wrap = |index: usize, delta: isize| (index as isize + delta).rem_euclid(size) as usize;
        Cell::new(wrap(cell.col, dx), wrap(cell.row, dy))
    }

    pub fn contains(&self, point: &Point) -> bool {
        let extent = self.extent();
        if !(0.0..=extent).contains(&point.x) || !(0.0..=extent).contains(&point.y) {
            return false;
        }
        self.center(self.cell_of(point)) == *point
    }
}
