//! Catalog of named seed patterns.
//!
//! Patterns are plain data: a name and a fixed list of live-cell offsets
//! relative to the anchor they are seeded at.

use super::grid::Coordinate;
use crate::error::{LifeError, Result};

/// A named template of live cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    cells: &'static [(i64, i64)],
}

impl Pattern {
    const fn new(name: &'static str, description: &'static str, cells: &'static [(i64, i64)]) -> Self {
        Self { name, description, cells }
    }

    /// Relative offsets of the live cells.
    pub fn offsets(&self) -> impl ExactSizeIterator<Item = Coordinate> + '_ {
        self.cells.iter().map(|&(x, y)| Coordinate::new(x, y))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounding box width
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0) as usize
    }

    /// Bounding box height
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0) as usize
    }
}

/// Glider - simplest spaceship, moves (+1, +1) every 4 generations
pub const GLIDER: Pattern = Pattern::new(
    "glider",
    "Moves diagonally (period 4)",
    &[
        (0, 0),
        (1, 1), (2, 1),
        (0, 2), (1, 2),
    ],
);

pub const BLINKER: Pattern = Pattern::new(
    "blinker",
    "Oscillator (period 2)",
    &[(0, 1), (1, 1), (2, 1)],
);

pub const TOAD: Pattern = Pattern::new(
    "toad",
    "Oscillator (period 2)",
    &[
        (1, 0), (2, 0), (3, 0),
        (0, 1), (1, 1), (2, 1),
    ],
);

pub const BEACON: Pattern = Pattern::new(
    "beacon",
    "Oscillator (period 2)",
    &[
        (0, 0), (1, 0),
        (0, 1),
        (3, 2),
        (2, 3), (3, 3),
    ],
);

pub const PULSAR: Pattern = Pattern::new(
    "pulsar",
    "Oscillator (period 3)",
    &[
        (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
        (0, 2), (5, 2), (7, 2), (12, 2),
        (0, 3), (5, 3), (7, 3), (12, 3),
        (0, 4), (5, 4), (7, 4), (12, 4),
        (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
        (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
        (0, 8), (5, 8), (7, 8), (12, 8),
        (0, 9), (5, 9), (7, 9), (12, 9),
        (0, 10), (5, 10), (7, 10), (12, 10),
        (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
    ],
);

/// Lightweight spaceship
pub const LWSS: Pattern = Pattern::new(
    "lwss",
    "Lightweight Spaceship (period 4)",
    &[
        (1, 0), (4, 0),
        (0, 1),
        (0, 2), (4, 2),
        (0, 3), (1, 3), (2, 3), (3, 3),
    ],
);

/// Gosper glider gun - emits a glider every 30 generations
pub const GLIDER_GUN: Pattern = Pattern::new(
    "glider-gun",
    "Produces gliders (period 30)",
    &[
        (0, 4), (0, 5), (1, 4), (1, 5),
        (10, 4), (10, 5), (10, 6),
        (11, 3), (11, 7),
        (12, 2), (12, 8),
        (13, 2), (13, 8),
        (14, 5),
        (15, 3), (15, 7),
        (16, 4), (16, 5), (16, 6),
        (17, 5),
        (20, 2), (20, 3), (20, 4),
        (21, 2), (21, 3), (21, 4),
        (22, 1), (22, 5),
        (24, 0), (24, 1), (24, 5), (24, 6),
        (34, 2), (34, 3), (35, 2), (35, 3),
    ],
);

pub const R_PENTOMINO: Pattern = Pattern::new(
    "r-pentomino",
    "Methuselah - stabilizes at gen 1103",
    &[
        (1, 0), (2, 0),
        (0, 1), (1, 1),
        (1, 2),
    ],
);

pub const ACORN: Pattern = Pattern::new(
    "acorn",
    "Methuselah - stabilizes at gen 5206",
    &[
        (1, 0),
        (3, 1),
        (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
    ],
);

pub const BLOCK: Pattern = Pattern::new(
    "block",
    "Still life",
    &[
        (0, 0), (1, 0),
        (0, 1), (1, 1),
    ],
);

/// Every pattern in the catalog.
pub const CATALOG: &[Pattern] = &[
    GLIDER,
    BLINKER,
    TOAD,
    BEACON,
    PULSAR,
    LWSS,
    GLIDER_GUN,
    R_PENTOMINO,
    ACORN,
    BLOCK,
];

/// Find a pattern by name (ASCII case-insensitive).
pub fn lookup(name: &str) -> Result<&'static Pattern> {
    CATALOG
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| LifeError::UnknownPattern(name.to_string()))
}

/// Names of every catalog pattern.
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|p| p.name)
}
