//! World-space coordinates.

use std::fmt;

use serde::Deserialize;

/// One discrete cell of the world grid.
///
/// `plane` is the vertical level: ground floor, upper floors, basements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub struct WorldTile {
    pub x: i32,
    pub y: i32,
    pub plane: i32,
}

impl WorldTile {
    pub const fn new(x: i32, y: i32, plane: i32) -> Self {
        Self { x, y, plane }
    }

    /// The tile `dx` east and `dy` north of this one, on the same plane.
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.plane)
    }

    /// Tile distance to `other`: the larger of the two axis deltas.
    ///
    /// Tiles on different planes are unreachable by walking and report
    /// `i32::MAX`, as do deltas too large for an `i32`.
    pub fn distance_to(&self, other: &WorldTile) -> i32 {
        if self.plane != other.plane {
            return i32::MAX;
        }
        let d = self.x.abs_diff(other.x).max(self.y.abs_diff(other.y));
        i32::try_from(d).unwrap_or(i32::MAX)
    }
}

impl fmt::Display for WorldTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.plane)
    }
}

impl From<(i32, i32, i32)> for WorldTile {
    fn from((x, y, plane): (i32, i32, i32)) -> Self {
        Self::new(x, y, plane)
    }
}

/// A tile position relative to the currently loaded scene, in scene units.
///
/// Only tiles inside the loaded scene convert to a local point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LocalPoint {
    pub x: i32,
    pub y: i32,
}

impl LocalPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The four cardinal directions a tile can be left through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Label order used by the collision debug pass.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn letter(&self) -> char {
        match self {
            Direction::North => 'n',
            Direction::South => 's',
            Direction::East => 'e',
            Direction::West => 'w',
        }
    }

    /// Unit step (dx, dy) in world coordinates, north being +y.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}
