//! Geometry primitive [`Point`] and the `"x,y"` node-key codec.

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X is the column and grows right, Y is the row and
/// grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four cardinal neighbours (up, down, left, right).
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x + 1, self.y),
        ]
    }

    /// The canonical `"x,y"` node key for this point.
    pub fn key(self) -> String {
        self.to_string()
    }
}

// --- trait impls for Point ---

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

/// Formats as a node key, `"x,y"`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = KeyError;

    /// Decode an `"x,y"` node key. Whitespace around either coordinate is
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((xs, ys)) = s.split_once(',') else {
            return Err(KeyError::MissingSeparator(s.to_string()));
        };
        let coord = |part: &str| {
            part.trim()
                .parse::<i32>()
                .map_err(|_| KeyError::InvalidCoordinate(s.to_string()))
        };
        Ok(Self::new(coord(xs)?, coord(ys)?))
    }
}

// ---------------------------------------------------------------------------
// KeyError
// ---------------------------------------------------------------------------

/// Errors that can occur when decoding a node key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The key has no `,` between its coordinates.
    MissingSeparator(String),
    /// A coordinate is not an integer.
    InvalidCoordinate(String),
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator(k) => write!(f, "node key {k:?} is not of the form x,y"),
            Self::InvalidCoordinate(k) => write!(f, "node key {k:?} has a non-integer coordinate"),
        }
    }
}

impl std::error::Error for KeyError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::new(-2, 9);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
