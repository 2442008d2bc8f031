//! Distance heuristics used to order the A* open set.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use gridstar_core::Point;

use crate::SearchError;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent when only up, down, left and right moves are
/// allowed.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u64 {
    u64::from(a.x.abs_diff(b.x)) + u64::from(a.y.abs_diff(b.y))
}

/// Euclidean (L2) distance between two points.
///
/// Admissible for free or diagonal movement; a looser bound on 4-way grids.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    (dx * dx + dy * dy).sqrt()
}

/// Signature of a caller-supplied estimator.
pub type Estimator = dyn Fn(Point, Point) -> f64 + Send + Sync;

/// Strategy estimating the remaining cost from a node to the target.
#[derive(Clone, Default)]
pub enum Heuristic {
    /// [`manhattan`] distance.
    #[default]
    Manhattan,
    /// [`euclidean`] distance.
    Euclidean,
    /// Caller-supplied estimator.
    Custom(Arc<Estimator>),
}

impl Heuristic {
    /// Wrap a caller-supplied estimator.
    pub fn custom(f: impl Fn(Point, Point) -> f64 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Look up a built-in heuristic by its exact name.
    pub fn from_name(name: &str) -> Result<Self, SearchError> {
        match name {
            "manhattan" => Ok(Self::Manhattan),
            "euclidean" => Ok(Self::Euclidean),
            _ => Err(SearchError::InvalidHeuristic(name.to_string())),
        }
    }

    /// The heuristic's name; `"custom"` for caller-supplied estimators.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
            Self::Custom(_) => "custom",
        }
    }

    /// Estimate the remaining cost from `from` to `to`.
    #[inline]
    pub fn estimate(&self, from: Point, to: Point) -> f64 {
        match self {
            Self::Manhattan => manhattan(from, to) as f64,
            Self::Euclidean => euclidean(from, to),
            Self::Custom(f) => f(from, to),
        }
    }

    /// Like [`estimate`](Self::estimate), but on `"x,y"` node keys.
    pub fn estimate_keys(&self, from: &str, to: &str) -> Result<f64, SearchError> {
        Ok(self.estimate(decode(from)?, decode(to)?))
    }
}

pub(crate) fn decode(key: &str) -> Result<Point, SearchError> {
    key.parse().map_err(|source| SearchError::InvalidKey {
        key: key.to_string(),
        source,
    })
}

impl FromStr for Heuristic {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Debug for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
