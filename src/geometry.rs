//! Fundamental geometric types for the four-point frame.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::errors::ParsePointIdError;

/// Position in the plane measured in metres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    /// Distance along the global X axis (positive to the right).
    pub x: f64,
    /// Distance along the global Y axis (positive upwards).
    pub y: f64,
}

impl Point {
    /// Create a [`Point`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert the point into an algebraic vector.
    #[must_use]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(value: Point) -> Self {
        value.to_vector()
    }
}

/// Convenience helper for creating [`Point`] instances.
///
/// # Examples
/// ```
/// use momentx::point;
///
/// let corner = point(3.0, 4.0);
/// assert_eq!(corner.y, 4.0);
/// ```
#[must_use]
pub const fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// One of the four named attachment points of the frame.
///
/// Every force is applied at the point sharing its identifier, and any of the
/// four may be chosen as the pivot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PointId {
    /// Top-left corner, directly above `B`.
    A,
    /// Origin of the frame.
    B,
    /// Top-right point, level with `A`.
    C,
    /// Bottom point, level with `B`.
    D,
}

impl PointId {
    /// All points in frame order.
    pub const ALL: [PointId; 4] = [PointId::A, PointId::B, PointId::C, PointId::D];

    /// Single-letter label of the point.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PointId::A => "A",
            PointId::B => "B",
            PointId::C => "C",
            PointId::D => "D",
        }
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PointId {
    type Err = ParsePointIdError;

    /// Parse a point label, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    /// ```
    /// use momentx::PointId;
    ///
    /// assert_eq!(" c ".parse::<PointId>(), Ok(PointId::C));
    /// assert!("E".parse::<PointId>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(PointId::A),
            "B" => Ok(PointId::B),
            "C" => Ok(PointId::C),
            "D" => Ok(PointId::D),
            _ => Err(ParsePointIdError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Fixed-size container holding one value per frame point.
///
/// Indexing with a [`PointId`] is exhaustive, so there is no missing-key case
/// to handle. The slot, not the value, decides which point a value belongs
/// to: a [`Force`](crate::Force) stored under `A` acts at `A`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PointMap<T> {
    /// Value associated with point `A`.
    #[serde(rename = "A")]
    pub a: T,
    /// Value associated with point `B`.
    #[serde(rename = "B")]
    pub b: T,
    /// Value associated with point `C`.
    #[serde(rename = "C")]
    pub c: T,
    /// Value associated with point `D`.
    #[serde(rename = "D")]
    pub d: T,
}

impl<T> PointMap<T> {
    /// Build a map by evaluating `f` once per point, in frame order.
    pub fn from_fn(mut f: impl FnMut(PointId) -> T) -> Self {
        Self {
            a: f(PointId::A),
            b: f(PointId::B),
            c: f(PointId::C),
            d: f(PointId::D),
        }
    }

    /// Transform every value while keeping the point association.
    pub fn map<U>(&self, mut f: impl FnMut(PointId, &T) -> U) -> PointMap<U> {
        PointMap::from_fn(|id| f(id, &self[id]))
    }

    /// Iterate over `(point, value)` pairs in frame order.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, &T)> + '_ {
        PointId::ALL.into_iter().map(move |id| (id, &self[id]))
    }

    /// Iterate over the values in frame order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().map(|(_, value)| value)
    }
}

impl<T> Index<PointId> for PointMap<T> {
    type Output = T;

    fn index(&self, id: PointId) -> &T {
        match id {
            PointId::A => &self.a,
            PointId::B => &self.b,
            PointId::C => &self.c,
            PointId::D => &self.d,
        }
    }
}

impl<T> IndexMut<PointId> for PointMap<T> {
    fn index_mut(&mut self, id: PointId) -> &mut T {
        match id {
            PointId::A => &mut self.a,
            PointId::B => &mut self.b,
            PointId::C => &mut self.c,
            PointId::D => &mut self.d,
        }
    }
}

/// The three lengths, in metres, that fix the frame geometry.
///
/// The model accepts any value; clamping to a slider range is left to callers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Distances {
    /// Horizontal offset of `C` from `A`.
    pub d1: f64,
    /// Height of `A` (and `C`) above `B`.
    pub d2: f64,
    /// Horizontal offset of `D` from `B`.
    pub d3: f64,
}

impl Distances {
    /// Create a [`Distances`] set with explicit lengths.
    #[must_use]
    pub const fn new(d1: f64, d2: f64, d3: f64) -> Self {
        Self { d1, d2, d3 }
    }

    /// Coordinates of a single frame point.
    ///
    /// # Examples
    /// ```
    /// use momentx::{point, Distances, PointId};
    ///
    /// let distances = Distances::new(3.0, 4.0, 5.0);
    /// assert_eq!(distances.point(PointId::C), point(3.0, 4.0));
    /// ```
    #[must_use]
    pub const fn point(&self, id: PointId) -> Point {
        match id {
            PointId::A => Point::new(0.0, self.d2),
            PointId::B => Point::new(0.0, 0.0),
            PointId::C => Point::new(self.d1, self.d2),
            PointId::D => Point::new(self.d3, 0.0),
        }
    }
}

impl Default for Distances {
    fn default() -> Self {
        Self::new(3.0, 4.0, 5.0)
    }
}

/// Coordinates of all four frame points for the given distances.
///
/// `B` is always the origin, `A` sits directly above it, `C` shares the height
/// of `A` and `D` lies on the X axis.
#[must_use]
pub fn application_points(distances: &Distances) -> PointMap<Point> {
    PointMap::from_fn(|id| distances.point(id))
}
