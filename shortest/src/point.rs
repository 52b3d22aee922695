use std::{fmt, str::FromStr};

use crate::{error::ParsePointError, float::SearchFloat};

/// A point in 3-space. Fields are private so a point cannot change after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Point3<T> {
    x: T,
    y: T,
    z: T,
}

impl<T: SearchFloat> Point3<T> {
    #[inline(always)]
    pub const fn new(x: T, y: T, z: T) -> Point3<T> {
        Point3 { x, y, z }
    }

    pub fn origin() -> Point3<T> {
        Point3::new(T::zero(), T::zero(), T::zero())
    }

    #[inline(always)]
    pub fn x(&self) -> T {
        self.x
    }
    #[inline(always)]
    pub fn y(&self) -> T {
        self.y
    }
    #[inline(always)]
    pub fn z(&self) -> T {
        self.z
    }

    pub fn to_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean distance between `self` and `other`.
    #[inline(always)]
    pub fn distance(&self, other: &Point3<T>) -> T {
        self.distance_squared(other).sqrt()
    }

    /// Squared euclidean distance. Orders pairs the same way as [`Point3::distance`]
    /// without paying for the square root.
    ///
    /// Overflows to infinity once a per-axis gap reaches about `sqrt(T::MAX)`, roughly `1.3e154`
    /// for `f64` and `1.8e19` for `f32`. Both searches treat such candidates as not comparable.
    #[inline(always)]
    pub fn distance_squared(&self, other: &Point3<T>) -> T {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;

        dx * dx + dy * dy + dz * dz
    }

    /// `|x| + |y| + |z|`
    #[inline(always)]
    pub fn magnitude_sum(&self) -> T {
        self.x.abs() + self.y.abs() + self.z.abs()
    }
}

impl<T: SearchFloat> From<[T; 3]> for Point3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Point3::new(x, y, z)
    }
}

impl<T: SearchFloat> From<Point3<T>> for [T; 3] {
    fn from(p: Point3<T>) -> Self {
        p.to_array()
    }
}

impl<T: SearchFloat + fmt::Display> fmt::Display for Point3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}/{}/{})", self.x, self.y, self.z)
    }
}

/// Parses `"x,y,z"`. Whitespace around each component is ignored.
impl<T: SearchFloat + FromStr> FromStr for Point3<T> {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(str::trim);
        let mut next = || -> Result<T, ParsePointError> {
            let part = parts
                .next()
                .ok_or_else(|| ParsePointError::WrongArity(s.to_owned()))?;
            part.parse::<T>()
                .map_err(|_| ParsePointError::InvalidComponent(part.to_owned()))
        };
        let (x, y, z) = (next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(ParsePointError::WrongArity(s.to_owned()));
        }
        Ok(Point3::new(x, y, z))
    }
}
