use std::ops::{Mul, Sub};

use num_traits::Zero;

use crate::{Orientation, Point, Segment};

/// The signed area of the parallelogram spanned by two vectors, twice the area of the triangle
/// they describe.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Determinant<T>(T);

impl<T> From<[&Point<T>; 3]> for Determinant<T>
where
    T: Copy + Sub<Output = T> + Mul<Output = T>,
{
    /// Returns the determinant of the turn going from `a` through `b` to `c`, that is, of the
    /// vectors `ab` and `ac`.
    fn from([a, b, c]: [&Point<T>; 3]) -> Self {
        let (ab, ac) = ((b.x - a.x, b.y - a.y), (c.x - a.x, c.y - a.y));
        Self(ab.0 * ac.1 - ac.0 * ab.1)
    }
}

impl<T> Determinant<T>
where
    T: Copy + Sub<Output = T> + Mul<Output = T>,
{
    /// Returns the determinant of the direction vectors of both edges, zero if they are parallel.
    pub(crate) fn new(a: &Segment<'_, T>, b: &Segment<'_, T>) -> Self {
        let (da, db) = (
            (a.to.x - a.from.x, a.to.y - a.from.y),
            (b.to.x - b.from.x, b.to.y - b.from.y),
        );

        Self(da.0 * db.1 - db.0 * da.1)
    }
}

impl<T> Determinant<T>
where
    T: Zero + PartialOrd,
{
    /// Returns the turn described by the three points this determinant was computed from, or
    /// [`Option::None`] if they are collinear.
    pub(crate) fn orientation(&self) -> Option<Orientation> {
        if self.0 > T::zero() {
            Some(Orientation::CounterClockwise)
        } else if self.0 < T::zero() {
            Some(Orientation::Clockwise)
        } else {
            None
        }
    }
}

impl<T> Determinant<T> {
    pub(crate) fn into_inner(self) -> T {
        self.0
    }
}
