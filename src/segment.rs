use num_traits::Float;

use crate::{Orientation, Point, determinant::Determinant};

/// The side of a [`Segment`]'s supporting line a point lies on, looking from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// The straight line between two endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a, T = f64> {
    /// The first point in the segment.
    pub from: &'a Point<T>,
    /// The last point in the segment.
    pub to: &'a Point<T>,
}

impl<'a, T> From<(&'a Point<T>, &'a Point<T>)> for Segment<'a, T> {
    fn from((from, to): (&'a Point<T>, &'a Point<T>)) -> Self {
        Self { from, to }
    }
}

impl<'a, T> Segment<'a, T> {
    /// Returns the segment going from `from` to `to`.
    pub fn new(from: &'a Point<T>, to: &'a Point<T>) -> Self {
        Self { from, to }
    }
}

impl<T> Segment<'_, T>
where
    T: Float,
{
    /// Returns the [`Point`] where self and rhs cross each other, if any.
    ///
    /// Parallel and collinear segments never intersect, not even when they overlap. Neither do
    /// two segments whose only common point is an endpoint of both of them, so consecutive edges
    /// of a polygon do not intersect. An endpoint of one segment lying on the interior of the
    /// other one is an intersection.
    pub fn intersection(&self, rhs: &Segment<'_, T>) -> Option<Point<T>> {
        let determinant = Determinant::new(self, rhs).into_inner();

        if determinant.is_zero() {
            return None;
        }

        let t = (self.from.x - rhs.from.x) * (rhs.from.y - rhs.to.y)
            - (self.from.y - rhs.from.y) * (rhs.from.x - rhs.to.x);

        // Predict if the division `t / determinant` will be in the range `[0,1]`
        if !is_unit_fraction(t, determinant) {
            return None;
        }

        let u = -((self.from.x - self.to.x) * (self.from.y - rhs.from.y)
            - (self.from.y - self.to.y) * (self.from.x - rhs.from.x));

        if !is_unit_fraction(u, determinant) {
            return None;
        }

        if is_endpoint(t, determinant) && is_endpoint(u, determinant) {
            // Touching at a shared endpoint.
            return None;
        }

        let t = t / determinant;
        Some(Point {
            x: self.from.x + t * (self.to.x - self.from.x),
            y: self.from.y + t * (self.to.y - self.from.y),
        })
    }

    /// Returns the side of this segment's supporting line the given point lies on, or
    /// [`Option::None`] if the point is on the line.
    pub fn side(&self, point: &Point<T>) -> Option<Side> {
        Determinant::from([self.from, self.to, point])
            .orientation()
            .map(|orientation| match orientation {
                Orientation::CounterClockwise => Side::Left,
                Orientation::Clockwise => Side::Right,
            })
    }
}

/// Returns true if, and only if, `numerator / denominator` is in the range `[0,1]`.
fn is_unit_fraction<T: Float>(numerator: T, denominator: T) -> bool {
    numerator.is_zero()
        || numerator.signum() == denominator.signum() && numerator.abs() <= denominator.abs()
}

/// Returns true if, and only if, `numerator / denominator` is either 0 or 1.
fn is_endpoint<T: Float>(numerator: T, denominator: T) -> bool {
    numerator.is_zero() || numerator == denominator
}
