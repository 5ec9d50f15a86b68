use num_traits::Float;

/// A point in the plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point<T = f64> {
    /// The horizontal coordinate of the point.
    pub x: T,
    /// The vertical coordinate of the point.
    pub y: T,
}

impl<T> From<[T; 2]> for Point<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> Point<T>
where
    T: Float,
{
    /// Returns the pixel this point falls into, rounding half up on both axes.
    ///
    /// Returns [`Option::None`] if any coordinate is not finite or does not fit in an `i64`.
    pub fn rounded(&self) -> Option<Point<i64>> {
        let half = T::one() / (T::one() + T::one());

        Some(Point {
            x: (self.x + half).floor().to_i64()?,
            y: (self.y + half).floor().to_i64()?,
        })
    }
}

/// A constructor macro for [`Point`].
#[macro_export]
macro_rules! point {
    ($x:expr, $y:expr) => {
        $crate::Point { x: $x, y: $y }
    };
}
