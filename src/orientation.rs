use std::fmt;

/// The winding direction a polygon's vertices are declared to follow.
///
/// Directions are those of the usual cartesian plain: a turn `A -> B -> C` is counter-clockwise
/// when `C` lies on the left of the directed line `AB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    /// Returns the opposite orientation.
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Clockwise => write!(f, "clockwise"),
            Orientation::CounterClockwise => write!(f, "counter-clockwise"),
        }
    }
}
