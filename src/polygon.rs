use std::fmt::{self, Debug};

use num_traits::{Float, NumCast};
use tracing::{debug, trace};

use crate::{
    Error, Orientation, Point, Result, Ring, Segment, Side,
    determinant::Determinant,
    text::{CRLF, Lines},
};

/// The coordinate of the far point point-in-polygon rays are cast towards, on both axes.
///
/// It must lie outside of any polygon being queried.
pub const RAY_FAR_COORD: f64 = 1e7;

/// A simple polygon under construction.
///
/// Points are appended one by one; whether a point keeps the polygon simple is a separate query,
/// [`Polygon::is_point_valid`], to be asked before appending it.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T = f64> {
    /// The winding direction the points are expected to follow.
    orientation: Orientation,
    /// The ordered list of vertices describing the polygon.
    points: Vec<Point<T>>,
}

impl<T> Polygon<T> {
    /// Returns an empty polygon with the given orientation.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            points: Vec::new(),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Returns the amount of points in the polygon.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point<T>> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point<T>> {
        self.points.last()
    }

    /// Appends the given point, no matter if it keeps the polygon simple or not.
    pub fn add_point(&mut self, point: impl Into<Point<T>>) {
        self.points.push(point.into());
    }

    /// Removes all the points of the polygon.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Returns an ordered iterator over all the [`Segment`]s of the polygon, the latest one
    /// going from the last point back to the first.
    pub fn edges(&self) -> impl Iterator<Item = Segment<'_, T>> {
        self.vertices()
            .zip(self.vertices().skip(1))
            .map(Segment::from)
    }

    /// Returns an ordered iterator over all the vertices of the polygon.
    ///
    /// By definition, a polygon is a closed shape, hence the latest point of the iterator equals
    /// the very first.
    fn vertices(&self) -> impl Iterator<Item = &Point<T>> {
        self.points.iter().chain(self.points.first())
    }
}

impl<T> Polygon<T>
where
    T: Clone,
{
    /// Replaces the points of self with a copy of the points of other.
    ///
    /// The orientation of self is kept.
    pub fn set_points(&mut self, other: &Polygon<T>) {
        self.points.clone_from(&other.points);
    }
}

impl<T> Polygon<T>
where
    T: Copy,
{
    /// Returns the [`Ring`] going through all the points of the polygon, or [`Option::None`] if
    /// the polygon is empty.
    pub fn to_ring(&self) -> Option<Ring<T>> {
        Ring::new(&self.points)
    }
}

impl<T> Polygon<T>
where
    T: Float + Debug,
{
    /// Returns true if, and only if, appending the given point keeps the polygon simple and
    /// consistent with its orientation.
    ///
    /// A point collinear with any of the two boundary edges it would create is never valid.
    pub fn is_point_valid(&self, point: &Point<T>) -> bool {
        let len = self.points.len();
        if len < 2 {
            return true;
        }

        let (first, second) = (&self.points[0], &self.points[1]);
        let (prelast, last) = (&self.points[len - 2], &self.points[len - 1]);

        let opening = Determinant::from([point, first, second]).orientation();
        let closing = Determinant::from([prelast, last, point]).orientation();

        match (opening, closing) {
            (None, _) | (_, None) => {
                debug!(?point, "candidate point is collinear with a boundary edge");
                return false;
            }
            (Some(opening), Some(closing))
                if opening != self.orientation && closing != self.orientation =>
            {
                debug!(?point, orientation = %self.orientation, "candidate point turns against the polygon");
                return false;
            }
            _ => {}
        }

        let edge = Segment::new(last, point);

        // All but the closing edge and the one ending at the last point.
        if let Some(crossing) = self
            .edges()
            .take(len - 2)
            .find_map(|existing| edge.intersection(&existing))
        {
            debug!(?point, ?crossing, "candidate point crosses the boundary");
            return false;
        }

        true
    }

    /// Returns true if, and only if, closing the polygon does not make any two non-adjacent edges
    /// cross each other.
    ///
    /// Only the edges ending at the last point and closing the boundary are checked, every other
    /// edge being expected to have been validated by [`Polygon::is_point_valid`].
    ///
    /// # Panics
    ///
    /// If the polygon has less than 3 points.
    pub fn is_finished(&self) -> bool {
        let len = self.points.len();
        assert!(
            len >= 3,
            "a polygon needs at least 3 points to be finished, got {len}"
        );

        if len == 3 {
            return true;
        }

        let edges: Vec<_> = self.edges().collect();
        let closing = &edges[len - 1];
        let last = &edges[len - 2];

        let crossed = edges[1..len - 2]
            .iter()
            .any(|edge| closing.intersection(edge).is_some())
            || edges[..len - 3]
                .iter()
                .any(|edge| last.intersection(edge).is_some());

        !crossed
    }

    /// Returns true if, and only if, the polygon has at least 3 points and its edges only meet
    /// at the vertex shared by consecutive ones.
    ///
    /// Unlike [`Polygon::is_point_valid`], two non-adjacent edges sharing an endpoint are not
    /// simple, so a boundary going through the same vertex twice is rejected.
    pub fn is_simple(&self) -> bool {
        let edges: Vec<_> = self.edges().collect();
        let len = edges.len();
        if len < 3 {
            return false;
        }

        if edges.iter().any(|edge| edge.from == edge.to) {
            debug!(len, "polygon has a repeated consecutive vertex");
            return false;
        }

        let touches = |a: &Segment<'_, T>, b: &Segment<'_, T>| {
            [a.from, a.to]
                .into_iter()
                .any(|point| point == b.from || point == b.to)
        };

        (0..len).all(|i| {
            (i + 2..len)
                .filter(|&j| i != 0 || j != len - 1)
                .all(|j| {
                    !touches(&edges[i], &edges[j]) && edges[i].intersection(&edges[j]).is_none()
                })
        })
    }

    /// Returns true if, and only if, the given point is inside the polygon according to the
    /// even-odd rule.
    ///
    /// A ray is cast from the point towards [`RAY_FAR_COORD`] on both axes, counting the edges it
    /// crosses. An edge endpoint lying right on the ray counts as being on its right, so a ray
    /// going through a vertex is counted once if the boundary crosses it there and never if the
    /// boundary just touches it.
    pub fn contains(&self, point: &Point<T>) -> bool {
        if self.points.len() < 2 {
            return false;
        }

        let Some(far) = <T as NumCast>::from(RAY_FAR_COORD) else {
            return false;
        };

        let far = Point { x: far, y: far };
        let ray = Segment::new(point, &far);
        let is_left = |point: &Point<T>| matches!(ray.side(point), Some(Side::Left));

        let crossings = self
            .edges()
            .filter(|edge| is_left(edge.from) != is_left(edge.to))
            .filter(|edge| ray.intersection(edge).is_some())
            .count();

        crossings % 2 == 1
    }

    /// Returns true if, and only if, the other polygon lies entirely inside of self: all of its
    /// points are inside self and no edge of it crosses the boundary of self.
    ///
    /// An empty polygon neither encloses nor is enclosed by any other.
    pub fn encloses(&self, other: &Polygon<T>) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        other.points.iter().all(|point| self.contains(point))
            && other.edges().all(|edge| {
                self.edges()
                    .all(|boundary| edge.intersection(&boundary).is_none())
            })
    }
}

impl<T> Polygon<T>
where
    T: Float,
{
    /// Parses a polygon written in the textual contour format: a point count line followed by
    /// one line per point holding its integer coordinates.
    pub fn parse(orientation: Orientation, text: &str) -> Result<Self> {
        let mut lines = Lines::new(text);
        let polygon = Self::read(orientation, &mut lines)?;
        lines.finish()?;

        Ok(polygon)
    }

    /// Reads a single contour from the given lines.
    pub(crate) fn read(orientation: Orientation, lines: &mut Lines<'_>) -> Result<Self> {
        let (line, [count]) = lines.integers::<1>("point count")?;
        if count < 0 {
            return Err(Error::NegativePointCount { line, count });
        }

        let mut polygon = Self::new(orientation);
        for _ in 0..count {
            let (line, [x, y]) = lines.integers::<2>("point coordinates")?;
            let point = <T as NumCast>::from(x)
                .zip(<T as NumCast>::from(y))
                .ok_or_else(|| Error::Malformed {
                    line,
                    expected: "representable point coordinates",
                    found: format!("{x} {y}"),
                })?;

            polygon.add_point(point);
        }

        trace!(count, %orientation, "read contour");
        Ok(polygon)
    }
}

impl<T> fmt::Display for Polygon<T>
where
    T: Float,
{
    /// Writes the polygon in the textual contour format, rounding every coordinate to the
    /// nearest integer.
    ///
    /// Fails if any coordinate is not finite.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{CRLF}", self.points.len())?;
        self.points.iter().try_for_each(|point| {
            let Point { x, y } = point.rounded().ok_or(fmt::Error)?;
            write!(f, "{x} {y}{CRLF}")
        })
    }
}
