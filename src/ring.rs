use crate::Point;

/// A vertex in a [`Ring`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedVertex<T = f64> {
    /// The location of the vertex.
    pub point: Point<T>,
    /// The position in the ring of the vertex following this one.
    pub next: usize,
    /// The position in the ring of the vertex previous to this one.
    pub previous: usize,
    /// If true, this is the vertex the traversal of the ring starts at.
    pub is_entry: bool,
}

/// The closed, circular chain of vertices describing the boundary of a polygon.
///
/// Vertices are stored in an arena and address each other by position, the last one pointing
/// back to the first. The ring owns a copy of every point, so it remains valid no matter what
/// happens to the polygon it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring<T = f64> {
    vertices: Vec<OrientedVertex<T>>,
}

impl<T> Ring<T>
where
    T: Copy,
{
    /// Returns the ring going through all the given points in order, or [`Option::None`] if
    /// there are no points at all.
    pub(crate) fn new(points: &[Point<T>]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let len = points.len();
        let vertices = points
            .iter()
            .enumerate()
            .map(|(position, &point)| OrientedVertex {
                point,
                next: (position + 1) % len,
                previous: (position + len - 1) % len,
                is_entry: position == 0,
            })
            .collect();

        Some(Self { vertices })
    }
}

impl<T> Ring<T> {
    /// Returns the vertex the traversal of the ring starts at.
    pub fn entry(&self) -> &OrientedVertex<T> {
        &self.vertices[0]
    }

    /// Returns the amount of vertices in the ring.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if, and only if, the ring has no vertices, which never happens to a built one.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex at the given position, if any.
    pub fn get(&self, position: usize) -> Option<&OrientedVertex<T>> {
        self.vertices.get(position)
    }

    /// Returns the vertex following the given one.
    pub fn successor(&self, vertex: &OrientedVertex<T>) -> &OrientedVertex<T> {
        &self.vertices[vertex.next]
    }

    /// Returns the vertex previous to the given one.
    pub fn predecessor(&self, vertex: &OrientedVertex<T>) -> &OrientedVertex<T> {
        &self.vertices[vertex.previous]
    }

    /// Returns an iterator that walks the whole ring once, starting at the entry vertex.
    pub fn iter(&self) -> Walk<'_, T> {
        Walk {
            ring: self,
            next: Some(0),
        }
    }
}

impl<'a, T> IntoIterator for &'a Ring<T> {
    type Item = &'a OrientedVertex<T>;
    type IntoIter = Walk<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator of [`OrientedVertex`] following the `next` position of each vertex until the
/// ring closes.
pub struct Walk<'a, T> {
    ring: &'a Ring<T>,
    next: Option<usize>,
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = &'a OrientedVertex<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = &self.ring.vertices[self.next?];
        self.next = (!self.ring.vertices[vertex.next].is_entry).then_some(vertex.next);
        Some(vertex)
    }
}
