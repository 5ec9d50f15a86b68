//! Interactive construction and validation of the simple polygons taking part in a
//! Weiler-Atherton clipping: a subject polygon, optionally with a hole, and a clip polygon.
//!
//! A [`Polygon`] is built point by point, asking [`Polygon::is_point_valid`] before appending
//! every new point and [`Polygon::is_finished`] before closing it. Once finished, it can be
//! queried for containment or turned into the [`Ring`] of vertices a clipping pass walks over.

mod determinant;
mod error;
mod orientation;
mod point;
mod polygon;
mod ring;
mod scene;
mod segment;
mod style;
mod text;

pub use self::error::{Error, Result};
pub use self::orientation::Orientation;
pub use self::point::Point;
pub use self::polygon::{Polygon, RAY_FAR_COORD};
pub use self::ring::{OrientedVertex, Ring, Walk};
pub use self::scene::{Role, Scene};
pub use self::segment::{Segment, Side};
pub use self::style::{MAX_THICKNESS, Rgb, Style, Styles};
