use crate::data::{Point, TriangleView};
use crate::GeometryScalar;

/// Area of the triangle `p0 p1 p2`, computed with the shoelace formula.
///
/// Always non-negative and independent of vertex order. Colinear or
/// coincident vertices give exactly zero (up to rounding of the
/// coordinate products).
///
/// # Examples
///
/// ```rust
/// # use natneighbor::data::Point;
/// # use natneighbor::algorithms::area;
/// let a = Point::new([0.0, 0.0]);
/// let b = Point::new([4.0, 0.0]);
/// let c = Point::new([0.0, 3.0]);
/// assert_eq!(area(&a, &b, &c), 6.0);
/// assert_eq!(area(&a, &a, &a), 0.0);
/// ```
pub fn area<T>(p0: &Point<T, 2>, p1: &Point<T, 2>, p2: &Point<T, 2>) -> T
where
  T: GeometryScalar,
{
  TriangleView::new([p0, p1, p2]).area()
}

/// Squared euclidean distance. Prefer this over [`distance`] when only
/// comparing lengths.
pub fn squared_distance<T>(p0: &Point<T, 2>, p1: &Point<T, 2>) -> T
where
  T: GeometryScalar,
{
  squared_distance_coords(*p0.x_coord(), *p0.y_coord(), *p1.x_coord(), *p1.y_coord())
}

/// [`squared_distance`] on bare coordinates.
pub fn squared_distance_coords<T>(x0: T, y0: T, x1: T, y1: T) -> T
where
  T: GeometryScalar,
{
  let d0 = x1 - x0;
  let d1 = y1 - y0;
  d0 * d0 + d1 * d1
}

pub fn distance<T>(p0: &Point<T, 2>, p1: &Point<T, 2>) -> T
where
  T: GeometryScalar,
{
  squared_distance(p0, p1).sqrt()
}
