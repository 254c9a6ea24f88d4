// Natural neighbor membership over an existing triangulation.
//
// Liang, Luming, and Dave Hale. "A stable and fast implementation of natural
// neighbor interpolation." (2010).
use tracing::{debug, trace};

use super::circumcircle::{circumcenter, circumcircle_radius};
use crate::data::{Circle, Point, PointLocation, TriangleView};
use crate::{Error, GeometryScalar};

/// Result of [`find_natural_neighbors`].
#[derive(Debug, Clone, PartialEq)]
pub struct NaturalNeighbors<T> {
  /// For every query point, the indices of the triangles whose circumcircle
  /// contains it, in ascending order.
  pub members: Vec<Vec<usize>>,
  /// Circumcircle of every triangle. `None` for degenerate triangles.
  pub circumcircles: Vec<Option<Circle<T>>>,
}

impl<T> NaturalNeighbors<T> {
  /// Number of query points with at least one natural neighbor.
  pub fn covered(&self) -> usize {
    self.members.iter().filter(|m| !m.is_empty()).count()
  }
}

fn triangle_view<'a, T>(
  points: &'a [Point<T, 2>],
  triangles: &[[usize; 3]],
  idx: usize,
) -> Result<TriangleView<'a, T>, Error>
where
  T: GeometryScalar,
{
  let [a, b, c] = triangles[idx];
  let vertex = |v: usize| {
    points.get(v).ok_or(Error::VertexOutOfBounds {
      triangle: idx,
      vertex: v,
    })
  };
  Ok(TriangleView::new([vertex(a)?, vertex(b)?, vertex(c)?]))
}

/// Find the natural neighbor triangles of every query point.
///
/// A triangle is a natural neighbor of a query point if the point lies inside
/// or on the triangle's circumcircle. Query points that fall outside every
/// triangle (outside the convex hull of the triangulation) get no neighbors.
///
/// `triangles` holds vertex indices into `points`. Degenerate triangles have
/// no circumcircle and are skipped, as are triangles whose circumcircle
/// overflows the scalar type.
///
/// # Errors
///
/// [`Error::VertexOutOfBounds`] if a triangle refers to a missing point.
///
/// # Examples
///
/// ```rust
/// # use natneighbor::data::Point;
/// # use natneighbor::algorithms::find_natural_neighbors;
/// let points = [
///   Point::new([0.0, 0.0]),
///   Point::new([1.0, 0.0]),
///   Point::new([1.0, 1.0]),
///   Point::new([0.0, 1.0]),
/// ];
/// let triangles = [[0, 1, 2], [0, 2, 3]];
/// let grid = [Point::new([0.5, 0.5]), Point::new([2.0, 2.0])];
/// let nn = find_natural_neighbors(&points, &triangles, &grid).unwrap();
/// assert_eq!(nn.members, vec![vec![0, 1], vec![]]);
/// ```
pub fn find_natural_neighbors<T>(
  points: &[Point<T, 2>],
  triangles: &[[usize; 3]],
  query_points: &[Point<T, 2>],
) -> Result<NaturalNeighbors<T>, Error>
where
  T: GeometryScalar,
{
  let views = (0..triangles.len())
    .map(|idx| triangle_view(points, triangles, idx))
    .collect::<Result<Vec<_>, Error>>()?;

  let in_triangulation: Vec<bool> = query_points
    .iter()
    .map(|pt| {
      views
        .iter()
        .any(|tri| tri.locate(pt) != PointLocation::Outside)
    })
    .collect();

  let mut members = vec![Vec::new(); query_points.len()];
  let mut circumcircles = Vec::with_capacity(views.len());

  for (idx, tri) in views.iter().enumerate() {
    let [a, b, c] = tri.vertices();
    let radius = circumcircle_radius(a, b, c);
    if radius < T::zero() {
      debug!(triangle = idx, "skipping degenerate triangle");
      circumcircles.push(None);
      continue;
    }
    let center = circumcenter(a, b, c);
    if !radius.is_finite() || !center.is_finite() {
      debug!(triangle = idx, "skipping triangle with non-finite circumcircle");
      circumcircles.push(None);
      continue;
    }
    let circle = Circle::new(center, radius);

    let mut count = 0;
    for (pt_idx, pt) in query_points.iter().enumerate() {
      if in_triangulation[pt_idx] && circle.contains(pt) {
        members[pt_idx].push(idx);
        count += 1;
      }
    }
    trace!(triangle = idx, members = count, "natural neighbor triangle");
    circumcircles.push(Some(circle));
  }

  Ok(NaturalNeighbors {
    members,
    circumcircles,
  })
}

/// Outer edges of the union of the given triangles.
///
/// Every edge `(v[i], v[i+1])` of every listed triangle is visited. An edge seen
/// twice (in either direction) is shared between two triangles and dropped.
/// The remaining edges are returned in the order they were first seen. The
/// boundary need not be convex.
///
/// # Errors
///
/// [`Error::TriangleOutOfBounds`] if a neighbor is not an index into
/// `triangles`.
pub fn find_local_boundary(
  triangles: &[[usize; 3]],
  neighbors: &[usize],
) -> Result<Vec<(usize, usize)>, Error> {
  let mut edges: Vec<(usize, usize)> = Vec::new();

  for &triangle in neighbors {
    let vertices = *triangles
      .get(triangle)
      .ok_or(Error::TriangleOutOfBounds { triangle })?;
    for i in 0..3 {
      let pt1 = vertices[i];
      let pt2 = vertices[(i + 1) % 3];
      match edges
        .iter()
        .position(|&edge| edge == (pt1, pt2) || edge == (pt2, pt1))
      {
        Some(pos) => {
          edges.remove(pos);
        }
        None => edges.push((pt1, pt2)),
      }
    }
  }

  Ok(edges)
}
