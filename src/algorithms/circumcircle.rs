use super::measures::{area, distance, squared_distance};
use crate::data::Point;
use crate::{Error, GeometryScalar};

/// How [`circumcircle_radius_with`] derives the radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadiusStrategy {
  /// `sqrt(a)*sqrt(b)*sqrt(c) / (4*area)` over squared side lengths. Degenerate
  /// triangles report [`DEGENERATE_RADIUS`](crate::DEGENERATE_RADIUS).
  AreaGuarded,
  /// Heron's formula over true side lengths. Degenerate triangles produce
  /// infinite or NaN radii.
  Heron,
}

impl Default for RadiusStrategy {
  fn default() -> Self {
    RadiusStrategy::AreaGuarded
  }
}

// (x numerator, y numerator, denominator) of the closed form; the
// denominator is twice the signed area.
fn circumcenter_parts<T>(pt0: &Point<T, 2>, pt1: &Point<T, 2>, pt2: &Point<T, 2>) -> (T, T, T)
where
  T: GeometryScalar,
{
  let [a_x, a_y] = pt0.array;
  let [b_x, b_y] = pt1.array;
  let [c_x, c_y] = pt2.array;

  let bc_y_diff = b_y - c_y;
  let ca_y_diff = c_y - a_y;
  let ab_y_diff = a_y - b_y;
  let cb_x_diff = c_x - b_x;
  let ac_x_diff = a_x - c_x;
  let ba_x_diff = b_x - a_x;

  let a_mag = a_x * a_x + a_y * a_y;
  let b_mag = b_x * b_x + b_y * b_y;
  let c_mag = c_x * c_x + c_y * c_y;

  let x_num = a_mag * bc_y_diff + b_mag * ca_y_diff + c_mag * ab_y_diff;
  let y_num = a_mag * cb_x_diff + b_mag * ac_x_diff + c_mag * ba_x_diff;
  let d_div = a_x * bc_y_diff + b_x * ca_y_diff + c_x * ab_y_diff;
  (x_num, y_num, d_div)
}

fn half<T: GeometryScalar>() -> T {
  T::from_constant(1) / T::from_constant(2)
}

/// Center of the circle through `pt0`, `pt1` and `pt2`: the intersection of
/// the perpendicular bisectors.
///
/// Colinear vertices make the denominator zero. The division is not guarded,
/// so the result then has infinite or NaN coordinates. Use
/// [`checked_circumcenter`] to get an error instead.
///
/// # Examples
///
/// ```rust
/// # use natneighbor::data::Point;
/// # use natneighbor::algorithms::circumcenter;
/// let c = circumcenter(
///   &Point::new([0.0, 0.0]),
///   &Point::new([2.0, 0.0]),
///   &Point::new([0.0, 2.0]),
/// );
/// assert_eq!(c, Point::new([1.0, 1.0]));
///
/// let flat = circumcenter(
///   &Point::new([0.0, 0.0]),
///   &Point::new([1.0, 1.0]),
///   &Point::new([2.0, 2.0]),
/// );
/// assert!(!flat.is_finite());
/// ```
pub fn circumcenter<T>(pt0: &Point<T, 2>, pt1: &Point<T, 2>, pt2: &Point<T, 2>) -> Point<T, 2>
where
  T: GeometryScalar,
{
  let (x_num, y_num, d_div) = circumcenter_parts(pt0, pt1, pt2);
  let d_inv = half::<T>() / d_div;
  Point::new([x_num * d_inv, y_num * d_inv])
}

/// Like [`circumcenter`] but fails with [`Error::CoLinearViolation`] when the
/// denominator is exactly zero.
pub fn checked_circumcenter<T>(
  pt0: &Point<T, 2>,
  pt1: &Point<T, 2>,
  pt2: &Point<T, 2>,
) -> Result<Point<T, 2>, Error>
where
  T: GeometryScalar,
{
  let (x_num, y_num, d_div) = circumcenter_parts(pt0, pt1, pt2);
  if d_div == T::zero() {
    return Err(Error::CoLinearViolation);
  }
  let d_inv = half::<T>() / d_div;
  Ok(Point::new([x_num * d_inv, y_num * d_inv]))
}

/// Circumradius using the default [`RadiusStrategy`].
///
/// Returns [`DEGENERATE_RADIUS`](crate::DEGENERATE_RADIUS) for triangles with
/// zero area.
///
/// ```rust
/// # use natneighbor::data::Point;
/// # use natneighbor::algorithms::circumcircle_radius;
/// # use natneighbor::DEGENERATE_RADIUS;
/// let flat = circumcircle_radius(
///   &Point::new([0.0, 0.0]),
///   &Point::new([1.0, 1.0]),
///   &Point::new([2.0, 2.0]),
/// );
/// assert_eq!(flat, DEGENERATE_RADIUS);
/// ```
pub fn circumcircle_radius<T>(pt0: &Point<T, 2>, pt1: &Point<T, 2>, pt2: &Point<T, 2>) -> T
where
  T: GeometryScalar,
{
  circumcircle_radius_with(RadiusStrategy::default(), pt0, pt1, pt2)
}

pub fn circumcircle_radius_with<T>(
  strategy: RadiusStrategy,
  pt0: &Point<T, 2>,
  pt1: &Point<T, 2>,
  pt2: &Point<T, 2>,
) -> T
where
  T: GeometryScalar,
{
  match strategy {
    RadiusStrategy::AreaGuarded => area_guarded_radius(pt0, pt1, pt2),
    RadiusStrategy::Heron => {
      let (prod, prod2) = heron_terms(pt0, pt1, pt2);
      prod2 / (T::from_constant(4) * prod.sqrt())
    }
  }
}

/// Squared circumradius, without taking any square root of the result.
///
/// Degenerate triangles divide by zero and yield infinite or NaN values.
pub fn circumcircle_radius_squared<T>(pt0: &Point<T, 2>, pt1: &Point<T, 2>, pt2: &Point<T, 2>) -> T
where
  T: GeometryScalar,
{
  let (prod, prod2) = heron_terms(pt0, pt1, pt2);
  prod2 * prod2 / (T::from_constant(16) * prod)
}

fn area_guarded_radius<T>(pt0: &Point<T, 2>, pt1: &Point<T, 2>, pt2: &Point<T, 2>) -> T
where
  T: GeometryScalar,
{
  let area = area(pt0, pt1, pt2);
  if area <= T::zero() {
    return T::degenerate_radius();
  }
  let a = squared_distance(pt0, pt1);
  let b = squared_distance(pt1, pt2);
  let c = squared_distance(pt2, pt0);
  // Root each factor first; the product of squared sides overflows f32 at
  // projected-coordinate scales.
  a.sqrt() * b.sqrt() * c.sqrt() / (T::from_constant(4) * area)
}

// (s(s-a)(s-b)(s-c), abc): squared area and product of the side lengths.
fn heron_terms<T>(pt0: &Point<T, 2>, pt1: &Point<T, 2>, pt2: &Point<T, 2>) -> (T, T)
where
  T: GeometryScalar,
{
  let a = distance(pt0, pt1);
  let b = distance(pt1, pt2);
  let c = distance(pt2, pt0);

  let s = (a + b + c) * half::<T>();

  let prod = s * (s - a) * (s - b) * (s - c);
  let prod2 = a * b * c;
  (prod, prod2)
}
