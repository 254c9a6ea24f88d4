use super::{Circle, Point, PointLocation};
use crate::algorithms::circumcircle::{self, RadiusStrategy};
use crate::{Error, GeometryScalar, Orientation};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T>(pub [Point<T, 2>; 3]);

impl<T> Triangle<T>
where
  T: GeometryScalar,
{
  /// Degenerate (colinear or coincident) vertices are accepted. Use
  /// [`Triangle::validate`] to reject them.
  pub fn new(pts: [Point<T, 2>; 3]) -> Triangle<T> {
    Triangle(pts)
  }

  pub fn validate(&self) -> Result<(), Error> {
    self.view().validate()
  }

  // O(1)
  pub fn locate(&self, pt: &Point<T, 2>) -> PointLocation {
    self.view().locate(pt)
  }

  pub fn area(&self) -> T {
    self.view().area()
  }

  pub fn circumcircle(&self) -> Result<Circle<T>, Error> {
    self.view().circumcircle()
  }

  pub fn view(&'_ self) -> TriangleView<'_, T> {
    TriangleView([&self.0[0], &self.0[1], &self.0[2]])
  }
}

#[derive(Debug, Clone, Copy)]
pub struct TriangleView<'a, T>([&'a Point<T, 2>; 3]);

impl<'a, T> TriangleView<'a, T>
where
  T: GeometryScalar,
{
  // O(1)
  pub fn new(pts: [&'a Point<T, 2>; 3]) -> TriangleView<'a, T> {
    TriangleView(pts)
  }

  pub fn vertices(&self) -> [&'a Point<T, 2>; 3] {
    self.0
  }

  // O(1)
  pub fn validate(&self) -> Result<(), Error> {
    if self.is_degenerate() {
      Err(Error::CoLinearViolation)
    } else {
      Ok(())
    }
  }

  pub fn orientation(&self) -> Orientation {
    let [a, b, c] = self.0;
    Orientation::new(a, b, c)
  }

  /// True if the vertices are colinear or coincide. Uses an exact orientation
  /// test, so it can disagree with `area() == 0` for nearly flat triangles.
  pub fn is_degenerate(&self) -> bool {
    self.orientation().is_colinear()
  }

  // O(1)
  pub fn locate(&self, pt: &Point<T, 2>) -> PointLocation {
    use Orientation::*;
    let [a, b, c] = match self.orientation() {
      CounterClockWise => self.0,
      ClockWise => [self.0[0], self.0[2], self.0[1]],
      CoLinear => return self.locate_degenerate(pt),
    };
    let ab = a.orientation(b, pt);
    let bc = b.orientation(c, pt);
    let ca = c.orientation(a, pt);
    if ab == ClockWise || bc == ClockWise || ca == ClockWise {
      PointLocation::Outside
    } else if ab == CoLinear || bc == CoLinear || ca == CoLinear {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }

  // A flat triangle covers the segment between its two farthest vertices.
  fn locate_degenerate(&self, pt: &Point<T, 2>) -> PointLocation {
    let [a, b, c] = self.0;
    let (p, q) = [(a, b), (b, c), (c, a)]
      .iter()
      .copied()
      .fold((a, b), |best, (p, q)| {
        if p.squared_euclidean_distance(q) > best.0.squared_euclidean_distance(best.1) {
          (p, q)
        } else {
          best
        }
      });
    let within = |i: usize| {
      let (lo, hi) = if p[i] <= q[i] { (p[i], q[i]) } else { (q[i], p[i]) };
      lo <= pt[i] && pt[i] <= hi
    };
    if p.orientation(q, pt).is_colinear() && within(0) && within(1) {
      PointLocation::OnBoundary
    } else {
      PointLocation::Outside
    }
  }

  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / T::from_constant(2)
  }

  /// Never negative. Zero for colinear vertices.
  pub fn area(&self) -> T {
    self.signed_area().abs()
  }

  pub fn signed_area_2x(&self) -> T {
    let [a, b, c] = self.0;
    let [ax, ay] = a.array;
    let [bx, by] = b.array;
    let [cx, cy] = c.array;
    (ax * by - bx * ay) + (bx * cy - cx * by) + (cx * ay - ax * cy)
    // x1*y2 - x2*y1 +
    // x2*y3 - x3*y2 +
    // x3*y1 - x1*y3
  }

  /// Non-finite for degenerate triangles, see [`circumcircle::circumcenter`].
  pub fn circumcenter(&self) -> Point<T, 2> {
    let [a, b, c] = self.0;
    circumcircle::circumcenter(a, b, c)
  }

  pub fn circumradius(&self, strategy: RadiusStrategy) -> T {
    let [a, b, c] = self.0;
    circumcircle::circumcircle_radius_with(strategy, a, b, c)
  }

  pub fn circumradius_squared(&self) -> T {
    let [a, b, c] = self.0;
    circumcircle::circumcircle_radius_squared(a, b, c)
  }

  pub fn circumcircle(&self) -> Result<Circle<T>, Error> {
    let [a, b, c] = self.0;
    let center = circumcircle::checked_circumcenter(a, b, c)?;
    let radius = self.circumradius(RadiusStrategy::AreaGuarded);
    if radius < T::zero() {
      return Err(Error::CoLinearViolation);
    }
    if !radius.is_finite() || !center.is_finite() {
      return Err(Error::NonFiniteCircumcircle);
    }
    Ok(Circle::new(center, radius))
  }
}
