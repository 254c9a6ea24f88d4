use claims::debug_assert_ge;

use super::Point;
use crate::GeometryScalar;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle<T> {
  pub center: Point<T, 2>,
  pub radius: T,
}

impl<T> Circle<T>
where
  T: GeometryScalar,
{
  /// `radius` must be finite and not negative.
  pub fn new(center: Point<T, 2>, radius: T) -> Circle<T> {
    debug_assert_ge!(radius, T::zero());
    Circle { center, radius }
  }

  /// Closed disk test: points on the circle are contained.
  pub fn contains(&self, pt: &Point<T, 2>) -> bool {
    self.center.squared_euclidean_distance(pt) <= self.radius * self.radius
  }
}
