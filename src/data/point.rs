use array_init::{array_init, try_array_init};
use num_traits::float::FloatCore;
use num_traits::Float;
use ordered_float::{FloatIsNan, NotNan};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::convert::TryFrom;
use std::ops::Deref;
use std::ops::Index;

use super::Vector;
use crate::{GeometryScalar, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point<T, const N: usize> {
  pub array: [T; N],
}

// Random sampling.
impl<T, const N: usize> Distribution<Point<T, N>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T, N> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  /// Wrap every coordinate in [`NotNan`], failing on the first NaN.
  pub fn new_nn(array: [T; N]) -> Result<Point<NotNan<T>, N>, FloatIsNan>
  where
    T: FloatCore,
  {
    Ok(Point {
      array: try_array_init(|i| NotNan::new(array[i]))?,
    })
  }

  /// Sum of squared coordinate differences. Never negative, exact up to
  /// rounding of the final sum.
  pub fn squared_euclidean_distance(&self, rhs: &Point<T, N>) -> T
  where
    T: Float,
  {
    (self - rhs).squared_magnitude()
  }

  pub fn euclidean_distance(&self, rhs: &Point<T, N>) -> T
  where
    T: Float,
  {
    self.squared_euclidean_distance(rhs).sqrt()
  }

  pub fn is_finite(&self) -> bool
  where
    T: Float,
  {
    self.array.iter().all(|c| c.is_finite())
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U, N>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<const N: usize> TryFrom<Point<f64, N>> for Point<NotNan<f64>, N> {
  type Error = FloatIsNan;
  fn try_from(point: Point<f64, N>) -> Result<Point<NotNan<f64>, N>, FloatIsNan> {
    Ok(Point {
      array: try_array_init(|i| NotNan::try_from(point.array[i]))?,
    })
  }
}

impl<const N: usize> From<Point<NotNan<f64>, N>> for Point<f64, N> {
  fn from(point: Point<NotNan<f64>, N>) -> Point<f64, N> {
    point.cast(NotNan::into_inner)
  }
}

impl<T> From<(T, T)> for Point<T, 2> {
  fn from(point: (T, T)) -> Point<T, 2> {
    Point {
      array: [point.0, point.1],
    }
  }
}

// Methods on two-dimensional points.
impl<T> Point<T, 2> {
  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }
  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn orientation(&self, q: &Point<T, 2>, r: &Point<T, 2>) -> Orientation
  where
    T: GeometryScalar,
  {
    Orientation::new(&self.array, &q.array, &r.array)
  }
}

impl<T, const N: usize> Deref for Point<T, N> {
  type Target = [T; N];
  fn deref(&self) -> &[T; N] {
    &self.array
  }
}

mod sub;
