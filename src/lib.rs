#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Triangle geometry for Delaunay-based natural neighbor interpolation.
//!
//! The closed-form kernel (area, circumcenter, circumradius, distances) lives in
//! [`algorithms`], the value types it operates on live in [`data`].
//!
//! ```rust
//! # use natneighbor::data::Point;
//! # use natneighbor::algorithms::{area, circumcenter, circumcircle_radius};
//! let a: Point<f64, 2> = Point::new([0.0, 0.0]);
//! let b = Point::new([4.0, 0.0]);
//! let c = Point::new([0.0, 3.0]);
//! assert_eq!(area(&a, &b, &c), 6.0);
//! let center = circumcenter(&a, &b, &c);
//! assert!((center.x_coord() - 2.0).abs() < 1e-12);
//! assert!((center.y_coord() - 1.5).abs() < 1e-12);
//! assert_eq!(circumcircle_radius(&a, &b, &c), 2.5);
//! ```
use num_traits::Float;

pub mod algorithms;
pub mod data;
mod orientation;

pub use orientation::Orientation;

/// Radius reported for triangles without a circumcircle (zero area).
///
/// Not a length: callers must check for it before treating a radius as
/// physical.
pub const DEGENERATE_RADIUS: f64 = -99.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// The three vertices of a triangle are colinear or coincide.
  CoLinearViolation,
  /// A triangle refers to a vertex that does not exist.
  VertexOutOfBounds { triangle: usize, vertex: usize },
  /// A triangle index that does not exist.
  TriangleOutOfBounds { triangle: usize },
  /// The circumcircle overflowed the scalar type.
  NonFiniteCircumcircle,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::CoLinearViolation => write!(
        f,
        "Two or more points are colinear and no valid solution exists"
      ),
      Error::VertexOutOfBounds { triangle, vertex } => write!(
        f,
        "Triangle {} refers to missing vertex {}",
        triangle, vertex
      ),
      Error::TriangleOutOfBounds { triangle } => {
        write!(f, "Triangle {} does not exist", triangle)
      }
      Error::NonFiniteCircumcircle => write!(
        f,
        "Circumcircle is not finite in this scalar type"
      ),
    }
  }
}

impl std::error::Error for Error {}

pub trait GeometryScalar: Float + Into<f64> + std::fmt::Debug {
  fn from_constant(val: i8) -> Self;

  /// [`DEGENERATE_RADIUS`] in this scalar type.
  fn degenerate_radius() -> Self {
    Self::from_constant(DEGENERATE_RADIUS as i8)
  }
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl GeometryScalar for $ty {
        fn from_constant(val: i8) -> Self {
          <$ty as From<i8>>::from(val)
        }
      }
    )*
  };
}

floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;
