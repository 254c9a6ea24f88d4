mod circle;
pub(crate) mod point;
mod triangle;
mod vector;

pub use circle::Circle;
pub use point::Point;
pub use triangle::*;
pub use vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
