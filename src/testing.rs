// This module contains strategies for:
//  * points
//  * triangles
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Point, Triangle};
use crate::Orientation;

use proptest::prelude::*;

const GRID: i32 = 100;

/// Integer coordinates in `[-100, 100]`. Every product and sum the kernel
/// forms from these is exact in `f64`.
pub fn any_grid() -> impl Strategy<Value = [f64; 2]> {
  (-GRID..=GRID, -GRID..=GRID).prop_map(|(x, y)| [f64::from(x), f64::from(y)])
}

pub fn any_grid_point() -> impl Strategy<Value = Point<f64, 2>> {
  any_grid().prop_map(Point::new)
}

/// Arbitrary finite coordinates, small enough that squared distances between
/// them never overflow.
pub fn any_finite() -> impl Strategy<Value = Point<f64, 2>> {
  (-1e6..1e6_f64, -1e6..1e6_f64).prop_map(|(x, y)| Point::new([x, y]))
}

/// Grid triangles, degenerate ones included.
pub fn any_grid_triangle() -> impl Strategy<Value = Triangle<f64>> {
  (any_grid_point(), any_grid_point(), any_grid_point())
    .prop_map(|(a, b, c)| Triangle::new([a, b, c]))
}

/// Counter-clockwise grid triangles whose height over the longest side is at
/// least a tenth of that side.
pub fn any_fat_triangle() -> impl Strategy<Value = [Point<f64, 2>; 3]> {
  (any_grid_point(), any_grid_point(), any_grid_point())
    .prop_filter("thin or degenerate triangle", |(a, b, c)| {
      let twice_area = Triangle::new([*a, *b, *c]).view().signed_area_2x().abs();
      let longest = a
        .squared_euclidean_distance(b)
        .max(b.squared_euclidean_distance(c))
        .max(c.squared_euclidean_distance(a));
      longest > 0.0 && twice_area * 10.0 >= longest
    })
    .prop_map(|(a, b, c)| match Orientation::new(&a, &b, &c) {
      Orientation::ClockWise => [a, c, b],
      _ => [a, b, c],
    })
}
