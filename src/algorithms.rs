pub mod circumcircle;
pub mod measures;
pub mod natural_neighbors;

#[doc(inline)]
pub use circumcircle::{
  checked_circumcenter, circumcenter, circumcircle_radius, circumcircle_radius_squared,
  circumcircle_radius_with, RadiusStrategy,
};

#[doc(inline)]
pub use measures::{area, distance, squared_distance, squared_distance_coords};

#[doc(inline)]
pub use natural_neighbors::{find_local_boundary, find_natural_neighbors, NaturalNeighbors};
