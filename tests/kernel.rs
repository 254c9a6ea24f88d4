mod kernel {
  use natneighbor::algorithms::*;
  use natneighbor::data::*;
  use natneighbor::*;

  fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-4
  }

  #[test]
  fn equilateral() -> Result<(), Error> {
    let p0 = Point::new([0.0, 0.0]);
    let p1 = Point::new([1.0, 0.0]);
    let p2 = Point::new([0.5, 3.0_f64.sqrt() / 2.0]);
    assert!(close(area(&p0, &p1, &p2), 0.4330));
    let center = checked_circumcenter(&p0, &p1, &p2)?;
    assert!(close(center[0], 0.5));
    assert!(close(center[1], 0.2887));
    assert!(close(circumcircle_radius(&p0, &p1, &p2), 0.5774));
    Ok(())
  }

  #[test]
  fn right_triangle() -> Result<(), Error> {
    let tri: Triangle<f64> = Triangle::new([
      Point::new([0.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([0.0, 3.0]),
    ]);
    tri.validate()?;
    assert_eq!(tri.area(), 6.0);
    let circle = tri.circumcircle()?;
    // Midpoint of the hypotenuse.
    assert!((circle.center[0] - 2.0).abs() < 1e-12);
    assert!((circle.center[1] - 1.5).abs() < 1e-12);
    assert_eq!(circle.radius, 2.5);
    Ok(())
  }

  #[test]
  fn degenerate_diagonal() {
    let p0 = Point::new([0.0, 0.0]);
    let p1 = Point::new([1.0, 1.0]);
    let p2 = Point::new([2.0, 2.0]);
    assert_eq!(area(&p0, &p1, &p2), 0.0);
    assert_eq!(circumcircle_radius(&p0, &p1, &p2), DEGENERATE_RADIUS);
    assert!(!circumcircle_radius_with(RadiusStrategy::Heron, &p0, &p1, &p2).is_finite());
    assert!(!circumcenter(&p0, &p1, &p2).is_finite());
    assert_eq!(
      checked_circumcenter(&p0, &p1, &p2),
      Err(Error::CoLinearViolation)
    );
  }

  #[test]
  fn single_precision() {
    let p0 = Point::new([0.0_f32, 0.0]);
    let p1 = Point::new([4.0_f32, 0.0]);
    let p2 = Point::new([0.0_f32, 3.0]);
    assert_eq!(area(&p0, &p1, &p2), 6.0);
    assert_eq!(distance(&p1, &p2), 5.0);
    assert_eq!(circumcircle_radius(&p0, &p1, &p2), 2.5);
  }
}

mod natural_neighbors {
  use natneighbor::algorithms::*;
  use natneighbor::data::*;
  use natneighbor::*;

  use rand::{Rng, SeedableRng};

  // Fan triangulation of a regular hexagon around the origin.
  fn hexagon() -> (Vec<Point<f64, 2>>, Vec<[usize; 3]>) {
    let mut points = vec![Point::new([0.0, 0.0])];
    for i in 0..6_i32 {
      let angle = std::f64::consts::PI / 3.0 * f64::from(i);
      points.push(Point::new([angle.cos(), angle.sin()]));
    }
    let triangles = (0..6).map(|i| [0, i + 1, (i + 1) % 6 + 1]).collect();
    (points, triangles)
  }

  #[test]
  fn hexagon_membership() -> Result<(), Error> {
    let (points, triangles) = hexagon();
    let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
    let queries: Vec<Point<f64, 2>> = (0..200)
      .map(|_| Point::new([rng.gen_range(-1.2..1.2), rng.gen_range(-1.2..1.2)]))
      .collect();
    let nn = find_natural_neighbors(&points, &triangles, &queries)?;
    assert_eq!(nn.members.len(), queries.len());
    assert_eq!(nn.circumcircles.len(), triangles.len());
    for (pt, members) in queries.iter().zip(nn.members.iter()) {
      let inside = triangles
        .iter()
        .any(|&[a, b, c]| {
          TriangleView::new([&points[a], &points[b], &points[c]]).locate(pt)
            != PointLocation::Outside
        });
      if !inside {
        assert!(members.is_empty());
        continue;
      }
      // Any point inside the triangulation lies in the triangle that contains
      // it, hence in that triangle's circumcircle.
      assert!(!members.is_empty());
      for &t in members {
        let circle = nn.circumcircles[t].expect("hexagon triangles are not degenerate");
        assert!(circle.contains(pt));
      }
    }
    Ok(())
  }

  #[test]
  fn hexagon_boundary() -> Result<(), Error> {
    let (points, triangles) = hexagon();
    let all: Vec<usize> = (0..triangles.len()).collect();
    let mut edges = find_local_boundary(&triangles, &all)?;
    edges.sort_unstable();
    assert_eq!(edges, vec![(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 1)]);

    // Just right of the hub, only the two triangles on either side of the
    // x axis have circumcircles reaching the query point.
    let nn = find_natural_neighbors(&points, &triangles, &[Point::new([0.1, 0.0])])?;
    assert_eq!(nn.members[0], vec![0, 5]);
    let mut edges = find_local_boundary(&triangles, &nn.members[0])?;
    edges.sort_unstable();
    assert_eq!(edges, vec![(0, 6), (1, 2), (2, 0), (6, 1)]);
    Ok(())
  }
}
