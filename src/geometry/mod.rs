//! .
//!
//! The origin of coordinate system is in top-left corner, `y` grows downwards. Colors are placed
//! inside an equilateral triangle whose corners are the primaries, at the point given by their
//! barycentric coordinates.

use {
  crate::{
    color::Color,
    error::{Error, Result}
  },
  euclid::Point2D
};

pub mod triangle;
pub use triangle::{Orientation, TriangleGeometry};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub type P2 = Point2D<f64, PixelSpace>;

/// Channel shares `[λr, λg, λb]` of a color. They sum to 1.
pub fn barycentric(color: Color) -> Result<[f64; 3]> {
  let sum = color.sum();
  if sum == 0 {
    return Err(Error::DegenerateColor(color));
  }
  let sum = sum as f64;
  Ok(color.channels().map(|c| c as f64 / sum))
}

/// Position of `color` inside the triangle.
pub fn project(color: Color, geometry: &TriangleGeometry) -> Result<P2> {
  let [λr, λg, λb] = barycentric(color)?;
  let [red, green, blue] = geometry.corners();
  Ok(Point2D::new(
    λr * red.x + λg * green.x + λb * blue.x,
    λr * red.y + λg * green.y + λb * blue.y
  ))
}

/// Euclidean distance between the projections of two colors.
pub fn distance(c0: Color, c1: Color, geometry: &TriangleGeometry) -> Result<f64> {
  Ok(project(c0, geometry)?.distance_to(project(c1, geometry)?))
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::color::Primary,
    rand::prelude::*
  };

  #[test] fn primaries_hit_corners() {
    for geometry in [TriangleGeometry::new(800, 800), TriangleGeometry::new(1000, 400)] {
      for primary in Primary::ALL {
        assert_eq!(project(primary.color(), &geometry), Ok(geometry.corner(primary)));
      }
    }
  }

  #[test] fn weights_sum_to_one() {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
    for _ in 0..10_000 {
      let color = Color::new(rng.gen(), rng.gen(), rng.gen());
      if color.sum() == 0 { continue; }
      let weights = barycentric(color).unwrap();
      assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-12, "{color}");
    }
  }

  #[test] fn grays_meet_at_centroid() {
    let geometry = TriangleGeometry::new(800, 800);
    let centroid = geometry.centroid();
    for v in [1, 10, 128, 255] {
      let p = project(Color::new(v, v, v), &geometry).unwrap();
      assert!(p.distance_to(centroid) < 1e-9);
    }
  }

  #[test] fn black_is_rejected() {
    let geometry = TriangleGeometry::new(800, 800);
    assert_eq!(barycentric(Color::BLACK), Err(Error::DegenerateColor(Color::BLACK)));
    assert_eq!(project(Color::BLACK, &geometry), Err(Error::DegenerateColor(Color::BLACK)));
    assert!(distance(Color::RED, Color::BLACK, &geometry).is_err());
  }

  #[test] fn midpoint_of_an_edge() {
    let geometry = TriangleGeometry::new(800, 800);
    let p = project(Color::new(100, 0, 100), &geometry).unwrap();
    let red = geometry.corner(Primary::Red);
    let blue = geometry.corner(Primary::Blue);
    assert!(p.distance_to(red.lerp(blue, 0.5)) < 1e-9);
    assert!((distance(Color::RED, Color::BLUE, &geometry).unwrap() - 800.0).abs() < 1e-9);
  }
}
