use {
  super::{P2, PixelSpace},
  crate::{
    color::Primary,
    error::{Error, Result}
  },
  euclid::{Point2D, Size2D},
  num_traits::NumCast
};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
  /// Full viewport width is used, with margins on top and bottom.
  Portrait,
  /// Full viewport height is used, with margins on the sides.
  Landscape
}

impl Orientation {
  /// Portrait iff a triangle as wide as the viewport still fits in its height.
  pub fn of(viewport: Size2D<f64, PixelSpace>) -> Self {
    if viewport.height >= viewport.width * SQRT_3 / 2.0 {
      Orientation::Portrait
    } else {
      Orientation::Landscape
    }
  }
}

/// Corners of the largest equilateral triangle centered in a viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TriangleGeometry {
  pub red: P2,
  pub green: P2,
  pub blue: P2,
  viewport: Size2D<f64, PixelSpace>,
  orientation: Orientation
}

impl TriangleGeometry {
  pub fn new<T: NumCast + Copy>(width: T, height: T) -> Self {
    Self::from_viewport(Size2D::new(width, height).cast())
  }

  /// Same as [`TriangleGeometry::new`], rejecting empty or non-finite viewports.
  pub fn try_new<T: NumCast + Copy>(width: T, height: T) -> Result<Self> {
    let viewport: Size2D<f64, PixelSpace> = Size2D::new(width, height).cast();
    let valid = [viewport.width, viewport.height].iter()
      .all(|v| v.is_finite() && *v > 0.0);
    if !valid {
      return Err(Error::InvalidViewport { width: viewport.width, height: viewport.height });
    }
    Ok(Self::from_viewport(viewport))
  }

  pub fn from_viewport(viewport: Size2D<f64, PixelSpace>) -> Self {
    let Size2D { width, height, .. } = viewport;
    let orientation = Orientation::of(viewport);
    let (red, green, blue) = match orientation {
      Orientation::Portrait => {
        let h = width * SQRT_3 / 2.0;
        let center_y = height / 2.0;
        (
          Point2D::new(0.0, center_y + h / 2.0),
          Point2D::new(width / 2.0, center_y - h / 2.0),
          Point2D::new(width, center_y + h / 2.0)
        )
      }
      Orientation::Landscape => {
        let w = height * 2.0 / SQRT_3;
        let center_x = width / 2.0;
        (
          Point2D::new(center_x - w / 2.0, height),
          Point2D::new(center_x, 0.0),
          Point2D::new(center_x + w / 2.0, height)
        )
      }
    };
    Self { red, green, blue, viewport, orientation }
  }

  pub fn viewport(&self) -> Size2D<f64, PixelSpace> {
    self.viewport
  }

  pub fn orientation(&self) -> Orientation {
    self.orientation
  }

  pub fn corner(&self, primary: Primary) -> P2 {
    match primary {
      Primary::Red => self.red,
      Primary::Green => self.green,
      Primary::Blue => self.blue
    }
  }

  /// `[red, green, blue]`
  pub fn corners(&self) -> [P2; 3] {
    [self.red, self.green, self.blue]
  }

  pub fn centroid(&self) -> P2 {
    ((self.red.to_vector() + self.green.to_vector() + self.blue.to_vector()) / 3.0).to_point()
  }

  pub fn side(&self) -> f64 {
    self.red.distance_to(self.blue)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn assert_close(a: P2, b: P2) {
    assert!(a.distance_to(b) < 1e-9, "{:?} != {:?}", a, b);
  }

  #[test] fn portrait() {
    let geometry = TriangleGeometry::new(800, 1000);
    assert_eq!(geometry.orientation(), Orientation::Portrait);
    let h = 800.0 * SQRT_3 / 2.0;
    assert_close(geometry.red, Point2D::new(0.0, 500.0 + h / 2.0));
    assert_close(geometry.green, Point2D::new(400.0, 500.0 - h / 2.0));
    assert_close(geometry.blue, Point2D::new(800.0, 500.0 + h / 2.0));
  }

  #[test] fn landscape() {
    let geometry = TriangleGeometry::new(1200, 600);
    assert_eq!(geometry.orientation(), Orientation::Landscape);
    let w = 600.0 * 2.0 / SQRT_3;
    assert_close(geometry.red, Point2D::new(600.0 - w / 2.0, 600.0));
    assert_close(geometry.green, Point2D::new(600.0, 0.0));
    assert_close(geometry.blue, Point2D::new(600.0 + w / 2.0, 600.0));
  }

  #[test] fn equilateral_in_both_orientations() {
    for geometry in [TriangleGeometry::new(800, 800), TriangleGeometry::new(1000, 300)] {
      let side = geometry.side();
      assert!((geometry.red.distance_to(geometry.green) - side).abs() < 1e-9);
      assert!((geometry.green.distance_to(geometry.blue) - side).abs() < 1e-9);
    }
  }

  #[test] fn orientation_threshold() {
    // 1000 * √3 / 2 ≈ 866.03
    assert_eq!(TriangleGeometry::new(1000.0, 866.1).orientation(), Orientation::Portrait);
    assert_eq!(TriangleGeometry::new(1000.0, 866.0).orientation(), Orientation::Landscape);
  }

  #[test] fn fits_in_viewport() {
    for (w, h) in [(800, 800), (1000, 866), (1000, 867), (300, 1200), (1600, 200)] {
      let geometry = TriangleGeometry::new(w, h);
      for corner in geometry.corners() {
        assert!(corner.x >= -1e-9 && corner.x <= w as f64 + 1e-9, "{w}x{h}: {corner:?}");
        assert!(corner.y >= -1e-9 && corner.y <= h as f64 + 1e-9, "{w}x{h}: {corner:?}");
      }
    }
  }

  #[test] fn invalid_viewport() {
    assert!(TriangleGeometry::try_new(0, 100).is_err());
    assert!(TriangleGeometry::try_new(f64::NAN, 100.0).is_err());
    assert!(TriangleGeometry::try_new(-5.0, 100.0).is_err());
    assert_eq!(TriangleGeometry::try_new(800, 600), Ok(TriangleGeometry::new(800, 600)));
  }
}
