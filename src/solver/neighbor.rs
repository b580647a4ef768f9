use {
  crate::{
    color::Color,
    error::Result,
    geometry::{self, P2, TriangleGeometry}
  },
  rayon::prelude::*
};

/// Closest other entry of a palette.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor {
  pub index: usize,
  pub color: Color,
  pub point: P2,
  pub distance: f64
}

/// A palette entry linked to its nearest neighbor, as drawn on screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
  pub index: usize,
  pub color: Color,
  pub point: P2,
  pub neighbor: Neighbor
}

impl Link {
  /// Pixel distance rounded to the nearest integer.
  pub fn label(&self) -> u64 {
    self.neighbor.distance.round() as u64
  }
}

/// Projection of every entry, `None` where the color is degenerate.
pub fn project_all(colors: &[Color], geometry: &TriangleGeometry) -> Vec<Option<P2>> {
  colors.par_iter()
    .map(|&color| geometry::project(color, geometry).ok())
    .collect()
}

/// Nearest entry to `colors[index]`, excluding position `index` itself.
///
/// Ties go to the lowest index. Degenerate entries are never returned. `Ok(None)` when no
/// other projectable entry exists or `index` is out of range.
pub fn nearest(index: usize, colors: &[Color], geometry: &TriangleGeometry) -> Result<Option<Neighbor>> {
  let Some(&color) = colors.get(index) else {
    return Ok(None);
  };
  let origin = geometry::project(color, geometry)?;
  Ok(nearest_projected(index, origin, colors, &project_all(colors, geometry)))
}

fn nearest_projected(index: usize, origin: P2, colors: &[Color], points: &[Option<P2>]) -> Option<Neighbor> {
  points.iter()
    .zip(colors)
    .enumerate()
    .filter(|(i, _)| *i != index)
    .filter_map(|(i, (&point, &color))| point.map(|point| Neighbor {
      index: i,
      color,
      point,
      distance: origin.distance_to(point)
    }))
    .fold(None, |best: Option<Neighbor>, candidate| match best {
      Some(best) if best.distance <= candidate.distance => Some(best),
      _ => Some(candidate)
    })
}

/// Every projectable entry with its nearest neighbor. Entries without one are left out.
pub fn links(colors: &[Color], geometry: &TriangleGeometry) -> Vec<Link> {
  let points = project_all(colors, geometry);
  (0..colors.len()).into_par_iter()
    .filter_map(|index| {
      let point = points[index]?;
      let neighbor = nearest_projected(index, point, colors, &points)?;
      Some(Link { index, color: colors[index], point, neighbor })
    })
    .collect()
}
