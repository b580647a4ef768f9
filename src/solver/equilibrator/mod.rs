use {
  crate::{
    color::Color,
    geometry::{self, TriangleGeometry},
    palette::Palette,
    solver::neighbor::{self, Neighbor}
  },
  parking_lot::Mutex,
  tracing::{debug, trace}
};


/// Candidates closer than this to the running best count as a tie, which the earlier one wins.
/// The baseline itself is compared exactly.
pub const TIE_TOLERANCE: f64 = 1e-9;

/// One accepted move of a pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Replacement {
  pub index: usize,
  pub from: Color,
  pub to: Color,
  /// Neighbor of `from` when the move was evaluated.
  pub neighbor: Neighbor,
  /// Distance from `from` to the neighbor.
  pub before: f64,
  /// Distance from `to` to the neighbor.
  pub after: f64
}

/// What a pass did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pass {
  pub replacements: Vec<Replacement>,
  pub anchors: usize,
  pub degenerate: usize
}

impl Pass {
  pub fn changed(&self) -> bool {
    !self.replacements.is_empty()
  }
}

/// Greedy unit-step hill climbing of every palette entry away from its nearest neighbor.
///
/// Passes on the same `Equilibrator` never overlap.
#[derive(Debug, Default)]
pub struct Equilibrator {
  pass_lock: Mutex<()>
}

impl Equilibrator {
  pub fn new() -> Self {
    Self::default()
  }

  /// Nudge every non-anchor entry one unit away from its nearest neighbor, in palette order.
  ///
  /// Each entry sees the replacements made earlier in the same pass. An entry is moved only
  /// if some nudge strictly increases its distance to the neighbor found for the unmoved
  /// color; black entries are skipped.
  pub fn step_once(&self, palette: &Palette, geometry: &TriangleGeometry) -> Pass {
    let _pass = self.pass_lock.lock();
    let mut pass = Pass::default();

    for index in 0.. {
      let colors = palette.snapshot();
      let Some(&from) = colors.get(index) else { break };

      if from.is_primary() {
        pass.anchors += 1;
        continue;
      }
      let neighbor = match neighbor::nearest(index, &colors, geometry) {
        Ok(Some(neighbor)) => neighbor,
        Ok(None) => continue,
        Err(err) => {
          debug!(index, %err, "skipping color");
          pass.degenerate += 1;
          continue;
        }
      };

      let candidates = from.nudges()
        .filter(|candidate| !colors.contains(candidate))
        .filter_map(|candidate| {
          let distance = geometry::project(candidate, geometry).ok()?
            .distance_to(neighbor.point);
          trace!(%from, %candidate, distance, "candidate");
          Some((candidate, distance))
        });

      let Some((to, after)) = farthest(neighbor.distance, candidates) else { continue };
      if palette.replace(index, to) {
        debug!(index, %from, %to, neighbor = %neighbor.color, before = neighbor.distance, after, "moved");
        pass.replacements.push(Replacement {
          index,
          from,
          to,
          neighbor,
          before: neighbor.distance,
          after
        });
      }
    }
    pass
  }

  /// Run passes until one changes nothing, at most `max_passes` times.
  /// Returns how many passes were run.
  pub fn settle(&self, palette: &Palette, geometry: &TriangleGeometry, max_passes: usize) -> usize {
    for i in 0..max_passes {
      if !self.step_once(palette, geometry).changed() {
        return i + 1;
      }
    }
    max_passes
  }
}

/// First candidate with the largest distance, if that distance strictly beats `baseline`.
pub fn farthest(baseline: f64, candidates: impl IntoIterator<Item = (Color, f64)>) -> Option<(Color, f64)> {
  candidates.into_iter()
    .fold(None, |best, (color, distance)| match best {
      None if distance > baseline => Some((color, distance)),
      Some((_, d)) if distance > d + TIE_TOLERANCE => Some((color, distance)),
      _ => best
    })
}
