use {
  crate::color::Color,
  parking_lot::RwLock
};

/// Ordered set of colors shared between the equilibrium task and its readers.
///
/// Every read copies the whole sequence, and every write holds the lock for exactly one
/// insertion or replacement, so a reader never observes a half-updated entry.
#[derive(Debug, Default)]
pub struct Palette {
  colors: RwLock<Vec<Color>>
}

impl Palette {
  pub fn new() -> Self {
    Self::default()
  }

  /// Blue, red and green anchors, in this order.
  pub fn with_primaries() -> Self {
    let palette = Self::new();
    [Color::BLUE, Color::RED, Color::GREEN].into_iter()
      .for_each(|c| { palette.add(c); });
    palette
  }

  /// Append `color`. Returns `false`, leaving the palette untouched, if it is already present.
  pub fn add(&self, color: Color) -> bool {
    let mut colors = self.colors.write();
    if colors.contains(&color) {
      return false;
    }
    colors.push(color);
    true
  }

  /// Overwrite the entry at `index`. Refused when `index` is out of range, or when `color`
  /// is already held by another entry.
  pub fn replace(&self, index: usize, color: Color) -> bool {
    let mut colors = self.colors.write();
    if index >= colors.len() {
      return false;
    }
    if colors.iter().enumerate().any(|(i, c)| i != index && *c == color) {
      return false;
    }
    colors[index] = color;
    true
  }

  pub fn get(&self, index: usize) -> Option<Color> {
    self.colors.read().get(index).copied()
  }

  pub fn contains(&self, color: Color) -> bool {
    self.colors.read().contains(&color)
  }

  pub fn snapshot(&self) -> Vec<Color> {
    self.colors.read().clone()
  }

  pub fn len(&self) -> usize {
    self.colors.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.colors.read().is_empty()
  }
}

impl FromIterator<Color> for Palette {
  fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
    let palette = Palette::new();
    iter.into_iter().for_each(|c| { palette.add(c); });
    palette
  }
}
