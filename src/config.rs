use {
  crate::{
    geometry::PixelSpace,
    scheduler::DEFAULT_PERIOD_MS
  },
  anyhow::{bail, Result},
  euclid::Size2D
};

/// Largest palette accepted. Random fills draw from far fewer distinct bright colors than
/// `u8` channels allow, so the palette size needs a bound for filling to terminate.
pub const MAX_PALETTE_SIZE: usize = 65_536;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
  /// Milliseconds between two passes.
  pub period_ms: u64,
  /// Number of colors, the three anchors included.
  pub palette_size: usize,
  pub viewport: Size2D<f64, PixelSpace>,
  /// Seed of the random color generator. Fresh entropy when `None`.
  pub seed: Option<u64>
}

impl Default for Config {
  fn default() -> Self {
    Config {
      period_ms: DEFAULT_PERIOD_MS,
      palette_size: 100,
      viewport: Size2D::new(800.0, 800.0),
      seed: None
    }}}

impl Config {
  pub fn validate(&self) -> Result<()> {
    if self.period_ms == 0 {
      bail!("period must be at least 1ms")
    }
    if self.palette_size < 3 {
      bail!("palette must hold at least the three primaries, got {} colors", self.palette_size)
    }
    if self.palette_size > MAX_PALETTE_SIZE {
      bail!("palette holds at most {} colors, got {}", MAX_PALETTE_SIZE, self.palette_size)
    }
    let Size2D { width, height, .. } = self.viewport;
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
      bail!("viewport must be positive, got {}x{}", width, height)
    }
    Ok(())
  }
}
