use {
  crate::{
    color::Color,
    config::{Config, MAX_PALETTE_SIZE},
    error::Result,
    geometry::TriangleGeometry,
    palette::Palette,
    scheduler::{Command, Scheduler},
    solver::{self, Equilibrator, Link, Pass}
  },
  parking_lot::RwLock,
  rand::SeedableRng,
  rand_pcg::Pcg64,
  std::sync::Arc,
  tracing::{debug, info}
};

/// A palette spreading itself out in the background.
///
/// Owns the palette, the triangle it is projected on, and the scheduler running the
/// equilibrium passes. The palette starts with the blue, red and green anchors.
pub struct ColorPicker {
  palette: Arc<Palette>,
  geometry: Arc<RwLock<TriangleGeometry>>,
  equilibrator: Arc<Equilibrator>,
  scheduler: Scheduler,
  rng: Pcg64,
  config: Config
}

impl ColorPicker {
  /// Anchors plus random colors up to `config.palette_size`. Nothing runs until [`start`](Self::start).
  pub fn new(config: Config) -> anyhow::Result<Self> {
    config.validate()?;
    let palette = Arc::new(Palette::with_primaries());
    let geometry = Arc::new(RwLock::new(TriangleGeometry::from_viewport(config.viewport)));
    let equilibrator = Arc::new(Equilibrator::new());

    let scheduler = {
      let (palette, geometry, equilibrator) = (palette.clone(), geometry.clone(), equilibrator.clone());
      Scheduler::new(move || {
        let geometry = *geometry.read();
        let pass = equilibrator.step_once(&palette, &geometry);
        debug!(moved = pass.replacements.len(), colors = palette.len(), "equilibrate");
      })
    };
    let rng = match config.seed {
      Some(seed) => Pcg64::seed_from_u64(seed),
      None => Pcg64::from_entropy()
    };

    let mut picker = Self { palette, geometry, equilibrator, scheduler, rng, config };
    picker.fill_random(config.palette_size);
    Ok(picker)
  }

  pub fn palette(&self) -> &Arc<Palette> {
    &self.palette
  }

  pub fn geometry(&self) -> TriangleGeometry {
    *self.geometry.read()
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Recompute the triangle for a new viewport. The next pass uses it.
  pub fn resize(&self, width: f64, height: f64) -> Result<TriangleGeometry> {
    let geometry = TriangleGeometry::try_new(width, height)?;
    *self.geometry.write() = geometry;
    debug!(width, height, orientation = ?geometry.orientation(), "resized");
    Ok(geometry)
  }

  /// Add one random bright color. `false` if it was already in the palette.
  pub fn add_random(&mut self) -> bool {
    self.palette.add(Color::random(&mut self.rng))
  }

  /// Add random colors until the palette holds `target` entries, at most
  /// [`MAX_PALETTE_SIZE`]. Returns how many were added.
  pub fn fill_random(&mut self, target: usize) -> usize {
    let target = target.min(MAX_PALETTE_SIZE);
    let mut added = 0;
    while self.palette.len() < target {
      if self.add_random() {
        added += 1;
      }
    }
    added
  }

  /// Run one pass right now.
  pub fn equilibrate(&self) -> Pass {
    self.equilibrator.step_once(&self.palette, &self.geometry())
  }

  /// Every color linked to its nearest neighbor, for display.
  pub fn links(&self) -> Vec<Link> {
    solver::links(&self.palette.snapshot(), &self.geometry())
  }

  /// Start the periodic passes at the configured period.
  pub fn start(&mut self) -> Result<()> {
    self.scheduler.start(self.config.period_ms)?;
    info!(period = self.config.period_ms, colors = self.palette.len(), "equilibrium started");
    Ok(())
  }

  pub fn stop(&mut self) {
    self.scheduler.stop();
  }

  pub fn is_running(&self) -> bool {
    self.scheduler.is_running()
  }

  pub fn period(&self) -> u64 {
    self.scheduler.period()
  }

  /// Apply the speed command bound to `key`, if any.
  pub fn handle_key(&mut self, key: char) -> Result<Option<Command>> {
    let command = Command::from_key(key);
    match command {
      Some(command) => self.scheduler.apply(command)?,
      None => info!("press '+' or '-' to change speed")
    }
    Ok(command)
  }
}
