//! .
//!
//! Library operations fail with [`Error`]; the binary and the tests work in `anyhow::Result`.

use crate::color::Color;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
  /// `R + G + B = 0`, so the barycentric weights are undefined.
  #[error("cannot project {0}: channel sum is zero")]
  DegenerateColor(Color),
  #[error("scheduler period must be positive, got {0}ms")]
  InvalidPeriod(u64),
  #[error("failed to spawn the scheduler thread: {0}")]
  Spawn(String),
  #[error("viewport must be finite and positive, got {width}x{height}")]
  InvalidViewport { width: f64, height: f64 }
}
