//! Periodic execution of a job on a background thread.
//!
//! The job runs immediately on start, then once per period. The delay is measured from the end
//! of a run to the start of the next one, so runs never overlap and late ticks are dropped
//! rather than queued.

use {
  crate::error::{Error, Result},
  std::{
    sync::{mpsc::{self, RecvTimeoutError}, Arc},
    thread,
    time::Duration
  },
  tracing::{debug, info, warn}
};

pub const DEFAULT_PERIOD_MS: u64 = 1000;

type Job = Arc<dyn Fn() + Send + Sync>;

/// Speed change requested by the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
  /// Double the period.
  Slower,
  /// Halve the period.
  Faster
}

impl Command {
  /// `'+'` slows down, `'-'` speeds up. Any other key is not a command.
  pub fn from_key(key: char) -> Option<Self> {
    match key {
      '+' => Some(Command::Slower),
      '-' => Some(Command::Faster),
      _ => None
    }
  }
}

struct Ticker {
  stop: mpsc::Sender<()>,
  handle: thread::JoinHandle<()>
}

impl Ticker {
  fn spawn(job: Job, period: Duration) -> Result<Self> {
    let (stop, stopped) = mpsc::channel();
    let handle = thread::Builder::new()
      .name("equilibrium".into())
      .spawn(move || loop {
        job();
        match stopped.recv_timeout(period) {
          Err(RecvTimeoutError::Timeout) => continue,
          Ok(()) | Err(RecvTimeoutError::Disconnected) => break
        }
      })
      .map_err(|err| Error::Spawn(err.to_string()))?;
    Ok(Self { stop, handle })
  }

  /// Blocks until the thread exits, unless called from the job itself.
  fn cancel(self) {
    self.stop.send(()).ok();
    if self.handle.thread().id() == thread::current().id() {
      return;
    }
    if self.handle.join().is_err() {
      warn!("equilibrium task panicked");
    }
  }
}

/// Runs a job every `period` milliseconds, with at most one active task.
pub struct Scheduler {
  job: Job,
  period: u64,
  ticker: Option<Ticker>
}

impl Scheduler {
  pub fn new(job: impl Fn() + Send + Sync + 'static) -> Self {
    Self {
      job: Arc::new(job),
      period: DEFAULT_PERIOD_MS,
      ticker: None
    }
  }

  /// Current period, in milliseconds.
  pub fn period(&self) -> u64 {
    self.period
  }

  pub fn is_running(&self) -> bool {
    self.ticker.is_some()
  }

  /// (Re)start with `period_ms`. The first run happens right away.
  pub fn start(&mut self, period_ms: u64) -> Result<()> {
    if period_ms == 0 {
      return Err(Error::InvalidPeriod(period_ms));
    }
    self.period = period_ms;
    self.restart()
  }

  /// Double the period. Does nothing unless running.
  pub fn slower(&mut self) -> Result<()> {
    if !self.is_running() {
      return Ok(());
    }
    self.period = self.period.saturating_mul(2);
    info!(period = self.period, "slower");
    self.restart()
  }

  /// Halve the period, down to 1ms. Does nothing unless running.
  pub fn faster(&mut self) -> Result<()> {
    if !self.is_running() || self.period < 2 {
      return Ok(());
    }
    self.period /= 2;
    info!(period = self.period, "faster");
    self.restart()
  }

  pub fn apply(&mut self, command: Command) -> Result<()> {
    match command {
      Command::Slower => self.slower(),
      Command::Faster => self.faster()
    }
  }

  /// When this returns, the job is not running and will not run again.
  pub fn stop(&mut self) {
    if let Some(ticker) = self.ticker.take() {
      ticker.cancel();
      debug!("scheduler stopped");
    }
  }

  fn restart(&mut self) -> Result<()> {
    self.stop();
    self.ticker = Some(Ticker::spawn(self.job.clone(), Duration::from_millis(self.period))?);
    debug!(period = self.period, "scheduler started");
    Ok(())
  }
}

impl Drop for Scheduler {
  fn drop(&mut self) {
    self.stop();
  }
}
