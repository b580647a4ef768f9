use {
  anyhow::Result,
  clap::Parser,
  euclid::Size2D,
  palette_equilibrium::{config::Config, picker::ColorPicker},
  std::{io::BufRead, thread, time::Duration},
  tracing_subscriber::EnvFilter
};

#[derive(Parser)]
#[command(name = "palette-equilibrium")]
#[command(about = "Spread a palette of colors apart on the RGB triangle")]
struct Cli {
  /// Number of colors, the three primaries included
  #[arg(short, long, default_value_t = 100)]
  colors: usize,

  /// Milliseconds between two passes
  #[arg(short, long, default_value_t = 1000)]
  period: u64,

  /// Viewport width in pixels
  #[arg(long, default_value_t = 800.0)]
  width: f64,

  /// Viewport height in pixels
  #[arg(long, default_value_t = 800.0)]
  height: f64,

  /// Seed for the random colors
  #[arg(short, long)]
  seed: Option<u64>,

  /// Run this many passes right away and exit
  #[arg(long, conflicts_with = "duration")]
  passes: Option<usize>,

  /// Run the background passes for this many seconds and exit
  #[arg(short, long)]
  duration: Option<u64>
}

impl Cli {
  fn config(&self) -> Config {
    Config {
      period_ms: self.period,
      palette_size: self.colors,
      viewport: Size2D::new(self.width, self.height),
      seed: self.seed
    }
  }
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  let mut picker = ColorPicker::new(cli.config())?;

  match (cli.passes, cli.duration) {
    (Some(passes), _) => {
      for i in 0..passes {
        let pass = picker.equilibrate();
        tracing::info!(pass = i, moved = pass.replacements.len(), "equilibrate");
        if !pass.changed() {
          break;
        }
      }
    }
    (None, Some(seconds)) => {
      picker.start()?;
      thread::sleep(Duration::from_secs(seconds));
      picker.stop();
    }
    (None, None) => {
      picker.start()?;
      eprintln!("Press '+' or '-' then enter to change speed, end input to quit.");
      for line in std::io::stdin().lock().lines() {
        for key in line?.chars() {
          picker.handle_key(key)?;
        }
      }
      picker.stop();
    }
  }

  for link in picker.links() {
    println!("{}\t{}", link.color, link.label());
  }
  Ok(())
}
