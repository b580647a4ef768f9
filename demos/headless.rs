use {
  palette_equilibrium::{
    config::Config,
    picker::ColorPicker
  },
  anyhow::Result
};

/// 50 colors, settled synchronously, then the smallest gap in the palette.
fn main() -> Result<()> {
  let picker = ColorPicker::new(Config {
    palette_size: 50,
    seed: Some(0),
    ..Default::default()
  })?;

  let gap = |picker: &ColorPicker| picker.links().iter()
    .map(|link| link.neighbor.distance)
    .fold(f64::MAX, f64::min);

  println!("smallest gap before: {:.2}px", gap(&picker));
  for i in 0..1000 {
    if !picker.equilibrate().changed() {
      println!("fixed point after {} passes", i + 1);
      break;
    }
  }
  println!("smallest gap after: {:.2}px", gap(&picker));

  picker.links().iter()
    .for_each(|link| println!("{} -> {} ({}px)", link.color, link.neighbor.color, link.label()));
  Ok(())
}
