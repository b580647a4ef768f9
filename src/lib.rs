//! Spread a palette of colors as far apart from each other as possible.
//!
//! Every color is placed inside an equilateral triangle whose corners are pure red, green and
//! blue, at the point given by its channel shares (its barycentric coordinates). The
//! [`Equilibrator`](solver::Equilibrator) then walks the palette and moves each color by one
//! channel unit away from its nearest neighbor, whenever that increases the distance between
//! them. Run repeatedly by a [`Scheduler`](scheduler::Scheduler), this slowly pushes the colors
//! apart until no single step helps anymore, or until they start to oscillate.
//!
//! The three primaries are anchors: they are never moved.
//!
//! # Basic usage
//! ```
//! use palette_equilibrium::{
//!   color::Color,
//!   geometry::TriangleGeometry,
//!   palette::Palette,
//!   solver::{self, Equilibrator}
//! };
//!
//! let geometry = TriangleGeometry::new(800, 800);
//! let palette = Palette::with_primaries();
//! palette.add(Color::new(10, 10, 235));
//!
//! // (10, 10, 235) sits right next to the blue corner
//! let nearest = solver::nearest(3, &palette.snapshot(), &geometry).unwrap().unwrap();
//! assert_eq!(nearest.color, Color::BLUE);
//!
//! let pass = Equilibrator::new().step_once(&palette, &geometry);
//! assert_eq!(palette.get(3), Some(Color::new(11, 10, 235)));
//! assert!(pass.replacements[0].after > pass.replacements[0].before);
//! ```
//!
//! For an application, [`ColorPicker`](picker::ColorPicker) bundles the palette, its triangle
//! and the background scheduler:
//! ```no_run
//! # use palette_equilibrium::{config::Config, picker::ColorPicker};
//! # fn main() -> anyhow::Result<()> {
//! let mut picker = ColorPicker::new(Config::default())?;
//! picker.start()?;
//! picker.handle_key('-')?; // twice as fast
//! std::thread::sleep(std::time::Duration::from_secs(10));
//! picker.stop();
//! for link in picker.links() {
//!   println!("{} -> {}: {}px", link.color, link.neighbor.color, link.label());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod color;
pub mod geometry;
pub mod palette;
pub mod solver;
pub mod scheduler;
pub mod config;
pub mod picker;
