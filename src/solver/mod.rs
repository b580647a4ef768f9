pub mod neighbor;
pub use neighbor::{nearest, links, Neighbor, Link};

pub mod equilibrator;
pub use equilibrator::{Equilibrator, Pass, Replacement};
