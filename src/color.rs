use {
  itertools::iproduct,
  rand::Rng,
  std::fmt
};

/// Random colors darker than this channel sum are brightened until they reach it.
pub const MIN_RANDOM_SUM: u16 = 252;

/// An RGB triple. Channels are bytes, so every value is a valid color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8
}

/// One of the three primaries. Doubles as a channel selector and as a triangle corner label.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Primary {
  Red,
  Green,
  Blue
}

/// Direction of a single unit change on one channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Nudge {
  Up,
  Down
}

impl Primary {
  pub const ALL: [Primary; 3] = [Primary::Red, Primary::Green, Primary::Blue];

  pub fn color(self) -> Color {
    match self {
      Primary::Red => Color::RED,
      Primary::Green => Color::GREEN,
      Primary::Blue => Color::BLUE
    }
  }
}

impl Color {
  pub const BLACK: Color = Color::new(0, 0, 0);
  pub const RED: Color = Color::new(255, 0, 0);
  pub const GREEN: Color = Color::new(0, 255, 0);
  pub const BLUE: Color = Color::new(0, 0, 255);

  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }

  pub fn channel(&self, channel: Primary) -> u8 {
    match channel {
      Primary::Red => self.r,
      Primary::Green => self.g,
      Primary::Blue => self.b
    }
  }

  pub fn channels(&self) -> [u8; 3] {
    [self.r, self.g, self.b]
  }

  pub fn sum(&self) -> u32 {
    self.r as u32 + self.g as u32 + self.b as u32
  }

  /// Exactly pure red, green or blue.
  pub fn is_primary(&self) -> bool {
    Primary::ALL.iter().any(|p| p.color() == *self)
  }

  /// `self` with `channel` moved by one unit, or `None` when that would leave `[0, 255]`.
  pub fn nudge(self, channel: Primary, nudge: Nudge) -> Option<Self> {
    let value = self.channel(channel);
    let value = match nudge {
      Nudge::Up => value.checked_add(1)?,
      Nudge::Down => value.checked_sub(1)?
    };
    let mut color = self;
    match channel {
      Primary::Red => color.r = value,
      Primary::Green => color.g = value,
      Primary::Blue => color.b = value
    }
    Some(color)
  }

  /// All single unit changes of `self`, in the order R+, G+, B+, R-, G-, B-.
  /// Channels already at a bound contribute no candidate in that direction.
  pub fn nudges(self) -> impl Iterator<Item = Color> {
    iproduct!([Nudge::Up, Nudge::Down], Primary::ALL)
      .filter_map(move |(nudge, channel)| self.nudge(channel, nudge))
  }

  /// Uniform color in `[0, 254]³`, brightened by incrementing every channel until
  /// `R + G + B >= MIN_RANDOM_SUM`.
  pub fn random(rng: &mut impl Rng) -> Self {
    let mut channels: [u16; 3] = [
      rng.gen_range(0..255),
      rng.gen_range(0..255),
      rng.gen_range(0..255)
    ];
    while channels.iter().sum::<u16>() < MIN_RANDOM_SUM {
      channels.iter_mut().for_each(|c| *c += 1);
    }
    // no channel ends above 254
    let [r, g, b] = channels.map(|c| c as u8);
    Self { r, g, b }
  }
}

impl From<[u8; 3]> for Color {
  fn from([r, g, b]: [u8; 3]) -> Self {
    Self { r, g, b }
  }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
  }
}
