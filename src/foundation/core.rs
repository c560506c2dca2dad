use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{StudioError, StudioResult};

/// Artistic complexity level requested from the path oracle, always in `1..=10`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Complexity(u8);

impl Complexity {
    /// Lowest complexity level.
    pub const MIN: Complexity = Complexity(1);
    /// Highest complexity level.
    pub const MAX: Complexity = Complexity(10);
    /// Default level selected for a fresh session.
    pub const DEFAULT: Complexity = Complexity(5);

    /// Create a validated complexity level.
    pub fn new(level: u8) -> StudioResult<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&level) {
            return Err(StudioError::validation(format!(
                "complexity must be in 1..=10, got {level}"
            )));
        }
        Ok(Self(level))
    }

    /// Raw level value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Reveal-speed tier of this level.
    pub fn tier(self) -> ComplexityTier {
        match self.0 {
            0..=4 => ComplexityTier::Low,
            5..=8 => ComplexityTier::Mid,
            _ => ComplexityTier::High,
        }
    }

    /// Every level in ascending order.
    pub fn all() -> impl DoubleEndedIterator<Item = Complexity> {
        (Self::MIN.0..=Self::MAX.0).map(Complexity)
    }
}

impl Default for Complexity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Complexity {
    type Error = StudioError;

    fn try_from(value: u8) -> StudioResult<Self> {
        Self::new(value)
    }
}

impl From<Complexity> for u8 {
    fn from(value: Complexity) -> Self {
        value.0
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse grouping of complexity levels that selects the reveal speed.
///
/// Denser paths (higher tiers) are revealed with a smaller per-tick increment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComplexityTier {
    /// Levels 1 to 4.
    Low,
    /// Levels 5 to 8.
    Mid,
    /// Levels 9 and 10.
    High,
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> StudioResult<Self> {
        if den == 0 {
            return Err(StudioError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(StudioError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Reject empty canvases.
    pub fn validate(self) -> StudioResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(StudioError::validation(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Opaque sRGB color, serialized as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional, case-insensitive).
    pub fn from_hex(s: &str) -> StudioResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> StudioResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| StudioError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        if !s.is_ascii() {
            return Err(StudioError::validation("hex color must be ascii"));
        }

        match s.len() {
            3 => {
                let mut ch = [0u8; 3];
                for (i, c) in s.chars().enumerate() {
                    let v = hex_byte(&c.to_string())?;
                    ch[i] = v * 17;
                }
                Ok(Self::new(ch[0], ch[1], ch[2]))
            }
            6 => Ok(Self::new(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
            )),
            _ => Err(StudioError::validation(
                "hex color must be #RGB or #RRGGBB (case-insensitive)",
            )),
        }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb8 {
    type Err = StudioError;

    fn from_str(s: &str) -> StudioResult<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = StudioError;

    fn try_from(value: String) -> StudioResult<Self> {
        Self::from_hex(&value)
    }
}

impl From<Rgb8> for String {
    fn from(value: Rgb8) -> Self {
        value.to_hex()
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
