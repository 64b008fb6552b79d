//! Colors and color specifiers

use std::str::FromStr;

use crate::error::ColorParseError;

/// Straight-alpha RGBA color with components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Default property cycle as `0xRRGGBB`, referenced as `"C0"`..`"C9"`
pub const DEFAULT_CYCLE: [u32; 10] = [
    0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd, 0x8c564b, 0xe377c2, 0x7f7f7f, 0xbcbd22,
    0x17becf,
];

const TAB_NAMES: [&str; 10] = [
    "blue", "orange", "green", "red", "purple", "brown", "pink", "gray", "olive", "cyan",
];

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 0.5, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    pub const ORANGE: Color = Color::rgb(1.0, 0.647, 0.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as u8;
        let g = ((hex >> 8) & 0xFF) as u8;
        let b = (hex & 0xFF) as u8;
        Self::rgb8(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Color `i` of the default property cycle, wrapping around
    pub fn cycle(i: usize) -> Self {
        Self::from_hex(DEFAULT_CYCLE[i % DEFAULT_CYCLE.len()])
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// RGBA bytes, clamped and rounded
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Linear interpolation between two colors
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }

    fn named(name: &str) -> Option<Self> {
        let color = match name {
            "b" | "blue" => Self::BLUE,
            "g" | "green" => Self::GREEN,
            "r" | "red" => Self::RED,
            "c" | "cyan" | "aqua" => Self::CYAN,
            "m" | "magenta" | "fuchsia" => Self::MAGENTA,
            "y" | "yellow" => Self::YELLOW,
            "k" | "black" => Self::BLACK,
            "w" | "white" => Self::WHITE,
            "orange" => Self::ORANGE,
            "gray" | "grey" => Self::GRAY,
            "purple" => Self::from_hex(0x800080),
            "navy" => Self::from_hex(0x000080),
            "teal" => Self::from_hex(0x008080),
            "none" | "transparent" => Self::TRANSPARENT,
            _ => {
                let tab = name.strip_prefix("tab:")?;
                let i = TAB_NAMES.iter().position(|n| *n == tab)?;
                Self::cycle(i)
            }
        };
        Some(color)
    }

    fn parse_hex(digits: &str) -> Option<Self> {
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            3 => {
                let mut rgb = [0u8; 3];
                for (slot, i) in rgb.iter_mut().zip(0..3) {
                    *slot = byte(&digits[i..i + 1])? * 17;
                }
                Some(Self::rgb8(rgb[0], rgb[1], rgb[2]))
            }
            6 | 8 => {
                let r = byte(&digits[0..2])?;
                let g = byte(&digits[2..4])?;
                let b = byte(&digits[4..6])?;
                let color = Self::rgb8(r, g, b);
                if digits.len() == 8 {
                    Some(color.with_alpha(byte(&digits[6..8])? as f32 / 255.0))
                } else {
                    Some(color)
                }
            }
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parse a color specifier
    ///
    /// Accepts names (`"red"`, `"k"`, `"tab:orange"`), hex strings
    /// (`"#f80"`, `"#ff8800"`, `"#ff880080"`) and cycle references (`"C3"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim().to_ascii_lowercase();
        let err = || ColorParseError(s.to_string());

        if let Some(digits) = spec.strip_prefix('#') {
            return Self::parse_hex(digits).ok_or_else(err);
        }
        if let Some(index) = spec.strip_prefix('c') {
            if !index.is_empty() && index.chars().all(|c| c.is_ascii_digit()) {
                let i: usize = index.parse().map_err(|_| err())?;
                return Ok(Self::cycle(i));
            }
        }
        Self::named(&spec).ok_or_else(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named() {
        assert_eq!("red".parse::<Color>().unwrap(), Color::RED);
        assert_eq!("k".parse::<Color>().unwrap(), Color::BLACK);
        assert_eq!(" White ".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("tab:orange".parse::<Color>().unwrap(), Color::cycle(1));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#ff0000".parse::<Color>().unwrap(), Color::RED);
        assert_eq!("#f00".parse::<Color>().unwrap(), Color::RED);

        let c: Color = "#0000ff80".parse().unwrap();
        assert_eq!(c.to_rgba8(), [0, 0, 255, 128]);
    }

    #[test]
    fn test_parse_cycle_reference() {
        assert_eq!("C0".parse::<Color>().unwrap(), Color::from_hex(0x1f77b4));
        assert_eq!("C12".parse::<Color>().unwrap(), Color::cycle(2));
        // "cyan" starts with 'c' but is a name
        assert_eq!("cyan".parse::<Color>().unwrap(), Color::CYAN);
    }

    #[test]
    fn test_parse_invalid() {
        assert!("#12".parse::<Color>().is_err());
        assert!("#gggggg".parse::<Color>().is_err());
        assert!("chartreuse-ish".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn test_lerp() {
        let mid = Color::lerp(&Color::BLACK, &Color::WHITE, 0.5);
        assert_eq!(mid.to_array(), [0.5, 0.5, 0.5, 1.0]);
    }
}
