//! Scalar value types with their own lexical form: colors and class names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::values::ValueError;
use crate::values::parse::rgb_triplet;

/// An opaque RGB color.
///
/// Accepts `#RRGGBB`, `RGB(r,g,b)` or one of the named colors; always
/// formats as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const NAMED_COLORS: &[(&str, Color)] = &[
    ("BLACK", Color::rgb(0, 0, 0)),
    ("BLUE", Color::rgb(0, 0, 255)),
    ("CYAN", Color::rgb(0, 255, 255)),
    ("DARK_GRAY", Color::rgb(64, 64, 64)),
    ("GRAY", Color::rgb(128, 128, 128)),
    ("GREEN", Color::rgb(0, 255, 0)),
    ("LIGHT_GRAY", Color::rgb(192, 192, 192)),
    ("MAGENTA", Color::rgb(255, 0, 255)),
    ("ORANGE", Color::rgb(255, 200, 0)),
    ("PINK", Color::rgb(255, 175, 175)),
    ("RED", Color::rgb(255, 0, 0)),
    ("WHITE", Color::rgb(255, 255, 255)),
    ("YELLOW", Color::rgb(255, 255, 0)),
];

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Look up one of the named colors (`RED`, `DARK_GRAY`, ...).
    pub fn named(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, color)| *color)
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl FromStr for Color {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = if let Some(hex) = trimmed.strip_prefix('#') {
            Self::from_hex(hex)
        } else if let Some((r, g, b)) = rgb_triplet(trimmed) {
            Some(Self::rgb(r, g, b))
        } else {
            Self::named(trimmed)
        };
        parsed.ok_or_else(|| {
            ValueError::format(
                "color",
                s,
                "expected #RRGGBB, RGB(r,g,b) or a color name",
            )
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A fully qualified class name, e.g. `org.opentrafficsim.road.Task$Lane`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassName(String);

impl ClassName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last segment of the qualified name.
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

impl FromStr for ClassName {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.split('.').all(is_identifier) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ValueError::format(
                "class name",
                s,
                "expected dot-separated identifiers",
            ))
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! serde_via_str {
    ($($ty:ty),+) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let s: String = Deserialize::deserialize(deserializer)?;
                    s.parse().map_err(serde::de::Error::custom)
                }
            }
        )+
    };
}

serde_via_str!(Color, ClassName);
