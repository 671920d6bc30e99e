//! RGB colors as sent by the platform (`#rgb`, `#rrggbb`, `rgb(..)`, `rgba(..)`)

use core::fmt;
use core::str::FromStr;
use serde::{Serialize, Serializer};

/// Error returned when a string is not a known color format
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0:?} does not satisfy any known RGB format")]
pub struct ParseRgbError(String);

/// An opaque RGB color. Displays as lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    /// Create a color from its components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Red component
    pub const fn red(&self) -> u8 {
        self.r
    }

    /// Green component
    pub const fn green(&self) -> u8 {
        self.g
    }

    /// Blue component
    pub const fn blue(&self) -> u8 {
        self.b
    }
}

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let clean: String = value
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let err = || ParseRgbError(value.to_string());

        if let Some(hex) = clean.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(err());
            }
            let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());
            return match hex.len() {
                6 => Ok(Self::new(
                    channel(&hex[0..2])?,
                    channel(&hex[2..4])?,
                    channel(&hex[4..6])?,
                )),
                // #abc expands to #aabbcc
                3 => {
                    let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 0x11);
                    Ok(Self::new(short(0)?, short(1)?, short(2)?))
                }
                _ => Err(err()),
            };
        }

        let (args, arity) = if let Some(rest) = clean.strip_prefix("rgba(") {
            (rest, 4)
        } else if let Some(rest) = clean.strip_prefix("rgb(") {
            (rest, 3)
        } else {
            return Err(err());
        };
        let args = args.strip_suffix(')').ok_or_else(err)?;
        let parts: Vec<&str> = args.split(',').collect();
        if parts.len() != arity {
            return Err(err());
        }

        let component = |s: &str| {
            if s.is_empty() || s.len() > 3 || !s.bytes().all(|b| b.is_ascii_digit()) {
                return Err(err());
            }
            s.parse::<u8>().map_err(|_| err())
        };
        if arity == 4 {
            // Alpha is validated but dropped.
            let alpha: f64 = parts[3].parse().map_err(|_| err())?;
            if !(0.0..=255.0).contains(&alpha) {
                return Err(err());
            }
        }

        Ok(Self::new(
            component(parts[0])?,
            component(parts[1])?,
            component(parts[2])?,
        ))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
