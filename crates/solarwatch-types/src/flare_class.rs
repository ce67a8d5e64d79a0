//! X-ray flare classification.
//!
//! GOES soft X-ray flux is reported on a logarithmic letter scale. Each
//! letter covers one decade of flux and the mantissa is the linear
//! multiplier inside that decade:
//!
//! | Letter | Flux range (W/m^2) |
//! |--------|--------------------|
//! | A | `< 1e-7` |
//! | B | `1e-7 ..< 1e-6` |
//! | C | `1e-6 ..< 1e-5` |
//! | M | `1e-5 ..< 1e-4` |
//! | X | `>= 1e-4` |
//!
//! The mantissa is kept at one decimal place, so a [`FlareClass`] always
//! round-trips through its display form (`M6.2`).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ts_rs::TS;

/// The letter part of a flare class, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum FlareLetter {
    /// Background, below `1e-7` W/m^2.
    A,
    /// `1e-7` W/m^2 decade.
    B,
    /// `1e-6` W/m^2 decade.
    C,
    /// `1e-5` W/m^2 decade.
    M,
    /// `1e-4` W/m^2 and above.
    X,
}

impl FlareLetter {
    /// Lower bound of the flux decade this letter covers.
    pub const fn base_flux(self) -> f64 {
        match self {
            Self::A => 1e-8,
            Self::B => 1e-7,
            Self::C => 1e-6,
            Self::M => 1e-5,
            Self::X => 1e-4,
        }
    }

    /// Letter for a flux value, using the decade boundaries.
    pub fn for_flux(flux: f64) -> Self {
        if flux < 1e-7 {
            Self::A
        } else if flux < 1e-6 {
            Self::B
        } else if flux < 1e-5 {
            Self::C
        } else if flux < 1e-4 {
            Self::M
        } else {
            Self::X
        }
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            'A' | 'a' => Some(Self::A),
            'B' | 'b' => Some(Self::B),
            'C' | 'c' => Some(Self::C),
            'M' | 'm' => Some(Self::M),
            'X' | 'x' => Some(Self::X),
            _ => None,
        }
    }

    const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::M => 'M',
            Self::X => 'X',
        }
    }
}

/// A flare class such as `C3.4` or `X1.0`.
///
/// Ordered by letter first, then by mantissa. Serialized as its display
/// string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlareClass {
    letter: FlareLetter,
    mantissa: f64,
}

/// Error returned when a flare class string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFlareClassError {
    /// The string was empty.
    #[error("empty flare class")]
    Empty,

    /// The first character is not one of `A`, `B`, `C`, `M`, `X`.
    #[error("unknown flare letter '{0}'")]
    UnknownLetter(char),

    /// The mantissa after the letter is not a non-negative number.
    #[error("invalid flare mantissa '{0}'")]
    InvalidMantissa(String),
}

impl FlareClass {
    /// The class reported when there is no flare data at all.
    pub const BACKGROUND: Self = Self {
        letter: FlareLetter::A,
        mantissa: 0.0,
    };

    /// Build a class from its parts. The mantissa is rounded to one
    /// decimal place; negative or non-finite mantissas become zero.
    pub fn new(letter: FlareLetter, mantissa: f64) -> Self {
        let mantissa = if mantissa.is_finite() && mantissa > 0.0 {
            round_tenth(mantissa)
        } else {
            0.0
        };
        Self { letter, mantissa }
    }

    /// Classify an X-ray flux in W/m^2.
    ///
    /// Non-positive or non-finite flux classifies as [`Self::BACKGROUND`].
    pub fn from_flux(flux: f64) -> Self {
        if !flux.is_finite() || flux <= 0.0 {
            return Self::BACKGROUND;
        }
        let letter = FlareLetter::for_flux(flux);
        Self::new(letter, flux / letter.base_flux())
    }

    /// Parse a class string, falling back to [`Self::BACKGROUND`] when the
    /// text is not a valid class.
    pub fn parse_or_background(text: &str) -> Self {
        text.parse().unwrap_or(Self::BACKGROUND)
    }

    /// The class letter.
    pub const fn letter(&self) -> FlareLetter {
        self.letter
    }

    /// The linear mantissa within the letter's decade.
    pub const fn mantissa(&self) -> f64 {
        self.mantissa
    }
}

impl Default for FlareClass {
    fn default() -> Self {
        Self::BACKGROUND
    }
}

impl PartialOrd for FlareClass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.letter.cmp(&other.letter) {
            Ordering::Equal => self.mantissa.partial_cmp(&other.mantissa),
            ord => Some(ord),
        }
    }
}

impl fmt::Display for FlareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.1}", self.letter.as_char(), self.mantissa)
    }
}

impl FromStr for FlareClass {
    type Err = ParseFlareClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let first = chars.next().ok_or(ParseFlareClassError::Empty)?;
        let letter =
            FlareLetter::from_char(first).ok_or(ParseFlareClassError::UnknownLetter(first))?;
        let rest = chars.as_str().trim();
        if rest.is_empty() {
            return Ok(Self::new(letter, 0.0));
        }
        let mantissa: f64 = rest
            .parse()
            .map_err(|_err| ParseFlareClassError::InvalidMantissa(rest.to_owned()))?;
        if !mantissa.is_finite() || mantissa < 0.0 {
            return Err(ParseFlareClassError::InvalidMantissa(rest.to_owned()));
        }
        Ok(Self::new(letter, mantissa))
    }
}

impl Serialize for FlareClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FlareClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
