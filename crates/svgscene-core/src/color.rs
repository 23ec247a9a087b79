//! Paint values for fill and stroke attributes.
//!
//! A [`Color`] is either a textual keyword written verbatim (`none`, `red`,
//! `#00ff00`, ...) or an [`Rgb`] triple written as `rgb(R,G,B)`. Neither form
//! is validated: whatever the caller supplies is what the markup contains.
//! [`Color::from_css`] is the one opt-in path that checks its input.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Rgba8, Srgb};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Keyword written for an unset paint.
const NONE_KEYWORD: &str = "none";

/// Error returned by [`Color::from_css`] for input that is not a CSS color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{input}`: {reason}")]
pub struct ParseColorError {
    input: String,
    reason: String,
}

impl ParseColorError {
    /// Returns the rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// An RGB triple with 8-bit channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Creates a triple from its three channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgba8> for Rgb {
    fn from(rgba: Rgba8) -> Self {
        Self::new(rgba.r, rgba.g, rgba.b)
    }
}

/// A fill or stroke paint.
///
/// Serializes as a bare string for keywords and as a
/// `{"red": .., "green": .., "blue": ..}` object for triples.
///
/// # Examples
///
/// ```
/// use svgscene_core::color::{Color, Rgb};
///
/// assert_eq!(Color::default().to_string(), "none");
/// assert_eq!(Color::from("red").to_string(), "red");
/// assert_eq!(Color::from(Rgb::new(255, 16, 0)).to_string(), "rgb(255,16,0)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    /// A keyword written verbatim.
    Keyword(String),
    /// A triple written as `rgb(R,G,B)`.
    Rgb(Rgb),
}

impl Color {
    /// The `none` keyword, the paint of every unstyled shape.
    pub fn none() -> Self {
        Self::Keyword(NONE_KEYWORD.to_string())
    }

    /// Resolves a CSS color string (`"rebeccapurple"`, `"#ff8000"`,
    /// `"hsl(120, 100%, 50%)"`, ...) into an RGB triple.
    ///
    /// Unlike the `From` conversions this rejects text that is not a color.
    /// Any alpha component is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] if `input` cannot be parsed as a CSS color.
    ///
    /// # Examples
    ///
    /// ```
    /// use svgscene_core::color::{Color, Rgb};
    ///
    /// let orange = Color::from_css("#ff8000").unwrap();
    /// assert_eq!(orange, Color::Rgb(Rgb::new(255, 128, 0)));
    /// assert!(Color::from_css("not-a-color").is_err());
    /// ```
    pub fn from_css(input: &str) -> Result<Self, ParseColorError> {
        let parsed = DynamicColor::from_str(input).map_err(|err| ParseColorError {
            input: input.to_string(),
            reason: err.to_string(),
        })?;
        let rgba = parsed.to_alpha_color::<Srgb>().to_rgba8();
        Ok(Self::Rgb(rgba.into()))
    }

    /// Returns `true` for the `none` keyword.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::Keyword(keyword) if keyword == NONE_KEYWORD)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(keyword) => f.write_str(keyword),
            Self::Rgb(rgb) => fmt::Display::fmt(rgb, f),
        }
    }
}

impl From<&str> for Color {
    fn from(keyword: &str) -> Self {
        Self::Keyword(keyword.to_string())
    }
}

impl From<String> for Color {
    fn from(keyword: String) -> Self {
        Self::Keyword(keyword)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(channels: (u8, u8, u8)) -> Self {
        Self::Rgb(channels.into())
    }
}
