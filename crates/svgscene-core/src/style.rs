//! The style record shared by every shape.
//!
//! # Overview
//!
//! Exported types:
//! - [`StyleRecord`]: Fill, stroke, stroke width, and the optional line-cap and line-join keywords
//! - [`StrokeCap`]: Typed `stroke-linecap` keywords (butt, round, square)
//! - [`StrokeJoin`]: Typed `stroke-linejoin` keywords (miter, round, bevel)
//!
//! # SVG Attribute Mapping
//!
//! | Field | SVG Attribute | Written |
//! |-------|---------------|---------|
//! | `fill` | `fill` | always |
//! | `stroke` | `stroke` | always |
//! | `stroke_width` | `stroke-width` | always |
//! | `line_cap` | `stroke-linecap` | only once set |
//! | `line_join` | `stroke-linejoin` | only once set |
//!
//! Line-cap and line-join are stored as free text. The typed enums are a
//! convenience; any string, including the empty string, is accepted and
//! written verbatim.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{color::Color, number::Number};

/// Defines how line endpoints are rendered.
///
/// Maps directly to SVG `stroke-linecap` attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    Round,
    /// Square cap extending beyond the endpoint by half the stroke width
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

impl FromStr for StrokeCap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "butt" => Ok(Self::Butt),
            "round" => Ok(Self::Round),
            "square" => Ok(Self::Square),
            _ => Err(format!(
                "invalid stroke cap `{s}`, valid values: butt, round, square"
            )),
        }
    }
}

impl From<StrokeCap> for String {
    fn from(cap: StrokeCap) -> Self {
        cap.to_svg_value().to_string()
    }
}

/// Defines how line corners (joins) are rendered.
///
/// Maps directly to SVG `stroke-linejoin` attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    /// Sharp corner with mitered point
    Miter,
    /// Rounded corner
    Round,
    /// Beveled (cut-off) corner
    Bevel,
}

impl StrokeJoin {
    /// Returns the SVG stroke-linejoin value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

impl FromStr for StrokeJoin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "miter" => Ok(Self::Miter),
            "round" => Ok(Self::Round),
            "bevel" => Ok(Self::Bevel),
            _ => Err(format!(
                "invalid stroke join `{s}`, valid values: miter, round, bevel"
            )),
        }
    }
}

impl From<StrokeJoin> for String {
    fn from(join: StrokeJoin) -> Self {
        join.to_svg_value().to_string()
    }
}

/// The paint and stroke attributes carried by every shape.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Fill | `none` |
/// | Stroke | `none` |
/// | Stroke width | `1.0` |
/// | Line cap | unset |
/// | Line join | unset |
///
/// # Examples
///
/// ```
/// use svgscene_core::{color::Color, style::{StrokeCap, StyleRecord}};
///
/// let mut style = StyleRecord::new();
/// style.set_fill(Color::from("red"));
/// style.set_line_cap(StrokeCap::Round);
///
/// let mut attributes = String::new();
/// style.write_attributes(&mut attributes).unwrap();
/// assert_eq!(
///     attributes,
///     r#" fill="red" stroke="none" stroke-width="1" stroke-linecap="round""#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleRecord {
    fill: Color,
    stroke: Color,
    stroke_width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_cap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_join: Option<String>,
}

impl StyleRecord {
    /// Creates a style record with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the fill color.
    pub fn fill(&self) -> &Color {
        &self.fill
    }

    /// Returns the stroke color.
    pub fn stroke(&self) -> &Color {
        &self.stroke
    }

    /// Returns the stroke width.
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Returns the line-cap keyword, if one was set.
    pub fn line_cap(&self) -> Option<&str> {
        self.line_cap.as_deref()
    }

    /// Returns the line-join keyword, if one was set.
    pub fn line_join(&self) -> Option<&str> {
        self.line_join.as_deref()
    }

    /// Sets the fill color.
    pub fn set_fill(&mut self, color: Color) {
        self.fill = color;
    }

    /// Sets the stroke color.
    pub fn set_stroke(&mut self, color: Color) {
        self.stroke = color;
    }

    /// Sets the stroke width. Negative widths are written as given.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
    }

    /// Sets the line-cap keyword.
    pub fn set_line_cap(&mut self, cap: impl Into<String>) {
        self.line_cap = Some(cap.into());
    }

    /// Sets the line-join keyword.
    pub fn set_line_join(&mut self, join: impl Into<String>) {
        self.line_join = Some(join.into());
    }

    /// Writes the shared attributes, each preceded by a single space.
    ///
    /// `fill`, `stroke` and `stroke-width` are always written; line-cap and
    /// line-join only once set.
    ///
    /// # Errors
    ///
    /// Returns the sink's error unchanged.
    pub fn write_attributes<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(
            out,
            r#" fill="{}" stroke="{}" stroke-width="{}""#,
            self.fill,
            self.stroke,
            Number(self.stroke_width)
        )?;
        if let Some(cap) = &self.line_cap {
            write!(out, r#" stroke-linecap="{cap}""#)?;
        }
        if let Some(join) = &self.line_join {
            write!(out, r#" stroke-linejoin="{join}""#)?;
        }
        Ok(())
    }
}

impl Default for StyleRecord {
    fn default() -> Self {
        Self {
            fill: Color::none(),
            stroke: Color::none(),
            stroke_width: 1.0,
            line_cap: None,
            line_join: None,
        }
    }
}
