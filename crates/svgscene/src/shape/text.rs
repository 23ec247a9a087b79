//! Text shape.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    geometry::Point, number::Number, render::Element, shape::Styled, style::StyleRecord,
};

/// A run of character data anchored at a point.
///
/// Unlike the other shapes, text is written with an explicit end tag and
/// its data between the tags. The data is not escaped.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Position | `(0, 0)` |
/// | Offset | `(0, 0)` |
/// | Font size | `1` |
/// | Font family | unset |
/// | Data | empty |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Text {
    style: StyleRecord,
    position: Point,
    offset: Point,
    font_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_family: Option<String>,
    data: String,
}

impl Text {
    /// Creates an empty text element with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the anchor point (`x`, `y`).
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the offset from the anchor (`dx`, `dy`).
    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Returns the font family, if one was set.
    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    /// Sets the anchor point.
    pub fn set_position(&mut self, position: impl Into<Point>) -> &mut Self {
        self.position = position.into();
        self
    }

    /// Sets the offset from the anchor.
    pub fn set_offset(&mut self, offset: impl Into<Point>) -> &mut Self {
        self.offset = offset.into();
        self
    }

    /// Sets the font size.
    pub fn set_font_size(&mut self, size: u32) -> &mut Self {
        self.font_size = size;
        self
    }

    /// Sets the font family. Once set, `font-family` is always written, even
    /// for an empty name.
    pub fn set_font_family(&mut self, family: impl Into<String>) -> &mut Self {
        self.font_family = Some(family.into());
        self
    }

    /// Sets the character data.
    pub fn set_data(&mut self, data: impl Into<String>) -> &mut Self {
        self.data = data.into();
        self
    }
}

impl Default for Text {
    fn default() -> Self {
        Self {
            style: StyleRecord::default(),
            position: Point::default(),
            offset: Point::default(),
            font_size: 1,
            font_family: None,
            data: String::new(),
        }
    }
}

impl Styled for Text {
    fn style(&self) -> &StyleRecord {
        &self.style
    }

    fn style_mut(&mut self) -> &mut StyleRecord {
        &mut self.style
    }
}

impl Element for Text {
    const TAG: &'static str = "text";
    const SELF_CLOSING: bool = false;

    fn write_geometry<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(
            out,
            r#" x="{}" y="{}" dx="{}" dy="{}" font-size="{}""#,
            Number(self.position.x()),
            Number(self.position.y()),
            Number(self.offset.x()),
            Number(self.offset.y()),
            self.font_size
        )?;
        if let Some(family) = &self.font_family {
            write!(out, r#" font-family="{family}""#)?;
        }
        Ok(())
    }

    fn body(&self) -> &str {
        &self.data
    }
}
