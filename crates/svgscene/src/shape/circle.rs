//! Circle shape.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    geometry::Point, number::Number, render::Element, shape::Styled, style::StyleRecord,
};

/// A circle given by its center and radius.
///
/// Defaults to a unit circle at the origin. The radius is not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Circle {
    style: StyleRecord,
    center: Point,
    radius: f64,
}

impl Circle {
    /// Creates a unit circle at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the center point.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Sets the center point.
    pub fn set_center(&mut self, center: impl Into<Point>) -> &mut Self {
        self.center = center.into();
        self
    }

    /// Sets the radius.
    pub fn set_radius(&mut self, radius: f64) -> &mut Self {
        self.radius = radius;
        self
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            style: StyleRecord::default(),
            center: Point::default(),
            radius: 1.0,
        }
    }
}

impl Styled for Circle {
    fn style(&self) -> &StyleRecord {
        &self.style
    }

    fn style_mut(&mut self) -> &mut StyleRecord {
        &mut self.style
    }
}

impl Element for Circle {
    const TAG: &'static str = "circle";

    fn write_geometry<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(
            out,
            r#" cx="{}" cy="{}" r="{}""#,
            Number(self.center.x()),
            Number(self.center.y()),
            Number(self.radius)
        )
    }
}
