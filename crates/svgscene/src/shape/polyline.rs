//! Polyline shape.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    geometry::Point, number::Number, render::Element, shape::Styled, style::StyleRecord,
};

/// An open sequence of connected points.
///
/// Points are written in insertion order. Points can only be appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Polyline {
    style: StyleRecord,
    points: Vec<Point>,
}

impl Polyline {
    /// Creates a polyline with no points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the points in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Appends a point.
    pub fn add_point(&mut self, point: impl Into<Point>) -> &mut Self {
        self.points.push(point.into());
        self
    }
}

impl Extend<Point> for Polyline {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            style: StyleRecord::default(),
            points: iter.into_iter().collect(),
        }
    }
}

impl Styled for Polyline {
    fn style(&self) -> &StyleRecord {
        &self.style
    }

    fn style_mut(&mut self) -> &mut StyleRecord {
        &mut self.style
    }
}

impl Element for Polyline {
    const TAG: &'static str = "polyline";

    // Every pair is followed by a space, including the last one.
    fn write_geometry<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str(r#" points=""#)?;
        for point in &self.points {
            write!(out, "{},{} ", Number(point.x()), Number(point.y()))?;
        }
        out.write_str("\"")
    }
}
