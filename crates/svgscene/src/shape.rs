//! Shape variants and the fluent style contract they share.
//!
//! The variant set is closed: [`Circle`], [`Polyline`] and [`Text`]. A
//! [`Document`](crate::Document) stores them by value inside the [`Shape`]
//! enum, so copying a stored shape is a plain `Clone` and adding one by
//! value is a move.
//!
//! Every variant embeds one [`StyleRecord`] and implements [`Styled`], whose
//! provided setters return the concrete type. Shared and variant-specific
//! setters chain freely:
//!
//! ```
//! use svgscene::prelude::*;
//!
//! let mut circle = Circle::new();
//! circle
//!     .set_fill_color("red")
//!     .set_radius(5.0)
//!     .set_stroke_width(2.0)
//!     .set_center((10.0, 10.0));
//!
//! assert_eq!(circle.radius(), 5.0);
//! assert_eq!(circle.style().fill().to_string(), "red");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    color::Color,
    render::{self, Element},
    style::StyleRecord,
};

mod circle;
mod polyline;
mod text;

pub use circle::Circle;
pub use polyline::Polyline;
pub use text::Text;

/// Access to the shared [`StyleRecord`] plus chainable setters over it.
///
/// Implementors only provide the two accessors. The setters are written
/// once here and return `&mut Self`, so a chain started on a [`Circle`]
/// stays a `Circle` and can continue with circle-specific setters.
pub trait Styled {
    /// Returns the style record.
    fn style(&self) -> &StyleRecord;

    /// Returns the style record for mutation.
    fn style_mut(&mut self) -> &mut StyleRecord;

    /// Sets the fill color.
    fn set_fill_color(&mut self, color: impl Into<Color>) -> &mut Self
    where
        Self: Sized,
    {
        self.style_mut().set_fill(color.into());
        self
    }

    /// Sets the stroke color.
    fn set_stroke_color(&mut self, color: impl Into<Color>) -> &mut Self
    where
        Self: Sized,
    {
        self.style_mut().set_stroke(color.into());
        self
    }

    /// Sets the stroke width.
    fn set_stroke_width(&mut self, width: f64) -> &mut Self
    where
        Self: Sized,
    {
        self.style_mut().set_stroke_width(width);
        self
    }

    /// Sets the `stroke-linecap` keyword. Accepts free text or a
    /// [`StrokeCap`](crate::style::StrokeCap).
    fn set_stroke_line_cap(&mut self, cap: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.style_mut().set_line_cap(cap);
        self
    }

    /// Sets the `stroke-linejoin` keyword. Accepts free text or a
    /// [`StrokeJoin`](crate::style::StrokeJoin).
    fn set_stroke_line_join(&mut self, join: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.style_mut().set_line_join(join);
        self
    }
}

/// One stored shape of any variant.
///
/// Serializes internally tagged by `type`:
///
/// ```
/// use svgscene::Shape;
///
/// let shape: Shape = serde_json::from_str(r#"{"type": "circle", "radius": 4}"#).unwrap();
/// assert_eq!(shape.tag_name(), "circle");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

impl Shape {
    /// Returns the SVG tag name of the variant.
    pub fn tag_name(&self) -> &'static str {
        match self {
            Self::Circle(_) => Circle::TAG,
            Self::Polyline(_) => Polyline::TAG,
            Self::Text(_) => Text::TAG,
        }
    }

    /// Returns `true` if the element is closed with `/>`.
    pub fn is_self_closing(&self) -> bool {
        match self {
            Self::Circle(_) => Circle::SELF_CLOSING,
            Self::Polyline(_) => Polyline::SELF_CLOSING,
            Self::Text(_) => Text::SELF_CLOSING,
        }
    }
}

impl Styled for Shape {
    fn style(&self) -> &StyleRecord {
        match self {
            Self::Circle(circle) => circle.style(),
            Self::Polyline(polyline) => polyline.style(),
            Self::Text(text) => text.style(),
        }
    }

    fn style_mut(&mut self) -> &mut StyleRecord {
        match self {
            Self::Circle(circle) => circle.style_mut(),
            Self::Polyline(polyline) => polyline.style_mut(),
            Self::Text(text) => text.style_mut(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle(circle) => render::write_element(circle, f),
            Self::Polyline(polyline) => render::write_element(polyline, f),
            Self::Text(text) => render::write_element(text, f),
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Polyline> for Shape {
    fn from(polyline: Polyline) -> Self {
        Self::Polyline(polyline)
    }
}

impl From<Text> for Shape {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Rgb, style::StrokeJoin};

    #[test]
    fn test_tag_names() {
        assert_eq!(Shape::from(Circle::new()).tag_name(), "circle");
        assert_eq!(Shape::from(Polyline::new()).tag_name(), "polyline");
        assert_eq!(Shape::from(Text::new()).tag_name(), "text");
    }

    #[test]
    fn test_closing_syntax_per_variant() {
        assert!(Shape::from(Circle::new()).is_self_closing());
        assert!(Shape::from(Polyline::new()).is_self_closing());
        assert!(!Shape::from(Text::new()).is_self_closing());
    }

    #[test]
    fn test_shared_setters_chain_into_variant_setters() {
        let mut circle = Circle::new();
        circle
            .set_fill_color(Rgb::new(1, 2, 3))
            .set_stroke_color("black")
            .set_radius(2.0)
            .set_stroke_line_join(StrokeJoin::Round);

        assert_eq!(circle.style().fill(), &Color::from((1, 2, 3)));
        assert_eq!(circle.style().stroke().to_string(), "black");
        assert_eq!(circle.style().line_join(), Some("round"));
        assert_eq!(circle.radius(), 2.0);
    }

    #[test]
    fn test_style_through_enum() {
        let mut shape = Shape::from(Text::new());
        shape.set_fill_color("blue").set_stroke_width(3.0);
        assert_eq!(shape.style().fill().to_string(), "blue");
        assert_eq!(shape.style().stroke_width(), 3.0);
    }

    #[test]
    fn test_display_dispatches_per_variant() {
        let mut circle = Circle::new();
        circle.set_center((10.0, 10.0)).set_radius(5.0).set_fill_color("red");
        assert_eq!(
            Shape::from(circle).to_string(),
            r#"<circle fill="red" stroke="none" stroke-width="1" cx="10" cy="10" r="5" />"#
        );

        let mut polyline = Polyline::new();
        polyline.add_point((0.0, 0.0)).add_point((10.0, 10.0));
        assert_eq!(
            Shape::from(polyline).to_string(),
            r#"<polyline fill="none" stroke="none" stroke-width="1" points="0,0 10,10 " />"#
        );

        let mut text = Text::new();
        text.set_data("Hi").set_font_size(14);
        assert_eq!(
            Shape::from(text).to_string(),
            r#"<text fill="none" stroke="none" stroke-width="1" x="0" y="0" dx="0" dy="0" font-size="14" >Hi</text>"#
        );
    }

    #[test]
    fn test_optional_style_attributes_precede_geometry() {
        let mut circle = Circle::new();
        circle.set_stroke_line_cap("round").set_stroke_line_join("miter");
        assert_eq!(
            Shape::from(circle).to_string(),
            r#"<circle fill="none" stroke="none" stroke-width="1" stroke-linecap="round" stroke-linejoin="miter" cx="0" cy="0" r="1" />"#
        );
    }

    #[test]
    fn test_shape_serde_tagging() {
        let mut polyline = Polyline::new();
        polyline.add_point((1.0, 2.0));
        let shape = Shape::from(polyline);

        let json = serde_json::to_string(&shape).unwrap();
        assert!(json.contains(r#""type":"polyline""#));

        let back: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shape);
    }
}
