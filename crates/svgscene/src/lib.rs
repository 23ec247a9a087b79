//! svgscene - an in-memory scene of vector shapes that renders itself as SVG.
//!
//! Build [`Circle`], [`Polyline`] and [`Text`] shapes with chainable
//! setters, add them to a [`Document`], and render the document into any
//! text or byte sink.
//!
//! # Examples
//!
//! ```
//! use svgscene::prelude::*;
//!
//! let mut document = Document::new();
//!
//! let mut line = Polyline::new();
//! line.add_point((0.0, 0.0))
//!     .add_point((10.0, 10.0))
//!     .set_stroke_color(Rgb::new(0, 0, 255))
//!     .set_stroke_line_cap(StrokeCap::Round);
//! document.add_cloned(&line);
//!
//! let mut label = Text::new();
//! label.set_data("Hi").set_font_size(14).set_fill_color("black");
//! document.add(label);
//!
//! let svg = document.render_to_string();
//! assert!(svg.contains(r#"points="0,0 10,10 ""#));
//! assert!(svg.ends_with(r#"font-size="14" >Hi</text></svg>"#));
//! ```
//!
//! Nothing is validated or escaped: colors, keywords, numbers and text data
//! appear in the markup exactly as supplied.

pub mod document;
pub mod prelude;
pub mod shape;

mod error;
mod render;

pub use svgscene_core::{color, geometry, number, style};

pub use document::Document;
pub use error::Error;
pub use shape::{Circle, Polyline, Shape, Styled, Text};
