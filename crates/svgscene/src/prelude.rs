//! Common imports for building documents.
//!
//! ```
//! use svgscene::prelude::*;
//! ```

pub use crate::{
    color::{Color, Rgb},
    document::Document,
    geometry::Point,
    shape::{Circle, Polyline, Shape, Styled, Text},
    style::{StrokeCap, StrokeJoin},
};
