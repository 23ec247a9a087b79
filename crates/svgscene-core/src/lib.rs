//! svgscene Core Types
//!
//! This crate provides the leaf value types shared by every shape of an
//! svgscene document:
//!
//! - **Geometry**: Coordinates in user space ([`geometry::Point`])
//! - **Colors**: Keyword or RGB paint values ([`color::Color`])
//! - **Style**: The fill/stroke attributes every shape carries ([`style::StyleRecord`])
//! - **Numbers**: Attribute text for floating-point values ([`number::Number`])

pub mod color;
pub mod geometry;
pub mod number;
pub mod style;
