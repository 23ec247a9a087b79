//! The element-writing protocol shared by all shape variants.
//!
//! Every element is written as
//!
//! ```text
//! <TAG fill=".." stroke=".." stroke-width=".." [stroke-linecap=".."] [stroke-linejoin=".."] GEOMETRY />
//! ```
//!
//! or, for elements with character data,
//!
//! ```text
//! <TAG ... GEOMETRY >BODY</TAG>
//! ```
//!
//! Nothing is escaped. Attribute values and character data are written
//! exactly as stored.

use std::fmt;

use crate::shape::Styled;

/// A shape variant that knows its tag and how to write its own geometry.
pub(crate) trait Element: Styled {
    /// SVG tag name.
    const TAG: &'static str;

    /// Whether the element closes with `/>` rather than an explicit end tag.
    const SELF_CLOSING: bool = true;

    /// Writes the variant's own attributes, each preceded by a single space.
    fn write_geometry<W: fmt::Write>(&self, out: &mut W) -> fmt::Result;

    /// Character data written between the start and end tags.
    ///
    /// Only consulted when [`Element::SELF_CLOSING`] is `false`.
    fn body(&self) -> &str {
        ""
    }
}

/// Writes one complete element: start tag, shared style attributes, the
/// variant's geometry, then the closing syntax.
pub(crate) fn write_element<E: Element, W: fmt::Write>(element: &E, out: &mut W) -> fmt::Result {
    write!(out, "<{}", E::TAG)?;
    element.style().write_attributes(out)?;
    element.write_geometry(out)?;
    if E::SELF_CLOSING {
        out.write_str(" />")
    } else {
        write!(out, " >{}</{}>", element.body(), E::TAG)
    }
}
