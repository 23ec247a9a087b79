//! The document: an ordered collection of shapes rendered as one SVG image.

use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::{error::Error, shape::Shape};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;
const SVG_START: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#;
const SVG_END: &str = "</svg>";

/// An ordered collection of shapes.
///
/// Shapes are stored by value in insertion order and are never reordered or
/// deduplicated. Once added, a shape belongs to the document: changing the
/// caller's original afterwards has no effect on what is rendered.
///
/// Rendering writes the XML declaration and the `<svg>` root, every shape in
/// insertion order, then `</svg>`, as one unbroken stream with no added
/// whitespace. It does not mutate the document, so repeated renders produce
/// identical output.
///
/// # Examples
///
/// ```
/// use svgscene::prelude::*;
///
/// let mut document = Document::new();
///
/// let mut circle = Circle::new();
/// circle.set_center((10.0, 10.0)).set_radius(5.0).set_fill_color("red");
/// document.add(circle);
///
/// assert_eq!(
///     document.render_to_string(),
///     concat!(
///         r#"<?xml version="1.0" encoding="UTF-8" ?>"#,
///         r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#,
///         r#"<circle fill="red" stroke="none" stroke-width="1" cx="10" cy="10" r="5" />"#,
///         "</svg>",
///     )
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shape, taking ownership of it.
    pub fn add(&mut self, shape: impl Into<Shape>) {
        let shape = shape.into();
        trace!(tag = shape.tag_name(), index = self.shapes.len(); "Adding shape");
        self.shapes.push(shape);
    }

    /// Appends an independent copy of `shape`.
    ///
    /// Accepts the `&mut` returned by a setter chain, so a shape can be
    /// configured and copied in one expression.
    pub fn add_cloned<S>(&mut self, shape: &S)
    where
        S: Clone + Into<Shape>,
    {
        self.add(shape.clone());
    }

    /// Returns the number of stored shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the document holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterates the stored shapes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    /// Removes every shape.
    pub fn clear(&mut self) {
        debug!(released = self.shapes.len(); "Clearing document");
        self.shapes.clear();
    }

    /// Renders the document into a text sink.
    ///
    /// # Errors
    ///
    /// Returns the sink's error unchanged. Output written before the failure
    /// stays in the sink.
    pub fn render_fmt<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        debug!(shapes = self.shapes.len(); "Rendering SVG document");

        out.write_str(XML_DECLARATION)?;
        out.write_str(SVG_START)?;
        for shape in &self.shapes {
            write!(out, "{shape}")?;
        }
        out.write_str(SVG_END)
    }

    /// Renders the document into a byte sink.
    ///
    /// # Errors
    ///
    /// Returns the writer's I/O error unchanged.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Renders the document into a new string.
    pub fn render_to_string(&self) -> String {
        self.to_string()
    }

    /// Renders the document into the file at `path`, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        info!(path:? = path, shapes = self.shapes.len(); "Saving SVG document");

        let file = File::create(path).map_err(|err| Error::new_io_error(path, err))?;
        let mut writer = BufWriter::new(file);
        self.render(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|err| Error::new_io_error(path, err))
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_fmt(f)
    }
}

impl<S: Into<Shape>> Extend<S> for Document {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for shape in iter {
            self.add(shape);
        }
    }
}

impl<S: Into<Shape>> FromIterator<S> for Document {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut document = Self::new();
        document.extend(iter);
        document
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
