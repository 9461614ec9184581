//! An ordered shape list serialized as one `<svg>` document.

use std::fmt::Write as _;

use crate::shape::Shape;

const HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" ?> \
     <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\"> ";
const FOOTER: &str = " </svg>";

/// Shapes are rendered in insertion order, so later additions draw on top.
///
/// [`truncate`](Self::truncate) drops everything past a remembered length;
/// the overlay renderer uses it to restore the base map after each query.
#[derive(Clone, Debug, Default)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Drop all shapes past `len`.  A `len` at or beyond the current size
    /// leaves the document unchanged.
    pub fn truncate(&mut self, len: usize) {
        self.shapes.truncate(len);
    }

    /// Serialize to the `<?xml …?><svg …>…</svg>` text form.
    pub fn render(&self) -> String {
        let mut out = String::from(HEADER);
        for shape in &self.shapes {
            // Writing into a String cannot fail.
            let _ = write!(out, "{shape}");
        }
        out.push_str(FOOTER);
        out
    }
}
