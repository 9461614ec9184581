//! Shape primitives with fluent, value-returning setters.
//!
//! Every shape carries the shared [`Style`] block (fill, stroke, stroke
//! width, optional line cap/join) plus its own geometry.  Setters consume
//! and return `self` so construction chains:
//!
//! ```
//! use atlas_svg::{Circle, Color, Point};
//!
//! let dot = Circle::new()
//!     .center(Point::new(50.0, 50.0))
//!     .radius(5.0)
//!     .fill(Color::named("white"));
//! ```
//!
//! Serialization is `Display`: attributes print as `name="value"` in a
//! fixed order (style first, then geometry), matching the document layer's
//! byte-stable output contract.

use std::fmt;

use crate::color::Color;

/// A point in screen space (pixels, y grows downward).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ── Shared style block ────────────────────────────────────────────────────────

/// Styling attributes common to every shape.
#[derive(Clone, Debug)]
struct Style {
    fill: Color,
    stroke: Color,
    stroke_width: f64,
    linecap: Option<String>,
    linejoin: Option<String>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Color::default(),
            stroke: Color::default(),
            stroke_width: 1.0,
            linecap: None,
            linejoin: None,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " fill=\"{}\"", self.fill)?;
        write!(f, " stroke=\"{}\"", self.stroke)?;
        write!(f, " stroke-width=\"{}\"", self.stroke_width)?;
        if let Some(cap) = &self.linecap {
            write!(f, " stroke-linecap=\"{cap}\"")?;
        }
        if let Some(join) = &self.linejoin {
            write!(f, " stroke-linejoin=\"{join}\"")?;
        }
        Ok(())
    }
}

/// Generate the fluent style setters shared by all shapes.
macro_rules! styled {
    ($name:ident) => {
        impl $name {
            pub fn fill(mut self, color: Color) -> Self {
                self.style.fill = color;
                self
            }

            pub fn stroke(mut self, color: Color) -> Self {
                self.style.stroke = color;
                self
            }

            pub fn stroke_width(mut self, width: f64) -> Self {
                self.style.stroke_width = width;
                self
            }

            pub fn linecap(mut self, cap: impl Into<String>) -> Self {
                self.style.linecap = Some(cap.into());
                self
            }

            pub fn linejoin(mut self, join: impl Into<String>) -> Self {
                self.style.linejoin = Some(join.into());
                self
            }
        }

        impl From<$name> for Shape {
            fn from(shape: $name) -> Shape {
                Shape::$name(shape)
            }
        }
    };
}

// ── Circle ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct Circle {
    style: Style,
    center: Point,
    radius: f64,
}

impl Circle {
    pub fn new() -> Self {
        Self {
            radius: 1.0,
            ..Self::default()
        }
    }

    pub fn center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

styled!(Circle);

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<circle{} cx=\"{}\" cy=\"{}\" r=\"{}\"/>",
            self.style, self.center.x, self.center.y, self.radius
        )
    }
}

// ── Polyline ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct Polyline {
    style: Style,
    points: Vec<Point>,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }
}

styled!(Polyline);

impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<polyline{} points=\"", self.style)?;
        for point in &self.points {
            write!(f, "{},{} ", point.x, point.y)?;
        }
        f.write_str("\"/>")
    }
}

// ── Text ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct Text {
    style: Style,
    position: Point,
    offset: Point,
    font_size: u32,
    font_family: Option<String>,
    font_weight: Option<String>,
    content: String,
}

impl Text {
    pub fn new() -> Self {
        Self {
            font_size: 1,
            ..Self::default()
        }
    }

    pub fn position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Rendering offset, emitted as the `dx`/`dy` attributes.
    pub fn offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

styled!(Text);

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<text{} x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
            self.style,
            self.position.x,
            self.position.y,
            self.offset.x,
            self.offset.y,
            self.font_size
        )?;
        if let Some(family) = &self.font_family {
            write!(f, " font-family=\"{family}\"")?;
        }
        if let Some(weight) = &self.font_weight {
            write!(f, " font-weight=\"{weight}\"")?;
        }
        write!(f, ">{}</text>", self.content)
    }
}

// ── Rectangle ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct Rectangle {
    style: Style,
    corner: Point,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-left corner.
    pub fn corner(mut self, corner: Point) -> Self {
        self.corner = corner;
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

styled!(Rectangle);

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<rect{} x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/>",
            self.style, self.corner.x, self.corner.y, self.width, self.height
        )
    }
}

// ── Shape ─────────────────────────────────────────────────────────────────────

/// Any drawable primitive, one variant per shape kind.
#[derive(Clone, Debug)]
pub enum Shape {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
    Rectangle(Rectangle),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(shape) => shape.fmt(f),
            Shape::Polyline(shape) => shape.fmt(f),
            Shape::Text(shape) => shape.fmt(f),
            Shape::Rectangle(shape) => shape.fmt(f),
        }
    }
}
