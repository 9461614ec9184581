//! Map-rendering parameters.

use serde::Deserialize;

use atlas_svg::Color;

/// One drawable layer of the map.  The configured layer sequence decides
/// z-order: later layers draw on top.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    BusLines,
    BusLabels,
    StopPoints,
    StopLabels,
}

/// Everything the renderer needs besides the transit data itself.
///
/// Offsets are `[dx, dy]` pairs applied to label anchors; the palette is
/// cycled over buses in lexicographic name order.
#[derive(Clone, Debug, Deserialize)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub stop_radius: f64,
    pub line_width: f64,
    pub stop_label_font_size: u32,
    pub bus_label_font_size: u32,
    pub outer_margin: f64,
    pub stop_label_offset: [f64; 2],
    pub bus_label_offset: [f64; 2],
    pub underlayer_color: Color,
    pub underlayer_width: f64,
    pub color_palette: Vec<Color>,
    pub layers: Vec<Layer>,
}

impl RenderSettings {
    /// Palette color for the bus at `index` in lexicographic order.
    pub fn palette_color(&self, index: usize) -> Color {
        if self.color_palette.is_empty() {
            Color::default()
        } else {
            self.color_palette[index % self.color_palette.len()].clone()
        }
    }
}
