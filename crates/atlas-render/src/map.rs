//! The layered base map, rendered once and cached.

use std::collections::HashMap;

use log::info;

use atlas_svg::{Circle, Color, Document, Point, Polyline, Text};
use atlas_transit::TransitStore;

use crate::error::{RenderError, RenderResult};
use crate::layout::MapLayout;
use crate::settings::{Layer, RenderSettings};

/// The rendered network map plus everything a route overlay needs to draw
/// on top of it: the layout, the per-bus palette assignment, and the shape
/// document itself (appended to and truncated per overlay query).
pub struct NetworkMap {
    settings: RenderSettings,
    layout: MapLayout,
    bus_colors: HashMap<String, Color>,
    pub(crate) doc: Document,
    pub(crate) base_len: usize,
    base_svg: String,
}

impl NetworkMap {
    /// Lay out `store` and draw the configured layers.
    pub fn render(store: &TransitStore, settings: RenderSettings) -> RenderResult<Self> {
        let layout = MapLayout::compute(store, &settings);

        // Palette position is the bus's index in lexicographic name order.
        let bus_colors: HashMap<String, Color> = store
            .bus_names_sorted()
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), settings.palette_color(i)))
            .collect();

        let mut map = Self {
            settings,
            layout,
            bus_colors,
            doc: Document::new(),
            base_len: 0,
            base_svg: String::new(),
        };

        for layer in map.settings.layers.clone() {
            map.draw_layer(store, layer)?;
        }
        map.base_len = map.doc.len();
        map.base_svg = map.doc.render();
        info!(
            "base map: {} shapes over {} placed stops",
            map.base_len,
            map.layout.len()
        );
        Ok(map)
    }

    /// The cached base-map SVG.
    pub fn svg(&self) -> &str {
        &self.base_svg
    }

    pub fn layout(&self) -> &MapLayout {
        &self.layout
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Palette color assigned to `bus`, `"none"` for unknown names.
    pub fn bus_color(&self, bus: &str) -> Color {
        self.bus_colors.get(bus).cloned().unwrap_or_default()
    }

    pub(crate) fn position(&self, stop: &str) -> RenderResult<Point> {
        self.layout
            .position(stop)
            .ok_or_else(|| RenderError::UnplacedStop(stop.to_string()))
    }

    // ── Layers ────────────────────────────────────────────────────────────

    fn draw_layer(&mut self, store: &TransitStore, layer: Layer) -> RenderResult<()> {
        match layer {
            Layer::BusLines => self.draw_bus_lines(store),
            Layer::BusLabels => self.draw_bus_labels(store),
            Layer::StopPoints => self.draw_stop_points(store),
            Layer::StopLabels => self.draw_stop_labels(store),
        }
    }

    fn draw_bus_lines(&mut self, store: &TransitStore) -> RenderResult<()> {
        for name in store.bus_names_sorted() {
            let Some(bus) = store.bus(name) else {
                continue;
            };
            if bus.stops().is_empty() {
                continue;
            }
            let mut line = Polyline::new()
                .stroke(self.bus_color(name))
                .stroke_width(self.settings.line_width)
                .linecap("round")
                .linejoin("round");
            for stop in bus.traversal() {
                line = line.point(self.position(stop)?);
            }
            self.doc.add(line);
        }
        Ok(())
    }

    fn draw_bus_labels(&mut self, store: &TransitStore) -> RenderResult<()> {
        for name in store.bus_names_sorted() {
            let Some(bus) = store.bus(name) else {
                continue;
            };
            let color = self.bus_color(name);
            for terminal in bus.terminals() {
                let at = self.position(terminal)?;
                self.add_label_pair(
                    at,
                    name,
                    self.settings.bus_label_offset,
                    self.settings.bus_label_font_size,
                    true,
                    color.clone(),
                );
            }
        }
        Ok(())
    }

    fn draw_stop_points(&mut self, store: &TransitStore) -> RenderResult<()> {
        for name in store.stop_names_sorted() {
            let at = self.position(name)?;
            self.doc.add(
                Circle::new()
                    .center(at)
                    .radius(self.settings.stop_radius)
                    .fill(Color::named("white")),
            );
        }
        Ok(())
    }

    fn draw_stop_labels(&mut self, store: &TransitStore) -> RenderResult<()> {
        for name in store.stop_names_sorted() {
            let at = self.position(name)?;
            self.add_label_pair(
                at,
                name,
                self.settings.stop_label_offset,
                self.settings.stop_label_font_size,
                false,
                Color::named("black"),
            );
        }
        Ok(())
    }

    /// The underlay/overlay text convention: an outlined copy first for
    /// contrast, then the legible colored copy on top.
    pub(crate) fn add_label_pair(
        &mut self,
        at: Point,
        content: &str,
        offset: [f64; 2],
        font_size: u32,
        bold: bool,
        fill: Color,
    ) {
        let base = Text::new()
            .position(at)
            .offset(Point::new(offset[0], offset[1]))
            .font_size(font_size)
            .font_family("Verdana")
            .content(content);
        let base = if bold { base.font_weight("bold") } else { base };

        let underlay = base
            .clone()
            .fill(self.settings.underlayer_color.clone())
            .stroke(self.settings.underlayer_color.clone())
            .stroke_width(self.settings.underlayer_width)
            .linecap("round")
            .linejoin("round");
        self.doc.add(underlay);
        self.doc.add(base.fill(fill));
    }
}
