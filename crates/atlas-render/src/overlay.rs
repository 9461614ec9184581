//! Per-query route overlay on top of the base map.
//!
//! The overlay appends to the base document: first a translucent rectangle
//! dimming the whole canvas, then the configured layers driven by the
//! route's edge list instead of the full network.  After serialization the
//! document is truncated back to the base length, so the base map bytes are
//! untouched for the next query.

use atlas_core::AtlasError;
use atlas_graph::{Edge, EdgeKind};
use atlas_svg::{Circle, Color, Point, Polyline, Rectangle};
use atlas_transit::TransitStore;

use crate::error::RenderResult;
use crate::map::NetworkMap;
use crate::settings::Layer;

impl NetworkMap {
    /// Render the base map with `edges` highlighted on top.
    ///
    /// The base document is restored before returning, on success and on
    /// error alike.
    pub fn render_route(&mut self, store: &TransitStore, edges: &[&Edge]) -> RenderResult<String> {
        let result = self.draw_route(store, edges).map(|()| self.doc.render());
        self.doc.truncate(self.base_len);
        result
    }

    fn draw_route(&mut self, store: &TransitStore, edges: &[&Edge]) -> RenderResult<()> {
        let settings = self.settings();
        let margin = settings.outer_margin;
        let dim = Rectangle::new()
            .corner(Point::new(-margin, -margin))
            .size(
                settings.width + 2.0 * margin,
                settings.height + 2.0 * margin,
            )
            .fill(settings.underlayer_color.clone());
        self.doc.add(dim);

        for layer in self.settings().layers.clone() {
            match layer {
                Layer::BusLines => self.route_bus_lines(edges)?,
                Layer::BusLabels => self.route_bus_labels(store, edges)?,
                Layer::StopPoints => self.route_stop_points(edges)?,
                Layer::StopLabels => self.route_stop_labels(edges)?,
            }
        }
        Ok(())
    }

    /// One polyline per ride edge, through its segment chain.
    fn route_bus_lines(&mut self, edges: &[&Edge]) -> RenderResult<()> {
        for edge in rides(edges) {
            let Some(last) = edge.segments.last() else {
                continue;
            };
            let mut line = Polyline::new()
                .stroke(self.bus_color(&edge.label))
                .stroke_width(self.settings().line_width)
                .linecap("round")
                .linejoin("round");
            for (from, _) in &edge.segments {
                line = line.point(self.position(from)?);
            }
            line = line.point(self.position(&last.1)?);
            self.doc.add(line);
        }
        Ok(())
    }

    /// Bus names at ride ends that are terminals of the ridden bus —
    /// the same terminal notion the base map labels use.
    fn route_bus_labels(&mut self, store: &TransitStore, edges: &[&Edge]) -> RenderResult<()> {
        for edge in rides(edges) {
            let (Some(first), Some(last)) = (edge.segments.first(), edge.segments.last()) else {
                continue;
            };
            let bus = store
                .bus(&edge.label)
                .ok_or_else(|| AtlasError::BusNotFound(edge.label.clone()))?;
            let color = self.bus_color(&edge.label);
            let offset = self.settings().bus_label_offset;
            let font_size = self.settings().bus_label_font_size;
            for stop in [first.0.as_str(), last.1.as_str()] {
                if bus.is_terminal(stop) {
                    let at = self.position(stop)?;
                    self.add_label_pair(at, &edge.label, offset, font_size, true, color.clone());
                }
            }
        }
        Ok(())
    }

    /// A stop circle at every stop a ride passes through.
    fn route_stop_points(&mut self, edges: &[&Edge]) -> RenderResult<()> {
        for edge in rides(edges) {
            let Some(last) = edge.segments.last() else {
                continue;
            };
            let radius = self.settings().stop_radius;
            for (from, _) in &edge.segments {
                let at = self.position(from)?;
                self.doc.add(
                    Circle::new()
                        .center(at)
                        .radius(radius)
                        .fill(Color::named("white")),
                );
            }
            let at = self.position(&last.1)?;
            self.doc.add(
                Circle::new()
                    .center(at)
                    .radius(radius)
                    .fill(Color::named("white")),
            );
        }
        Ok(())
    }

    /// Stop names at boarding points (wait edges) plus the destination.
    fn route_stop_labels(&mut self, edges: &[&Edge]) -> RenderResult<()> {
        let offset = self.settings().stop_label_offset;
        let font_size = self.settings().stop_label_font_size;

        for edge in edges {
            if edge.kind == EdgeKind::Wait {
                let at = self.position(&edge.label)?;
                self.add_label_pair(at, &edge.label, offset, font_size, false, Color::named("black"));
            }
        }
        if let Some(last) = edges.last() {
            if last.kind == EdgeKind::Ride {
                if let Some(segment) = last.segments.last() {
                    let at = self.position(&segment.1)?;
                    self.add_label_pair(at, &segment.1, offset, font_size, false, Color::named("black"));
                }
            }
        }
        Ok(())
    }
}

fn rides<'a>(edges: &'a [&'a Edge]) -> impl Iterator<Item = &'a Edge> + 'a {
    edges
        .iter()
        .copied()
        .filter(|edge| edge.kind == EdgeKind::Ride)
}
