//! Unit tests for layout and rendering.
//!
//! The canvas in all tests is 600×400 with 50 px padding, so the corners
//! of the drawable area are easy to spot in expected coordinates.

#[cfg(test)]
mod helpers {
    use atlas_core::Coord;
    use atlas_svg::Color;
    use atlas_transit::TransitStore;

    use crate::settings::{Layer, RenderSettings};

    pub fn settings() -> RenderSettings {
        RenderSettings {
            width: 600.0,
            height: 400.0,
            padding: 50.0,
            stop_radius: 5.0,
            line_width: 14.0,
            stop_label_font_size: 20,
            bus_label_font_size: 20,
            outer_margin: 16.0,
            stop_label_offset: [7.0, -3.0],
            bus_label_offset: [7.0, 15.0],
            underlayer_color: Color::rgba(255, 255, 255, 0.85),
            underlayer_width: 3.0,
            color_palette: vec![
                Color::named("green"),
                Color::rgb(255, 160, 0),
                Color::named("red"),
            ],
            layers: vec![
                Layer::BusLines,
                Layer::BusLabels,
                Layer::StopPoints,
                Layer::StopLabels,
            ],
        }
    }

    pub fn single_stop() -> TransitStore {
        let mut store = TransitStore::new();
        store.add_stop("A", Coord::new(55.6, 37.6));
        store
    }

    /// Two stops joined by one there-and-back bus.
    pub fn two_stop_line() -> TransitStore {
        let mut store = TransitStore::new();
        store.add_stop("A", Coord::new(55.6, 37.6));
        store.add_stop("B", Coord::new(55.7, 37.7));
        store.add_distance("A", "B", 1000).unwrap();
        store.add_bus("99", vec!["A".into(), "B".into()], true);
        store
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod layout {
    use atlas_core::Coord;
    use atlas_svg::Point;
    use atlas_transit::TransitStore;

    use crate::layout::MapLayout;

    use super::helpers;

    #[test]
    fn empty_store_places_nothing() {
        let layout = MapLayout::compute(&TransitStore::new(), &helpers::settings());
        assert!(layout.is_empty());
    }

    #[test]
    fn single_stop_lands_at_the_padding_corner() {
        let layout = MapLayout::compute(&helpers::single_stop(), &helpers::settings());
        assert_eq!(layout.position("A"), Some(Point::new(50.0, 350.0)));
    }

    #[test]
    fn adjacent_stops_span_the_canvas() {
        let layout = MapLayout::compute(&helpers::two_stop_line(), &helpers::settings());
        // Two ranks per axis: the full padded extent, y inverted.
        assert_eq!(layout.position("A"), Some(Point::new(50.0, 350.0)));
        assert_eq!(layout.position("B"), Some(Point::new(550.0, 50.0)));
    }

    #[test]
    fn adjacency_forces_distinct_ranks_even_for_equal_coords() {
        let mut store = TransitStore::new();
        store.add_stop("A", Coord::new(55.6, 37.6));
        store.add_stop("B", Coord::new(55.6, 37.6));
        store.add_bus("b", vec!["A".into(), "B".into()], true);

        let layout = MapLayout::compute(&store, &helpers::settings());
        let a = layout.position("A").unwrap();
        let b = layout.position("B").unwrap();
        assert_ne!(a.x, b.x);
        assert_ne!(a.y, b.y);
    }

    #[test]
    fn unrelated_stops_may_share_a_rank() {
        // Two disjoint buses: their stops interleave along longitude but
        // never collide, so both lines compress onto the same two ranks.
        let mut store = TransitStore::new();
        store.add_stop("A", Coord::new(55.1, 37.10));
        store.add_stop("C", Coord::new(55.2, 37.15));
        store.add_stop("B", Coord::new(55.3, 37.20));
        store.add_stop("D", Coord::new(55.4, 37.25));
        store.add_bus("one", vec!["A".into(), "B".into()], true);
        store.add_bus("two", vec!["C".into(), "D".into()], true);

        let layout = MapLayout::compute(&store, &helpers::settings());
        assert_eq!(layout.position("A").unwrap().x, 50.0);
        assert_eq!(layout.position("C").unwrap().x, 50.0);
        assert_eq!(layout.position("B").unwrap().x, 550.0);
        assert_eq!(layout.position("D").unwrap().x, 550.0);
    }

    #[test]
    fn non_pivot_stops_interpolate_between_terminals() {
        // X is served by one bus, visited twice on the there-and-back walk,
        // so its skewed geography is replaced by the P–Q midpoint and it
        // projects exactly halfway between its neighbors.
        let mut store = TransitStore::new();
        store.add_stop("P", Coord::new(55.0, 37.0));
        store.add_stop("X", Coord::new(55.9, 37.1));
        store.add_stop("Q", Coord::new(55.2, 37.2));
        store.add_bus("line", vec!["P".into(), "X".into(), "Q".into()], true);

        let layout = MapLayout::compute(&store, &helpers::settings());
        let p = layout.position("P").unwrap();
        let x = layout.position("X").unwrap();
        let q = layout.position("Q").unwrap();
        assert_eq!(p, Point::new(50.0, 350.0));
        assert_eq!(q, Point::new(550.0, 50.0));
        assert_eq!(x, Point::new(300.0, 200.0));
        assert!((x.x - (p.x + q.x) / 2.0).abs() < 1e-9);
        assert!((x.y - (p.y + q.y) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn layout_is_identical_across_runs() {
        // Hash maps appear throughout the pipeline; the sort and the
        // max-over-neighbors rank rule keep the result order-independent.
        let mut store = TransitStore::new();
        for (name, lat, lon) in [
            ("Evergreen", 55.60, 37.60),
            ("Dockside", 55.61, 37.64),
            ("Mill", 55.63, 37.61),
            ("Quarry", 55.59, 37.62),
            ("Terrace", 55.62, 37.65),
        ] {
            store.add_stop(name, Coord::new(lat, lon));
        }
        store.add_bus(
            "5",
            vec!["Evergreen".into(), "Dockside".into(), "Mill".into()],
            true,
        );
        store.add_bus(
            "7",
            vec!["Quarry".into(), "Dockside".into(), "Terrace".into()],
            true,
        );

        let first = MapLayout::compute(&store, &helpers::settings());
        let second = MapLayout::compute(&store, &helpers::settings());
        for name in ["Evergreen", "Dockside", "Mill", "Quarry", "Terrace"] {
            assert_eq!(first.position(name), second.position(name), "{name}");
        }
    }

    #[test]
    fn transfer_stops_keep_their_own_geography() {
        // X transfers between the two buses, so it stays a pivot and is
        // never interpolated; its rank sits between its neighbors'.
        let mut store = TransitStore::new();
        store.add_stop("P", Coord::new(55.0, 37.0));
        store.add_stop("X", Coord::new(55.1, 37.1));
        store.add_stop("Q", Coord::new(55.2, 37.2));
        store.add_bus("a", vec!["P".into(), "X".into(), "Q".into()], true);
        store.add_bus("b", vec!["X".into(), "Q".into()], true);

        let layout = MapLayout::compute(&store, &helpers::settings());
        let p = layout.position("P").unwrap();
        let x = layout.position("X").unwrap();
        let q = layout.position("Q").unwrap();
        assert!(p.x < x.x && x.x < q.x);
        assert!(q.y < x.y && x.y < p.y);
    }
}

// ── Base map ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod map {
    use atlas_svg::Document;
    use atlas_transit::TransitStore;

    use crate::map::NetworkMap;
    use crate::settings::Layer;

    use super::helpers;

    #[test]
    fn empty_network_renders_an_empty_document() {
        let map = NetworkMap::render(&TransitStore::new(), helpers::settings()).unwrap();
        assert_eq!(map.svg(), Document::new().render());
    }

    #[test]
    fn single_stop_has_a_point_but_no_lines() {
        let map = NetworkMap::render(&helpers::single_stop(), helpers::settings()).unwrap();
        assert!(map.svg().contains("<circle"));
        assert!(map.svg().contains("cx=\"50\" cy=\"350\""));
        assert!(!map.svg().contains("<polyline"));
    }

    #[test]
    fn reversed_bus_polyline_walks_there_and_back() {
        let map = NetworkMap::render(&helpers::two_stop_line(), helpers::settings()).unwrap();
        assert!(
            map.svg().contains("points=\"50,350 550,50 50,350 \""),
            "svg: {}",
            map.svg()
        );
    }

    #[test]
    fn layer_sequence_controls_z_order() {
        let mut settings = helpers::settings();
        settings.layers = vec![Layer::StopPoints, Layer::BusLines];
        let map = NetworkMap::render(&helpers::two_stop_line(), settings).unwrap();
        let circle = map.svg().find("<circle").unwrap();
        let line = map.svg().find("<polyline").unwrap();
        assert!(circle < line, "bus lines should draw on top");
        assert!(!map.svg().contains("<text"));
    }

    #[test]
    fn bus_labels_appear_at_each_terminal() {
        let map = NetworkMap::render(&helpers::two_stop_line(), helpers::settings()).unwrap();
        // Two terminals × (underlay + overlay).
        assert_eq!(map.svg().matches(">99</text>").count(), 4);
        assert!(map.svg().contains("font-weight=\"bold\""));
    }

    #[test]
    fn loop_buses_get_one_labeled_terminal() {
        let mut store = TransitStore::new();
        store.add_stop("A", atlas_core::Coord::new(55.6, 37.6));
        store.add_stop("B", atlas_core::Coord::new(55.7, 37.7));
        store.add_bus(
            "ring",
            vec!["A".into(), "B".into(), "A".into()],
            false,
        );
        store.add_distance("A", "B", 1000).unwrap();
        store.add_distance("B", "A", 1000).unwrap();

        let map = NetworkMap::render(&store, helpers::settings()).unwrap();
        assert_eq!(map.svg().matches(">ring</text>").count(), 2);
    }

    #[test]
    fn palette_cycles_over_sorted_bus_names() {
        let mut settings = helpers::settings();
        settings.color_palette = vec![
            atlas_svg::Color::named("green"),
            atlas_svg::Color::named("red"),
        ];
        let mut store = helpers::two_stop_line();
        store.add_bus("11", vec!["A".into(), "B".into()], true);
        store.add_bus("22", vec!["A".into(), "B".into()], true);

        let map = NetworkMap::render(&store, settings).unwrap();
        // Sorted order: 11, 22, 99 → green, red, green again.
        assert_eq!(map.bus_color("11"), atlas_svg::Color::named("green"));
        assert_eq!(map.bus_color("22"), atlas_svg::Color::named("red"));
        assert_eq!(map.bus_color("99"), atlas_svg::Color::named("green"));
    }

    #[test]
    fn stop_labels_are_black_and_not_bold() {
        let map = NetworkMap::render(&helpers::single_stop(), helpers::settings()).unwrap();
        assert!(map.svg().contains("fill=\"black\""));
        assert!(!map.svg().contains("font-weight"));
    }
}

// ── Route overlay ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod overlay {
    use atlas_core::VertexId;
    use atlas_graph::Edge;

    use crate::map::NetworkMap;

    use super::helpers;

    fn wait_edge(stop: &str) -> Edge {
        Edge::wait(VertexId(0), VertexId(1), 6.0, stop)
    }

    fn ride_edge(bus: &str, hops: &[(&str, &str)]) -> Edge {
        Edge::ride(
            VertexId(1),
            VertexId(2),
            1.0,
            bus,
            hops.iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        )
    }

    #[test]
    fn base_map_is_byte_identical_after_an_overlay() {
        let store = helpers::two_stop_line();
        let mut map = NetworkMap::render(&store, helpers::settings()).unwrap();
        let baseline = map.svg().to_string();

        let wait = wait_edge("A");
        let ride = ride_edge("99", &[("A", "B")]);
        let overlay = map.render_route(&store, &[&wait, &ride]).unwrap();

        assert_ne!(overlay, baseline);
        assert_eq!(map.svg(), baseline);

        // A second query sees the same base bytes.
        let again = map.render_route(&store, &[&wait, &ride]).unwrap();
        assert_eq!(overlay, again);
    }

    #[test]
    fn overlay_dims_the_canvas_beyond_the_edges() {
        let store = helpers::two_stop_line();
        let mut map = NetworkMap::render(&store, helpers::settings()).unwrap();
        let overlay = map.render_route(&store, &[]).unwrap();
        // One rect covering [-16, 616] × [-16, 416].
        assert!(overlay.contains("<rect"));
        assert!(overlay.contains("x=\"-16\" y=\"-16\" width=\"632\" height=\"432\""));
        assert!(overlay.contains("rgba(255,255,255,0.85)"));
    }

    #[test]
    fn empty_route_adds_only_the_dim_rect() {
        let store = helpers::two_stop_line();
        let mut map = NetworkMap::render(&store, helpers::settings()).unwrap();
        let baseline_rects = map.svg().matches("<rect").count();
        let overlay = map.render_route(&store, &[]).unwrap();
        assert_eq!(overlay.matches("<rect").count(), baseline_rects + 1);
        assert_eq!(
            overlay.matches("<polyline").count(),
            map.svg().matches("<polyline").count()
        );
    }

    #[test]
    fn ride_edges_draw_their_segment_chain() {
        let store = helpers::two_stop_line();
        let mut map = NetworkMap::render(&store, helpers::settings()).unwrap();
        let wait = wait_edge("A");
        let ride = ride_edge("99", &[("A", "B")]);
        let overlay = map.render_route(&store, &[&wait, &ride]).unwrap();

        // The overlay polyline stops at B — no return tail.
        assert!(overlay.contains("points=\"50,350 550,50 \""));
    }

    #[test]
    fn boarding_and_destination_stops_are_labeled() {
        let store = helpers::two_stop_line();
        let mut map = NetworkMap::render(&store, helpers::settings()).unwrap();
        let wait = wait_edge("A");
        let ride = ride_edge("99", &[("A", "B")]);
        let overlay = map.render_route(&store, &[&wait, &ride]).unwrap();

        let base = map.svg();
        // One extra label pair at the boarding stop A and one at the
        // destination B, on top of the base map's own labels.
        assert_eq!(
            overlay.matches(">A</text>").count(),
            base.matches(">A</text>").count() + 2
        );
        assert_eq!(
            overlay.matches(">B</text>").count(),
            base.matches(">B</text>").count() + 2
        );
    }

    #[test]
    fn unknown_bus_on_an_edge_is_fatal() {
        use atlas_core::AtlasError;

        use crate::error::RenderError;

        let store = helpers::two_stop_line();
        let mut map = NetworkMap::render(&store, helpers::settings()).unwrap();
        let baseline = map.svg().to_string();

        let ride = ride_edge("ghost", &[("A", "B")]);
        let result = map.render_route(&store, &[&ride]);
        assert!(matches!(
            result,
            Err(RenderError::Core(AtlasError::BusNotFound(_)))
        ));

        // The scratch document is truncated on the error path too, so the
        // next query still sees the untouched base.
        let wait = wait_edge("A");
        let ride = ride_edge("99", &[("A", "B")]);
        let overlay = map.render_route(&store, &[&wait, &ride]).unwrap();
        assert_eq!(map.svg(), baseline);
        assert!(overlay.len() > baseline.len());
    }

    #[test]
    fn ride_terminal_gets_a_bus_label() {
        let store = helpers::two_stop_line();
        let mut map = NetworkMap::render(&store, helpers::settings()).unwrap();
        let wait = wait_edge("A");
        let ride = ride_edge("99", &[("A", "B")]);
        let overlay = map.render_route(&store, &[&wait, &ride]).unwrap();

        // Both A and B are terminals of the reversed bus 99, so the overlay
        // adds two label pairs on top of the base map's four texts.
        assert_eq!(
            overlay.matches(">99</text>").count(),
            map.svg().matches(">99</text>").count() + 4
        );
    }
}
