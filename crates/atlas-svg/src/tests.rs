//! Unit tests for atlas-svg serialization.

#[cfg(test)]
mod color {
    use crate::Color;

    #[test]
    fn named_prints_verbatim() {
        assert_eq!(Color::named("white").to_string(), "white");
        assert_eq!(Color::default().to_string(), "none");
    }

    #[test]
    fn rgb_and_rgba() {
        assert_eq!(Color::rgb(255, 160, 0).to_string(), "rgb(255,160,0)");
        assert_eq!(
            Color::rgba(255, 160, 0, 0.85).to_string(),
            "rgba(255,160,0,0.85)"
        );
    }

    #[test]
    fn deserializes_from_string_or_array() {
        let named: Color = serde_json::from_str("\"green\"").unwrap();
        assert_eq!(named, Color::named("green"));

        let rgb: Color = serde_json::from_str("[110, 199, 92]").unwrap();
        assert_eq!(rgb, Color::rgb(110, 199, 92));

        let rgba: Color = serde_json::from_str("[110, 199, 92, 0.5]").unwrap();
        assert_eq!(rgba, Color::rgba(110, 199, 92, 0.5));
    }

    #[test]
    fn rejects_malformed_arrays() {
        assert!(serde_json::from_str::<Color>("[1, 2]").is_err());
        assert!(serde_json::from_str::<Color>("[300, 0, 0]").is_err());
    }
}

#[cfg(test)]
mod shapes {
    use crate::{Circle, Color, Point, Polyline, Rectangle, Text};

    #[test]
    fn circle_attribute_order() {
        let circle = Circle::new()
            .center(Point::new(50.0, 50.0))
            .radius(6.0)
            .fill(Color::named("white"));
        assert_eq!(
            circle.to_string(),
            "<circle fill=\"white\" stroke=\"none\" stroke-width=\"1\" \
             cx=\"50\" cy=\"50\" r=\"6\"/>"
        );
    }

    #[test]
    fn polyline_point_list() {
        let line = Polyline::new()
            .point(Point::new(0.0, 0.0))
            .point(Point::new(10.0, 20.0))
            .stroke(Color::rgb(255, 0, 0))
            .stroke_width(4.5)
            .linecap("round")
            .linejoin("round");
        assert_eq!(
            line.to_string(),
            "<polyline fill=\"none\" stroke=\"rgb(255,0,0)\" stroke-width=\"4.5\" \
             stroke-linecap=\"round\" stroke-linejoin=\"round\" points=\"0,0 10,20 \"/>"
        );
    }

    #[test]
    fn text_with_optional_font_attributes() {
        let text = Text::new()
            .position(Point::new(7.0, 8.0))
            .offset(Point::new(1.0, -1.0))
            .font_size(14)
            .font_family("Verdana")
            .font_weight("bold")
            .fill(Color::named("black"))
            .content("Marushkino");
        assert_eq!(
            text.to_string(),
            "<text fill=\"black\" stroke=\"none\" stroke-width=\"1\" \
             x=\"7\" y=\"8\" dx=\"1\" dy=\"-1\" font-size=\"14\" \
             font-family=\"Verdana\" font-weight=\"bold\">Marushkino</text>"
        );
    }

    #[test]
    fn rectangle_geometry() {
        let rect = Rectangle::new()
            .corner(Point::new(-5.0, -5.0))
            .size(110.0, 60.0)
            .fill(Color::rgba(255, 255, 255, 0.85));
        assert_eq!(
            rect.to_string(),
            "<rect fill=\"rgba(255,255,255,0.85)\" stroke=\"none\" stroke-width=\"1\" \
             x=\"-5\" y=\"-5\" width=\"110\" height=\"60\"/>"
        );
    }
}

#[cfg(test)]
mod document {
    use crate::{Circle, Document, Point};

    #[test]
    fn empty_document_is_just_the_envelope() {
        let doc = Document::new();
        let svg = doc.render();
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?> "));
        assert!(svg.contains("<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">"));
        assert!(svg.ends_with(" </svg>"));
    }

    #[test]
    fn shapes_render_in_insertion_order() {
        let mut doc = Document::new();
        doc.add(Circle::new().center(Point::new(1.0, 1.0)));
        doc.add(Circle::new().center(Point::new(2.0, 2.0)));
        let svg = doc.render();
        let first = svg.find("cx=\"1\"").unwrap();
        let second = svg.find("cx=\"2\"").unwrap();
        assert!(first < second);
    }

    #[test]
    fn truncate_restores_exact_output() {
        let mut doc = Document::new();
        doc.add(Circle::new().center(Point::new(1.0, 1.0)));
        let baseline = doc.render();
        let len = doc.len();

        doc.add(Circle::new().center(Point::new(2.0, 2.0)));
        doc.add(Circle::new().center(Point::new(3.0, 3.0)));
        assert_ne!(doc.render(), baseline);

        doc.truncate(len);
        assert_eq!(doc.render(), baseline);

        // Truncating past the end is a no-op.
        doc.truncate(100);
        assert_eq!(doc.render(), baseline);
    }
}
