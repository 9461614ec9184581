//! Unit tests for atlas-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, RouteId, VertexId};

    #[test]
    fn index_roundtrip() {
        let id = VertexId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VertexId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(VertexId(0) < VertexId(1));
        assert!(EdgeId(100) > EdgeId(99));
    }

    #[test]
    fn display() {
        assert_eq!(RouteId(7).to_string(), "RouteId(7)");
    }

    #[test]
    fn stop_vertex_pairing() {
        // The k-th inserted stop owns vertices 2k (wait-in) and 2k+1 (board).
        let wait = VertexId(2 * 3);
        let board = VertexId(2 * 3 + 1);
        assert_eq!(board.index(), wait.index() + 1);
    }
}

#[cfg(test)]
mod error {
    use crate::AtlasError;

    #[test]
    fn display_names_the_missing_entity() {
        assert_eq!(
            AtlasError::StopNotFound("Apteka".into()).to_string(),
            "stop \"Apteka\" not found"
        );
        assert_eq!(
            AtlasError::BusNotFound("828".into()).to_string(),
            "bus \"828\" not found"
        );
    }
}

#[cfg(test)]
mod geo {
    use crate::{Coord, GeoRect};

    #[test]
    fn zero_distance() {
        let p = Coord::new(55.611087, 37.20829);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.2 km on the 6371 km sphere
        let a = Coord::new(55.0, 37.0);
        let b = Coord::new(56.0, 37.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = Coord::new(55.574371, 37.6517);
        let b = Coord::new(55.581065, 37.64839);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-9);
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let rect = GeoRect::empty();
        assert!(rect.is_empty());
        assert!(!rect.contains(Coord::new(0.0, 0.0)));
    }

    #[test]
    fn extend_grows_bounds() {
        let mut rect = GeoRect::empty();
        rect.extend(Coord::new(55.6, 37.6));
        assert!(!rect.is_empty());
        assert!(rect.contains(Coord::new(55.6, 37.6)));

        rect.extend(Coord::new(55.7, 37.7));
        assert!(rect.contains(Coord::new(55.65, 37.65)));
        assert!(!rect.contains(Coord::new(55.8, 37.65)));
        assert_eq!(rect.min().latitude, 55.6);
        assert_eq!(rect.max().longitude, 37.7);
    }
}
