//! The batch query engine: load, build, answer.

use log::info;

use atlas_core::Coord;
use atlas_graph::{Edge, EdgeKind, Router};
use atlas_render::NetworkMap;
use atlas_transit::{build_router, TransitStore};

use crate::error::EngineResult;
use crate::request::{BaseRequest, InputDocument, StatRequest};
use crate::response::{Response, RouteItem};

/// A fully built network ready to answer stat requests.
///
/// Construction runs the three build phases in order: apply base requests,
/// precompute the router, render the base map.  After that the engine only
/// mutates its overlay scratch buffer and the router's route cache, so
/// queries must be issued serially but may be issued forever.
pub struct Engine {
    store: TransitStore,
    router: Router,
    map: NetworkMap,
}

impl Engine {
    /// Build the network described by `document`'s settings and base
    /// requests.  The document's stat requests are ignored here; feed them
    /// to [`answer`](Self::answer) (or use [`process`](Self::process)).
    pub fn new(document: &InputDocument) -> EngineResult<Self> {
        let mut store = TransitStore::new();
        for request in &document.base_requests {
            match request {
                BaseRequest::Stop {
                    name,
                    latitude,
                    longitude,
                    road_distances,
                } => {
                    store.add_stop(name.clone(), Coord::new(*latitude, *longitude));
                    for (to, metres) in road_distances {
                        store.add_distance(name, to.clone(), *metres)?;
                    }
                }
                BaseRequest::Bus {
                    name,
                    is_roundtrip,
                    stops,
                } => {
                    store.add_bus(name.clone(), stops.clone(), !is_roundtrip);
                }
            }
        }
        info!(
            "loaded {} stops and {} buses",
            store.stop_count(),
            store.bus_count()
        );

        let router = build_router(&store, &document.routing_settings)?;
        let map = NetworkMap::render(&store, document.render_settings.clone())?;

        Ok(Self { store, router, map })
    }

    /// Build the network and answer a whole document in one call.
    pub fn process(document: &InputDocument) -> EngineResult<Vec<Response>> {
        let mut engine = Engine::new(document)?;
        document
            .stat_requests
            .iter()
            .map(|request| engine.answer(request))
            .collect()
    }

    /// Answer one stat request.  Missing entities come back as in-band
    /// `error_message` responses; only broken model invariants error out.
    pub fn answer(&mut self, request: &StatRequest) -> EngineResult<Response> {
        match request {
            StatRequest::Bus { id, name } => self.bus_info(*id, name),
            StatRequest::Stop { id, name } => self.stop_info(*id, name),
            StatRequest::Route { id, from, to } => self.route(*id, from, to),
            StatRequest::Map { id } => Ok(Response::Map {
                request_id: *id,
                map: self.map.svg().to_string(),
            }),
        }
    }

    // ── Per-request handlers ──────────────────────────────────────────────

    fn bus_info(&self, id: u64, name: &str) -> EngineResult<Response> {
        let Some(bus) = self.store.bus(name) else {
            return Ok(Response::not_found(id));
        };
        Ok(Response::Bus {
            request_id: id,
            stop_count: bus.total_stops(),
            unique_stop_count: bus.unique_stops(),
            route_length: bus.road_length(&self.store)?,
            curvature: bus.curvature(&self.store)?,
        })
    }

    fn stop_info(&self, id: u64, name: &str) -> EngineResult<Response> {
        if self.store.stop(name).is_none() {
            return Ok(Response::not_found(id));
        }
        Ok(Response::Stop {
            request_id: id,
            buses: self
                .store
                .buses_serving(name)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
    }

    fn route(&mut self, id: u64, from: &str, to: &str) -> EngineResult<Response> {
        let (Some(origin), Some(destination)) = (self.store.stop(from), self.store.stop(to))
        else {
            return Ok(Response::not_found(id));
        };

        let Some(summary) = self
            .router
            .build_route(origin.wait_vertex(), destination.wait_vertex())
        else {
            return Ok(Response::not_found(id));
        };

        let edges: Vec<&Edge> = (0..summary.edge_count as usize)
            .map(|k| self.router.graph().edge(self.router.route_edge(summary.id, k)))
            .collect();

        let items = edges
            .iter()
            .map(|edge| match edge.kind {
                EdgeKind::Wait => RouteItem::Wait {
                    stop_name: edge.label.clone(),
                    time: edge.weight,
                },
                EdgeKind::Ride => RouteItem::Bus {
                    bus: edge.label.clone(),
                    span_count: edge.span_count,
                    time: edge.weight,
                },
            })
            .collect();

        let map = self.map.render_route(&self.store, &edges)?;
        self.router.release_route(summary.id);

        Ok(Response::Route {
            request_id: id,
            total_time: summary.weight,
            items,
            map,
        })
    }
}
