//! `hos-route`: route description and the route summarizer.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`segment`]   | `RouteSegment`, `Route`                                   |
//! | [`summary`]   | `summarize`, `RouteSummary`, `LegSummary`                 |
//! | [`loader`]    | `load_ors_geojson`, `load_route_json`, `load_segments_csv`|
//! | [`error`]     | `RouteError`, `RouteResult<T>`                            |
//!
//! A route arrives from an upstream directions service as an ordered list of
//! segments.  Order matters: the first segment is the leg to the pickup, the
//! rest run from pickup to dropoff.  This crate never talks to the network;
//! the loaders only parse bodies that were fetched elsewhere.

pub mod error;
pub mod loader;
pub mod segment;
pub mod summary;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use loader::{load_ors_geojson, load_route_json, load_segments_csv};
pub use segment::{Route, RouteSegment};
pub use summary::{LegSummary, RouteSummary, METERS_PER_MILE, SECONDS_PER_HOUR, round2, summarize};
