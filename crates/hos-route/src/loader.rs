//! Route loaders.
//!
//! # OpenRouteService GeoJSON
//!
//! The directions endpoint (`/v2/directions/driving-car/geojson`) answers with
//! a `FeatureCollection`.  Segment totals sit under the first feature:
//!
//! ```json
//! { "features": [ { "properties": { "segments": [
//!     { "distance": 16093.4, "duration": 654.5, "steps": [ … ] },
//!     { "distance": 64373.6, "duration": 2618.2, "steps": [ … ] }
//! ] } } ] }
//! ```
//!
//! Only `distance` (metres) and `duration` (seconds) are read; everything else
//! (geometry, steps, way points) is ignored.  A body with no features, or a
//! first feature without `segments`, yields an empty [`Route`].  An error body
//! (`{ "error": … }`) is reported as [`RouteError::Parse`].
//!
//! # CSV format
//!
//! One row per segment, in route order:
//!
//! ```csv
//! distance_meters,duration_seconds
//! 16093.4,654.5
//! 64373.6,2618.2
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::{Route, RouteError, RouteResult, RouteSegment};

// ── Wire records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct OrsCollection {
    #[serde(default)]
    features: Vec<OrsFeature>,
    /// Present instead of `features` when the service rejected the request.
    #[serde(default)]
    error:    Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct OrsFeature {
    #[serde(default)]
    properties: OrsProperties,
}

#[derive(Deserialize, Default)]
struct OrsProperties {
    #[serde(default)]
    segments: Vec<OrsSegment>,
}

#[derive(Deserialize)]
struct OrsSegment {
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
}

#[derive(Deserialize)]
struct SegmentRecord {
    distance_meters:  f64,
    duration_seconds: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse an OpenRouteService directions GeoJSON body.
pub fn load_ors_geojson<R: Read>(reader: R) -> RouteResult<Route> {
    let body: OrsCollection = serde_json::from_reader(reader)?;
    if let Some(err) = body.error {
        return Err(RouteError::Parse(format!("directions service returned an error: {err}")));
    }

    let route: Route = body
        .features
        .into_iter()
        .next()
        .map(|f| {
            f.properties
                .segments
                .into_iter()
                .map(|s| RouteSegment::new(s.distance, s.duration))
                .collect()
        })
        .unwrap_or_default();

    debug!("loaded {} route segments from GeoJSON", route.len());
    Ok(route)
}

/// Like [`load_ors_geojson`] but opens `path` first.
pub fn load_route_json(path: &Path) -> RouteResult<Route> {
    let file = File::open(path)?;
    load_ors_geojson(BufReader::new(file))
}

/// Load segments from CSV (`distance_meters,duration_seconds`).
///
/// Accepts any `Read` source; pass a `std::io::Cursor` in tests.
pub fn load_segments_csv<R: Read>(reader: R) -> RouteResult<Route> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut segments = Vec::new();

    for result in csv_reader.deserialize::<SegmentRecord>() {
        let row = result?;
        segments.push(RouteSegment::new(row.distance_meters, row.duration_seconds));
    }

    debug!("loaded {} route segments from CSV", segments.len());
    Ok(Route::new(segments))
}
