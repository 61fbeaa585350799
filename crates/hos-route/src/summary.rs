//! The route summarizer.
//!
//! Reduces a route to two totals.  Pure: the same route always yields the
//! same summary and the input is never touched.  Rounding to two decimals is
//! applied only by [`RouteSummary::rounded`], at the result boundary.

use crate::{Route, RouteSegment};

/// Metres in one statute mile, as used by the directions service.
pub const METERS_PER_MILE:  f64 = 1609.34;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Totals over every segment of a route, at full precision.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct RouteSummary {
    pub total_miles:           f64,
    /// Nominal drive time reported by the directions service (no stops).
    pub estimated_drive_hours: f64,
}

impl RouteSummary {
    /// Both totals rounded to two decimal places.
    pub fn rounded(self) -> Self {
        Self {
            total_miles:           round2(self.total_miles),
            estimated_drive_hours: round2(self.estimated_drive_hours),
        }
    }
}

/// Sum segment distances and durations, converted to miles and hours.
pub fn summarize(route: &Route) -> RouteSummary {
    let (meters, seconds) = route
        .segments
        .iter()
        .fold((0.0, 0.0), |(m, s), seg| (m + seg.distance_meters, s + seg.duration_seconds));

    RouteSummary {
        total_miles:           meters / METERS_PER_MILE,
        estimated_drive_hours: seconds / SECONDS_PER_HOUR,
    }
}

/// Kilometre/hour view of a single leg, rounded to two decimals.
///
/// The API layer reports this for the pickup leg alongside the schedule.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LegSummary {
    pub distance_km:    f64,
    pub duration_hours: f64,
}

impl LegSummary {
    pub fn of(segment: &RouteSegment) -> Self {
        Self {
            distance_km:    round2(segment.distance_meters / 1000.0),
            duration_hours: round2(segment.duration_seconds / SECONDS_PER_HOUR),
        }
    }
}

/// Round to two decimal places, halves away from zero.
#[inline]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
