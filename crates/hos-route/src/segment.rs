//! Route segments and the ordered route they form.

use crate::summary::{METERS_PER_MILE, SECONDS_PER_HOUR};

// ── RouteSegment ──────────────────────────────────────────────────────────────

/// One leg of a route as reported by the directions service.
///
/// Values are expected to be non-negative; the planner rejects anything else
/// before simulating.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSegment {
    pub distance_meters:  f64,
    pub duration_seconds: f64,
}

impl RouteSegment {
    pub const fn new(distance_meters: f64, duration_seconds: f64) -> Self {
        Self { distance_meters, duration_seconds }
    }

    /// Build a segment from miles and hours (handy in tests and fixtures).
    pub fn from_miles(miles: f64, hours: f64) -> Self {
        Self {
            distance_meters:  miles * METERS_PER_MILE,
            duration_seconds: hours * SECONDS_PER_HOUR,
        }
    }

    #[inline]
    pub fn miles(&self) -> f64 {
        self.distance_meters / METERS_PER_MILE
    }

    #[inline]
    pub fn hours(&self) -> f64 {
        self.duration_seconds / SECONDS_PER_HOUR
    }

    /// `true` if both values are finite and non-negative.
    pub fn is_well_formed(&self) -> bool {
        self.distance_meters.is_finite()
            && self.duration_seconds.is_finite()
            && self.distance_meters >= 0.0
            && self.duration_seconds >= 0.0
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered route: pickup leg first, delivery legs after.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub segments: Vec<RouteSegment>,
}

impl Route {
    pub fn new(segments: Vec<RouteSegment>) -> Self {
        Self { segments }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// The leg from the driver's current location to the pickup.
    pub fn pickup_leg(&self) -> Option<&RouteSegment> {
        self.segments.first()
    }

    /// Legs from pickup to dropoff (everything after the first segment).
    pub fn delivery_legs(&self) -> &[RouteSegment] {
        self.segments.get(1..).unwrap_or(&[])
    }

    /// Miles left to drive once the pickup is done.
    pub fn delivery_miles(&self) -> f64 {
        self.delivery_legs().iter().map(|s| s.distance_meters).sum::<f64>() / METERS_PER_MILE
    }

    /// Index and value of the first segment that is not well formed.
    pub fn first_malformed(&self) -> Option<(usize, &RouteSegment)> {
        self.segments
            .iter()
            .enumerate()
            .find(|(_, s)| !s.is_well_formed())
    }
}

impl FromIterator<RouteSegment> for Route {
    fn from_iter<I: IntoIterator<Item = RouteSegment>>(iter: I) -> Self {
        Self { segments: iter.into_iter().collect() }
    }
}
