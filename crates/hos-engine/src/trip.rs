//! The caller-owned trip description.

use hos_core::Span;
use hos_route::Route;

use crate::{PlanError, PlanResult};

/// A route plus the hours the driver has already used in the current cycle.
///
/// Read-only to the planner.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripInput {
    pub route:                    Route,
    pub current_cycle_used_hours: f64,
}

impl TripInput {
    pub fn new(route: Route, current_cycle_used_hours: f64) -> Self {
        Self { route, current_cycle_used_hours }
    }

    /// Reject negative or non-finite numbers before any simulation runs.
    ///
    /// A cycle value at or above the cycle limit is accepted: the restart rule
    /// fires on the first loop iteration.
    pub fn validate(&self) -> PlanResult<()> {
        let cycle = self.current_cycle_used_hours;
        if !cycle.is_finite() || cycle < 0.0 {
            return Err(PlanError::InvalidInput {
                field: "current_cycle_used_hours".into(),
                value: cycle,
            });
        }

        if let Some((i, seg)) = self.route.first_malformed() {
            let (field, value) = if !seg.distance_meters.is_finite() || seg.distance_meters < 0.0 {
                ("distance_meters", seg.distance_meters)
            } else {
                ("duration_seconds", seg.duration_seconds)
            };
            return Err(PlanError::InvalidInput {
                field: format!("route.segments[{i}].{field}"),
                value,
            });
        }
        Ok(())
    }

    /// Cycle hours already used, in the engine's time unit.
    pub fn cycle_used(&self) -> Span {
        Span::from_hours_f64(self.current_cycle_used_hours)
    }
}
