//! The Hours-of-Service rule set.
//!
//! Every regulatory number the planner uses lives in [`HosRules`] as a named
//! field.  [`HosRules::default`] carries the FMCSA property-carrying values
//! (70-hour / 8-day cycle); tests and applications override individual fields
//! to model other regimes without touching engine code:
//!
//! ```rust,ignore
//! let rules = HosRules { avg_speed_mph: 60.0, ..HosRules::default() };
//! ```
//!
//! Stop durations are whole minutes and limits are hours.  The `Span` accessor
//! methods convert them once into the engine's exact time unit.

use crate::{HosError, HosResult, Span};

// ── Default constants ─────────────────────────────────────────────────────────

pub const AVG_SPEED_MPH:           f64 = 55.0;
pub const MAX_LEG_HOURS:           f64 = 1.0;
pub const FUEL_RANGE_MILES:        f64 = 1000.0;

pub const PRE_TRIP_MIN:            u32 = 30;
pub const PICKUP_MIN:              u32 = 60;
pub const DROPOFF_MIN:             u32 = 60;
pub const FUEL_STOP_MIN:           u32 = 45;
pub const BREAK_MIN:               u32 = 30;

pub const BREAK_AFTER_HRS:         f64 = 8.0;
pub const MAX_DRIVE_HRS:           f64 = 11.0;
pub const MAX_ON_DUTY_HRS:         f64 = 14.0;
pub const OFF_DUTY_RESET_HRS:      f64 = 10.0;
pub const POST_TRIP_REST_HRS:      f64 = 10.0;
pub const CYCLE_LIMIT_HRS:         f64 = 70.0;
pub const RESTART_OFF_DUTY_HRS:    f64 = 34.0;

pub const SPLIT_SLEEPER_HRS:       f64 = 7.0;
pub const SPLIT_OFF_DUTY_HRS:      f64 = 3.0;
pub const SPLIT_MIN_REMAINING_MI:  f64 = 50.0;
pub const SPLIT_COMPLETION_MIN_MI: f64 = 100.0;

// ── HosRules ──────────────────────────────────────────────────────────────────

/// Immutable Hours-of-Service configuration injected into the planner.
///
/// With the `serde` feature every field is optional when deserialising;
/// missing fields take their [`Default`] value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HosRules {
    /// Average road speed used to turn miles into drive time.
    pub avg_speed_mph: f64,
    /// Longest single drive leg, in hours at `avg_speed_mph`.
    pub max_leg_hours: f64,
    /// Miles between fuel stops.
    pub fuel_range_miles: f64,

    pub pre_trip_minutes: u32,
    pub pickup_minutes: u32,
    pub dropoff_minutes: u32,
    pub fuel_stop_minutes: u32,
    /// Length of the mandatory off-duty break.
    pub break_minutes: u32,

    /// Driving since the last break that triggers a mandatory break.
    pub break_after_hours: f64,
    /// Daily driving limit (11-hour rule).
    pub max_drive_hours: f64,
    /// Daily on-duty window (14-hour rule).
    pub max_on_duty_hours: f64,
    /// Off-duty reset taken when the day runs out near the destination.
    pub off_duty_reset_hours: f64,
    /// Rest logged after the load is delivered.
    pub post_trip_rest_hours: f64,
    /// Rolling cycle limit (70 hours / 8 days).
    pub cycle_limit_hours: f64,
    /// Continuous off-duty period that zeroes the cycle.
    pub restart_hours: f64,

    /// Longest sleeper-berth portion of a split rest.
    pub split_sleeper_hours: f64,
    /// Off-duty portion completing a split rest.
    pub split_off_duty_hours: f64,
    /// A split rest is taken only with more than this many miles left.
    pub split_min_remaining_miles: f64,
    /// The off-duty completion is taken only with more than this many miles left.
    pub split_completion_min_remaining_miles: f64,
}

impl Default for HosRules {
    fn default() -> Self {
        Self {
            avg_speed_mph:                        AVG_SPEED_MPH,
            max_leg_hours:                        MAX_LEG_HOURS,
            fuel_range_miles:                     FUEL_RANGE_MILES,
            pre_trip_minutes:                     PRE_TRIP_MIN,
            pickup_minutes:                       PICKUP_MIN,
            dropoff_minutes:                      DROPOFF_MIN,
            fuel_stop_minutes:                    FUEL_STOP_MIN,
            break_minutes:                        BREAK_MIN,
            break_after_hours:                    BREAK_AFTER_HRS,
            max_drive_hours:                      MAX_DRIVE_HRS,
            max_on_duty_hours:                    MAX_ON_DUTY_HRS,
            off_duty_reset_hours:                 OFF_DUTY_RESET_HRS,
            post_trip_rest_hours:                 POST_TRIP_REST_HRS,
            cycle_limit_hours:                    CYCLE_LIMIT_HRS,
            restart_hours:                        RESTART_OFF_DUTY_HRS,
            split_sleeper_hours:                  SPLIT_SLEEPER_HRS,
            split_off_duty_hours:                 SPLIT_OFF_DUTY_HRS,
            split_min_remaining_miles:            SPLIT_MIN_REMAINING_MI,
            split_completion_min_remaining_miles: SPLIT_COMPLETION_MIN_MI,
        }
    }
}

impl HosRules {
    /// Check that the rule set can drive a simulation to completion.
    ///
    /// A non-positive speed or leg length would stall the drive loop, and a
    /// zero limit would make its rest rule fire on every iteration, so these
    /// are rejected here rather than discovered mid-run.
    pub fn validate(&self) -> HosResult<()> {
        for (name, value) in [
            ("avg_speed_mph",     self.avg_speed_mph),
            ("max_leg_hours",     self.max_leg_hours),
            ("break_after_hours", self.break_after_hours),
            ("max_drive_hours",   self.max_drive_hours),
            ("max_on_duty_hours", self.max_on_duty_hours),
            ("cycle_limit_hours", self.cycle_limit_hours),
        ] {
            positive(name, value)?;
        }

        for (name, value) in [
            ("fuel_range_miles",                     self.fuel_range_miles),
            ("off_duty_reset_hours",                 self.off_duty_reset_hours),
            ("post_trip_rest_hours",                 self.post_trip_rest_hours),
            ("restart_hours",                        self.restart_hours),
            ("split_sleeper_hours",                  self.split_sleeper_hours),
            ("split_off_duty_hours",                 self.split_off_duty_hours),
            ("split_min_remaining_miles",            self.split_min_remaining_miles),
            ("split_completion_min_remaining_miles", self.split_completion_min_remaining_miles),
        ] {
            non_negative(name, value)?;
        }
        Ok(())
    }

    /// Miles covered by one full-length drive leg.
    #[inline]
    pub fn max_leg_miles(&self) -> f64 {
        self.avg_speed_mph * self.max_leg_hours
    }

    /// Drive time for `miles` at the average speed.
    #[inline]
    pub fn drive_time(&self, miles: f64) -> Span {
        Span::from_hours_f64(miles / self.avg_speed_mph)
    }

    // ── Span accessors ────────────────────────────────────────────────────

    pub fn pre_trip(&self) -> Span {
        Span::from_minutes(self.pre_trip_minutes.into())
    }

    pub fn pickup(&self) -> Span {
        Span::from_minutes(self.pickup_minutes.into())
    }

    pub fn dropoff(&self) -> Span {
        Span::from_minutes(self.dropoff_minutes.into())
    }

    pub fn fuel_stop(&self) -> Span {
        Span::from_minutes(self.fuel_stop_minutes.into())
    }

    pub fn break_length(&self) -> Span {
        Span::from_minutes(self.break_minutes.into())
    }

    pub fn break_after(&self) -> Span {
        Span::from_hours_f64(self.break_after_hours)
    }

    pub fn max_drive(&self) -> Span {
        Span::from_hours_f64(self.max_drive_hours)
    }

    pub fn max_on_duty(&self) -> Span {
        Span::from_hours_f64(self.max_on_duty_hours)
    }

    pub fn off_duty_reset(&self) -> Span {
        Span::from_hours_f64(self.off_duty_reset_hours)
    }

    pub fn post_trip_rest(&self) -> Span {
        Span::from_hours_f64(self.post_trip_rest_hours)
    }

    pub fn cycle_limit(&self) -> Span {
        Span::from_hours_f64(self.cycle_limit_hours)
    }

    pub fn restart(&self) -> Span {
        Span::from_hours_f64(self.restart_hours)
    }

    pub fn split_sleeper(&self) -> Span {
        Span::from_hours_f64(self.split_sleeper_hours)
    }

    pub fn split_off_duty(&self) -> Span {
        Span::from_hours_f64(self.split_off_duty_hours)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn positive(name: &str, value: f64) -> HosResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(HosError::Config(format!("{name} must be a positive number, got {value}")))
    }
}

fn non_negative(name: &str, value: f64) -> HosResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(HosError::Config(format!("{name} must be a non-negative number, got {value}")))
    }
}
