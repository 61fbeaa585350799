//! The duty clock: simulation state threaded through the rule engine.

use chrono::{DateTime, Utc};
use hos_core::{DutyStatus, HosResult, HosRules, SimClock, Span};

use crate::SchedulePeriod;

/// Everything the rule engine knows about the driver mid-trip.
///
/// `DutySimState` is `Copy`: each [`step`][crate::step] takes one by value and
/// hands back its successor, so no rule mutates shared state.  Duty counters
/// are exact [`Span`]s and never go negative.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DutySimState {
    /// Current absolute time.  Never moves backwards.
    pub clock: SimClock,
    /// Miles driven since trip start.  Never decreases.
    pub miles_driven: f64,

    pub driving_today:       Span,
    pub on_duty_today:       Span,
    pub driving_since_break: Span,
    pub cycle_used:          Span,

    /// Counts down from the fuel range; reset after each fuel stop.
    pub miles_until_fuel: f64,
    /// Miles left after the pickup.  The plan loop ends when this reaches 0.
    pub remaining_miles: f64,
}

impl DutySimState {
    /// Fresh state at trip start with `cycle_used` already on the driver's clock.
    pub fn new(start: DateTime<Utc>, cycle_used: Span, rules: &HosRules) -> Self {
        Self {
            clock:               SimClock::new(start),
            miles_driven:        0.0,
            driving_today:       Span::ZERO,
            on_duty_today:       Span::ZERO,
            driving_since_break: Span::ZERO,
            cycle_used,
            miles_until_fuel:    rules.fuel_range_miles,
            remaining_miles:     0.0,
        }
    }

    /// Emit a period of `length` starting now, then advance the clock to its end.
    ///
    /// The period is annotated with the current `miles_driven`.  Because the
    /// clock moves here and nowhere else, consecutive emissions always abut.
    /// Fails, leaving the state untouched, if the period would end outside the
    /// representable time range.
    pub fn emit(&mut self, status: DutyStatus, length: Span, note: impl Into<String>) -> HosResult<SchedulePeriod> {
        let start = self.clock.now();
        self.clock.advance(length)?;
        Ok(SchedulePeriod {
            status,
            start,
            end: self.clock.now(),
            note: note.into(),
            cumulative_miles: self.miles_driven,
        })
    }

    /// Add on-duty, non-driving time to the daily window and the cycle.
    pub fn log_on_duty(&mut self, length: Span) {
        self.on_duty_today += length;
        self.cycle_used += length;
    }

    /// Add driving time to all four duty counters.
    pub fn log_driving(&mut self, length: Span) {
        self.driving_today += length;
        self.on_duty_today += length;
        self.driving_since_break += length;
        self.cycle_used += length;
    }

    /// Zero the short-term counters (everything except the cycle).
    pub fn reset_daily(&mut self) {
        self.driving_today = Span::ZERO;
        self.on_duty_today = Span::ZERO;
        self.driving_since_break = Span::ZERO;
    }
}
