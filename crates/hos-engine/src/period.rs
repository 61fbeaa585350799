//! Emitted schedule periods and the final result.

use chrono::{DateTime, Utc};
use hos_core::{DutyStatus, Span};

// ── SchedulePeriod ────────────────────────────────────────────────────────────

/// One duty-status period of the planned schedule.  Immutable once emitted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulePeriod {
    pub status: DutyStatus,
    pub start:  DateTime<Utc>,
    /// Never before `start`.
    pub end:    DateTime<Utc>,
    pub note:   String,
    /// Miles driven since trip start at the moment the period was emitted.
    /// For a driving period this excludes the leg it describes.
    pub cumulative_miles: f64,
}

impl SchedulePeriod {
    pub fn duration(&self) -> Span {
        Span::from_millis((self.end - self.start).num_milliseconds())
    }
}

// ── ScheduleResult ────────────────────────────────────────────────────────────

/// The planned schedule plus route totals (rounded to two decimals).
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleResult {
    /// Gap-free and time-ordered: each period starts where the previous ended.
    pub periods:               Vec<SchedulePeriod>,
    pub total_miles:           f64,
    pub estimated_drive_hours: f64,
}

impl ScheduleResult {
    /// The result for a route with no segments.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.periods.first().map(|p| p.start)
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.periods.last().map(|p| p.end)
    }

    /// Total time spent in each duty status, in [`DutyStatus::ALL`] order.
    pub fn time_by_status(&self) -> [(DutyStatus, Span); 4] {
        DutyStatus::ALL.map(|status| {
            let total = self
                .periods
                .iter()
                .filter(|p| p.status == status)
                .fold(Span::ZERO, |acc, p| acc + p.duration());
            (status, total)
        })
    }

    /// Time counted against the on-duty window: driving plus on-duty work.
    pub fn on_duty_time(&self) -> Span {
        self.periods
            .iter()
            .filter(|p| p.status.is_on_duty())
            .fold(Span::ZERO, |acc, p| acc + p.duration())
    }

    /// Like [`time_by_status`][Self::time_by_status], in fractional hours.
    pub fn hours_by_status(&self) -> [(DutyStatus, f64); 4] {
        self.time_by_status().map(|(s, t)| (s, t.as_hours_f64()))
    }
}
