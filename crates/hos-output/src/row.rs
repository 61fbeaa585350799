//! Plain data row types written by output backends.

use chrono::{DateTime, SecondsFormat, Utc};

use hos_core::DutyStatus;
use hos_engine::{SchedulePeriod, ScheduleResult};

/// One schedule period, flattened for tabular output.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodRow {
    pub trip_id:          u64,
    /// Position within the trip, from 0.
    pub seq:              u32,
    pub status:           DutyStatus,
    /// RFC 3339 UTC, millisecond precision.
    pub start:            String,
    pub end:              String,
    pub duration_minutes: f64,
    pub note:             String,
    pub cumulative_miles: f64,
}

impl PeriodRow {
    pub fn from_period(trip_id: u64, seq: u32, p: &SchedulePeriod) -> Self {
        Self {
            trip_id,
            seq,
            status:           p.status,
            start:            timestamp(p.start),
            end:              timestamp(p.end),
            duration_minutes: p.duration().as_minutes_f64(),
            note:             p.note.clone(),
            cumulative_miles: p.cumulative_miles,
        }
    }
}

/// Totals for one planned trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSummaryRow {
    pub trip_id:               u64,
    pub total_miles:           f64,
    pub estimated_drive_hours: f64,
    pub period_count:          u32,
    /// Empty for an empty route.
    pub start:                 String,
    pub end:                   String,
}

impl TripSummaryRow {
    pub fn from_result(trip_id: u64, r: &ScheduleResult) -> Self {
        Self {
            trip_id,
            total_miles:           r.total_miles,
            estimated_drive_hours: r.estimated_drive_hours,
            period_count:          r.periods.len() as u32,
            start:                 r.start().map(timestamp).unwrap_or_default(),
            end:                   r.end().map(timestamp).unwrap_or_default(),
        }
    }
}

fn timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}
