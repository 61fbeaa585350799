//! `ScheduleOutputObserver<W>`: bridges `PlanObserver` to an `OutputWriter`.

use hos_engine::{PlanObserver, ScheduleResult};

use crate::row::{PeriodRow, TripSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`PlanObserver`] that writes every finished plan to any [`OutputWriter`]
/// backend (CSV, SQLite, …).
///
/// Trips are numbered from 0 in the order their plans finish, so one observer
/// can be reused across many `plan_with` calls.  Errors from the writer are
/// stored internally because `PlanObserver` methods have no return value.
/// After planning, check with [`take_error`][Self::take_error] or call
/// [`finish`][Self::finish], which reports it.
pub struct ScheduleOutputObserver<W: OutputWriter> {
    writer:       W,
    next_trip_id: u64,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> ScheduleOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            next_trip_id: 0,
            last_error:   None,
        }
    }

    /// Number of plans written so far.
    pub fn trips_written(&self) -> u64 {
        self.next_trip_id
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer, surfacing any error stored during planning first.
    pub fn finish(&mut self) -> OutputResult<()> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files afterwards).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_plan(&mut self, trip_id: u64, result: &ScheduleResult) -> OutputResult<()> {
        let rows: Vec<PeriodRow> = result
            .periods
            .iter()
            .enumerate()
            .map(|(seq, p)| PeriodRow::from_period(trip_id, seq as u32, p))
            .collect();

        if !rows.is_empty() {
            self.writer.write_periods(&rows)?;
        }
        self.writer.write_summary(&TripSummaryRow::from_result(trip_id, result))
    }
}

impl<W: OutputWriter> PlanObserver for ScheduleOutputObserver<W> {
    fn on_plan_end(&mut self, result: &ScheduleResult) {
        let trip_id = self.next_trip_id;
        self.next_trip_id += 1;
        if let Err(e) = self.write_plan(trip_id, result) {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}
