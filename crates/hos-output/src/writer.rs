//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, PeriodRow, TripSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
pub trait OutputWriter {
    /// Write all periods of one trip.
    fn write_periods(&mut self, rows: &[PeriodRow]) -> OutputResult<()>;

    /// Write one trip summary row.
    fn write_summary(&mut self, row: &TripSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
