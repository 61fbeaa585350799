//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `schedule_periods.csv`
//! - `trip_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{OutputResult, PeriodRow, TripSummaryRow};
use crate::writer::OutputWriter;

/// Writes planned schedules to two CSV files.
pub struct CsvWriter {
    periods:   Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut periods = Writer::from_path(dir.join("schedule_periods.csv"))?;
        periods.write_record([
            "trip_id", "seq", "status", "start", "end", "duration_minutes", "note", "cumulative_miles",
        ])?;

        let mut summaries = Writer::from_path(dir.join("trip_summaries.csv"))?;
        summaries.write_record([
            "trip_id", "total_miles", "estimated_drive_hours", "period_count", "start", "end",
        ])?;

        Ok(Self {
            periods,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_periods(&mut self, rows: &[PeriodRow]) -> OutputResult<()> {
        for row in rows {
            self.periods.write_record(&[
                row.trip_id.to_string(),
                row.seq.to_string(),
                row.status.to_string(),
                row.start.clone(),
                row.end.clone(),
                format!("{:.3}", row.duration_minutes),
                row.note.clone(),
                format!("{:.2}", row.cumulative_miles),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &TripSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.trip_id.to_string(),
            row.total_miles.to_string(),
            row.estimated_drive_hours.to_string(),
            row.period_count.to_string(),
            row.start.clone(),
            row.end.clone(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.periods.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
