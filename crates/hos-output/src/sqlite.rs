//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `schedule.db` file in the configured output directory with
//! two tables: `schedule_periods` and `trip_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::{OutputResult, PeriodRow, TripSummaryRow};
use crate::writer::OutputWriter;

/// Writes planned schedules to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `schedule.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("schedule.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS schedule_periods (
                 trip_id          INTEGER NOT NULL,
                 seq              INTEGER NOT NULL,
                 status           TEXT    NOT NULL,
                 start_at         TEXT    NOT NULL,
                 end_at           TEXT    NOT NULL,
                 duration_minutes REAL    NOT NULL,
                 note             TEXT    NOT NULL,
                 cumulative_miles REAL    NOT NULL,
                 PRIMARY KEY (trip_id, seq)
             );
             CREATE TABLE IF NOT EXISTS trip_summaries (
                 trip_id               INTEGER PRIMARY KEY,
                 total_miles           REAL    NOT NULL,
                 estimated_drive_hours REAL    NOT NULL,
                 period_count          INTEGER NOT NULL,
                 start_at              TEXT    NOT NULL,
                 end_at                TEXT    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_periods(&mut self, rows: &[PeriodRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO schedule_periods \
                 (trip_id, seq, status, start_at, end_at, duration_minutes, note, cumulative_miles) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.trip_id as i64,
                    row.seq,
                    row.status.as_str(),
                    row.start,
                    row.end,
                    row.duration_minutes,
                    row.note,
                    row.cumulative_miles,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, row: &TripSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO trip_summaries \
             (trip_id, total_miles, estimated_drive_hours, period_count, start_at, end_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.trip_id as i64,
                row.total_miles,
                row.estimated_drive_hours,
                row.period_count,
                row.start,
                row.end,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
