//! Integration tests for hos-output.

use chrono::{DateTime, TimeZone, Utc};

use hos_engine::{PlannerBuilder, ScheduleResult, TripInput};
use hos_route::{Route, RouteSegment};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, 6, 0, 0).unwrap()
}

/// Pickup 10 mi, deliver 40 mi: six periods, no rest rules.
fn short_trip() -> TripInput {
    TripInput::new(
        Route::new(vec![
            RouteSegment::from_miles(10.0, 10.0 / 55.0),
            RouteSegment::from_miles(40.0, 40.0 / 55.0),
        ]),
        0.0,
    )
}

fn plan(trip: &TripInput) -> ScheduleResult {
    PlannerBuilder::new(t0()).build().unwrap().plan(trip).unwrap()
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use super::*;
    use crate::{PeriodRow, TripSummaryRow};

    #[test]
    fn period_row_flattens_period() {
        let result = plan(&short_trip());
        let row = PeriodRow::from_period(3, 0, &result.periods[0]);
        assert_eq!(row.trip_id, 3);
        assert_eq!(row.seq, 0);
        assert_eq!(row.status.as_str(), "OnDutyNotDriving");
        assert_eq!(row.start, "2024-03-04T06:00:00.000Z");
        assert_eq!(row.end, "2024-03-04T06:30:00.000Z");
        assert_eq!(row.duration_minutes, 30.0);
        assert_eq!(row.note, "Pre-trip inspection");
    }

    #[test]
    fn summary_row_for_empty_result() {
        let row = TripSummaryRow::from_result(0, &ScheduleResult::empty());
        assert_eq!(row.period_count, 0);
        assert!(row.start.is_empty());
        assert!(row.end.is_empty());
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;
    use crate::ScheduleOutputObserver;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("schedule_periods.csv").exists());
        assert!(dir.path().join("trip_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("schedule_periods.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["trip_id", "seq", "status", "start", "end", "duration_minutes", "note", "cumulative_miles"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("trip_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["trip_id", "total_miles", "estimated_drive_hours", "period_count", "start", "end"]
        );
    }

    #[test]
    fn observer_writes_each_plan() {
        let dir = tmp();
        let planner = PlannerBuilder::new(t0()).build().unwrap();
        let mut obs = ScheduleOutputObserver::new(CsvWriter::new(dir.path()).unwrap());

        planner.plan_with(&short_trip(), &mut obs).unwrap();
        planner.plan_with(&TripInput::new(Route::empty(), 0.0), &mut obs).unwrap();
        planner.plan_with(&short_trip(), &mut obs).unwrap();
        assert_eq!(obs.trips_written(), 3);
        obs.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("schedule_periods.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 12);
        assert_eq!(&rows[0][0], "0");          // trip_id
        assert_eq!(&rows[0][2], "OnDutyNotDriving");
        assert_eq!(&rows[3][6], "Drive 40 mi");
        assert_eq!(&rows[5][5], "600.000");    // 10 h post-trip rest
        assert_eq!(&rows[6][0], "2");          // trip 1 was empty
        assert_eq!(&rows[6][1], "0");

        let mut rdr2 = csv::Reader::from_path(dir.path().join("trip_summaries.csv")).unwrap();
        let summaries: Vec<_> = rdr2.records().map(|r| r.unwrap()).collect();
        assert_eq!(summaries.len(), 3);
        assert_eq!(&summaries[0][1], "50");
        assert_eq!(&summaries[0][3], "6");
        assert_eq!(&summaries[1][3], "0");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn no_error_after_clean_run() {
        let dir = tmp();
        let mut obs = ScheduleOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        PlannerBuilder::new(t0()).build().unwrap().plan_with(&short_trip(), &mut obs).unwrap();
        assert!(obs.take_error().is_none());
    }
}

// ── SQLite ────────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::ScheduleOutputObserver;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_file_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("schedule.db").exists());
    }

    #[test]
    fn sqlite_plan_round_trip() {
        let dir = tmp();
        let mut obs = ScheduleOutputObserver::new(SqliteWriter::new(dir.path()).unwrap());
        PlannerBuilder::new(t0()).build().unwrap().plan_with(&short_trip(), &mut obs).unwrap();
        obs.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("schedule.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM schedule_periods WHERE trip_id = 0", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 6);

        let (status, minutes): (String, f64) = conn
            .query_row(
                "SELECT status, duration_minutes FROM schedule_periods WHERE trip_id = 0 AND seq = 5",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(status, "OffDuty");
        assert_eq!(minutes, 600.0);

        let miles: f64 = conn
            .query_row("SELECT total_miles FROM trip_summaries WHERE trip_id = 0", [], |r| r.get(0))
            .unwrap();
        assert_eq!(miles, 50.0);
    }
}
