//! `hos-output`: schedule writers for the hos trip planner.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend     | Files created                                    |
//! |-----------|-------------|--------------------------------------------------|
//! | *(none)*  | CSV         | `schedule_periods.csv`, `trip_summaries.csv`     |
//! | `sqlite`  | SQLite      | `schedule.db`                                    |
//!
//! Both backends implement [`OutputWriter`] and are driven by
//! [`ScheduleOutputObserver`], which implements `hos_engine::PlanObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hos_output::{CsvWriter, ScheduleOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ScheduleOutputObserver::new(writer);
//! planner.plan_with(&trip, &mut obs)?;
//! obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ScheduleOutputObserver;
pub use row::{PeriodRow, TripSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
