//! Simulation time model.
//!
//! # Design
//!
//! Durations are held as a signed millisecond count (`Span`).  The mapping to
//! wall-clock time is held in `SimClock`:
//!
//!   now = start + elapsed
//!
//! Using an integer span as the canonical unit means every limit comparison
//! (`driving_today >= 11h`) is exact and a period that lasts a whole number of
//! minutes is reproduced exactly, however many periods precede it.  Fractional
//! hours (drive legs at an average speed) are rounded to the nearest
//! millisecond once, where they enter the model.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use chrono::{DateTime, TimeDelta, Utc};

use crate::{HosError, HosResult};

const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR:   i64 = 3_600_000;

// ── Span ─────────────────────────────────────────────────────────────────────

/// A length of simulated time, in milliseconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Span(pub i64);

impl Span {
    pub const ZERO: Span = Span(0);

    #[inline]
    pub const fn from_millis(ms: i64) -> Span {
        Span(ms)
    }

    #[inline]
    pub const fn from_minutes(minutes: i64) -> Span {
        Span(minutes * MS_PER_MINUTE)
    }

    #[inline]
    pub const fn from_hours(hours: i64) -> Span {
        Span(hours * MS_PER_HOUR)
    }

    /// Convert fractional hours, rounding to the nearest millisecond.
    ///
    /// Values beyond the `i64` range saturate.
    #[inline]
    pub fn from_hours_f64(hours: f64) -> Span {
        Span((hours * MS_PER_HOUR as f64).round() as i64)
    }

    #[inline]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn as_hours_f64(self) -> f64 {
        self.0 as f64 / MS_PER_HOUR as f64
    }

    #[inline]
    pub fn as_minutes_f64(self) -> f64 {
        self.0 as f64 / MS_PER_MINUTE as f64
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// `self - rhs`, floored at zero.
    #[inline]
    pub fn saturating_sub(self, rhs: Span) -> Span {
        Span(self.0.saturating_sub(rhs.0).max(0))
    }

    #[inline]
    pub fn to_chrono(self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.0)
    }
}

impl Add for Span {
    type Output = Span;
    #[inline]
    fn add(self, rhs: Span) -> Span {
        Span(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Span {
    #[inline]
    fn add_assign(&mut self, rhs: Span) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Span {
    type Output = Span;
    #[inline]
    fn sub(self, rhs: Span) -> Span {
        Span(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for Span {
    /// `H:MM`, rounded to the nearest minute.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let minutes = (self.0.abs() + MS_PER_MINUTE / 2) / MS_PER_MINUTE;
        write!(f, "{sign}{}:{:02}", minutes / 60, minutes % 60)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Maps elapsed simulated time onto absolute UTC timestamps.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Absolute timestamp of elapsed zero (trip start).
    pub start:   DateTime<Utc>,
    /// Time simulated so far.  Never decreases.
    pub elapsed: Span,
}

impl SimClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { start, elapsed: Span::ZERO }
    }

    /// Current absolute timestamp.
    #[inline]
    pub fn now(&self) -> DateTime<Utc> {
        self.start + self.elapsed.to_chrono()
    }

    /// Absolute timestamp at `offset` from the start, or `None` if it falls
    /// outside the range `chrono` can represent.
    pub fn checked_at(&self, offset: Span) -> Option<DateTime<Utc>> {
        TimeDelta::try_milliseconds(offset.0).and_then(|d| self.start.checked_add_signed(d))
    }

    /// Move the clock forward.
    ///
    /// Returns [`HosError::TimeOutOfRange`] and leaves the clock unchanged if
    /// the new time cannot be represented.
    ///
    /// # Panics
    /// Panics in debug mode if `by` is negative.
    pub fn advance(&mut self, by: Span) -> HosResult<()> {
        debug_assert!(by >= Span::ZERO, "clock cannot run backwards ({by:?})");
        let elapsed = self.elapsed + by;
        if self.checked_at(elapsed).is_none() {
            return Err(HosError::TimeOutOfRange(elapsed));
        }
        self.elapsed = elapsed;
        Ok(())
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{})", self.now().format("%Y-%m-%dT%H:%M:%SZ"), self.elapsed)
    }
}
