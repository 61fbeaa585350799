//! The `Planner` and its plan loop.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use hos_core::{DutyStatus, HosError, HosRules};
use hos_route::{round2, summarize};

use crate::{
    DutySimState, NoopObserver, PlanError, PlanObserver, PlanResult, Rule, SchedulePeriod,
    ScheduleResult, TripInput, step,
};

/// Turns a [`TripInput`] into an HOS-compliant [`ScheduleResult`].
///
/// A `Planner` holds only immutable configuration, so one instance can plan
/// any number of trips, including concurrently (see [`plan_many`][crate::plan_many]).
/// Each call owns its own [`DutySimState`] from start to finish.
///
/// Create via [`PlannerBuilder`][crate::PlannerBuilder].
#[derive(Clone, Debug)]
pub struct Planner {
    rules: HosRules,
    start: DateTime<Utc>,
}

impl Planner {
    pub(crate) fn from_parts(rules: HosRules, start: DateTime<Utc>) -> Self {
        Self { rules, start }
    }

    pub fn rules(&self) -> &HosRules {
        &self.rules
    }

    /// Timestamp of the first period of every plan.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Plan `trip` without callbacks.
    pub fn plan(&self, trip: &TripInput) -> PlanResult<ScheduleResult> {
        self.plan_with(trip, &mut NoopObserver)
    }

    /// Plan `trip`, reporting every period and rule step to `observer`.
    pub fn plan_with<O: PlanObserver>(&self, trip: &TripInput, observer: &mut O) -> PlanResult<ScheduleResult> {
        if let Err(e) = trip.validate() {
            warn!("rejected trip input: {e}");
            return Err(e);
        }

        let summary = summarize(&trip.route);
        if trip.route.is_empty() {
            let result = ScheduleResult::empty();
            observer.on_plan_end(&result);
            return Ok(result);
        }

        let rules = &self.rules;
        let mut state = DutySimState::new(self.start, trip.cycle_used(), rules);

        // The nominal drive time alone must fit the timestamp range.
        let nominal = rules.drive_time(summary.total_miles);
        if state.clock.checked_at(nominal).is_none() {
            warn!("rejected trip input: {:.0} mi does not fit the time range", summary.total_miles);
            return Err(HosError::TimeOutOfRange(nominal).into());
        }
        observer.on_plan_start(trip, &summary);

        let mut periods: Vec<SchedulePeriod> = Vec::new();

        // ── Pre-trip inspection ───────────────────────────────────────────
        let pre_trip = rules.pre_trip();
        let p = state.emit(DutyStatus::OnDutyNotDriving, pre_trip, "Pre-trip inspection")?;
        state.log_on_duty(pre_trip);
        record(&mut periods, observer, p);

        // ── Drive to pickup ───────────────────────────────────────────────
        //
        // The pickup leg is driven in one piece at the average speed; no
        // limits are checked until the rule loop starts.
        if let Some(leg) = trip.route.pickup_leg() {
            let miles = leg.miles();
            let hours = rules.drive_time(miles);
            let p = state.emit(DutyStatus::Driving, hours, format!("Drive {miles:.0} mi to pickup"))?;
            state.miles_driven += miles;
            state.log_driving(hours);
            record(&mut periods, observer, p);
        }

        // ── Pickup ────────────────────────────────────────────────────────
        let pickup = rules.pickup();
        let p = state.emit(DutyStatus::OnDutyNotDriving, pickup, "Pickup cargo")?;
        state.log_on_duty(pickup);
        record(&mut periods, observer, p);

        // ── Rule loop ─────────────────────────────────────────────────────
        state.remaining_miles = trip.route.delivery_miles();
        let mut iteration: u64 = 0;

        while state.remaining_miles > 0.0 {
            iteration += 1;
            let next = step(&state, rules)?;

            // Every step must change the state; a drive step must also
            // consume distance.  Anything else would loop forever.
            let stalled = next.state == state
                || (next.rule == Rule::Drive && next.state.remaining_miles >= state.remaining_miles);
            if stalled {
                return Err(PlanError::Stalled {
                    iteration,
                    remaining_miles: state.remaining_miles,
                });
            }

            debug!(
                "step {iteration}: {:?} at {} ({:.1} mi left)",
                next.rule, next.state.clock, next.state.remaining_miles
            );
            for p in &next.periods {
                record(&mut periods, observer, p.clone());
            }
            observer.on_step(next.rule, &next.state, &next.periods);
            state = next.state;
        }

        // ── Completion ────────────────────────────────────────────────────
        let dropoff = rules.dropoff();
        let p = state.emit(DutyStatus::OnDutyNotDriving, dropoff, "Unload cargo")?;
        state.log_on_duty(dropoff);
        record(&mut periods, observer, p);

        let p = state.emit(
            DutyStatus::OffDuty,
            rules.post_trip_rest(),
            format!("{} hr rest after trip", rules.post_trip_rest_hours),
        )?;
        record(&mut periods, observer, p);

        let result = ScheduleResult {
            periods,
            total_miles:           round2(summary.total_miles),
            estimated_drive_hours: round2(summary.estimated_drive_hours),
        };
        info!(
            "planned {:.2} mi in {} periods over {} loop steps, ending {}",
            result.total_miles,
            result.periods.len(),
            iteration,
            state.clock,
        );
        observer.on_plan_end(&result);
        Ok(result)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Append `period` to the schedule and notify the observer.
fn record<O: PlanObserver>(periods: &mut Vec<SchedulePeriod>, observer: &mut O, period: SchedulePeriod) {
    debug_assert!(
        periods.last().is_none_or(|last| last.end == period.start),
        "schedule gap before {period:?}"
    );
    debug!("{} {} +{} {}", period.status, period.start, period.duration(), period.note);
    observer.on_period(&period);
    periods.push(period);
}
