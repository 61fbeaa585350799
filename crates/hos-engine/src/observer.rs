//! Planner observer trait for progress reporting and data collection.

use hos_route::RouteSummary;

use crate::{DutySimState, Rule, SchedulePeriod, ScheduleResult, TripInput};

/// Callbacks invoked by [`Planner::plan_with`][crate::Planner::plan_with] at
/// key points of a plan.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: rest counter
///
/// ```rust,ignore
/// struct RestCounter { restarts: usize }
///
/// impl PlanObserver for RestCounter {
///     fn on_step(&mut self, rule: Rule, _state: &DutySimState, _periods: &[SchedulePeriod]) {
///         if rule == Rule::CycleLimit {
///             self.restarts += 1;
///         }
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called once before the first period of a non-empty route.
    fn on_plan_start(&mut self, _trip: &TripInput, _summary: &RouteSummary) {}

    /// Called for every emitted period, in order.
    fn on_period(&mut self, _period: &SchedulePeriod) {}

    /// Called after each rule-loop iteration with the fired rule, the state it
    /// produced, and the periods it emitted (already passed to `on_period`).
    fn on_step(&mut self, _rule: Rule, _state: &DutySimState, _periods: &[SchedulePeriod]) {}

    /// Called once with the finished result, including for empty routes.
    fn on_plan_end(&mut self, _result: &ScheduleResult) {}
}

/// A [`PlanObserver`] that does nothing.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}
