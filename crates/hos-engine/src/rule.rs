//! The rule table and the pure step function.
//!
//! # Precedence
//!
//! Each loop iteration evaluates [`RULE_TABLE`] top to bottom and fires the
//! first rule whose guard holds.  The order is part of the regulation model:
//! a break due at the same moment as the daily limit is taken first, and the
//! cycle restart is only considered once the day still has hours left.
//! [`Rule::Drive`] always applies, so exactly one rule fires per step.
//!
//! Only `Drive` consumes distance.  The other rules emit rest and return.

use hos_core::{DutyStatus, HosResult, HosRules, Span};

use crate::{DutySimState, PlanResult, SchedulePeriod};

// ── Rule ──────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// 30-minute break after 8 hours of driving.
    MandatoryBreak,
    /// 11-hour driving or 14-hour on-duty limit reached.
    DailyLimit,
    /// 70-hour cycle used up.
    CycleLimit,
    /// Drive one bounded leg, refuelling if the range runs out.
    Drive,
}

/// Rules in evaluation order.  The first match wins.
pub const RULE_TABLE: [Rule; 4] = [
    Rule::MandatoryBreak,
    Rule::DailyLimit,
    Rule::CycleLimit,
    Rule::Drive,
];

impl Rule {
    /// Guard: does this rule want to fire in `state`?
    pub fn applies(self, state: &DutySimState, rules: &HosRules) -> bool {
        match self {
            Rule::MandatoryBreak => state.driving_since_break >= rules.break_after(),
            Rule::DailyLimit => {
                state.driving_today >= rules.max_drive()
                    || state.on_duty_today >= rules.max_on_duty()
            }
            Rule::CycleLimit => state.cycle_used >= rules.cycle_limit(),
            Rule::Drive => true,
        }
    }

    /// Action: apply the rule to a copy of `state`.
    ///
    /// Fails only if a period would end outside the representable time range.
    pub fn fire(self, mut state: DutySimState, rules: &HosRules) -> HosResult<(DutySimState, Vec<SchedulePeriod>)> {
        let mut periods = Vec::with_capacity(2);
        match self {
            Rule::MandatoryBreak => {
                periods.push(state.emit(
                    DutyStatus::OffDuty,
                    rules.break_length(),
                    format!(
                        "{} min mandatory break (after {} hrs driving)",
                        rules.break_minutes, rules.break_after_hours
                    ),
                )?);
                state.driving_since_break = Span::ZERO;
            }

            Rule::DailyLimit => daily_rest(&mut state, rules, &mut periods)?,

            Rule::CycleLimit => {
                periods.push(state.emit(
                    DutyStatus::OffDuty,
                    rules.restart(),
                    format!(
                        "{} hr restart ({} hr / 8-day rule)",
                        rules.restart_hours, rules.cycle_limit_hours
                    ),
                )?);
                state.cycle_used = Span::ZERO;
            }

            Rule::Drive => drive_leg(&mut state, rules, &mut periods)?,
        }
        Ok((state, periods))
    }
}

// ── Step ──────────────────────────────────────────────────────────────────────

/// Outcome of one loop iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub rule:    Rule,
    pub state:   DutySimState,
    /// Zero, one, or two periods, in emission order.
    pub periods: Vec<SchedulePeriod>,
}

/// Fire the highest-priority applicable rule.  Pure: `state` is not modified.
pub fn step(state: &DutySimState, rules: &HosRules) -> PlanResult<Step> {
    let rule = RULE_TABLE
        .into_iter()
        .find(|r| r.applies(state, rules))
        .unwrap_or(Rule::Drive);
    let (state, periods) = rule.fire(*state, rules)?;
    Ok(Step { rule, state, periods })
}

// ── Rule actions ──────────────────────────────────────────────────────────────

/// Rest once the day's driving or on-duty window is used up.
///
/// Far from the destination the driver splits the rest: a sleeper-berth
/// portion capped by what is left of the on-duty window, then (only when more
/// than the completion threshold remains) an off-duty portion.  Near the
/// destination a single off-duty reset is taken.  All rest time is added to the
/// cycle counter.  A window that is already exhausted yields a zero-length
/// sleeper period.
fn daily_rest(state: &mut DutySimState, rules: &HosRules, periods: &mut Vec<SchedulePeriod>) -> HosResult<()> {
    if state.remaining_miles > rules.split_min_remaining_miles {
        let sleeper = rules
            .split_sleeper()
            .min(rules.max_on_duty().saturating_sub(state.on_duty_today));
        periods.push(state.emit(DutyStatus::SleeperBerth, sleeper, "Sleeper berth (split rest)")?);
        state.reset_daily();
        state.cycle_used += sleeper;

        if state.remaining_miles > rules.split_completion_min_remaining_miles {
            let rest = rules.split_off_duty().min(rules.off_duty_reset());
            periods.push(state.emit(DutyStatus::OffDuty, rest, "Off-duty completion of split rest")?);
            state.cycle_used += rest;
        }
    } else {
        let reset = rules.off_duty_reset();
        periods.push(state.emit(
            DutyStatus::OffDuty,
            reset,
            format!(
                "{} hr off-duty reset ({}/{} hr rule)",
                rules.off_duty_reset_hours, rules.max_drive_hours, rules.max_on_duty_hours
            ),
        )?);
        state.cycle_used += reset;
    }
    state.reset_daily();
    Ok(())
}

/// Drive one leg of at most `max_leg_miles`.
///
/// Leg time is capped by whatever is left of the daily driving allowance, the
/// on-duty window, and the driving-since-break allowance.  The leg distance is
/// not reduced by the cap.
fn drive_leg(state: &mut DutySimState, rules: &HosRules, periods: &mut Vec<SchedulePeriod>) -> HosResult<()> {
    let miles = state.remaining_miles.min(rules.max_leg_miles());
    let allowance = rules
        .max_drive()
        .saturating_sub(state.driving_today)
        .min(rules.max_on_duty().saturating_sub(state.on_duty_today))
        .min(rules.break_after().saturating_sub(state.driving_since_break));
    let hours = rules.drive_time(miles).min(allowance);

    periods.push(state.emit(DutyStatus::Driving, hours, format!("Drive {miles:.0} mi"))?);

    state.remaining_miles -= miles;
    state.miles_driven += miles;
    state.log_driving(hours);
    state.miles_until_fuel -= miles;

    if state.miles_until_fuel <= 0.0 && state.remaining_miles > 0.0 {
        let fuel = rules.fuel_stop();
        periods.push(state.emit(DutyStatus::OnDutyNotDriving, fuel, "Fuel stop")?);
        state.log_on_duty(fuel);
        state.miles_until_fuel = rules.fuel_range_miles;
    }
    Ok(())
}
