//! Fluent builder for constructing a [`Planner`].

use chrono::{DateTime, Utc};
use hos_core::HosRules;

use crate::{Planner, PlanResult};

/// Fluent builder for [`Planner`].
///
/// The trip start time is required so that plans are reproducible.  The rule
/// set defaults to [`HosRules::default`].
///
/// ```rust,ignore
/// let planner = PlannerBuilder::new(start)
///     .rules(HosRules { avg_speed_mph: 60.0, ..HosRules::default() })
///     .build()?;
/// ```
pub struct PlannerBuilder {
    start: DateTime<Utc>,
    rules: Option<HosRules>,
}

impl PlannerBuilder {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { start, rules: None }
    }

    /// Replace the default rule set.
    pub fn rules(mut self, rules: HosRules) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Validate the rule set and return a ready-to-use [`Planner`].
    pub fn build(self) -> PlanResult<Planner> {
        let rules = self.rules.unwrap_or_default();
        rules.validate()?;
        Ok(Planner::from_parts(rules, self.start))
    }
}
