//! Planning many independent trips.

use crate::{PlanResult, Planner, ScheduleResult, TripInput};

/// Plan every trip in `trips` with the same planner.
///
/// Trips share nothing but the immutable [`Planner`], so with the `parallel`
/// feature they are planned on Rayon's thread pool.  Results are returned in
/// input order either way; one failing trip does not affect the others.
pub fn plan_many(planner: &Planner, trips: &[TripInput]) -> Vec<PlanResult<ScheduleResult>> {
    #[cfg(not(feature = "parallel"))]
    {
        trips.iter().map(|trip| planner.plan(trip)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        trips.par_iter().map(|trip| planner.plan(trip)).collect()
    }
}
