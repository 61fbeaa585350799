//! `hos-engine`: the Hours-of-Service trip planner.
//!
//! # Plan loop
//!
//! ```text
//! ① Pre-trip   : 30 min on-duty inspection.
//! ② To pickup  : drive the first route segment at the average speed.
//! ③ Pickup     : 60 min on-duty loading.
//! ④ Rule loop  : while miles remain, the first matching rule fires:
//!                   MandatoryBreak  8 h driving since last break → 30 min off
//!                   DailyLimit      11 h driving or 14 h on duty  → split or 10 h rest
//!                   CycleLimit      70 h in cycle                 → 34 h restart
//!                   Drive           one bounded leg (+ fuel stop when due)
//! ⑤ Completion : 60 min unload, then 10 h off-duty rest.
//! ```
//!
//! Each loop iteration is a pure [`step`]: it takes a [`DutySimState`] and
//! returns the next state plus the periods it emitted.  The rule order lives
//! in [`RULE_TABLE`]; reordering it changes legal outcomes.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`plan_many`] plans trips on Rayon's thread pool.      |
//! | `serde`    | Serde derives on `TripInput`, periods, and results.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hos_engine::{PlannerBuilder, TripInput};
//!
//! let planner = PlannerBuilder::new(start).build()?;
//! let result = planner.plan(&TripInput::new(route, 12.5))?;
//! for p in &result.periods {
//!     println!("{} {} → {} {}", p.status, p.start, p.end, p.note);
//! }
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod observer;
pub mod period;
pub mod planner;
pub mod rule;
pub mod state;
pub mod trip;


pub use batch::plan_many;
pub use builder::PlannerBuilder;
pub use error::{PlanError, PlanResult};
pub use observer::{NoopObserver, PlanObserver};
pub use period::{SchedulePeriod, ScheduleResult};
pub use planner::Planner;
pub use rule::{RULE_TABLE, Rule, Step, step};
pub use state::DutySimState;
pub use trip::TripInput;
