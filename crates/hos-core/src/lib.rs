//! `hos-core`: foundational types for the `hos` trip planner.
//!
//! This crate is a dependency of every other `hos-*` crate.  It has no
//! `hos-*` dependencies and minimal external ones (`chrono` and `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`status`]      | `DutyStatus` enum                                     |
//! | [`time`]        | `Span`, `SimClock`                                    |
//! | [`rules`]       | `HosRules` and the default regulatory constants       |
//! | [`error`]       | `HosError`, `HosResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | `HosRules` then loads from JSON with per-field defaults.   |

pub mod error;
pub mod rules;
pub mod status;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{HosError, HosResult};
pub use rules::HosRules;
pub use status::DutyStatus;
pub use time::{SimClock, Span};
