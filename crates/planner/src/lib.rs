//! Study-time allocation engine.
//!
//! A pure, synchronous, deterministic library: given subjects (each with
//! required hours and an individual deadline) and a weekday/weekend hour
//! budget, it produces a day-by-day allocation of hours per subject. No
//! I/O, no wall-clock reads, no shared state — safe to call concurrently
//! for independent requests.
//!
//! Two stages:
//! - [`feasibility::check`] — per-subject pre-check that the required hours
//!   fit inside that subject's own deadline window;
//! - [`allocator::allocate`] — the day loop itself, which is total and
//!   always returns a schedule.

pub mod allocator;
pub mod feasibility;

pub use allocator::allocate;
pub use feasibility::{Shortfall, available_hours, check};

use chrono::NaiveDate;
use studyweave_core::error::PlanError;
use studyweave_core::study::{PlanRequest, Schedule};

/// Outcome of a full plan attempt: either a schedule, or the list of
/// subjects that cannot fit. Infeasibility is data, not a fault.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    Feasible(Schedule),
    Infeasible(Vec<Shortfall>),
}

/// Validate, pre-check, and allocate in one call.
///
/// `start` must already be resolved by the caller (the "default to today"
/// rule lives at the edge, not here). Any single infeasible subject aborts
/// the whole attempt — no subject is silently dropped.
pub fn build_plan(request: &PlanRequest, start: NaiveDate) -> Result<PlanOutcome, PlanError> {
    request.validate()?;

    let shortfalls = feasibility::check(
        &request.subjects,
        request.weekday_hours,
        request.weekend_hours,
        start,
    );
    if !shortfalls.is_empty() {
        return Ok(PlanOutcome::Infeasible(shortfalls));
    }

    let schedule = allocator::allocate(
        &request.subjects,
        request.weekday_hours,
        request.weekend_hours,
        start,
    );
    Ok(PlanOutcome::Feasible(schedule))
}
