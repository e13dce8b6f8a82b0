//! Feasibility pre-check: does each subject's required-hours minimum fit
//! inside its own deadline window, given the weekday/weekend budget split?
//!
//! The check runs for every subject independently and returns all
//! shortfalls; the caller decides whether to report the first or all of
//! them. It must run before allocation — a single infeasible subject
//! aborts the whole attempt.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use studyweave_core::study::Subject;

/// One subject that cannot meet its minimum hours before its deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shortfall {
    pub subject: String,
    pub required_hours: f64,
    pub available_hours: f64,
    /// required − available.
    pub shortage: f64,
}

/// Whether a date falls on the weekend budget.
pub(crate) fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Total study hours available between `start` and `end` inclusive.
///
/// Each day contributes `weekend_hours` on Saturday/Sunday, otherwise
/// `weekday_hours`. An `end` before `start` yields zero.
pub fn available_hours(
    start: NaiveDate,
    end: NaiveDate,
    weekday_hours: f64,
    weekend_hours: f64,
) -> f64 {
    let mut total = 0.0;
    let mut current = start;
    while current <= end {
        total += if is_weekend(current) {
            weekend_hours
        } else {
            weekday_hours
        };
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    total
}

/// Run the pre-check for every subject against its own deadline.
///
/// Returns the full list of shortfalls; empty means the plan is feasible
/// per subject.
pub fn check(
    subjects: &[Subject],
    weekday_hours: f64,
    weekend_hours: f64,
    start: NaiveDate,
) -> Vec<Shortfall> {
    let mut shortfalls = Vec::new();
    for subject in subjects {
        let available = available_hours(start, subject.deadline, weekday_hours, weekend_hours);
        if subject.min_hours_required > available {
            tracing::debug!(
                subject = %subject.name,
                required = subject.min_hours_required,
                available,
                "Subject cannot fit inside its deadline window"
            );
            shortfalls.push(Shortfall {
                subject: subject.name.clone(),
                required_hours: subject.min_hours_required,
                available_hours: available,
                shortage: subject.min_hours_required - available,
            });
        }
    }
    shortfalls
}
