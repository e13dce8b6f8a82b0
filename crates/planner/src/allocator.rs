//! The day-by-day allocator.
//!
//! Walks every calendar day from the start date through the latest deadline
//! and splits that day's budget across the two most urgent subjects.
//! Urgency is `remaining_hours / days_until_deadline` (floored at one day,
//! so urgency naturally spikes on the deadline day itself). At most two
//! subjects are scheduled per day to keep context-switching bounded.
//!
//! The allocator is total: it never fails, and a schedule with unmet
//! remaining hours is still a schedule. Feasibility is the pre-check's
//! responsibility, not this loop's.

use chrono::NaiveDate;
use studyweave_core::study::{Allocation, Schedule, Subject};

use crate::feasibility::is_weekend;

/// How many subjects may share one day's budget.
const DAILY_MIX: usize = 2;

/// Round to two decimal places — the allocation step granularity.
///
/// Residual fractions of an hour that round below this step can stay
/// permanently unallocated; that slack is accepted, not corrected.
fn round2(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Produce a per-day allocation schedule.
///
/// Deterministic given identical inputs: subjects are ranked by urgency
/// descending with ties broken lexicographically by name, and the only
/// date used is the explicit `start`.
pub fn allocate(
    subjects: &[Subject],
    weekday_hours: f64,
    weekend_hours: f64,
    start: NaiveDate,
) -> Schedule {
    let mut schedule = Schedule::new();
    let Some(final_deadline) = subjects.iter().map(|s| s.deadline).max() else {
        return schedule;
    };

    // Scratch state local to this call: hours still owed per subject,
    // indexed in parallel with `subjects`.
    let mut remaining: Vec<f64> = subjects.iter().map(|s| s.min_hours_required).collect();

    let mut current = start;
    while current <= final_deadline {
        let budget = if is_weekend(current) {
            weekend_hours
        } else {
            weekday_hours
        };

        // Subjects still owed hours whose deadline has not passed.
        let mut urgencies: Vec<(usize, f64)> = Vec::new();
        for (idx, subject) in subjects.iter().enumerate() {
            if remaining[idx] > 0.0 && current <= subject.deadline {
                let days_left = (subject.deadline - current).num_days().max(1) as f64;
                urgencies.push((idx, remaining[idx] / days_left));
            }
        }

        if urgencies.is_empty() {
            // Nothing qualifies today; skip the day entirely.
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
            continue;
        }

        // Rank by urgency descending, ties broken by subject name.
        urgencies.sort_by(|a, b| {
            b.1.total_cmp(&a.1)
                .then_with(|| subjects[a.0].name.cmp(&subjects[b.0].name))
        });
        urgencies.truncate(DAILY_MIX);

        let total_urgency: f64 = urgencies.iter().map(|(_, u)| u).sum();

        let mut day_plan = Vec::with_capacity(urgencies.len());
        for &(idx, urgency) in &urgencies {
            // Qualifying subjects have remaining > 0 and days_left >= 1, so
            // total urgency is always positive; the even split only guards
            // the degenerate zero-sum case.
            let share = if total_urgency > 0.0 {
                urgency / total_urgency * budget
            } else {
                budget / urgencies.len() as f64
            };
            // Never allocate more than is still owed, even if the
            // proportional share suggests otherwise.
            let granted = remaining[idx].min(round2(share));
            if granted > 0.0 {
                day_plan.push(Allocation {
                    subject: subjects[idx].name.clone(),
                    hours: granted,
                });
                remaining[idx] -= granted;
            }
        }

        schedule.insert_day(current, day_plan);

        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    tracing::debug!(
        days = schedule.days().count(),
        unmet = remaining.iter().filter(|r| **r > 0.0).count(),
        "Allocation complete"
    );
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feasibility;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn subject(name: &str, hours: f64, deadline: &str) -> Subject {
        Subject {
            name: name.into(),
            min_hours_required: hours,
            deadline: date(deadline),
        }
    }

    // 2026-08-31 is a Monday; 2026-09-05/06 are Sat/Sun.
    const MON: &str = "2026-08-31";
    const FRI: &str = "2026-09-04";

    #[test]
    fn round2_behaviour() {
        assert_eq!(round2(1.3333333), 1.33);
        assert_eq!(round2(0.665), 0.67);
        assert_eq!(round2(2.0), 2.0);
    }

    #[test]
    fn zero_hour_subject_never_scheduled() {
        let subjects = [subject("Math", 0.0, FRI), subject("Physics", 4.0, FRI)];
        let schedule = allocate(&subjects, 2.0, 2.0, date(MON));
        assert_eq!(schedule.total_for("Math"), 0.0);
        for (_, day) in schedule.days() {
            assert!(day.iter().all(|a| a.subject != "Math"));
        }
    }

    #[test]
    fn daily_sum_never_exceeds_budget() {
        let subjects = [
            subject("Math", 10.0, "2026-09-11"),
            subject("Physics", 8.0, "2026-09-11"),
            subject("Chemistry", 6.0, "2026-09-06"),
        ];
        let schedule = allocate(&subjects, 3.0, 5.0, date(MON));
        for (&day, _) in schedule.days() {
            let budget = if feasibility::is_weekend(day) { 5.0 } else { 3.0 };
            assert!(
                schedule.day_total(day) <= budget + 1e-9,
                "day {day} over budget"
            );
        }
    }

    #[test]
    fn subject_total_never_exceeds_required() {
        let subjects = [
            subject("Math", 3.0, "2026-09-11"),
            subject("Physics", 2.5, "2026-09-11"),
        ];
        let schedule = allocate(&subjects, 4.0, 4.0, date(MON));
        assert!(schedule.total_for("Math") <= 3.0 + 1e-9);
        assert!(schedule.total_for("Physics") <= 2.5 + 1e-9);
    }

    #[test]
    fn no_allocation_after_deadline() {
        let subjects = [
            subject("Math", 20.0, "2026-09-02"),
            subject("Physics", 2.0, "2026-09-11"),
        ];
        let schedule = allocate(&subjects, 2.0, 2.0, date(MON));
        for (&day, plan) in schedule.days() {
            if day > date("2026-09-02") {
                assert!(plan.iter().all(|a| a.subject != "Math"));
            }
        }
    }

    #[test]
    fn daily_mix_when_two_subjects_qualify() {
        let subjects = [
            subject("Math", 6.0, FRI),
            subject("Physics", 4.0, FRI),
            subject("Chemistry", 5.0, FRI),
        ];
        let schedule = allocate(&subjects, 2.0, 2.0, date(MON));
        // More than one subject pending: every scheduled day mixes exactly
        // two distinct subjects (the top-2 cap).
        for (_, plan) in schedule.days() {
            let mut names: Vec<_> = plan.iter().map(|a| a.subject.as_str()).collect();
            names.dedup();
            assert_eq!(names.len(), plan.len(), "duplicate subject in one day");
            assert!(plan.len() >= 2, "expected a mix of at least 2 subjects");
            assert!(plan.len() <= 2, "daily mix cap exceeded");
        }
    }

    #[test]
    fn single_subject_fills_days_alone() {
        let subjects = [subject("Math", 8.0, FRI)];
        let schedule = allocate(&subjects, 2.0, 2.0, date(MON));
        assert!(!schedule.is_empty());
        for (_, plan) in schedule.days() {
            assert_eq!(plan.len(), 1);
            assert_eq!(plan[0].subject, "Math");
        }
        assert!((schedule.total_for("Math") - 8.0).abs() < 0.01);
    }

    #[test]
    fn determinism_identical_inputs_identical_output() {
        let subjects = [
            subject("Math", 9.0, "2026-09-11"),
            subject("Physics", 7.0, "2026-09-06"),
            subject("Biology", 4.0, "2026-09-04"),
        ];
        let a = allocate(&subjects, 2.0, 3.5, date(MON));
        let b = allocate(&subjects, 2.0, 3.5, date(MON));
        assert_eq!(a, b);
    }

    #[test]
    fn equal_urgency_tie_breaks_lexicographically() {
        // Identical hours and deadlines: urgency ties every day, so the
        // ranking falls back to name order.
        let subjects = [
            subject("Zoology", 4.0, FRI),
            subject("Algebra", 4.0, FRI),
            subject("Music", 4.0, FRI),
        ];
        let schedule = allocate(&subjects, 2.0, 2.0, date(MON));
        let (_, first_day) = schedule.days().next().unwrap();
        let names: Vec<_> = first_day.iter().map(|a| a.subject.as_str()).collect();
        assert_eq!(names, ["Algebra", "Music"]);
    }

    #[test]
    fn expired_deadlines_skip_days_entirely() {
        // Deadline passes mid-window relative to a later subject: once both
        // are done or expired, remaining days emit no entries.
        let subjects = [subject("Math", 2.0, "2026-09-01")];
        let schedule = allocate(&subjects, 2.0, 2.0, date(MON));
        assert!(schedule.days().all(|(&d, _)| d <= date("2026-09-01")));
    }

    #[test]
    fn start_after_all_deadlines_yields_empty_schedule() {
        let subjects = [subject("Math", 5.0, "2026-09-01")];
        let schedule = allocate(&subjects, 2.0, 2.0, date("2026-09-07"));
        assert!(schedule.is_empty());
    }

    #[test]
    fn zero_budget_yields_empty_schedule() {
        let subjects = [subject("Math", 5.0, FRI)];
        let schedule = allocate(&subjects, 0.0, 0.0, date(MON));
        assert!(schedule.is_empty());
    }

    #[test]
    fn combined_feasible_pair_is_exhausted_exactly() {
        // 6h + 4h over five 2h weekdays fills the window exactly; both
        // subjects finish within the rounding step.
        let subjects = [subject("Math", 6.0, FRI), subject("Physics", 4.0, FRI)];
        let schedule = allocate(&subjects, 2.0, 2.0, date(MON));
        assert!((schedule.total_for("Math") - 6.0).abs() <= 0.01);
        assert!((schedule.total_for("Physics") - 4.0).abs() <= 0.01);
        assert!(schedule.days().all(|(&d, _)| d <= date(FRI)));
    }

    #[test]
    fn per_subject_feasible_scenario_from_original() {
        // Math 10h + Physics 5h, five 2h weekdays: each subject fits its
        // own window (10h available ≥ each requirement) so the pre-check
        // passes, but the day loop still never overruns a day's budget or
        // schedules past the shared deadline.
        let subjects = [subject("Math", 10.0, FRI), subject("Physics", 5.0, FRI)];
        assert!(feasibility::check(&subjects, 2.0, 2.0, date(MON)).is_empty());

        let schedule = allocate(&subjects, 2.0, 2.0, date(MON));
        assert!(schedule.days().all(|(&d, _)| d <= date(FRI)));
        for (&day, _) in schedule.days() {
            assert!(schedule.day_total(day) <= 2.0 + 1e-9);
        }
        assert!(schedule.total_for("Math") <= 10.0 + 1e-9);
        assert!(schedule.total_for("Physics") <= 5.0 + 1e-9);
        // Both subjects studied every scheduled day.
        for (_, plan) in schedule.days() {
            assert_eq!(plan.len(), 2);
        }
    }

    #[test]
    fn urgency_prioritizes_least_slack() {
        // Biology is due first with the same hours, so it must appear on
        // day one ahead of the far-deadline subject.
        let subjects = [
            subject("History", 4.0, "2026-09-25"),
            subject("Biology", 4.0, "2026-09-02"),
            subject("Latin", 4.0, "2026-09-25"),
        ];
        let schedule = allocate(&subjects, 2.0, 2.0, date(MON));
        let (_, first_day) = schedule.days().next().unwrap();
        assert_eq!(first_day[0].subject, "Biology");
    }

    #[test]
    fn weekend_budget_applied_on_weekend_days() {
        // Sat 2026-09-05: single subject gets the full weekend budget.
        let subjects = [subject("Math", 10.0, "2026-09-06")];
        let schedule = allocate(&subjects, 0.0, 4.0, date("2026-09-05"));
        assert!((schedule.day_total(date("2026-09-05")) - 4.0).abs() < 1e-9);
        assert!((schedule.day_total(date("2026-09-06")) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn schedule_serializes_to_iso_keyed_map() {
        let subjects = [subject("Math", 2.0, "2026-09-01")];
        let schedule = allocate(&subjects, 2.0, 2.0, date(MON));
        let json = serde_json::to_value(&schedule).unwrap();
        assert!(json.get("2026-08-31").is_some());
    }
}
