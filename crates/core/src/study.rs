//! Study-plan domain types: subjects, plan requests, and the produced
//! schedule.
//!
//! Dates are `chrono::NaiveDate` and travel over the wire in ISO
//! (`YYYY-MM-DD`) form. Malformed dates are rejected at deserialization,
//! before any allocation work begins.

use crate::error::PlanError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// One subject to study: a minimum number of hours that must be met by an
/// individual, inclusive deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique identifier for the subject.
    pub name: String,

    /// Minimum study hours required before the deadline. Non-negative.
    pub min_hours_required: f64,

    /// Inclusive calendar deadline (YYYY-MM-DD).
    pub deadline: NaiveDate,
}

/// What callers send to the feasibility check + allocator pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Subjects with their required hours and individual deadlines.
    pub subjects: Vec<Subject>,

    /// Daily hour budget on Monday–Friday.
    pub weekday_hours: f64,

    /// Daily hour budget on Saturday/Sunday.
    pub weekend_hours: f64,

    /// First day of the allocation window. Defaults to "today", resolved at
    /// the edge so the planner itself never reads the wall clock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

impl PlanRequest {
    /// Validate the request inputs. Runs before any allocation work;
    /// failures are returned as data, never raised as faults downstream.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.subjects.is_empty() {
            return Err(PlanError::NoSubjects);
        }
        if self.weekday_hours < 0.0 {
            return Err(PlanError::NegativeDailyHours {
                kind: "weekday".into(),
            });
        }
        if self.weekend_hours < 0.0 {
            return Err(PlanError::NegativeDailyHours {
                kind: "weekend".into(),
            });
        }

        let mut seen = HashSet::new();
        for subject in &self.subjects {
            if subject.name.trim().is_empty() {
                return Err(PlanError::EmptySubjectName);
            }
            if !seen.insert(subject.name.as_str()) {
                return Err(PlanError::DuplicateSubject(subject.name.clone()));
            }
            if subject.min_hours_required < 0.0 {
                return Err(PlanError::NegativeRequiredHours {
                    subject: subject.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// The latest deadline across all subjects, if any.
    pub fn final_deadline(&self) -> Option<NaiveDate> {
        self.subjects.iter().map(|s| s.deadline).max()
    }
}

/// Hours allocated to one subject on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub subject: String,
    pub hours: f64,
}

/// The complete per-day output of the allocator. Only days on which at
/// least one subject received hours are present. Date-ordered, so
/// serialization and iteration are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule(pub BTreeMap<NaiveDate, Vec<Allocation>>);

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a day's allocations. Empty day plans are never stored.
    pub fn insert_day(&mut self, date: NaiveDate, allocations: Vec<Allocation>) {
        if !allocations.is_empty() {
            self.0.insert(date, allocations);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn days(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<Allocation>)> {
        self.0.iter()
    }

    /// Total hours a subject received across the whole schedule.
    pub fn total_for(&self, subject: &str) -> f64 {
        self.0
            .values()
            .flatten()
            .filter(|a| a.subject == subject)
            .map(|a| a.hours)
            .sum()
    }

    /// Total hours allocated on one day.
    pub fn day_total(&self, date: NaiveDate) -> f64 {
        self.0
            .get(&date)
            .map(|day| day.iter().map(|a| a.hours).sum())
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn request(subjects: Vec<Subject>) -> PlanRequest {
        PlanRequest {
            subjects,
            weekday_hours: 2.0,
            weekend_hours: 3.0,
            start_date: None,
        }
    }

    #[test]
    fn valid_request_passes() {
        let req = request(vec![Subject {
            name: "Math".into(),
            min_hours_required: 10.0,
            deadline: date("2026-09-05"),
        }]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn empty_subjects_rejected() {
        assert_eq!(request(vec![]).validate(), Err(PlanError::NoSubjects));
    }

    #[test]
    fn negative_hours_rejected() {
        let req = request(vec![Subject {
            name: "Math".into(),
            min_hours_required: -1.0,
            deadline: date("2026-09-05"),
        }]);
        assert!(matches!(
            req.validate(),
            Err(PlanError::NegativeRequiredHours { .. })
        ));
    }

    #[test]
    fn duplicate_subject_rejected() {
        let subject = Subject {
            name: "Math".into(),
            min_hours_required: 1.0,
            deadline: date("2026-09-05"),
        };
        let req = request(vec![subject.clone(), subject]);
        assert_eq!(
            req.validate(),
            Err(PlanError::DuplicateSubject("Math".into()))
        );
    }

    #[test]
    fn negative_budget_rejected() {
        let mut req = request(vec![Subject {
            name: "Math".into(),
            min_hours_required: 1.0,
            deadline: date("2026-09-05"),
        }]);
        req.weekend_hours = -0.5;
        assert!(matches!(
            req.validate(),
            Err(PlanError::NegativeDailyHours { .. })
        ));
    }

    #[test]
    fn malformed_date_rejected_at_deserialization() {
        let json = r#"{"subjects":[{"name":"Math","min_hours_required":1.0,"deadline":"not-a-date"}],"weekday_hours":2.0,"weekend_hours":2.0}"#;
        assert!(serde_json::from_str::<PlanRequest>(json).is_err());
    }

    #[test]
    fn schedule_serializes_with_iso_date_keys() {
        let mut schedule = Schedule::new();
        schedule.insert_day(
            date("2026-09-01"),
            vec![Allocation {
                subject: "Math".into(),
                hours: 1.5,
            }],
        );
        let json = serde_json::to_string(&schedule).unwrap();
        assert!(json.contains("\"2026-09-01\""));
        assert!(json.contains("\"Math\""));
    }

    #[test]
    fn schedule_totals() {
        let mut schedule = Schedule::new();
        schedule.insert_day(
            date("2026-09-01"),
            vec![
                Allocation {
                    subject: "Math".into(),
                    hours: 1.5,
                },
                Allocation {
                    subject: "Physics".into(),
                    hours: 0.5,
                },
            ],
        );
        schedule.insert_day(
            date("2026-09-02"),
            vec![Allocation {
                subject: "Math".into(),
                hours: 2.0,
            }],
        );
        assert!((schedule.total_for("Math") - 3.5).abs() < 1e-9);
        assert!((schedule.day_total(date("2026-09-01")) - 2.0).abs() < 1e-9);
        assert_eq!(schedule.day_total(date("2026-09-03")), 0.0);
    }

    #[test]
    fn empty_day_never_stored() {
        let mut schedule = Schedule::new();
        schedule.insert_day(date("2026-09-01"), vec![]);
        assert!(schedule.is_empty());
    }

    #[test]
    fn final_deadline_is_max() {
        let req = request(vec![
            Subject {
                name: "Math".into(),
                min_hours_required: 1.0,
                deadline: date("2026-09-05"),
            },
            Subject {
                name: "Physics".into(),
                min_hours_required: 1.0,
                deadline: date("2026-09-10"),
            },
        ]);
        assert_eq!(req.final_deadline(), Some(date("2026-09-10")));
    }
}
