//! `studyweave plan` — Build a study plan offline.
//!
//! Reads a JSON request file, runs the allocator locally, and prints the
//! day-by-day schedule (or the shortfalls) without contacting any provider.

use std::path::Path;

use chrono::NaiveDate;
use studyweave_core::study::PlanRequest;
use studyweave_planner::{PlanOutcome, build_plan};

pub fn run(file: &Path, start: Option<NaiveDate>) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(file)
        .map_err(|e| format!("Failed to read {}: {e}", file.display()))?;
    let request: PlanRequest = serde_json::from_str(&content)
        .map_err(|e| format!("Invalid plan request in {}: {e}", file.display()))?;

    let start = start
        .or(request.start_date)
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    match build_plan(&request, start)? {
        PlanOutcome::Feasible(schedule) => {
            println!("📅 Study plan starting {start}\n");
            for (date, allocations) in &schedule.0 {
                let total: f64 = allocations.iter().map(|a| a.hours).sum();
                println!("  {date}  ({total:.2}h)");
                for allocation in allocations {
                    println!("    {:<20} {:>5.2}h", allocation.subject, allocation.hours);
                }
            }
            println!();
            for subject in &request.subjects {
                println!(
                    "  {:<20} {:.2}h of {:.2}h scheduled (deadline {})",
                    subject.name,
                    schedule.total_for(&subject.name),
                    subject.min_hours_required,
                    subject.deadline
                );
            }
        }
        PlanOutcome::Infeasible(shortfalls) => {
            println!("❌ Plan is not feasible:\n");
            for s in &shortfalls {
                println!(
                    "  {:<20} needs {:.2}h, only {:.2}h available (short {:.2}h)",
                    s.subject, s.required_hours, s.available_hours, s.shortage
                );
            }
            println!("\nExtend a deadline or raise the daily hour budget.");
        }
    }

    Ok(())
}
