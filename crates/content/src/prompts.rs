//! Prompt and system-instruction builders for every study aid.
//!
//! Kept in one place so wording changes don't scatter across handlers.

/// System instruction for concise summaries.
pub const SUMMARY_SYSTEM: &str = "You are an expert at creating concise summaries. \
    Focus on key points. Make sure they are complete points.";

/// System instruction for quick topic explanations.
pub const EXPLAIN_SYSTEM: &str =
    "You are a helpful educational assistant. Provide clear explanations.";

/// System instruction for in-depth topic explanations.
pub const EXPLAIN_DETAILED_SYSTEM: &str =
    "You are an expert educator. Provide detailed explanations with examples.";

/// System instruction for expanding a raw allocation into a timetable.
pub const PLANNER_SYSTEM: &str = "You are an expert study planner. \
    Expand this structured allocation into a detailed timetable.";

pub fn summary_prompt(text: &str) -> String {
    format!("Summarize this text concisely:\n\n{text}")
}

pub fn explain_prompt(topic: &str) -> String {
    format!("Explain this topic clearly: {topic}")
}

pub fn explain_detailed_prompt(topic: &str) -> String {
    format!("Provide detailed explanation of: {topic}. Include examples and applications.")
}

pub fn flashcards_prompt(text: &str) -> String {
    format!(
        "Create exactly 10-15 flashcards from this text, only taking the important parts.\n\
         Return ONLY a JSON array in this format:\n\
         [{{\"question\": \"What is X?\", \"answer\": \"X is...\"}}]\n\n\
         Text:\n{text}\n\n\
         Return ONLY the JSON array, nothing else."
    )
}

pub fn quiz_prompt(text: &str) -> String {
    format!(
        "Create exactly 10 multiple choice questions from this text.\n\
         Return ONLY a JSON array in this format:\n\
         [{{\"question\": \"What is X?\", \"options\": [\"A\", \"B\", \"C\", \"D\"], \"correctAnswer\": 0}}]\n\n\
         Text:\n{text}\n\n\
         Return ONLY the JSON array, nothing else."
    )
}

/// The allocator's schedule, pretty-printed as JSON, framed for the model
/// to elaborate into a human-friendly plan. The hard constraints it must
/// keep are restated explicitly.
pub fn plan_elaboration_prompt(schedule_json: &str) -> String {
    format!(
        "Here is the base allocation of study hours per subject per day, produced by a \
         deterministic scheduler with subject-specific deadlines and a daily subject mix:\n\
         {schedule_json}\n\n\
         Convert this into a human-friendly study plan with:\n\
         - Specific time blocks (e.g. 9:00-11:00)\n\
         - Breaks\n\
         - Activity labels (Core Concepts, Practice Problems, etc.)\n\
         - Ensure total hours per subject match exactly the required minimums.\n\
         - Do not allocate any subject after its individual deadline.\n\
         - Each day must include a mix of at least 2 subjects (if more than one subject is pending)."
    )
}
