//! Schema validation for structured study aids returned as free text.
//!
//! The model is asked for a bare JSON array but routinely wraps it in
//! prose or code fences. The pipeline is: locate the outermost JSON-ish
//! fragment, parse it, validate each item, drop what doesn't conform.
//! When nothing survives, the result is a tagged placeholder — never a
//! parse fault.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A question/answer flashcard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

/// One multiple-choice quiz item: four options, one correct index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizItem {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: usize,
}

/// Outcome of validating a batch of structured items.
///
/// `Validated` carries the items that passed the schema check (invalid
/// ones already dropped). `Placeholder` means nothing usable came back
/// and the caller is holding substitute content.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredItems<T> {
    Validated(Vec<T>),
    Placeholder(Vec<T>),
}

impl<T> StructuredItems<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Self::Validated(items) | Self::Placeholder(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Validated(items) | Self::Placeholder(items) => items,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

/// Slice out the outermost JSON-ish fragment: from the first `[`/`{` to
/// the last `]`/`}` inclusive. Falls back to the whole text when no
/// bracket pair is found — the parser will reject it downstream.
pub fn json_fragment(text: &str) -> &str {
    let open = text.find(['[', '{']);
    let close = text.rfind([']', '}']);
    match (open, close) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

/// Parse and validate flashcards from untrusted model output.
pub fn parse_flashcards(text: &str) -> StructuredItems<Flashcard> {
    let valid: Vec<Flashcard> = parse_array(text)
        .into_iter()
        .filter_map(|item| serde_json::from_value::<Flashcard>(item).ok())
        .filter(|card| !card.question.trim().is_empty() && !card.answer.trim().is_empty())
        .collect();

    if valid.is_empty() {
        debug!("No valid flashcards in model output, substituting placeholder");
        StructuredItems::Placeholder(vec![Flashcard {
            question: "Error generating flashcards".into(),
            answer: "Try again with a different PDF".into(),
        }])
    } else {
        StructuredItems::Validated(valid)
    }
}

/// Parse and validate quiz items from untrusted model output. An item
/// must have exactly four options and an in-range answer index.
pub fn parse_quiz(text: &str) -> StructuredItems<QuizItem> {
    let valid: Vec<QuizItem> = parse_array(text)
        .into_iter()
        .filter_map(|item| serde_json::from_value::<QuizItem>(item).ok())
        .filter(|q| {
            !q.question.trim().is_empty()
                && q.options.len() == 4
                && q.correct_answer < q.options.len()
        })
        .collect();

    if valid.is_empty() {
        debug!("No valid quiz items in model output, substituting placeholder");
        StructuredItems::Placeholder(vec![QuizItem {
            question: "Error generating quiz".into(),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_answer: 0,
        }])
    } else {
        StructuredItems::Validated(valid)
    }
}

/// Best-effort parse of the embedded fragment as a JSON array.
fn parse_array(text: &str) -> Vec<serde_json::Value> {
    match serde_json::from_str::<serde_json::Value>(json_fragment(text)) {
        Ok(serde_json::Value::Array(items)) => items,
        Ok(other) => {
            debug!(kind = %json_kind(&other), "Model returned non-array JSON");
            Vec::new()
        }
        Err(e) => {
            debug!(error = %e, "Model output is not parseable JSON");
            Vec::new()
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
