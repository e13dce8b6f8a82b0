//! Prompt construction and untrusted-output handling for the study-aid
//! pipeline.
//!
//! The remote model's replies are adversarial text as far as this crate is
//! concerned: [`structured`] digs a JSON-ish fragment out of whatever came
//! back, validates each item against the expected shape, and falls back to
//! explicit placeholder content instead of ever propagating a parse fault.

pub mod prompts;
pub mod structured;

pub use structured::{Flashcard, QuizItem, StructuredItems, parse_flashcards, parse_quiz};
