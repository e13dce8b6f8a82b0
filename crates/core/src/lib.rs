//! # Studyweave Core
//!
//! Domain types, traits, and error definitions for the Studyweave study
//! companion backend. This crate has **zero framework dependencies** — it
//! defines the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The LLM boundary is a trait here (`Generator`); implementations live in
//! the providers crate. The study-plan domain types live here so that the
//! planner, content, and gateway crates all speak the same vocabulary and
//! depend inward on core.

pub mod error;
pub mod generator;
pub mod study;

// Re-export key types at crate root for ergonomics
pub use error::{Error, ExtractError, GeneratorError, PlanError, Result};
pub use generator::{GenerationRequest, GenerationResponse, Generator, Usage};
pub use study::{Allocation, PlanRequest, Schedule, Subject};
