//! Orchestration of a full seeding run.

mod pipeline;

pub use pipeline::{Pipeline, PipelineReport, StepReport};
