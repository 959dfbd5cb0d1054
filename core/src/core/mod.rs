pub mod context;
pub mod control;
pub mod step;

// Re-export key types for easier access from other pipewright modules (and lib.rs)
pub use context::Context;
pub use control::{Outcome, PipelineResult, TraversalMode};
pub use step::{FnStep, SharedStep, SkipIf, Step, StepExt};
