// pipewright/src/pipeline/mod.rs

//! Defines the `Pipeline<C>` struct, its builder, and execution logic.

pub mod builder;
pub mod definition;
pub mod execution;

pub use builder::PipelineBuilder;
pub use definition::Pipeline;
