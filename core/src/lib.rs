// src/lib.rs

//! pipewright: a composable, synchronous processing pipeline for Rust.
//!
//! A pipeline is an ordered, immutable list of steps run against a caller-owned
//! context. One engine covers two composition styles:
//!  - Chain of responsibility (`TraversalMode::ShortCircuiting`): steps run in
//!    order and any step may end the run with `Outcome::Stop` or `Outcome::Fail`.
//!  - Decorator stack (`TraversalMode::AlwaysForward`): every step runs, each one
//!    wrapping the rest, with `run` hooks going in and `after` hooks coming out.
//!
//! Pipelines are assembled with a one-shot `PipelineBuilder`, executed directly
//! or through a `Runner`, and optionally dispatched by context type via a `Registry`.

pub mod core;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod runner;

// --- Re-exports for the Public API ---

pub use crate::core::context::Context;
pub use crate::core::control::{Outcome, PipelineResult, TraversalMode};
pub use crate::core::step::{FnStep, SharedStep, SkipIf, Step, StepExt};

pub use crate::pipeline::{Pipeline, PipelineBuilder};
pub use crate::runner::Runner;
pub use crate::registry::Registry;

pub use crate::error::{PipewrightError, PipewrightResult};

/*
    Core workflow:
    1. Pick a context type: the bundled `Context`, or any struct of your own.
    2. Implement `Step<C>` for each unit of work, or wrap closures in `FnStep`.
    3. Assemble with `PipelineBuilder::new()`, using `.append()`, `.prepend()`, `.insert_at()`.
    4. Call `.build(TraversalMode::ShortCircuiting)` or `.build(TraversalMode::AlwaysForward)`.
    5. Wrap the pipeline in a `Runner` and call `runner.process(&mut ctx)` once per context.
*/
