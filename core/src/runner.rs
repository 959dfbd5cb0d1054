// pipewright/src/runner.rs

//! Defines `Runner<C>`, the stable call surface an application holds on to.

use crate::core::control::PipelineResult;
use crate::pipeline::definition::Pipeline;
use std::sync::Arc;
use tracing::{event, Level};

/// Binds one pipeline to a single `process` entry point.
///
/// Callers see the same surface no matter how the pipeline was assembled.
/// Cloning a runner is cheap and shares the underlying pipeline.
pub struct Runner<C: 'static> {
  pipeline: Arc<Pipeline<C>>,
}

impl<C: 'static> Runner<C> {
  pub fn new(pipeline: Pipeline<C>) -> Self {
    Self::from_shared(Arc::new(pipeline))
  }

  pub fn from_shared(pipeline: Arc<Pipeline<C>>) -> Self {
    Self { pipeline }
  }

  pub fn process(&self, ctx: &mut C) -> PipelineResult {
    event!(Level::TRACE, label = %self.pipeline.label(), "Runner dispatching context.");
    self.pipeline.execute(ctx)
  }

  pub fn pipeline(&self) -> &Pipeline<C> {
    &self.pipeline
  }
}

impl<C: 'static> Clone for Runner<C> {
  fn clone(&self) -> Self {
    Self {
      pipeline: Arc::clone(&self.pipeline),
    }
  }
}

impl<C: 'static> std::fmt::Debug for Runner<C> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Runner").field("pipeline", &self.pipeline).finish()
  }
}

impl<C: 'static> From<Pipeline<C>> for Runner<C> {
  fn from(pipeline: Pipeline<C>) -> Self {
    Runner::new(pipeline)
  }
}
