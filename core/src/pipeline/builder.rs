// pipewright/src/pipeline/builder.rs

//! Contains `PipelineBuilder<C>`, the only way to assemble a `Pipeline<C>`.
//!
//! Assembly and execution are separate phases: the builder owns its working list
//! until `build` hands it over, and every call after that fails with
//! `PipewrightError::BuilderAlreadyConsumed`.

use crate::core::control::TraversalMode;
use crate::core::step::{SharedStep, Step};
use crate::error::{PipewrightError, PipewrightResult};
use crate::pipeline::definition::Pipeline;
use std::sync::Arc;
use tracing::{event, instrument, Level};

const DEFAULT_LABEL: &str = "pipeline";

pub struct PipelineBuilder<C: 'static> {
  label: String,
  /// `None` once `build` has run.
  steps: Option<Vec<SharedStep<C>>>,
}

impl<C: 'static> PipelineBuilder<C> {
  pub fn new() -> Self {
    Self::from_parts(DEFAULT_LABEL.to_string(), Vec::new())
  }

  pub(crate) fn from_parts(label: String, steps: Vec<SharedStep<C>>) -> Self {
    Self {
      label,
      steps: Some(steps),
    }
  }

  /// Names the pipeline. The label shows up in tracing spans and `Debug` output.
  pub fn label<S: Into<String>>(&mut self, label: S) -> PipewrightResult<&mut Self> {
    self.working()?;
    self.label = label.into();
    Ok(self)
  }

  fn working(&mut self) -> PipewrightResult<&mut Vec<SharedStep<C>>> {
    self.steps.as_mut().ok_or(PipewrightError::BuilderAlreadyConsumed)
  }

  // --- Step placement ---

  pub fn append<S: Step<C> + 'static>(&mut self, step: S) -> PipewrightResult<&mut Self> {
    self.append_shared(Arc::new(step))
  }

  /// Appends an already shared step. Appending the same `Arc` twice yields two
  /// independent executions of it.
  pub fn append_shared(&mut self, step: SharedStep<C>) -> PipewrightResult<&mut Self> {
    self.working()?.push(step);
    Ok(self)
  }

  pub fn prepend<S: Step<C> + 'static>(&mut self, step: S) -> PipewrightResult<&mut Self> {
    self.prepend_shared(Arc::new(step))
  }

  pub fn prepend_shared(&mut self, step: SharedStep<C>) -> PipewrightResult<&mut Self> {
    self.working()?.insert(0, step);
    Ok(self)
  }

  /// Inserts `step` so that it ends up at `index`. `index == len()` appends.
  pub fn insert_at<S: Step<C> + 'static>(&mut self, index: usize, step: S) -> PipewrightResult<&mut Self> {
    self.insert_shared_at(index, Arc::new(step))
  }

  pub fn insert_shared_at(&mut self, index: usize, step: SharedStep<C>) -> PipewrightResult<&mut Self> {
    let steps = self.working()?;
    if index > steps.len() {
      return Err(PipewrightError::IndexOutOfRange {
        index,
        len: steps.len(),
      });
    }
    steps.insert(index, step);
    Ok(self)
  }

  // --- Inspection ---

  /// Number of accumulated steps; zero once consumed.
  pub fn len(&self) -> usize {
    self.steps.as_ref().map_or(0, Vec::len)
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn is_consumed(&self) -> bool {
    self.steps.is_none()
  }

  pub fn step_names(&self) -> Vec<&str> {
    self
      .steps
      .iter()
      .flat_map(|steps| steps.iter().map(|s| s.name()))
      .collect()
  }

  /// Hands the accumulated steps over to a new `Pipeline`. One-shot.
  #[instrument(
        name = "PipelineBuilder::build",
        skip_all,
        fields(label = %self.label, mode = ?mode, num_steps = self.len()),
        err(Display)
    )]
  pub fn build(&mut self, mode: TraversalMode) -> PipewrightResult<Pipeline<C>> {
    let steps = self.steps.take().ok_or(PipewrightError::BuilderAlreadyConsumed)?;
    event!(Level::DEBUG, "Pipeline built.");
    Ok(Pipeline::new(std::mem::take(&mut self.label), mode, steps))
  }
}

impl<C: 'static> Default for PipelineBuilder<C> {
  fn default() -> Self {
    Self::new()
  }
}

impl<C: 'static> std::fmt::Debug for PipelineBuilder<C> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PipelineBuilder")
      .field("label", &self.label)
      .field("steps", &self.step_names())
      .field("consumed", &self.is_consumed())
      .finish()
  }
}
