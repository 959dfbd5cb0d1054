// pipewright/src/pipeline/definition.rs

//! Contains the `Pipeline<C>` struct definition and its read-only accessors.
//! Pipelines are only ever produced by `PipelineBuilder::build`.

use crate::core::control::TraversalMode;
use crate::core::step::SharedStep;
use crate::pipeline::builder::PipelineBuilder;
use std::sync::Arc;

/// An ordered, immutable sequence of steps plus a traversal mode.
///
/// `C` is the context type threaded through a run. A `Pipeline` exposes no
/// `&mut self` methods: once built it can be placed behind an `Arc` and executed
/// from many threads at once, each caller with its own context.
pub struct Pipeline<C: 'static> {
  pub(crate) label: String,
  pub(crate) mode: TraversalMode,
  /// Execution order. Shared so that `to_builder` can reuse it without cloning step bodies.
  pub(crate) steps: Arc<[SharedStep<C>]>,
}

impl<C: 'static> Pipeline<C> {
  pub(crate) fn new(label: String, mode: TraversalMode, steps: Vec<SharedStep<C>>) -> Self {
    Self {
      label,
      mode,
      steps: steps.into(),
    }
  }

  pub fn label(&self) -> &str {
    &self.label
  }

  pub fn mode(&self) -> TraversalMode {
    self.mode
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }

  pub fn step_name(&self, index: usize) -> Option<&str> {
    self.steps.get(index).map(|s| s.name())
  }

  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name()).collect()
  }

  /// Starts a new builder seeded with this pipeline's steps and label.
  ///
  /// The steps are shared, not copied; the returned builder can be freely
  /// reshaped and built into a different pipeline while this one stays as is.
  pub fn to_builder(&self) -> PipelineBuilder<C> {
    PipelineBuilder::from_parts(self.label.clone(), self.steps.to_vec())
  }
}

impl<C: 'static> Clone for Pipeline<C> {
  fn clone(&self) -> Self {
    Self {
      label: self.label.clone(),
      mode: self.mode,
      steps: Arc::clone(&self.steps),
    }
  }
}

impl<C: 'static> std::fmt::Debug for Pipeline<C> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Pipeline")
      .field("label", &self.label)
      .field("mode", &self.mode)
      .field("steps", &self.step_names())
      .finish()
  }
}
