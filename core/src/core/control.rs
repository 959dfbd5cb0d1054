// pipewright/src/core/control.rs

//! Defines the per-step `Outcome`, the traversal modes, and the outcome of a whole pipeline run.

use crate::error::{PipewrightError, PipewrightResult};
use anyhow::Error as AnyhowError;

/// Signal from a step telling the pipeline how to proceed.
#[derive(Debug)]
pub enum Outcome {
  /// Proceed to the next step.
  Continue,
  /// Terminate the pipeline. No further steps run.
  ///
  /// Expected domain conditions (a failed credential check, a filtered request)
  /// should stop, not fail.
  Stop,
  /// Terminate the pipeline with an error the pipeline cannot proceed past,
  /// e.g. a context missing a field the step requires.
  Fail(AnyhowError),
}

impl Outcome {
  /// Shorthand for `Outcome::Fail(anyhow!(message))`.
  pub fn fail(message: impl std::fmt::Display + std::fmt::Debug + Send + Sync + 'static) -> Self {
    Outcome::Fail(AnyhowError::msg(message))
  }

  pub fn is_continue(&self) -> bool {
    matches!(self, Outcome::Continue)
  }

  pub fn is_stop(&self) -> bool {
    matches!(self, Outcome::Stop)
  }

  pub fn is_fail(&self) -> bool {
    matches!(self, Outcome::Fail(_))
  }
}

/// How a pipeline walks its steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalMode {
  /// Chain-of-responsibility: steps run in order and the first `Stop` or `Fail`
  /// ends the run.
  #[default]
  ShortCircuiting,
  /// Decorator stack: every step runs, each one wrapping the remainder of the
  /// pipeline. `run` hooks fire outer-to-inner, `after` hooks inner-to-outer.
  /// A `Stop` is ignored here; a `Fail` still ends the run.
  AlwaysForward,
}

/// Outcome of a full pipeline execution.
#[derive(Debug)]
pub enum PipelineResult {
  /// Every step ran (or the pipeline was empty).
  Completed,
  /// The step at this index returned `Outcome::Stop`.
  StoppedAt(usize),
  /// The step at this index returned `Outcome::Fail`; the reason is passed through untouched.
  FailedAt(usize, AnyhowError),
}

impl PipelineResult {
  pub fn is_completed(&self) -> bool {
    matches!(self, PipelineResult::Completed)
  }

  /// Index of the step that ended the run early, if any.
  pub fn halted_at(&self) -> Option<usize> {
    match self {
      PipelineResult::Completed => None,
      PipelineResult::StoppedAt(index) | PipelineResult::FailedAt(index, _) => Some(*index),
    }
  }

  /// Turns `FailedAt` into `PipewrightError::StepFailed` so callers can use `?`.
  /// `Completed` and `StoppedAt` are returned as-is.
  pub fn into_result(self) -> PipewrightResult<PipelineResult> {
    match self {
      PipelineResult::FailedAt(index, source) => Err(PipewrightError::StepFailed { index, source }),
      other => Ok(other),
    }
  }
}
