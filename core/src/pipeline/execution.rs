// pipewright/src/pipeline/execution.rs

//! Contains the `Pipeline::execute()` method, responsible for walking the steps
//! according to the pipeline's `TraversalMode`.

use crate::core::control::{Outcome, PipelineResult, TraversalMode};
use crate::pipeline::definition::Pipeline;
use tracing::{event, instrument, span, Level};

impl<C: 'static> Pipeline<C> {
  /// Runs every applicable step against `ctx` and reports how the run ended.
  ///
  /// An empty pipeline returns `PipelineResult::Completed` without touching `ctx`.
  /// A step's `Outcome::Fail` reason is returned unchanged inside
  /// `PipelineResult::FailedAt`; nothing is retried or swallowed.
  #[instrument(
        name = "Pipeline::execute",
        skip_all,
        fields(
            label = %self.label,
            mode = ?self.mode,
            context_type = %std::any::type_name::<C>(),
            num_steps = self.steps.len(),
        )
    )]
  pub fn execute(&self, ctx: &mut C) -> PipelineResult {
    event!(Level::DEBUG, "Pipeline execution starting.");
    let result = match self.mode {
      TraversalMode::ShortCircuiting => self.execute_short_circuiting(ctx),
      TraversalMode::AlwaysForward => self.execute_always_forward(ctx),
    };
    match &result {
      PipelineResult::Completed => event!(Level::DEBUG, "Pipeline execution completed successfully."),
      PipelineResult::StoppedAt(index) => event!(Level::INFO, step_index = index, "Pipeline stopped early."),
      PipelineResult::FailedAt(index, reason) => {
        event!(Level::ERROR, step_index = index, error = %reason, "Pipeline failed.")
      }
    }
    result
  }

  fn execute_short_circuiting(&self, ctx: &mut C) -> PipelineResult {
    for (step_idx, step) in self.steps.iter().enumerate() {
      let step_span = span!(
        Level::INFO,
        "pipeline_step_execution",
        step_name = step.name(),
        step_index = step_idx
      );
      let _step_span_guard = step_span.enter();
      event!(Level::TRACE, "Executing step.");

      match step.run(ctx) {
        Outcome::Continue => {}
        Outcome::Stop => {
          event!(Level::INFO, "Pipeline stopped by step.");
          return PipelineResult::StoppedAt(step_idx);
        }
        Outcome::Fail(reason) => {
          event!(Level::ERROR, error = %reason, "Step failed.");
          return PipelineResult::FailedAt(step_idx, reason);
        }
      }
    }
    PipelineResult::Completed
  }

  /// Decorator nesting, unrolled: `run` hooks outer-to-inner, then `after` hooks
  /// inner-to-outer. This is the same order a right fold of
  /// step0(step1(...(stepN))) produces, without the recursion.
  ///
  /// A failing `run` ends the run before any inner step starts and before any
  /// `after` hook fires, exactly as an error escaping a wrapper would.
  fn execute_always_forward(&self, ctx: &mut C) -> PipelineResult {
    for (step_idx, step) in self.steps.iter().enumerate() {
      let step_span = span!(
        Level::INFO,
        "pipeline_step_execution",
        step_name = step.name(),
        step_index = step_idx,
        phase = "run"
      );
      let _step_span_guard = step_span.enter();
      event!(Level::TRACE, "Executing step.");

      match step.run(ctx) {
        Outcome::Continue => {}
        Outcome::Stop => {
          event!(Level::DEBUG, "Stop ignored: pipeline always forwards.");
        }
        Outcome::Fail(reason) => {
          event!(Level::ERROR, error = %reason, "Step failed.");
          return PipelineResult::FailedAt(step_idx, reason);
        }
      }
    }

    for (step_idx, step) in self.steps.iter().enumerate().rev() {
      let step_span = span!(
        Level::INFO,
        "pipeline_step_execution",
        step_name = step.name(),
        step_index = step_idx,
        phase = "after"
      );
      let _step_span_guard = step_span.enter();

      match step.after(ctx) {
        Outcome::Continue => {}
        Outcome::Stop => {
          event!(Level::DEBUG, "Stop ignored: pipeline always forwards.");
        }
        Outcome::Fail(reason) => {
          event!(Level::ERROR, error = %reason, "Step failed after delegation.");
          return PipelineResult::FailedAt(step_idx, reason);
        }
      }
    }
    PipelineResult::Completed
  }
}
