// pipewright/src/registry.rs

//! Defines `Registry`, a type-keyed collection of runners.
//! Each context type has at most one runner; `process` dispatches on the type of
//! the context it is handed.

use crate::core::control::PipelineResult;
use crate::error::{PipewrightError, PipewrightResult};
use crate::runner::Runner;

use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{event, instrument, Level};

/// Type-erased view of a `Runner<C>`.
trait AnyRunner: Send + Sync {
  /// `ctx` is expected to be a `C`.
  fn process_erased(&self, ctx: &mut dyn Any) -> PipewrightResult<PipelineResult>;
}

impl<C: 'static> AnyRunner for Runner<C> {
  #[instrument(
        name = "Runner::process_erased",
        skip_all,
        fields(target_context_type = %std::any::type_name::<C>())
    )]
  fn process_erased(&self, ctx: &mut dyn Any) -> PipewrightResult<PipelineResult> {
    event!(Level::TRACE, "Attempting to downcast context.");
    let typed_ctx = match ctx.downcast_mut::<C>() {
      Some(typed_ctx) => typed_ctx,
      None => {
        let expected_type = std::any::type_name::<C>();
        event!(Level::ERROR, "Context type mismatch. Expected {}.", expected_type);
        return Err(PipewrightError::TypeMismatch {
          expected_type: expected_type.to_string(),
        });
      }
    };
    Ok(self.process(typed_ctx))
  }
}

/// The runner registry.
#[derive(Default)]
pub struct Registry {
  runners: RwLock<HashMap<TypeId, Arc<dyn AnyRunner>>>,
}

impl Registry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers `runner` for context type `C`, replacing any runner already registered for it.
  pub fn register<C: 'static>(&self, runner: Runner<C>) {
    event!(Level::DEBUG, context_type = %std::any::type_name::<C>(), "Registering runner.");
    self.runners.write().insert(TypeId::of::<C>(), Arc::new(runner));
  }

  pub fn is_registered<C: 'static>(&self) -> bool {
    self.runners.read().contains_key(&TypeId::of::<C>())
  }

  pub fn len(&self) -> usize {
    self.runners.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.runners.read().is_empty()
  }

  /// Runs the runner registered for `C` against `ctx`.
  ///
  /// Fails with `PipewrightError::RunnerNotRegistered` when there is none. A step
  /// failure is not an error here; it comes back as `PipelineResult::FailedAt`.
  pub fn process<C: 'static>(&self, ctx: &mut C) -> PipewrightResult<PipelineResult> {
    event!(Level::DEBUG, context_type = %std::any::type_name::<C>(), "Attempting to process context.");

    // Clone the Arc out so the lock is not held while steps run.
    let runner = self.runners.read().get(&TypeId::of::<C>()).cloned().ok_or_else(|| {
      let context_type = std::any::type_name::<C>();
      event!(Level::ERROR, "No runner registered for context type {}.", context_type);
      PipewrightError::RunnerNotRegistered {
        context_type: context_type.to_string(),
      }
    })?;

    runner.process_erased(ctx)
  }
}

impl std::fmt::Debug for Registry {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Registry").field("runners", &self.len()).finish()
  }
}
