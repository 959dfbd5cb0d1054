// pipewright/src/core/step.rs

//! Defines the `Step<C>` contract, a closure-backed step, and step combinators.

use super::control::Outcome;
use std::sync::Arc;
use tracing::{event, Level};

/// A single unit of work over a context `C`.
///
/// Steps hold only the configuration captured when they were constructed. They
/// are shared between concurrent pipeline runs, so a step must never stash the
/// context (or anything borrowed from it) in its own fields.
pub trait Step<C: 'static>: Send + Sync {
  /// Identifier used in tracing output and diagnostics. Need not be unique.
  fn name(&self) -> &str;

  /// Pre-delegation work. Under `ShortCircuiting` this is the only hook called.
  fn run(&self, ctx: &mut C) -> Outcome;

  /// Post-delegation work, called under `AlwaysForward` once every inner step has
  /// finished. Defaults to doing nothing.
  fn after(&self, _ctx: &mut C) -> Outcome {
    Outcome::Continue
  }
}

/// A step shared by reference count. The same `SharedStep` may appear several
/// times in one pipeline, or in several pipelines.
pub type SharedStep<C> = Arc<dyn Step<C>>;

/// Type alias for a boxed step body.
pub type StepFn<C> = Box<dyn Fn(&mut C) -> Outcome + Send + Sync>;

/// A step built from closures.
pub struct FnStep<C: 'static> {
  name: String,
  run: StepFn<C>,
  after: Option<StepFn<C>>,
}

impl<C: 'static> FnStep<C> {
  pub fn new<S: Into<String>>(name: S, run: impl Fn(&mut C) -> Outcome + Send + Sync + 'static) -> Self {
    Self {
      name: name.into(),
      run: Box::new(run),
      after: None,
    }
  }

  /// Builds a step with both a pre-delegation and a post-delegation body.
  pub fn with_after<S: Into<String>>(
    name: S,
    run: impl Fn(&mut C) -> Outcome + Send + Sync + 'static,
    after: impl Fn(&mut C) -> Outcome + Send + Sync + 'static,
  ) -> Self {
    Self {
      name: name.into(),
      run: Box::new(run),
      after: Some(Box::new(after)),
    }
  }
}

impl<C: 'static> Step<C> for FnStep<C> {
  fn name(&self) -> &str {
    &self.name
  }

  fn run(&self, ctx: &mut C) -> Outcome {
    (self.run)(ctx)
  }

  fn after(&self, ctx: &mut C) -> Outcome {
    match &self.after {
      Some(after) => after(ctx),
      None => Outcome::Continue,
    }
  }
}

impl<C: 'static> std::fmt::Debug for FnStep<C> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FnStep")
      .field("name", &self.name)
      .field("after_present", &self.after.is_some())
      .finish()
  }
}

/// Condition deciding whether a wrapped step is bypassed.
pub type SkipCondition<C> = Arc<dyn Fn(&C) -> bool + Send + Sync + 'static>;

/// Wraps a step so it is bypassed while `condition` holds.
///
/// The condition is checked independently before `run` and before `after`, so a
/// step whose context changes in between may have only one of its hooks skipped.
pub struct SkipIf<C: 'static, S> {
  inner: S,
  condition: SkipCondition<C>,
}

impl<C: 'static, S: Step<C>> Step<C> for SkipIf<C, S> {
  fn name(&self) -> &str {
    self.inner.name()
  }

  fn run(&self, ctx: &mut C) -> Outcome {
    if (self.condition)(&*ctx) {
      event!(Level::DEBUG, step_name = self.inner.name(), "Step skipped due to 'skip_if' condition.");
      return Outcome::Continue;
    }
    self.inner.run(ctx)
  }

  fn after(&self, ctx: &mut C) -> Outcome {
    if (self.condition)(&*ctx) {
      return Outcome::Continue;
    }
    self.inner.after(ctx)
  }
}

impl<C: 'static, T: Step<C> + ?Sized> Step<C> for Arc<T> {
  fn name(&self) -> &str {
    (**self).name()
  }

  fn run(&self, ctx: &mut C) -> Outcome {
    (**self).run(ctx)
  }

  fn after(&self, ctx: &mut C) -> Outcome {
    (**self).after(ctx)
  }
}

/// Combinators available on every step.
pub trait StepExt<C: 'static>: Step<C> + Sized {
  /// Bypasses this step (treating it as `Continue`) whenever `condition` returns true.
  fn skip_if(self, condition: impl Fn(&C) -> bool + Send + Sync + 'static) -> SkipIf<C, Self> {
    SkipIf {
      inner: self,
      condition: Arc::new(condition),
    }
  }

  fn shared(self) -> SharedStep<C>
  where
    Self: 'static,
  {
    Arc::new(self)
  }
}

impl<C: 'static, S: Step<C>> StepExt<C> for S {}
