// pipewright/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipewrightError {
  #[error("Insert index {index} is out of range for a builder holding {len} step(s)")]
  IndexOutOfRange { index: usize, len: usize },

  #[error("Builder was already consumed by a previous build()")]
  BuilderAlreadyConsumed,

  #[error("Step at index {index} failed. Source: {source}")]
  StepFailed {
    index: usize,
    #[source]
    source: AnyhowError,
  },

  #[error("No runner registered for context type {context_type}")]
  RunnerNotRegistered { context_type: String },

  #[error("Type mismatch during context downcast (expected {expected_type})")]
  TypeMismatch { expected_type: String },
}

pub type PipewrightResult<T, E = PipewrightError> = std::result::Result<T, E>;
