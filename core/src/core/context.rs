// pipewright/src/core/context.rs

//! Defines `Context`, a ready-made payload for pipelines that do not bring their own type.
//!
//! A `Context` carries both shapes a pipeline usually needs: named string fields
//! (request-style data and annotations left by upstream steps) and a byte payload
//! with an ordered log of the transforms applied to it.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Context {
  fields: HashMap<String, String>,
  payload: Vec<u8>,
  transforms: Vec<String>,
}

impl Context {
  pub fn new() -> Self {
    Self::default()
  }

  /// Starts a context holding `payload` and an empty transform log.
  pub fn with_payload(payload: impl Into<Vec<u8>>) -> Self {
    Self {
      payload: payload.into(),
      ..Self::default()
    }
  }

  /// Builder-style field setter, for assembling a context before `execute`.
  pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.fields.insert(name.into(), value.into());
    self
  }

  // --- Fields ---

  pub fn get(&self, name: &str) -> Option<&str> {
    self.fields.get(name).map(String::as_str)
  }

  /// Sets a field, returning the previous value if there was one.
  pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
    self.fields.insert(name.into(), value.into())
  }

  pub fn remove(&mut self, name: &str) -> Option<String> {
    self.fields.remove(name)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.fields.contains_key(name)
  }

  /// True when `name` is present and equal to `"true"`.
  pub fn flag(&self, name: &str) -> bool {
    self.get(name) == Some("true")
  }

  pub fn fields(&self) -> &HashMap<String, String> {
    &self.fields
  }

  // --- Payload ---

  pub fn payload(&self) -> &[u8] {
    &self.payload
  }

  /// The payload as UTF-8, if it is valid UTF-8.
  pub fn payload_str(&self) -> Option<&str> {
    std::str::from_utf8(&self.payload).ok()
  }

  /// Swaps in a new payload and hands back the old one.
  pub fn replace_payload(&mut self, payload: impl Into<Vec<u8>>) -> Vec<u8> {
    std::mem::replace(&mut self.payload, payload.into())
  }

  /// Replaces the payload and appends `transform` to the transform log in one go.
  pub fn transform(&mut self, transform: impl Into<String>, payload: impl Into<Vec<u8>>) {
    self.payload = payload.into();
    self.transforms.push(transform.into());
  }

  // --- Transform log ---

  pub fn record(&mut self, transform: impl Into<String>) {
    self.transforms.push(transform.into());
  }

  pub fn transforms(&self) -> &[String] {
    &self.transforms
  }
}
