// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use pipewright::{Context, FnStep, Outcome, Step};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Request-style steps (chain of responsibility) ---

/// Stops the chain unless the `user`/`password` fields match. Fails when either field is missing.
pub struct Authenticator {
  user: String,
  password: String,
}

impl Authenticator {
  pub fn new(user: &str, password: &str) -> Self {
    Self {
      user: user.to_string(),
      password: password.to_string(),
    }
  }
}

impl Step<Context> for Authenticator {
  fn name(&self) -> &str {
    "authenticate"
  }

  fn run(&self, ctx: &mut Context) -> Outcome {
    let (user, password) = match (ctx.get("user"), ctx.get("password")) {
      (Some(user), Some(password)) => (user, password),
      _ => return Outcome::fail("request is missing user or password"),
    };
    if user != self.user || password != self.password {
      tracing::debug!(target: "test_steps", "authentication rejected");
      return Outcome::Stop;
    }
    ctx.set("authenticated", "true");
    Outcome::Continue
  }
}

/// Sets `marker` to `"true"` and continues. Stands in for Logger/Compressor/Encryptor.
pub fn marker_step(name: &'static str, marker: &'static str) -> FnStep<Context> {
  FnStep::new(name, move |ctx: &mut Context| {
    ctx.set(marker, "true");
    tracing::debug!(target: "test_steps", step = name, "marker set");
    Outcome::Continue
  })
}

pub fn request(user: &str, password: &str) -> Context {
  Context::new().with_field("user", user).with_field("password", password)
}

// --- Stream-style steps (decorator) ---

pub const CARD_NUMBER: &str = "1234-1234-1234-1234";
pub const CIPHER_TEXT: &str = "!@$#@%#^$%&%^";

pub fn compress_step() -> FnStep<Context> {
  FnStep::new("compress", |ctx: &mut Context| {
    let compressed: Vec<u8> = ctx.payload().iter().take(4).copied().collect();
    ctx.transform("compressed", compressed);
    Outcome::Continue
  })
}

pub fn encrypt_step() -> FnStep<Context> {
  FnStep::new("encrypt", |ctx: &mut Context| {
    ctx.transform("encrypted", CIPHER_TEXT);
    Outcome::Continue
  })
}

/// Terminal effect: records what it was handed under the `stored` field.
pub fn store_step() -> FnStep<Context> {
  FnStep::new("store", |ctx: &mut Context| {
    let seen = match ctx.payload_str() {
      Some(seen) => seen.to_string(),
      None => return Outcome::fail("payload is not valid UTF-8"),
    };
    ctx.set("stored", seen);
    ctx.record("stored");
    Outcome::Continue
  })
}

// --- Probes ---

/// Step that appends `tag` to the transform log on the way in and `tag/after` on the way out.
pub fn tracing_probe(tag: &'static str) -> FnStep<Context> {
  FnStep::with_after(
    tag,
    move |ctx: &mut Context| {
      ctx.record(tag);
      Outcome::Continue
    },
    move |ctx: &mut Context| {
      ctx.record(format!("{}/after", tag));
      Outcome::Continue
    },
  )
}

/// Step that bumps `counter` every time it runs.
pub fn counting_step(name: &'static str, counter: Arc<AtomicUsize>) -> FnStep<Context> {
  FnStep::new(name, move |_ctx: &mut Context| {
    counter.fetch_add(1, Ordering::SeqCst);
    Outcome::Continue
  })
}

pub fn stopping_step(name: &'static str) -> FnStep<Context> {
  FnStep::new(name, |ctx: &mut Context| {
    ctx.record("stop");
    Outcome::Stop
  })
}

pub fn failing_step(name: &'static str, message: &'static str) -> FnStep<Context> {
  FnStep::new(name, move |ctx: &mut Context| {
    ctx.record("fail");
    tracing::warn!(target: "test_steps", step = name, "failing with: '{}'", message);
    Outcome::fail(message)
  })
}

pub fn counter() -> Arc<AtomicUsize> {
  Arc::new(AtomicUsize::new(0))
}

pub fn count(counter: &Arc<AtomicUsize>) -> usize {
  counter.load(Ordering::SeqCst)
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
