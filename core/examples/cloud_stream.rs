// pipewright/examples/cloud_stream.rs
//
// Decorator-style stream: compress, then encrypt, then store.
// Each layer transforms the payload before the inner layer sees it.

use pipewright::{Context, FnStep, Outcome, PipelineBuilder, PipewrightError, Runner, TraversalMode};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), PipewrightError> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();
  info!("--- Cloud Stream Example ---");

  let mut builder = PipelineBuilder::new();
  builder
    .label("cloud_stream")?
    .append(FnStep::new("compress", |ctx: &mut Context| {
      let compressed: Vec<u8> = ctx.payload().iter().take(4).copied().collect();
      ctx.transform("compressed", compressed);
      Outcome::Continue
    }))?
    .append(FnStep::new("encrypt", |ctx: &mut Context| {
      ctx.transform("encrypted", "!@$#@%#^$%&%^");
      Outcome::Continue
    }))?
    .append(FnStep::new("store", |ctx: &mut Context| {
      info!(data = ?ctx.payload_str(), "Storing");
      ctx.record("stored");
      Outcome::Continue
    }))?;
  let stream = Runner::new(builder.build(TraversalMode::AlwaysForward)?);

  let mut card = Context::with_payload("1234-1234-1234-1234");
  stream.process(&mut card).into_result()?;
  info!(transforms = ?card.transforms(), "Stream finished.");

  Ok(())
}
