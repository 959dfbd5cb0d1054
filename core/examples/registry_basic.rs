// pipewright/examples/registry_basic.rs

use pipewright::{FnStep, Outcome, PipelineBuilder, PipewrightError, Registry, Runner, TraversalMode};
use tracing::info;

// --- Contexts for different pipelines ---
#[derive(Clone, Debug, Default)]
struct UserWorkflowContext {
  user_id: String,
  action_log: Vec<String>,
}

#[derive(Clone, Debug, Default)]
struct ProductWorkflowContext {
  product_id: String,
  update_log: Vec<String>,
}

fn main() -> Result<(), PipewrightError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Registry Basic Example ---");

  let registry = Registry::new();

  // User workflow: an empty user id is a malformed context.
  let mut users = PipelineBuilder::new();
  users
    .append(FnStep::new("validate_user", |ctx: &mut UserWorkflowContext| {
      if ctx.user_id.is_empty() {
        return Outcome::fail("User ID cannot be empty");
      }
      ctx.action_log.push(format!("User Validated: {}", ctx.user_id));
      Outcome::Continue
    }))?
    .append(FnStep::new("process_user_action", |ctx: &mut UserWorkflowContext| {
      ctx.action_log.push(format!("User Action Processed for: {}", ctx.user_id));
      Outcome::Continue
    }))?;
  registry.register(Runner::new(users.build(TraversalMode::ShortCircuiting)?));

  // Product workflow
  let mut products = PipelineBuilder::new();
  products.append(FnStep::new("check_product_stock", |ctx: &mut ProductWorkflowContext| {
    ctx.update_log.push(format!("Stock Checked for Product: {}", ctx.product_id));
    Outcome::Continue
  }))?;
  registry.register(Runner::new(products.build(TraversalMode::ShortCircuiting)?));

  let mut user_ctx = UserWorkflowContext {
    user_id: "user123".to_string(),
    ..Default::default()
  };
  registry.process(&mut user_ctx)?.into_result()?;
  info!(log = ?user_ctx.action_log, "User workflow done.");

  let mut product_ctx = ProductWorkflowContext {
    product_id: "prod789".to_string(),
    ..Default::default()
  };
  registry.process(&mut product_ctx)?.into_result()?;
  info!(log = ?product_ctx.update_log, "Product workflow done.");

  let mut bad_user = UserWorkflowContext::default();
  let outcome = registry.process(&mut bad_user)?;
  info!(halted_at = ?outcome.halted_at(), "Empty user id rejected.");

  Ok(())
}
