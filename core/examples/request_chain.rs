// pipewright/examples/request_chain.rs
//
// A web server front-door: authenticate -> log -> compress -> encrypt.
// A rejected login stops the chain before anything else runs.

use pipewright::{Context, FnStep, Outcome, PipelineBuilder, PipelineResult, PipewrightError, Runner, Step, TraversalMode};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

struct Authenticator {
  user: String,
  password: String,
}

impl Step<Context> for Authenticator {
  fn name(&self) -> &str {
    "authenticate"
  }

  fn run(&self, ctx: &mut Context) -> Outcome {
    let valid = ctx.get("user") == Some(self.user.as_str()) && ctx.get("password") == Some(self.password.as_str());
    info!(valid, "Authentication");
    if !valid {
      return Outcome::Stop;
    }
    ctx.set("authenticated", "true");
    Outcome::Continue
  }
}

fn announce(name: &'static str, marker: &'static str) -> FnStep<Context> {
  FnStep::new(name, move |ctx: &mut Context| {
    info!("{}", name);
    ctx.set(marker, "true");
    Outcome::Continue
  })
}

fn main() -> Result<(), PipewrightError> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();
  info!("--- Request Chain Example ---");

  // 1. Assemble the chain
  let mut builder = PipelineBuilder::new();
  builder
    .label("web_server")?
    .append(Authenticator {
      user: "Admin".to_string(),
      password: "1234".to_string(),
    })?
    .append(announce("Log", "logged"))?
    .append(announce("Compress", "compressed"))?
    .append(announce("Encrypt", "encrypted"))?;
  let server = Runner::new(builder.build(TraversalMode::ShortCircuiting)?);

  // 2. Serve two requests
  for (user, password) in [("Admin", "1234"), ("Admin", "wrong")] {
    let mut request = Context::new().with_field("user", user).with_field("password", password);
    match server.process(&mut request).into_result()? {
      PipelineResult::Completed => info!(user, "Request fully processed."),
      PipelineResult::StoppedAt(index) => {
        warn!(user, step = ?server.pipeline().step_name(index), "Request rejected.")
      }
      PipelineResult::FailedAt(..) => unreachable!("into_result maps failures to errors"),
    }
  }

  Ok(())
}
