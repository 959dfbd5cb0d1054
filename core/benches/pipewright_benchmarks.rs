use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pipewright::{FnStep, Outcome, Pipeline, PipelineBuilder, Runner, TraversalMode};
use std::sync::Arc;

// --- Common Benchmark Context ---
#[derive(Clone, Debug, Default)]
struct BenchContext {
  counter: u64,
  trail: Vec<u8>,
}

// --- Helper: CPU-bound step ---
fn increment_step(iterations: u64) -> FnStep<BenchContext> {
  FnStep::new("increment", move |ctx: &mut BenchContext| {
    for _i in 0..iterations {
      // Simulate some CPU-bound work
      ctx.counter = ctx.counter.wrapping_add(1);
    }
    Outcome::Continue
  })
}

// --- Helper: wrapping step with work on both sides of delegation ---
fn wrapping_step(tag: u8) -> FnStep<BenchContext> {
  FnStep::with_after(
    "wrap",
    move |ctx: &mut BenchContext| {
      ctx.trail.push(tag);
      Outcome::Continue
    },
    move |ctx: &mut BenchContext| {
      ctx.trail.push(tag.wrapping_add(1));
      Outcome::Continue
    },
  )
}

fn build_pipeline(num_steps: usize, mode: TraversalMode, make: impl Fn() -> FnStep<BenchContext>) -> Pipeline<BenchContext> {
  let mut builder = PipelineBuilder::new();
  for _ in 0..num_steps {
    builder.append(make()).expect("builder is fresh");
  }
  builder.build(mode).expect("builder is fresh")
}

// --- Benchmark Functions ---

fn bench_short_circuiting(c: &mut Criterion) {
  let mut group = c.benchmark_group("ShortCircuiting");

  for num_steps in [1usize, 5, 10].iter() {
    for iterations in [1u64, 10, 100].iter() {
      let pipeline = build_pipeline(*num_steps, TraversalMode::ShortCircuiting, || increment_step(*iterations));

      group.throughput(Throughput::Elements(*num_steps as u64 * *iterations));
      group.bench_with_input(
        BenchmarkId::new(format!("{}steps_{}iter", num_steps, iterations), num_steps * *iterations as usize),
        &pipeline,
        |b, pipeline| {
          b.iter_batched(
            BenchContext::default,
            |mut ctx| criterion::black_box(pipeline.execute(&mut ctx)),
            criterion::BatchSize::SmallInput,
          );
        },
      );
    }
  }
  group.finish();
}

fn bench_always_forward(c: &mut Criterion) {
  let mut group = c.benchmark_group("AlwaysForward");

  for num_steps in [1usize, 5, 10, 50].iter() {
    let pipeline = build_pipeline(*num_steps, TraversalMode::AlwaysForward, || wrapping_step(*num_steps as u8));

    group.throughput(Throughput::Elements(*num_steps as u64));
    group.bench_with_input(BenchmarkId::new("wrapped_steps", num_steps), &pipeline, |b, pipeline| {
      b.iter_batched(
        BenchContext::default,
        |mut ctx| criterion::black_box(pipeline.execute(&mut ctx)),
        criterion::BatchSize::SmallInput,
      );
    });
  }
  group.finish();
}

fn bench_runner_dispatch_overhead(c: &mut Criterion) {
  let mut group = c.benchmark_group("RunnerDispatchOverhead");
  let pipeline = Arc::new(build_pipeline(1, TraversalMode::ShortCircuiting, || increment_step(1)));
  let runner = Runner::from_shared(pipeline.clone());

  group.bench_function("direct_execute", |b| {
    b.iter_batched(
      BenchContext::default,
      |mut ctx| criterion::black_box(pipeline.execute(&mut ctx)),
      criterion::BatchSize::SmallInput,
    );
  });

  group.bench_function("runner_process", |b| {
    b.iter_batched(
      BenchContext::default,
      |mut ctx| criterion::black_box(runner.process(&mut ctx)),
      criterion::BatchSize::SmallInput,
    );
  });
  group.finish();
}

criterion_group!(
  benches,
  bench_short_circuiting,
  bench_always_forward,
  bench_runner_dispatch_overhead
);
criterion_main!(benches);
