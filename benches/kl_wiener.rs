use std::hint::black_box;
use std::time::Duration;

use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use kl_wiener::stochastic::process::kl_bm::KlBM;
use kl_wiener::stochastic::process::kl_wiener::KlWiener;
use kl_wiener::traits::ProcessExt;
use ndarray::Array1;

fn bench_evaluation(c: &mut Criterion) {
  let mut group = c.benchmark_group("Evaluation");
  group.measurement_time(Duration::from_secs(3));
  group.warm_up_time(Duration::from_millis(500));

  for &n_terms in &[8usize, 64, 512] {
    let times = Array1::linspace(0.0, 100.0, 10_000).to_vec();

    group.bench_with_input(
      BenchmarkId::new("covered_path", n_terms),
      &n_terms,
      |b, &n_terms| {
        let mut w = KlWiener::<f64>::seeded(n_terms, 1).unwrap();
        w.evaluate(&times).unwrap();
        b.iter(|| black_box(w.evaluate(&times).unwrap()));
      },
    );

    group.bench_with_input(
      BenchmarkId::new("fresh_path", n_terms),
      &n_terms,
      |b, &n_terms| {
        b.iter_batched(
          || KlWiener::<f64>::seeded(n_terms, 1).unwrap(),
          |mut w| black_box(w.evaluate(&times).unwrap()),
          BatchSize::SmallInput,
        );
      },
    );
  }

  group.finish();
}

fn bench_growth(c: &mut Criterion) {
  let mut group = c.benchmark_group("SegmentGrowth");
  group.measurement_time(Duration::from_secs(3));

  for &horizon in &[1e2f64, 1e4, 1e6] {
    group.bench_with_input(
      BenchmarkId::new("ascending_queries", horizon),
      &horizon,
      |b, &horizon| {
        b.iter_batched(
          || KlWiener::<f64>::seeded(16, 7).unwrap(),
          |mut w| {
            let mut t = 1.0;
            while t < horizon {
              black_box(w.value_at(t).unwrap());
              t *= 2.0;
            }
          },
          BatchSize::SmallInput,
        );
      },
    );
  }

  group.finish();
}

fn bench_grid_sampler(c: &mut Criterion) {
  let bm = KlBM::<f64>::new(Some(64), 1000, Some(10.0));
  c.bench_function("KlBM/sample_par_64", |b| b.iter(|| black_box(bm.sample_par(64))));
}

criterion_group!(benches, bench_evaluation, bench_growth, bench_grid_sampler);
criterion_main!(benches);
