use std::f64::consts::PI;

use anyhow::Result;
use kl_wiener::stochastic::N;
use kl_wiener::stochastic::ProcessExt;
use kl_wiener::KlBM;
use kl_wiener::KlWiener;

fn main() -> Result<()> {
  let mut w = KlWiener::<f64>::seeded(32, 2024)?;

  let times = [0.0, 0.5, PI, 4.0, 2.0 * PI, 12.5, 3.0];
  let values = w.evaluate(&times)?;
  println!("Segmented series path (n = {}):", w.truncation_order());
  for (t, v) in times.iter().zip(values.iter()) {
    println!("  W({t:>8.4}) = {v:>10.6}");
  }

  println!("\nGenerated segments: {}", w.segment_count());
  println!("Covered until t = {:.4}", w.covered_until());
  for (k, start) in w.segment_start_values().iter().enumerate() {
    println!("  W({k}π) = {start:>10.6}");
  }

  let eps = 1e-9;
  let jumps = (1..=w.segment_count())
    .map(|k| -> Result<f64> {
      let at = k as f64 * PI;
      let v = w.evaluate(&[at - eps, at + eps])?;
      Ok((v[1] - v[0]).abs())
    })
    .collect::<Result<Vec<_>>>()?;
  println!(
    "\nLargest jump across a boundary (eps = {eps:e}): {:e}",
    jumps.iter().cloned().fold(0.0, f64::max)
  );

  let bm = KlBM::<f64>::try_new(None, N, Some(10.0))?;
  let paths = bm.sample_par(256);
  let terminal = paths.iter().map(|p| p[p.len() - 1]).collect::<Vec<_>>();
  let mean = terminal.iter().sum::<f64>() / terminal.len() as f64;
  let var = terminal.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (terminal.len() - 1) as f64;
  println!("\nW(10) over {} paths: mean {mean:.4}, variance {var:.4}", paths.len());

  Ok(())
}
