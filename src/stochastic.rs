//! # Stochastic Process Simulation Modules
//!
//! `stochastic` provides lazily generated Wiener process paths built from a
//! segmented Karhunen–Loève series.
//!
//! ## Modules
//!
//! | Module      | Description                                                                 |
//! |-------------|-----------------------------------------------------------------------------|
//! | [`process`] | The segmented series path, its grid sampler and a thread-shareable wrapper. |
//!
//! ## Parallelism
//!
//! `sample_par()` uses `rayon` for parallel execution over independent paths.
//! A single path is mutable state: share it across threads through
//! [`process::shared::SharedKlWiener`].
//!
//! ## Example Usage
//!
//! ```rust
//! use kl_wiener::stochastic::process::kl_wiener::KlWiener;
//!
//! fn main() -> kl_wiener::error::Result<()> {
//!   let mut w = KlWiener::<f64>::seeded(16, 42)?;
//!   let values = w.evaluate(&[0.0, 1.5, 7.0])?;
//!   assert_eq!(values[0], 0.0);
//!   Ok(())
//! }
//! ```

pub mod process;

use rand::Rng;
use rand_distr::Distribution;
use rand_distr::StandardNormal;

use crate::traits::FloatExt;

pub use crate::traits::ProcessExt;

/// Default number of grid points
pub const N: usize = 1000;
/// Default truncation order (sine terms per segment)
pub const N_TERMS: usize = 64;

impl FloatExt for f64 {
  fn from_usize_(n: usize) -> Self {
    n as f64
  }

  fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self {
    StandardNormal.sample(rng)
  }
}

impl FloatExt for f32 {
  fn from_usize_(n: usize) -> Self {
    n as f32
  }

  fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self {
    StandardNormal.sample(rng)
  }
}
