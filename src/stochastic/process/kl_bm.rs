use ndarray::Array1;

use crate::error::KlError;
use crate::error::Result;
use crate::stochastic::process::kl_wiener::KlWiener;
use crate::stochastic::FloatExt;
use crate::stochastic::ProcessExt;
use crate::stochastic::N_TERMS;

/// Brownian motion on an equidistant grid of `n` points over `[0, t]`, each
/// sample read off a fresh segmented series path.
pub struct KlBM<T: FloatExt> {
  pub n_terms: usize,
  pub n: usize,
  pub t: Option<T>,
}

impl<T: FloatExt> KlBM<T> {
  pub fn new(n_terms: Option<usize>, n: usize, t: Option<T>) -> Self {
    Self {
      n_terms: n_terms.unwrap_or(N_TERMS),
      n,
      t,
    }
  }

  pub fn try_new(n_terms: Option<usize>, n: usize, t: Option<T>) -> Result<Self> {
    let bm = Self::new(n_terms, n, t);
    if bm.n_terms == 0 {
      return Err(KlError::invalid("n_terms must be a positive integer"));
    }
    let horizon = bm.horizon();
    if !horizon.is_finite() || horizon <= T::zero() {
      return Err(KlError::invalid(format!(
        "horizon must be positive and finite, got {horizon:?}"
      )));
    }
    Ok(bm)
  }

  pub fn horizon(&self) -> T {
    self.t.unwrap_or(T::one())
  }

  pub fn grid(&self) -> Array1<T> {
    Array1::linspace(T::zero(), self.horizon(), self.n)
  }

  /// Evaluates `path` on the grid; the path keeps every segment it grew.
  pub fn sample_with<R: rand::Rng>(&self, path: &mut KlWiener<T, R>) -> Result<Array1<T>> {
    path.evaluate_array(self.grid().view())
  }

  fn try_sample(&self) -> Result<Array1<T>> {
    let mut path = KlWiener::<T>::from_entropy(self.n_terms)?;
    self.sample_with(&mut path)
  }
}

impl<T: FloatExt> ProcessExt<T> for KlBM<T> {
  type Output = Array1<T>;

  /// An invalid configuration (zero terms, negative or non-finite horizon)
  /// yields an empty path; use [`KlBM::try_new`] to reject it up front.
  fn sample(&self) -> Self::Output {
    match self.try_sample() {
      Ok(path) => path,
      Err(err) => {
        tracing::warn!(%err, "KlBM sampling failed");
        Array1::zeros(0)
      }
    }
  }
}
