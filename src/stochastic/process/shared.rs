use std::sync::Mutex;

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::Rng;

use crate::error::KlError;
use crate::error::Result;
use crate::stochastic::process::kl_wiener::KlWiener;
use crate::traits::FloatExt;

/// [`KlWiener`] behind a mutex, so one path can be queried from many threads.
/// Every evaluation, including any segment growth it triggers, runs under the lock.
pub struct SharedKlWiener<T: FloatExt, R: Rng = StdRng> {
  inner: Mutex<KlWiener<T, R>>,
}

impl<T: FloatExt, R: Rng> SharedKlWiener<T, R> {
  pub fn new(process: KlWiener<T, R>) -> Self {
    Self {
      inner: Mutex::new(process),
    }
  }

  pub fn evaluate(&self, times: &[T]) -> Result<Array1<T>> {
    self
      .inner
      .lock()
      .map_err(|_| KlError::Poisoned)?
      .evaluate(times)
  }

  pub fn value_at(&self, t: T) -> Result<T> {
    self.inner.lock().map_err(|_| KlError::Poisoned)?.value_at(t)
  }

  pub fn segment_count(&self) -> Result<usize> {
    Ok(self.inner.lock().map_err(|_| KlError::Poisoned)?.segment_count())
  }

  pub fn into_inner(self) -> Result<KlWiener<T, R>> {
    self.inner.into_inner().map_err(|_| KlError::Poisoned)
  }
}
