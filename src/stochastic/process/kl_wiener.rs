//! # Kl Wiener
//!
//! $$
//! W_t = W_{k\pi} + \xi_{k,0}\frac{\varphi}{\sqrt{\pi}}
//!   + \sqrt{\frac{2}{\pi}}\sum_{j=1}^{n}\xi_{k,j}\frac{\sin(jt)}{j},
//! \quad t = k\pi + \varphi,\ \varphi\in[0,\pi)
//! $$
//!
use ndarray::Array1;
use ndarray::Array2;
use ndarray::ArrayView1;
use ndarray::ArrayView2;
use ndarray::Axis;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use tracing::debug;
use tracing::trace;

use crate::error::KlError;
use crate::error::Result;
use crate::traits::FloatExt;

/// Wiener path generated lazily on consecutive segments `[kπ, (k+1)π)`.
///
/// Every segment owns `n + 1` standard normals: a linear coefficient (column 0)
/// and `n` sine coefficients. Segments are appended in order and never
/// regenerated, so a time queried twice yields the same value.
pub struct KlWiener<T: FloatExt, R: Rng = StdRng> {
  n: usize,
  /// Shape `(segment_count, n + 1)`.
  xi: Array2<T>,
  /// `segment_start_values[k]` is the value at `kπ`, one more entry than segments.
  segment_start_values: Vec<T>,
  rng: R,
}

impl<T: FloatExt, R: Rng> KlWiener<T, R> {
  /// `n` is the truncation order, the number of sine terms kept per segment.
  pub fn new(n: usize, rng: R) -> Result<Self> {
    if n == 0 {
      return Err(KlError::invalid(
        "truncation order must be a positive integer, got 0",
      ));
    }

    Ok(Self {
      n,
      xi: Array2::zeros((0, n + 1)),
      segment_start_values: vec![T::zero()],
      rng,
    })
  }

  /// Checked entry point for orders coming from signed sources.
  pub fn try_from_order(order: i64, rng: R) -> Result<Self> {
    let n = usize::try_from(order)
      .ok()
      .filter(|&n| n > 0)
      .ok_or_else(|| {
        KlError::invalid(format!(
          "truncation order must be a positive integer, got {order}"
        ))
      })?;
    Self::new(n, rng)
  }

  pub fn truncation_order(&self) -> usize {
    self.n
  }

  pub fn segment_count(&self) -> usize {
    self.xi.nrows()
  }

  pub fn segment_start_values(&self) -> &[T] {
    &self.segment_start_values
  }

  pub fn coefficients(&self) -> ArrayView2<'_, T> {
    self.xi.view()
  }

  /// Right end of the generated part of the time axis.
  pub fn covered_until(&self) -> T {
    T::from_usize_(self.segment_count()) * T::PI()
  }

  /// Values of the path at `times`, in input order.
  ///
  /// Times may be unsorted, repeated or span many segments. The whole batch is
  /// validated before the path grows, so a rejected call leaves it untouched.
  pub fn evaluate(&mut self, times: &[T]) -> Result<Array1<T>> {
    let located = times
      .iter()
      .map(|&t| Self::locate(t))
      .collect::<Result<Vec<_>>>()?;

    let Some(max_index) = located.iter().map(|&(k, _)| k).max() else {
      return Ok(Array1::zeros(0));
    };

    if max_index >= self.segment_count() {
      let target = max_index
        .checked_add(1)
        .ok_or_else(|| KlError::invalid("time beyond addressable segment range"))?;
      self.ensure_segments(target)?;
    }

    trace!(
      points = times.len(),
      segments = self.segment_count(),
      "evaluating Wiener path"
    );

    Ok(
      located
        .into_iter()
        .map(|(k, phase)| self.value(k, phase))
        .collect(),
    )
  }

  pub fn evaluate_array(&mut self, times: ArrayView1<T>) -> Result<Array1<T>> {
    match times.as_slice() {
      Some(times) => self.evaluate(times),
      None => self.evaluate(&times.to_vec()),
    }
  }

  pub fn value_at(&mut self, t: T) -> Result<T> {
    let values = self.evaluate(&[t])?;
    Ok(values[0])
  }

  /// Segment index and in-segment phase with `index·π + phase == t`.
  fn locate(t: T) -> Result<(usize, T)> {
    if t.is_nan() || t.is_infinite() {
      return Err(KlError::invalid(format!("time must be finite, got {t:?}")));
    }
    if t < T::zero() {
      return Err(KlError::invalid(format!(
        "time must be non-negative, got {t:?}"
      )));
    }

    let pi = T::PI();
    let phase = t % pi;
    let index = ((t - phase) / pi)
      .round()
      .to_usize()
      .ok_or_else(|| KlError::invalid(format!("time {t:?} beyond addressable segment range")))?;

    Ok((index, phase))
  }

  fn ensure_segments(&mut self, target: usize) -> Result<()> {
    let current = self.segment_count();
    if target <= current {
      return Ok(());
    }

    let n = self.n;
    let width = n + 1;
    let too_large =
      || KlError::invalid(format!("{target} segments of order {n} exceed addressable storage"));
    target
      .checked_mul(width)
      .and_then(|len| len.checked_mul(std::mem::size_of::<T>()))
      .filter(|&bytes| bytes <= isize::MAX as usize)
      .ok_or_else(too_large)?;

    let new_count = target - current;
    let mut draws = Vec::new();
    draws
      .try_reserve_exact(new_count * width)
      .map_err(|_| too_large())?;
    self
      .segment_start_values
      .try_reserve_exact(new_count)
      .map_err(|_| too_large())?;
    draws.extend((0..new_count * width).map(|_| T::standard_normal(&mut self.rng)));
    let fresh = Array2::from_shape_vec((new_count, width), draws)?;

    // Sine terms vanish at both ends of a segment, so only the linear
    // coefficients move the boundary value.
    let sqrt_pi = T::PI().sqrt();
    let start = self.segment_start_values[current];
    let mut drift = T::zero();
    let boundaries = fresh
      .column(0)
      .iter()
      .map(|&linear| {
        drift += linear;
        start + drift * sqrt_pi
      })
      .collect::<Vec<_>>();

    self.xi.append(Axis(0), fresh.view())?;
    self.segment_start_values.extend(boundaries);

    debug!(
      from = current,
      to = target,
      covered_until = ?self.covered_until(),
      "extended Wiener path segments"
    );

    Ok(())
  }

  fn value(&self, k: usize, phase: T) -> T {
    let pi = T::PI();
    let row = self.xi.row(k);
    let linear = row[0] * phase / pi.sqrt();

    // sin(j(kπ + φ)) = (-1)^{jk} sin(jφ)
    let odd_segment = k % 2 == 1;
    let mut series = T::zero();
    for j in 1..=self.n {
      let jf = T::from_usize_(j);
      let s = (jf * phase).sin();
      let s = if odd_segment && j % 2 == 1 { -s } else { s };
      series += row[j] * s / jf;
    }

    linear + T::FRAC_2_PI().sqrt() * series + self.segment_start_values[k]
  }
}

impl<T: FloatExt> KlWiener<T, StdRng> {
  pub fn seeded(n: usize, seed: u64) -> Result<Self> {
    Self::new(n, StdRng::seed_from_u64(seed))
  }

  pub fn from_entropy(n: usize) -> Result<Self> {
    Self::new(n, StdRng::from_entropy())
  }
}
