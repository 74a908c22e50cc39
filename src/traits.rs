//! # Traits
//!
//! $$
//! \text{Trait contracts: }\mathcal{A}:\text{inputs}\to\text{samples}
//! $$
//!
use std::fmt::Debug;
use std::iter::Sum;
use std::ops::AddAssign;
use std::ops::SubAssign;

use ndarray::parallel::prelude::*;
use ndarray::ScalarOperand;
use rand::Rng;

pub trait FloatExt:
  num_traits::Float
  + num_traits::FromPrimitive
  + num_traits::ToPrimitive
  + num_traits::Signed
  + num_traits::FloatConst
  + Sum
  + Default
  + Debug
  + Send
  + Sync
  + ScalarOperand
  + AddAssign
  + SubAssign
  + 'static
{
  fn from_usize_(n: usize) -> Self;

  /// One independent standard-normal variate drawn from `rng`.
  fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

pub trait ProcessExt<T: FloatExt>: Send + Sync {
  type Output: Send;

  fn sample(&self) -> Self::Output;

  fn sample_par(&self, m: usize) -> Vec<Self::Output> {
    (0..m).into_par_iter().map(|_| self.sample()).collect()
  }
}
