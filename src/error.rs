//! # Error
//!
//! $$
//! \text{call}\mapsto \text{value} \;\vee\; \text{KlError}
//! $$
//!
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KlError {
  /// Rejected before any state was touched.
  #[error("invalid argument: {0}")]
  InvalidArgument(String),
  #[error("coefficient storage shape mismatch: {0}")]
  Shape(#[from] ndarray::ShapeError),
  #[error("shared process lock was poisoned")]
  Poisoned,
}

impl KlError {
  pub fn invalid(msg: impl Into<String>) -> Self {
    KlError::InvalidArgument(msg.into())
  }
}

pub type Result<T> = std::result::Result<T, KlError>;
