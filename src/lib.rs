//! # kl-wiener
//!
//! $$
//! W_t=\sum_k \mathbf 1_{[k\pi,(k+1)\pi)}(t)\Big(W_{k\pi}+\xi_{k,0}\tfrac{t-k\pi}{\sqrt\pi}
//!   +\sqrt{\tfrac{2}{\pi}}\sum_{j=1}^{n}\xi_{k,j}\tfrac{\sin(jt)}{j}\Big)
//! $$
//!
//! Wiener process paths sampled lazily at arbitrary query times.
//!
pub mod error;
pub mod stochastic;
pub mod traits;

pub use error::KlError;
pub use stochastic::process::kl_bm::KlBM;
pub use stochastic::process::kl_wiener::KlWiener;
pub use stochastic::process::shared::SharedKlWiener;
