//! # Process
//!
//! $$
//! W_t = W_{k\pi} + \xi_{k,0}\frac{t-k\pi}{\sqrt{\pi}}
//!   + \sqrt{\frac{2}{\pi}}\sum_{j=1}^{n}\xi_{k,j}\frac{\sin(jt)}{j},
//! \quad k=\lfloor t/\pi\rfloor
//! $$
//!
pub mod kl_bm;
pub mod kl_wiener;
pub mod shared;
