//! Инфраструктурный слой вокруг симулятора:
//! - RNG-реализации (системный и детерминированный);
//! - вывод seed'ов для батчей.

pub mod rng;
pub mod rng_seed;

pub use rng::*;
pub use rng_seed::RngSeed;
