//! RngSeed — доменный seed для RNG симулятора.
//!
//! Позволяет:
//!   - хранить базовый seed (из u64)
//!   - детерминированно выводить seed для каждого батча розыгрышей:
//!         new = H(domain || base || batch_index)
//!   - создавать DeterministicRng из seed
//!
//! Благодаря этому результат с фиксированным seed не зависит от того,
//! сколько потоков rayon реально обработало батчи.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    /// Создать seed из u64 (для удобства конфигов и тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Seed для батча с номером `batch_index`.
    pub fn derive(&self, batch_index: u64) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(b"POKER_EQUITY_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(batch_index.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}
