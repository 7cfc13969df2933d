//! Расчёт эквити: таблица известных матчапов + Монте-Карло.
//!
//! Основные операции:
//!   - `compute_equity` – эквити двух рук с числом розыгрышей
//!   - `compute_equity_with` – то же с конфигом и токеном отмены
//!   - `showdown` – исход одного борда

pub mod cancel;
pub mod config;
pub mod errors;
pub mod shortcuts;
pub mod simulator;

pub use cancel::CancelToken;
pub use config::{SimulationConfig, DEFAULT_TRIALS};
pub use errors::EngineError;
pub use simulator::{
    compute_equity, compute_equity_with, showdown, simulate, validate_disjoint, Showdown,
};

/// RNG интерфейс для симулятора.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
