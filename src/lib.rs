//! Ядро калькулятора префлоп-эквити для Texas Hold'em.
//!
//! Две руки по 2 карты → вероятность выигрыша каждой на случайном
//! борде из 5 карт (ничья = половина выигрыша).
//!
//! Слои:
//!   - `domain` – карты, колода, результат эквити;
//!   - `eval` – сила 5-карточной руки и лучшая рука из 5..7 карт;
//!   - `engine` – таблица известных матчапов и Монте-Карло;
//!   - `infra` – RNG;
//!   - `api` – DTO и обработка запросов от окружающего приложения.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use domain::{Card, Deck, EquityOutcome, EquityResult, EquitySource, HandRank, Rank, Suit};
pub use engine::{compute_equity, compute_equity_with, CancelToken, EngineError, SimulationConfig};
pub use eval::{best_hand_score, evaluate, HandCategory};
