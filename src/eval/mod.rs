//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Основные функции:
//!   `evaluate(five) -> HandRank`
//!   `best_hand_score(cards) -> HandRank`

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::{best_hand_score, evaluate, evaluate_best_hand};
pub use hand_rank::{describe_hand, hand_category, HandCategory};
