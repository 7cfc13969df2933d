//! Доменная модель: карты, колода, руки, результат эквити.
//!
//! Все типы – неизменяемые значения, пересобираются на каждый вызов.

pub mod card;
pub mod deck;
pub mod equity;
pub mod hand;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use equity::*;
pub use hand::*;
