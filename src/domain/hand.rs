use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Карманные карты игрока (ровно 2).
pub type HoleCards = [Card; 2];

/// Оцениваемая рука (ровно 5 карт).
pub type FiveCards = [Card; 5];

/// Сила руки. Чем больше число – тем сильнее рука; равные числа = ничья.
///
/// Раскладку битов собирает `eval::hand_rank`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);

impl HandRank {
    /// "Руки нет": результат для некорректного числа карт.
    /// Строго меньше любой настоящей руки.
    pub const NO_HAND: HandRank = HandRank(0);

    pub fn is_valid(&self) -> bool {
        *self != Self::NO_HAND
    }
}

impl Default for HandRank {
    fn default() -> Self {
        Self::NO_HAND
    }
}
