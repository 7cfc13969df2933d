use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;
use crate::domain::hand::HandRank;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    fn from_id(id: u8) -> Option<HandCategory> {
        Self::ALL.get(id as usize).copied()
    }
}

impl HandRank {
    /// Собрать HandRank из категории и 5 рангов (в порядке сравнения:
    /// сначала ранги комбинации, потом кикеры по убыванию).
    ///
    /// Схема кодирования (u32):
    ///   [категория:4 бита][r0:4][r1:4][r2:4][r3:4][r4:4]
    /// Rank: 2..14 (2..A) влазит в 4 бита. Категория – старшая "полоса",
    /// поэтому любая рука старшей категории больше любой руки младшей.
    pub fn from_category_and_ranks(category: HandCategory, ranks: [Rank; 5]) -> Self {
        let cat_bits = (category as u32) & 0x0F;
        let value = ranks
            .iter()
            .fold(cat_bits, |acc, r| (acc << 4) | (r.value() as u32 & 0x0F));

        HandRank(value)
    }

    /// Вытащить категорию из HandRank.
    /// Для `NO_HAND` и мусора – `None`.
    pub fn try_category(&self) -> Option<HandCategory> {
        if !self.is_valid() {
            return None;
        }
        HandCategory::from_id(((self.0 >> 20) & 0x0F) as u8)
    }

    /// Категория руки. `NO_HAND` трактуем как HighCard.
    pub fn category(&self) -> HandCategory {
        self.try_category().unwrap_or(HandCategory::HighCard)
    }

    /// Достать 5 рангов (в порядке сравнения) из HandRank.
    pub fn ranks(&self) -> [Rank; 5] {
        let mut out = [Rank::Two; 5];
        for (i, slot) in out.iter_mut().enumerate() {
            let shift = 16 - 4 * i as u32;
            let nibble = ((self.0 >> shift) & 0x0F) as u8;
            // при корректной работе сюда попадают только 2..14
            *slot = Rank::from_value(nibble).unwrap_or(Rank::Two);
        }
        out
    }
}

/// Удобная функция – получить категорию из HandRank.
pub fn hand_category(rank: HandRank) -> HandCategory {
    rank.category()
}

/// Человеческое описание руки по категории.
pub fn describe_hand(rank: HandRank) -> String {
    let Some(cat) = rank.try_category() else {
        return "No hand".to_string();
    };
    match cat {
        HandCategory::HighCard => "High card".to_string(),
        HandCategory::OnePair => "One pair".to_string(),
        HandCategory::TwoPair => "Two pair".to_string(),
        HandCategory::ThreeOfAKind => "Three of a kind".to_string(),
        HandCategory::Straight => "Straight".to_string(),
        HandCategory::Flush => "Flush".to_string(),
        HandCategory::FullHouse => "Full house".to_string(),
        HandCategory::FourOfAKind => "Four of a kind".to_string(),
        HandCategory::StraightFlush => "Straight flush".to_string(),
        HandCategory::RoyalFlush => "Royal flush".to_string(),
    }
}
