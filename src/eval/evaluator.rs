use crate::domain::card::{Card, Rank};
use crate::domain::hand::{FiveCards, HandRank};

use super::hand_rank::HandCategory;
use super::lookup_tables::{detect_straight, rank_to_bit, straight_ranks, RankMask};

/// Оценка строго 5-карточной руки.
///
/// Для любого другого числа карт возвращает `HandRank::NO_HAND`:
/// это ошибка вызывающего кода, а не рантайм-сбой.
pub fn evaluate(cards: &[Card]) -> HandRank {
    match <&FiveCards>::try_from(cards) {
        Ok(five) => evaluate_5card_hand(five),
        Err(_) => HandRank::NO_HAND,
    }
}

/// Лучшая 5-карточная рука из 5..7 карт (работает и для большего числа).
///
/// Меньше 5 карт → `HandRank::NO_HAND`.
pub fn best_hand_score(cards: &[Card]) -> HandRank {
    match cards.len() {
        0..=4 => HandRank::NO_HAND,
        5 => evaluate(cards),
        _ => best_of_all_5card_combinations(cards),
    }
}

/// Вычислить лучшую 5-карточную руку из hole + board.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> HandRank {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);

    best_hand_score(&all_cards)
}

/// Перебираем все комбинации 5 карт из N (C(7,5) = 21) и выбираем лучшую.
fn best_of_all_5card_combinations(cards: &[Card]) -> HandRank {
    let n = cards.len();
    debug_assert!(n >= 5);

    let mut best = HandRank::NO_HAND;

    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let five: FiveCards = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let r = evaluate_5card_hand(&five);
                        if r > best {
                            best = r;
                        }
                    }
                }
            }
        }
    }

    best
}

/// Ранг и сколько раз он встретился в руке.
#[derive(Clone, Copy)]
struct RankCount {
    rank: Rank,
    count: u8,
}

fn evaluate_5card_hand(cards: &FiveCards) -> HandRank {
    let mut rank_counts = [0u8; 15]; // индексы 0..14, но используем 2..14
    let mut rank_mask: RankMask = 0;

    for card in cards.iter() {
        rank_counts[card.rank.value() as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    let first_suit = cards[0].suit;
    let is_flush = cards.iter().all(|c| c.suit == first_suit);
    // 5 разных рангов подряд (или wheel).
    let straight_high = detect_straight(rank_mask);

    // Ранги по убыванию, затем стабильная сортировка по количеству (desc):
    // получаем и паттерн [3,2], [2,2,1], ... и порядок тай-брейка.
    let mut rc_list: Vec<RankCount> = Rank::ALL
        .iter()
        .rev()
        .filter_map(|&rank| {
            let count = rank_counts[rank.value() as usize];
            (count > 0).then_some(RankCount { rank, count })
        })
        .collect();
    rc_list.sort_by(|a, b| b.count.cmp(&a.count));

    let pattern: Vec<u8> = rc_list.iter().map(|rc| rc.count).collect();

    // Ранги в порядке сравнения: каждый ранг повторён count раз.
    // Для [3,2] это T T T 4 4, для [2,2,1] – K K 9 9 3.
    let mut ordered = [Rank::Two; 5];
    let mut i = 0;
    for rc in &rc_list {
        for _ in 0..rc.count {
            ordered[i] = rc.rank;
            i += 1;
        }
    }

    if let (true, Some(high)) = (is_flush, straight_high) {
        let category = if high == Rank::Ace {
            HandCategory::RoyalFlush
        } else {
            HandCategory::StraightFlush
        };
        return HandRank::from_category_and_ranks(category, straight_ranks(high));
    }

    let category = match pattern.as_slice() {
        [4, 1] => HandCategory::FourOfAKind,
        [3, 2] => HandCategory::FullHouse,
        _ if is_flush => HandCategory::Flush,
        _ if straight_high.is_some() => HandCategory::Straight,
        [3, 1, 1] => HandCategory::ThreeOfAKind,
        [2, 2, 1] => HandCategory::TwoPair,
        [2, 1, 1, 1] => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    match (category, straight_high) {
        (HandCategory::Straight, Some(high)) => {
            HandRank::from_category_and_ranks(category, straight_ranks(high))
        }
        _ => HandRank::from_category_and_ranks(category, ordered),
    }
}
