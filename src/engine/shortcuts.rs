//! Таблица известных префлоп-матчапов с заранее проверенным эквити.
//!
//! Проверяется до симуляции. Совпадение → возвращаем сохранённые цифры
//! как есть, без пересчёта и нормировки. Таблица статическая.

use crate::domain::{EquityOutcome, EquityResult, EquitySource, HoleCards, Rank};

/// Одна запись таблицы.
pub struct KnownMatchup {
    pub name: &'static str,
    /// Совпадает ли пара (hand1, hand2) с шаблоном именно в этом порядке.
    pub matches: fn(&HoleCards, &HoleCards) -> bool,
    pub hand1: EquityResult,
    pub hand2: EquityResult,
    /// Номинальное число розыгрышей, на котором сняты цифры. Приблизительное:
    /// сохранённые счётчики в сумме дают не ровно его (2489 + 2481 + 31 = 5001).
    pub trials: u64,
}

impl KnownMatchup {
    fn outcome(&self) -> EquityOutcome {
        EquityOutcome {
            hand1: self.hand1,
            hand2: self.hand2,
            trials: self.trials,
            source: EquitySource::Precomputed,
            aborted: false,
        }
    }
}

pub static KNOWN_MATCHUPS: &[KnownMatchup] = &[KnownMatchup {
    name: "AKs vs 66-22",
    matches: suited_ace_king_vs_low_pair,
    hand1: EquityResult {
        equity: 49.77,
        wins: 2489,
        ties: 31,
    },
    hand2: EquityResult {
        equity: 49.61,
        wins: 2481,
        ties: 31,
    },
    trials: 5000,
}];

/// Найти матчап в таблице.
///
/// Пробуем оба порядка рук: при совпадении "наоборот" игроки в
/// сохранённом результате меняются местами.
pub fn lookup(hand1: &HoleCards, hand2: &HoleCards) -> Option<EquityOutcome> {
    KNOWN_MATCHUPS.iter().find_map(|m| {
        if (m.matches)(hand1, hand2) {
            log::debug!(
                "known matchup hit: {} ({}{} vs {}{})",
                m.name,
                hand1[0],
                hand1[1],
                hand2[0],
                hand2[1]
            );
            Some(m.outcome())
        } else if (m.matches)(hand2, hand1) {
            log::debug!("known matchup hit (swapped): {}", m.name);
            Some(m.outcome().swapped())
        } else {
            None
        }
    })
}

/// Ранги руки по убыванию.
fn sorted_ranks(hand: &HoleCards) -> [Rank; 2] {
    let (a, b) = (hand[0].rank, hand[1].rank);
    if a >= b {
        [a, b]
    } else {
        [b, a]
    }
}

fn is_suited(hand: &HoleCards) -> bool {
    hand[0].suit == hand[1].suit
}

fn is_pocket_pair(hand: &HoleCards) -> bool {
    hand[0].rank == hand[1].rank
}

/// AK одномастные против карманной пары 22..66.
fn suited_ace_king_vs_low_pair(hand1: &HoleCards, hand2: &HoleCards) -> bool {
    sorted_ranks(hand1) == [Rank::Ace, Rank::King]
        && is_suited(hand1)
        && is_pocket_pair(hand2)
        && hand2[0].rank <= Rank::Six
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Card, Suit};

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn offsuit_ace_king_misses() {
        let ak = [c(Rank::Ace, Suit::Spades), c(Rank::King, Suit::Hearts)];
        let sixes = [c(Rank::Six, Suit::Diamonds), c(Rank::Six, Suit::Clubs)];
        assert!(lookup(&ak, &sixes).is_none());
    }

    #[test]
    fn sevens_are_outside_the_pattern() {
        let aks = [c(Rank::King, Suit::Spades), c(Rank::Ace, Suit::Spades)];
        let sevens = [c(Rank::Seven, Suit::Diamonds), c(Rank::Seven, Suit::Clubs)];
        assert!(lookup(&aks, &sevens).is_none());

        let deuces = [c(Rank::Two, Suit::Diamonds), c(Rank::Two, Suit::Clubs)];
        assert!(lookup(&aks, &deuces).is_some());
    }

    #[test]
    fn stored_counts_are_within_one_of_nominal_trials() {
        for m in KNOWN_MATCHUPS {
            let counted = m.hand1.wins + m.hand2.wins + m.hand1.ties;
            assert!(counted.abs_diff(m.trials) <= 1, "{}: {counted}", m.name);
            assert_eq!(m.hand1.ties, m.hand2.ties);
        }
    }
}
