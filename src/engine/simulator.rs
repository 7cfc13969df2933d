//! Монте-Карло симулятор префлоп-эквити для двух рук.
//!
//! Каждый розыгрыш: честное перемешивание оставшихся 48 карт,
//! первые 5 – общие карты, лучшая рука из 7 у каждого игрока.
//! Розыгрыши независимы, поэтому режем их на батчи и считаем на rayon;
//! частичные счётчики складываются точно.

use rayon::prelude::*;

use crate::domain::{Card, Deck, EquityOutcome, FiveCards, HoleCards};
use crate::eval::best_hand_score;
use crate::infra::{RngSeed, SystemRng};

use super::cancel::{CancelToken, StopCondition};
use super::config::SimulationConfig;
use super::errors::EngineError;
use super::shortcuts;
use super::RandomSource;

/// Размер батча. Фиксирован, чтобы результат с seed не зависел от числа потоков.
pub const BATCH_TRIALS: u64 = 4096;

/// Как часто воркер проверяет отмену/дедлайн.
pub const ABORT_CHECK_INTERVAL: u64 = 256;

/// Исход одного розыгрыша.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Showdown {
    Player1Wins,
    Player2Wins,
    Tie,
}

/// Точные счётчики по батчу.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Tally {
    wins1: u64,
    wins2: u64,
    ties: u64,
}

impl Tally {
    fn record(&mut self, showdown: Showdown) {
        match showdown {
            Showdown::Player1Wins => self.wins1 += 1,
            Showdown::Player2Wins => self.wins2 += 1,
            Showdown::Tie => self.ties += 1,
        }
    }

    fn merge(self, other: Tally) -> Tally {
        Tally {
            wins1: self.wins1 + other.wins1,
            wins2: self.wins2 + other.wins2,
            ties: self.ties + other.ties,
        }
    }

    fn total(&self) -> u64 {
        self.wins1 + self.wins2 + self.ties
    }
}

/// Эквити двух рук с настройками по умолчанию и заданным числом розыгрышей.
pub fn compute_equity(
    hand1: &[Card],
    hand2: &[Card],
    trials: u64,
) -> Result<EquityOutcome, EngineError> {
    compute_equity_with(
        hand1,
        hand2,
        &SimulationConfig::with_trials(trials),
        &CancelToken::new(),
    )
}

/// Полная версия: конфиг + токен отмены.
///
/// Порядок:
///   1. руки не по 2 карты → фиксированный 50/50 (`EquitySource::Fallback`);
///   2. `trials == 0` или повтор карты → ошибка;
///   3. таблица известных матчапов;
///   4. симуляция.
pub fn compute_equity_with(
    hand1: &[Card],
    hand2: &[Card],
    config: &SimulationConfig,
    cancel: &CancelToken,
) -> Result<EquityOutcome, EngineError> {
    let (Ok(h1), Ok(h2)) = (HoleCards::try_from(hand1), HoleCards::try_from(hand2)) else {
        log::warn!(
            "hole hands must have 2 cards each (got {} and {}), returning 50/50",
            hand1.len(),
            hand2.len()
        );
        return Ok(EquityOutcome::fallback());
    };

    if config.trials == 0 {
        return Err(EngineError::ZeroTrials);
    }
    validate_disjoint(&h1, &h2)?;

    if config.use_shortcuts {
        if let Some(outcome) = shortcuts::lookup(&h1, &h2) {
            return Ok(outcome);
        }
    }

    simulate(&h1, &h2, config, cancel)
}

/// Все 4 карманные карты должны быть разными.
pub fn validate_disjoint(hand1: &HoleCards, hand2: &HoleCards) -> Result<(), EngineError> {
    let all = [hand1[0], hand1[1], hand2[0], hand2[1]];
    for (i, card) in all.iter().enumerate() {
        if all[i + 1..].contains(card) {
            return Err(EngineError::DuplicateCard(*card));
        }
    }
    Ok(())
}

/// Сравнить две руки на полном борде.
pub fn showdown(hand1: &HoleCards, hand2: &HoleCards, board: &FiveCards) -> Showdown {
    let seven = |hole: &HoleCards| -> [Card; 7] {
        [hole[0], hole[1], board[0], board[1], board[2], board[3], board[4]]
    };
    let s1 = best_hand_score(&seven(hand1));
    let s2 = best_hand_score(&seven(hand2));

    match s1.cmp(&s2) {
        std::cmp::Ordering::Greater => Showdown::Player1Wins,
        std::cmp::Ordering::Less => Showdown::Player2Wins,
        std::cmp::Ordering::Equal => Showdown::Tie,
    }
}

/// Монте-Карло без таблицы и без проверки длины рук.
/// Руки должны быть уже проверены на пересечение.
pub fn simulate(
    hand1: &HoleCards,
    hand2: &HoleCards,
    config: &SimulationConfig,
    cancel: &CancelToken,
) -> Result<EquityOutcome, EngineError> {
    if config.trials == 0 {
        return Err(EngineError::ZeroTrials);
    }

    let remainder = Deck::without(&[hand1[0], hand1[1], hand2[0], hand2[1]]).cards;
    let n_batches = batch_count(config.trials);
    let stop = StopCondition::new(cancel, config.time_limit_ms);

    log::debug!(
        "simulating {} trials in {} batches (parallel: {}, seed: {:?})",
        config.trials,
        n_batches,
        config.parallel,
        config.seed
    );

    // None → остановка до начала батча; дальше батчи не берём.
    let run = |index: u64| -> Option<Tally> {
        if stop.should_stop() {
            return None;
        }
        let size = batch_size(index, config.trials);
        let tally = match config.seed {
            Some(seed) => {
                let mut rng = RngSeed::from_u64(seed).derive(index).to_rng();
                run_batch(hand1, hand2, &remainder, size, &mut rng, &stop)
            }
            None => run_batch(hand1, hand2, &remainder, size, &mut SystemRng, &stop),
        };
        Some(tally)
    };

    let tally = if config.parallel {
        (0..n_batches)
            .into_par_iter()
            .map(run)
            .while_some()
            .reduce(Tally::default, Tally::merge)
    } else {
        (0..n_batches)
            .map_while(run)
            .fold(Tally::default(), Tally::merge)
    };

    let completed = tally.total();
    if completed == 0 {
        log::warn!("simulation aborted before the first trial");
        return Err(EngineError::Aborted);
    }

    let aborted = completed < config.trials;
    if aborted {
        log::warn!(
            "simulation aborted after {} of {} trials",
            completed,
            config.trials
        );
    }

    let outcome = EquityOutcome::from_counts(tally.wins1, tally.wins2, tally.ties, aborted);
    log::info!(
        "{}{} vs {}{}: {:.2}% / {:.2}% over {} trials",
        hand1[0],
        hand1[1],
        hand2[0],
        hand2[1],
        outcome.hand1.equity,
        outcome.hand2.equity,
        outcome.trials
    );
    Ok(outcome)
}

/// Сколько батчей нужно на `trials` розыгрышей.
fn batch_count(trials: u64) -> u64 {
    trials.div_ceil(BATCH_TRIALS)
}

/// Размер батча с номером `index`: полный, кроме, возможно, последнего.
fn batch_size(index: u64, trials: u64) -> u64 {
    (trials - index * BATCH_TRIALS).min(BATCH_TRIALS)
}

fn run_batch<R: RandomSource>(
    hand1: &HoleCards,
    hand2: &HoleCards,
    remainder: &[Card],
    size: u64,
    rng: &mut R,
    stop: &StopCondition<'_>,
) -> Tally {
    let mut deck = remainder.to_vec();
    let mut tally = Tally::default();

    for i in 0..size {
        if i % ABORT_CHECK_INTERVAL == 0 && stop.should_stop() {
            break;
        }

        rng.shuffle(&mut deck);
        let board = [deck[0], deck[1], deck[2], deck[3], deck[4]];
        tally.record(showdown(hand1, hand2, &board));
    }

    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batches_cover_all_trials() {
        let trials = BATCH_TRIALS * 3 + 17;
        assert_eq!(batch_count(trials), 4);
        assert_eq!(
            (0..batch_count(trials)).map(|i| batch_size(i, trials)).sum::<u64>(),
            trials
        );
        assert_eq!(batch_size(3, trials), 17);

        assert_eq!(batch_count(BATCH_TRIALS), 1);
        assert_eq!(batch_size(0, BATCH_TRIALS), BATCH_TRIALS);
        assert_eq!(batch_count(0), 0);
    }

    #[test]
    fn huge_trial_count_needs_no_allocation() {
        let n = batch_count(u64::MAX);
        assert_eq!(n, u64::MAX / BATCH_TRIALS + 1);
        assert_eq!(batch_size(0, u64::MAX), BATCH_TRIALS);
        assert_eq!(batch_size(n - 1, u64::MAX), u64::MAX % BATCH_TRIALS);
    }

    #[test]
    fn tally_merge_is_exact() {
        let mut a = Tally::default();
        a.record(Showdown::Player1Wins);
        a.record(Showdown::Tie);
        let mut b = Tally::default();
        b.record(Showdown::Player2Wins);

        let m = a.merge(b);
        assert_eq!(m, Tally { wins1: 1, wins2: 1, ties: 1 });
        assert_eq!(m.total(), 3);
    }
}
