use serde::{Deserialize, Serialize};

/// Сколько знаков после запятой показываем пользователю.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Эквити одного игрока.
///
/// `equity` – проценты в [0, 100], ничьи считаются как половина выигрыша.
/// Счётчики всегда точные целые, округляется только `equity` и только
/// при выводе (`rounded`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct EquityResult {
    pub equity: f64,
    pub wins: u64,
    pub ties: u64,
}

impl EquityResult {
    /// equity = (wins + ties * 0.5) / trials * 100.
    pub fn from_counts(wins: u64, ties: u64, trials: u64) -> Self {
        let equity = if trials == 0 {
            0.0
        } else {
            (wins as f64 + ties as f64 * 0.5) / trials as f64 * 100.0
        };
        Self { equity, wins, ties }
    }

    /// Копия с округлённым для отображения эквити.
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            equity: round_percent(self.equity, decimals),
            ..*self
        }
    }
}

/// Округление процента до `decimals` знаков.
pub fn round_percent(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Откуда взялся результат.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum EquitySource {
    /// Готовое значение из таблицы известных матчапов.
    Precomputed,
    /// Монте-Карло.
    Simulated,
    /// Некорректные руки (не по 2 карты) – фиксированные 50/50.
    Fallback,
}

/// Итог расчёта эквити для пары рук.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct EquityOutcome {
    pub hand1: EquityResult,
    pub hand2: EquityResult,
    /// Сколько розыгрышей реально учтено.
    pub trials: u64,
    pub source: EquitySource,
    /// Симуляция прервана досрочно, `trials` меньше запрошенного.
    pub aborted: bool,
}

impl EquityOutcome {
    /// Собрать результат симуляции из точных счётчиков.
    pub fn from_counts(wins1: u64, wins2: u64, ties: u64, aborted: bool) -> Self {
        let trials = wins1 + wins2 + ties;
        Self {
            hand1: EquityResult::from_counts(wins1, ties, trials),
            hand2: EquityResult::from_counts(wins2, ties, trials),
            trials,
            source: EquitySource::Simulated,
            aborted,
        }
    }

    /// Вырожденный результат для рук неправильной длины.
    pub fn fallback() -> Self {
        let half = EquityResult {
            equity: 50.0,
            wins: 500,
            ties: 0,
        };
        Self {
            hand1: half,
            hand2: half,
            trials: 1000,
            source: EquitySource::Fallback,
            aborted: false,
        }
    }

    /// Поменять игроков местами.
    pub fn swapped(&self) -> Self {
        Self {
            hand1: self.hand2,
            hand2: self.hand1,
            ..*self
        }
    }

    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            hand1: self.hand1.rounded(decimals),
            hand2: self.hand2.rounded(decimals),
            ..*self
        }
    }
}
