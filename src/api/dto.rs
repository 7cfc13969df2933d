use serde::{Deserialize, Serialize};

use crate::domain::{Card, EquityOutcome, EquityResult, EquitySource, DISPLAY_DECIMALS};

/// Эквити одной руки в том виде, в каком его показывает фронт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandEquityDto {
    /// Карты руки строками ("As", "Kd").
    pub hand: Vec<String>,
    /// Проценты, округлённые до `DISPLAY_DECIMALS` знаков.
    pub equity: f64,
    pub wins: u64,
    pub ties: u64,
}

impl HandEquityDto {
    pub fn new(hand: &[Card], result: &EquityResult) -> Self {
        let rounded = result.rounded(DISPLAY_DECIMALS);
        Self {
            hand: hand.iter().map(|c| c.to_string()).collect(),
            equity: rounded.equity,
            wins: rounded.wins,
            ties: rounded.ties,
        }
    }
}

/// Ответ на запрос эквити.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EquityResponse {
    pub hand1: HandEquityDto,
    pub hand2: HandEquityDto,
    pub trials: u64,
    pub source: EquitySource,
    pub aborted: bool,
}

impl EquityResponse {
    pub fn from_outcome(hand1: &[Card], hand2: &[Card], outcome: &EquityOutcome) -> Self {
        Self {
            hand1: HandEquityDto::new(hand1, &outcome.hand1),
            hand2: HandEquityDto::new(hand2, &outcome.hand2),
            trials: outcome.trials,
            source: outcome.source,
            aborted: outcome.aborted,
        }
    }
}
