use serde::{Deserialize, Serialize};

use crate::domain::Card;
use crate::engine::{compute_equity_with, CancelToken, SimulationConfig};

use super::dto::EquityResponse;
use super::errors::ApiError;

/// Запрос эквити от фронта: карты строками, остальное опционально.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EquityRequest {
    pub hand1: Vec<String>,
    pub hand2: Vec<String>,
    #[serde(default)]
    pub trials: Option<u64>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl EquityRequest {
    fn config(&self) -> SimulationConfig {
        let mut config = SimulationConfig::default();
        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        config.seed = self.seed;
        config
    }
}

fn parse_hand(cards: &[String]) -> Result<Vec<Card>, ApiError> {
    cards
        .iter()
        .map(|s| s.parse::<Card>().map_err(ApiError::from))
        .collect()
}

/// Обработать запрос эквити.
pub fn handle_equity_request(request: &EquityRequest) -> Result<EquityResponse, ApiError> {
    handle_equity_request_with(request, &CancelToken::new())
}

/// То же, но с токеном отмены от вызывающего (таймаут запроса и т.п.).
pub fn handle_equity_request_with(
    request: &EquityRequest,
    cancel: &CancelToken,
) -> Result<EquityResponse, ApiError> {
    let hand1 = parse_hand(&request.hand1)?;
    let hand2 = parse_hand(&request.hand2)?;

    let outcome = compute_equity_with(&hand1, &hand2, &request.config(), cancel)?;

    Ok(EquityResponse::from_outcome(&hand1, &hand2, &outcome))
}

/// JSON in → JSON out.
pub fn handle_equity_json(body: &str) -> Result<String, ApiError> {
    let request: EquityRequest =
        serde_json::from_str(body).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let response = handle_equity_request(&request)?;
    serde_json::to_string(&response).map_err(|e| ApiError::Internal(e.to_string()))
}
