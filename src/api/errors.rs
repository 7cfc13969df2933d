use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::CardParseError;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ApiError {
    /// Неправильные входные данные (битый JSON, непонятная карта).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Данные разобрались, но расчёт с ними невозможен
    /// (повтор карты, ноль розыгрышей).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Внутренняя ошибка.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Aborted => ApiError::Internal(err.to_string()),
            _ => ApiError::InvalidInput(err.to_string()),
        }
    }
}

impl From<CardParseError> for ApiError {
    fn from(err: CardParseError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
