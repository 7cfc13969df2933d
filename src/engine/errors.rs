use crate::domain::Card;

use thiserror::Error;

/// Ошибки расчёта эквити.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Карта {0} встречается в руках больше одного раза")]
    DuplicateCard(Card),

    #[error("Число розыгрышей должно быть больше нуля")]
    ZeroTrials,

    #[error("Симуляция прервана до первого розыгрыша")]
    Aborted,

    #[error("Некорректный конфиг симуляции: {0}")]
    InvalidConfig(String),
}
