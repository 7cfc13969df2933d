use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::EngineError;

/// Число розыгрышей по умолчанию.
pub const DEFAULT_TRIALS: u64 = 50_000;

/// Настройки одного расчёта эквити.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Сколько раз раздаём 5 общих карт.
    pub trials: u64,
    /// Фиксированный seed → воспроизводимый результат.
    pub seed: Option<u64>,
    /// Считать батчи на пуле rayon.
    pub parallel: bool,
    /// Проверять таблицу известных матчапов до симуляции.
    pub use_shortcuts: bool,
    /// Жёсткий лимит по времени; по истечении отдаём частичный результат.
    pub time_limit_ms: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            parallel: true,
            use_shortcuts: true,
            time_limit_ms: None,
        }
    }
}

impl SimulationConfig {
    pub fn with_trials(trials: u64) -> Self {
        Self {
            trials,
            ..Self::default()
        }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn without_shortcuts(mut self) -> Self {
        self.use_shortcuts = false;
        self
    }

    /// Разобрать конфиг из JSON; отсутствующие поля берутся из `Default`.
    pub fn from_json(s: &str) -> Result<Self, EngineError> {
        serde_json::from_str(s).map_err(|e| EngineError::InvalidConfig(e.to_string()))
    }

    /// Прочитать JSON-конфиг с диска.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| EngineError::InvalidConfig(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SimulationConfig::from_json(r#"{"trials": 1000, "seed": 7}"#).unwrap();
        assert_eq!(cfg.trials, 1000);
        assert_eq!(cfg.seed, Some(7));
        assert!(cfg.parallel);
        assert!(cfg.use_shortcuts);
        assert_eq!(cfg.time_limit_ms, None);
    }

    #[test]
    fn broken_json_is_invalid_config() {
        let err = SimulationConfig::from_json("{trials:").unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn config_file_is_loaded() {
        let path = std::env::temp_dir().join(format!("poker-equity-cfg-{}.json", std::process::id()));
        fs::write(&path, r#"{"trials": 2500, "parallel": false, "time_limit_ms": 300}"#).unwrap();

        let cfg = SimulationConfig::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(cfg.trials, 2500);
        assert!(!cfg.parallel);
        assert_eq!(cfg.time_limit_ms, Some(300));
        assert!(cfg.use_shortcuts);
    }

    #[test]
    fn missing_config_file_is_invalid_config() {
        let err = SimulationConfig::from_file("/nonexistent/poker-equity.json").unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }
}
