use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Флаг отмены симуляции. Клонируется дёшево, все клоны смотрят
/// на один и тот же флаг.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Условие остановки для воркеров: токен + опциональный дедлайн.
#[derive(Clone, Debug)]
pub(crate) struct StopCondition<'a> {
    token: &'a CancelToken,
    deadline: Option<Instant>,
}

impl<'a> StopCondition<'a> {
    pub(crate) fn new(token: &'a CancelToken, time_limit_ms: Option<u64>) -> Self {
        let deadline = time_limit_ms.map(|ms| Instant::now() + Duration::from_millis(ms));
        Self { token, deadline }
    }

    pub(crate) fn should_stop(&self) -> bool {
        self.token.is_cancelled() || self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}
