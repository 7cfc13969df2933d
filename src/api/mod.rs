//! Внешний API ядра для окружающего приложения.
//!
//! Здесь описываются:
//! - запросы (queries.rs) — расчёт эквити по строкам карт;
//! - DTO (dto.rs) — удобные структуры для фронта;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod dto;
pub mod errors;
pub mod queries;

pub use dto::*;
pub use errors::*;
pub use queries::*;
