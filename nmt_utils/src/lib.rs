#![warn(
    missing_docs, // Предупреждать, если публичные элементы не документированы.
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![deny(
    unsafe_code,          // Запретить использование unsafe блоков.
    unused_mut,           // Запретить неиспользуемые изменяемые переменные.
    unused_imports,       // Запретить неиспользуемые импорты.
    clippy::unwrap_used,  // Запрет использования `.unwrap()`.
    clippy::expect_used   // Запрет использования `.expect()`.
)]

//! `nmt_utils` предоставляет общие для воркспейса утилиты: тип ошибки,
//! инициализацию логирования на базе `tracing` и конфигурацию приложения.
//!
//! # Основные модули:
//!
//! - [`error`]: общий тип ошибки `UtilsError`.
//! - [`logger`]: (фича `logger_utils_feature`) инициализация глобального
//!   подписчика `tracing` с выводом в консоль и, опционально, в файл.
//! - [`config`]: (фича `config_toml`) `AppConfig`, загружаемый из TOML.

// --- Модуль для общих ошибок ---
pub mod error;
pub use error::UtilsError;

/// Модуль с утилитами для инициализации логирования.
///
/// Активируется фичей `logger_utils_feature`.
#[cfg(feature = "logger_utils_feature")]
pub mod logger;
#[cfg(feature = "logger_utils_feature")]
pub use logger::init_tracing_logger;

/// Модуль для загрузки конфигурации приложения.
///
/// Активируется фичей `config_toml`.
#[cfg(feature = "config_toml")]
pub mod config;
#[cfg(feature = "config_toml")]
pub use config::AppConfig;
