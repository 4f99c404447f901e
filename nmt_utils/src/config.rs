//! Конфигурация приложения, загружаемая из TOML.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use tracing::{warn, Level};

use crate::error::UtilsError;

/// Глобальная конфигурация приложения.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct AppConfig {
    /// Конфигурация, связанная с моделью.
    #[serde(default)]
    pub model_config: ModelConfigSub,

    /// Конфигурация логирования.
    #[serde(default)]
    pub logging_config: LoggingConfigSub,
}

/// Конфигурация модели (под-конфигурация для `AppConfig`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelConfigSub {
    /// Директория, в которой лежит `config.json` модели.
    #[serde(default = "default_model_dir")]
    pub model_dir: String,
}

fn default_model_dir() -> String {
    "./model".to_string()
}

impl Default for ModelConfigSub {
    fn default() -> Self {
        Self {
            model_dir: default_model_dir(),
        }
    }
}

impl ModelConfigSub {
    /// Путь к директории модели.
    pub fn model_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.model_dir)
    }
}

/// Конфигурация логирования (под-конфигурация для `AppConfig`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfigSub {
    /// Уровень логирования (`trace`, `debug`, `info`, `warn`, `error`).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Директория для файлов логов (опционально).
    #[serde(default)]
    pub log_dir: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfigSub {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: None,
        }
    }
}

impl LoggingConfigSub {
    /// Разбирает строковый уровень логирования в `tracing::Level`.
    ///
    /// # Errors
    /// `UtilsError::Config`, если уровень не распознан.
    pub fn tracing_level(&self) -> Result<Level, UtilsError> {
        Level::from_str(self.level.trim()).map_err(|_| {
            UtilsError::Config(format!("Неизвестный уровень логирования: '{}'", self.level))
        })
    }
}

impl AppConfig {
    /// Загружает конфигурацию приложения из TOML файла.
    /// Если файл не найден, возвращается конфигурация по умолчанию.
    ///
    /// # Errors
    /// Возвращает `UtilsError::Io` при ошибках чтения файла или `UtilsError::Config`
    /// при ошибках парсинга TOML.
    pub fn load_from_toml(file_path: &Path) -> Result<Self, UtilsError> {
        if !file_path.exists() {
            warn!(
                "Файл AppConfig не найден по пути {:?}, используется конфигурация по умолчанию.",
                file_path
            );
            return Ok(Self::default());
        }
        let config_str = std::fs::read_to_string(file_path)
            .map_err(|e| UtilsError::io_with_path(e, file_path.display().to_string()))?;
        toml::from_str(&config_str).map_err(|e| {
            UtilsError::Config(format!(
                "Не удалось разобрать AppConfig из TOML {}: {e}",
                file_path.display()
            ))
        })
    }
}
