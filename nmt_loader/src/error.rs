use std::error::Error; // Стандартный трейт для ошибок

use nmt_core::NmtCoreError;
use thiserror::Error;

/// Кастомные типы ошибок для крейта `nmt_loader`.
///
/// Инкапсулирует ошибки файлового ввода/вывода, парсинга `config.json`,
/// валидации и инициализации модели.
#[derive(Error, Debug)]
pub enum ModelLoaderError {
    /// Сбой файлового ввода/вывода.
    #[error("Ошибка ввода/вывода по пути '{path}': {source}")]
    Io {
        /// Путь к файлу, который вызвал ошибку.
        path: String,
        /// Исходная ошибка `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Сбой парсинга файла конфигурации (например, синтаксическая ошибка JSON).
    #[error("Не удалось разобрать файл конфигурации '{path}': {source}")]
    ConfigParsing {
        /// Путь к файлу конфигурации.
        path: String,
        /// Исходная ошибка парсинга.
        #[source]
        source: Box<dyn Error + Send + Sync + 'static>,
    },

    /// Невалидная или неподдерживаемая конфигурация модели.
    #[error("Невалидная конфигурация модели: {message}")]
    InvalidConfig {
        /// Описание всех найденных проблем.
        message: String,
    },

    /// Ошибка ядра модели (валидация `Seq2SeqConfig`, инициализация модулей).
    #[error("Ошибка ядра модели: {0}")]
    Core(#[from] NmtCoreError),
}
