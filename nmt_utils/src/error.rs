use thiserror::Error;

/// Общий тип ошибки для утилит `nmt_utils`.
///
/// Агрегирует ошибки ввода-вывода, конфигурации и инициализации логгера,
/// предоставляя стандартизированный способ их обработки.
#[derive(Error, Debug)]
pub enum UtilsError {
    /// Ошибка ввода-вывода (I/O).
    ///
    /// Содержит исходную ошибку `std::io::Error` и опционально путь к файлу/директории,
    /// с которым возникла проблема.
    #[error("Ошибка ввода-вывода: {source}")]
    Io {
        /// Исходная ошибка I/O.
        #[source]
        source: std::io::Error,
        /// Опциональный путь, связанный с ошибкой I/O.
        path: Option<String>,
    },

    /// Ошибка, связанная с конфигурацией приложения.
    ///
    /// Например, неверный формат TOML или недопустимый уровень логирования.
    #[error("Ошибка конфигурации: {0}")]
    Config(String),

    /// Неверный параметр, переданный в утилитарную функцию.
    #[error("Неверный параметр: {0}")]
    InvalidParameter(String),

    /// Общая ошибка утилиты для случаев, не покрытых другими вариантами.
    #[error("Произошла общая ошибка утилиты: {0}")]
    Generic(String),
}

impl From<std::io::Error> for UtilsError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source, path: None }
    }
}

impl UtilsError {
    /// Вспомогательный конструктор для создания `UtilsError::Io` с указанием пути.
    ///
    /// # Аргументы
    ///
    /// * `source` - Исходная ошибка `std::io::Error`.
    /// * `path` - Путь, при работе с которым возникла ошибка.
    pub fn io_with_path(source: std::io::Error, path: impl Into<String>) -> Self {
        Self::Io {
            source,
            path: Some(path.into()),
        }
    }
}
