//! Модуль для инициализации глобального логгера на основе `tracing`.
//!
//! Функциональность этого модуля активируется фичей `logger_utils_feature`.

use std::{fs, io, path::Path};

use tracing::Level;
use tracing_subscriber::{
    filter::Directive, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::error::UtilsError;

/// Собирает фильтр: `RUST_LOG` (или `info` по умолчанию) плюс явный уровень для `app_name`.
fn build_filter(sanitized_app_name: &str, level: Level) -> Result<EnvFilter, UtilsError> {
    let directive: Directive = format!(
        "{}={}",
        sanitized_app_name,
        level.as_str().to_ascii_lowercase()
    )
    .parse()
    .map_err(|e| {
        UtilsError::InvalidParameter(format!(
            "Неверная директива логирования для '{sanitized_app_name}': {e}"
        ))
    })?;

    let base = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    Ok(base.add_directive(directive))
}

/// Инициализирует глобальный подписчик `tracing`.
///
/// Настраивает вывод в консоль (stderr) и, опционально, в файл с ежедневной ротацией.
/// Фильтрует по `RUST_LOG` и явным уровням для `app_name`.
///
/// # Аргументы
/// * `app_name` - Имя приложения (для фильтров и имени файла лога).
/// * `console_level` - Уровень для консоли.
/// * `file_level` - Уровень для файла.
/// * `log_dir` - Опциональная директория для файлов логов.
///
/// # Ошибки
/// Возвращает `UtilsError::Generic`, если глобальный подписчик уже установлен,
/// и `UtilsError::InvalidParameter` при невалидном `app_name`.
/// Если директорию логов создать не удалось, логирование идет только в консоль,
/// а проблема сообщается предупреждением.
#[allow(clippy::module_name_repetitions)]
pub fn init_tracing_logger(
    app_name: &str,
    console_level: Level,
    file_level: Level,
    log_dir: Option<&Path>,
) -> Result<(), UtilsError> {
    // Дефисы недопустимы в target'ах, заменяем их как это делает cargo.
    let sanitized_app_name = app_name.replace('-', "_");

    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(true)
        .pretty()
        .with_filter(build_filter(&sanitized_app_name, console_level)?);

    let mut layers: Vec<Box<dyn Layer<_> + Send + Sync + 'static>> = Vec::new();
    layers.push(console_layer.boxed());

    let mut file_dir_failure: Option<String> = None;
    if let Some(dir) = log_dir {
        match fs::create_dir_all(dir) {
            Ok(()) => {
                let file_appender =
                    tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
                let file_layer = fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_filter(build_filter(&sanitized_app_name, file_level)?);
                layers.push(file_layer.boxed());
            }
            Err(e) => file_dir_failure = Some(e.to_string()),
        }
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| UtilsError::Generic(format!("Не удалось инициализировать логгер: {e}")))?;

    match (log_dir, file_dir_failure) {
        (Some(dir), None) => tracing::info!(
            "Логгер инициализирован. Уровень консоли: {}. Логирование в файл: {:?} (уровень {}).",
            console_level,
            dir,
            file_level
        ),
        (Some(dir), Some(reason)) => tracing::warn!(
            "Логгер инициализирован. Уровень консоли: {}. Директория логов {:?} недоступна ({}), запись в файл отключена.",
            console_level,
            dir,
            reason
        ),
        (None, _) => tracing::info!(
            "Логгер инициализирован. Только вывод в консоль (уровень {}).",
            console_level
        ),
    }
    Ok(())
}
