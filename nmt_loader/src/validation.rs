use nmt_core::{NmtCoreError, Seq2SeqConfig};
use tracing::{debug, warn};

use crate::{
    error::ModelLoaderError,
    types::{ModelType, RawModelConfig},
};

/// Утилиты для валидации конфигураций моделей.
///
/// Отделяет логику проверок от загрузки: сначала проверяется "сырая"
/// конфигурация из JSON, затем собранная `Seq2SeqConfig`.
pub struct ModelConfigValidator;

impl ModelConfigValidator {
    /// Валидирует `RawModelConfig` на полноту и поддерживаемый тип модели.
    ///
    /// Собирает все проблемы и возвращает их одной ошибкой.
    ///
    /// # Ошибки
    /// `ModelLoaderError::InvalidConfig`, если какая-либо проверка не пройдена.
    pub fn validate_raw_config(raw_config: &RawModelConfig) -> Result<(), ModelLoaderError> {
        debug!("Валидация 'сырой' конфигурации модели.");
        let mut errors: Vec<String> = Vec::new();

        // Макрос для упрощения проверки наличия обязательных полей
        macro_rules! check_field {
            ($field:expr, $name:expr) => {
                if $field.is_none() {
                    errors.push(format!("Отсутствует обязательное поле: '{}'", $name));
                }
            };
        }

        check_field!(raw_config.input_vocab_size, "input_vocab_size");
        check_field!(raw_config.output_vocab_size, "output_vocab_size");
        check_field!(raw_config.hidden_size, "hidden_size");

        if let Some(model_type_str) = &raw_config.model_type {
            if ModelType::from(model_type_str.as_str()) == ModelType::Other {
                errors.push(format!("Неподдерживаемый model_type: '{model_type_str}'"));
            }
        }

        if !raw_config.extra_fields.is_empty() {
            let mut keys: Vec<&str> = raw_config.extra_fields.keys().map(String::as_str).collect();
            keys.sort_unstable();
            warn!("config.json содержит неизвестные поля, они будут проигнорированы: {:?}", keys);
        }

        if errors.is_empty() {
            debug!("'Сырая' конфигурация валидна.");
            Ok(())
        } else {
            Err(ModelLoaderError::InvalidConfig {
                message: errors.join("; "),
            })
        }
    }

    /// Валидирует собранную `Seq2SeqConfig` (размерности, дропаут, спецтокены).
    ///
    /// # Ошибки
    /// `ModelLoaderError::InvalidConfig` с описанием проблем из ядра.
    pub fn validate_core_config(config: &Seq2SeqConfig) -> Result<(), ModelLoaderError> {
        config.validate().map_err(|e| match e {
            NmtCoreError::InvalidConfig(message) => ModelLoaderError::InvalidConfig { message },
            other => ModelLoaderError::Core(other),
        })
    }
}
