use std::path::Path; // Для работы с путями к файлам

use burn::tensor::backend::Backend; // Типаж для бэкенда Burn (например, NdArray, Wgpu)
use nmt_core::{
    Seq2SeqConfig, Translator, DEFAULT_EOS_TOKEN, DEFAULT_MAX_LENGTH, DEFAULT_SOS_TOKEN,
};
use tracing::{debug, info};

use crate::{
    error::ModelLoaderError,
    types::RawModelConfig,
    validation::ModelConfigValidator,
};

/// Имя файла с гиперпараметрами модели внутри директории модели.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Загрузчик seq2seq-модели из локальной директории.
///
/// Читает только `config.json`; веса не загружаются и модули инициализируются заново.
#[derive(Debug, Clone)]
pub struct ModelLoader;

impl ModelLoader {
    /// Загружает и валидирует конфигурацию модели из `model_dir/config.json`.
    ///
    /// 1. Читает и разбирает "сырую" конфигурацию.
    /// 2. Валидирует ее с помощью `ModelConfigValidator`.
    /// 3. Преобразует в `Seq2SeqConfig`, подставляя значения по умолчанию.
    /// 4. Валидирует итоговую конфигурацию.
    ///
    /// # Ошибки
    /// `Io` при ошибке чтения, `ConfigParsing` при невалидном JSON,
    /// `InvalidConfig` при отсутствующих или некорректных полях.
    pub async fn load_config(model_dir: &Path) -> Result<Seq2SeqConfig, ModelLoaderError> {
        info!("Загрузка конфигурации модели из: {:?}", model_dir);

        let config_path = model_dir.join(CONFIG_FILE_NAME);
        let raw_config = Self::load_json_config(&config_path).await?;

        ModelConfigValidator::validate_raw_config(&raw_config)?;
        let config = Self::convert_raw_config(&raw_config)?;
        ModelConfigValidator::validate_core_config(&config)?;

        info!(
            "Конфигурация загружена: hidden_size={}, max_length={}, словари {}/{}.",
            config.hidden_size, config.max_length, config.input_vocab_size, config.output_vocab_size
        );
        Ok(config)
    }

    /// Загружает конфигурацию и инициализирует по ней `Translator`.
    ///
    /// # Ошибки
    /// Ошибки `load_config` и `ModelLoaderError::Core` при инициализации модулей.
    pub async fn load_translator<B: Backend>(
        model_dir: &Path,
        device: &B::Device,
    ) -> Result<(Translator<B>, Seq2SeqConfig), ModelLoaderError> {
        let config = Self::load_config(model_dir).await?;
        let translator = config.init_translator::<B>(device)?;
        Ok((translator, config))
    }

    /// Асинхронно читает и десериализует JSON конфигурацию.
    async fn load_json_config(path: &Path) -> Result<RawModelConfig, ModelLoaderError> {
        debug!("Загрузка JSON конфигурации из: {:?}", path);
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ModelLoaderError::Io {
                    path: path.display().to_string(),
                    source: e,
                })?;

        let config: RawModelConfig =
            serde_json::from_str(&content).map_err(|e| ModelLoaderError::ConfigParsing {
                path: path.display().to_string(),
                source: Box::new(e),
            })?;

        debug!("JSON конфигурация успешно загружена.");
        Ok(config)
    }

    /// Преобразует `RawModelConfig` в `Seq2SeqConfig`.
    ///
    /// Обязательные поля к этому моменту уже проверены валидатором;
    /// для необязательных подставляются значения по умолчанию.
    fn convert_raw_config(raw_config: &RawModelConfig) -> Result<Seq2SeqConfig, ModelLoaderError> {
        debug!("Конвертация 'сырой' конфигурации в Seq2SeqConfig.");

        let required = |value: Option<usize>, name: &str| {
            value.ok_or_else(|| ModelLoaderError::InvalidConfig {
                message: format!("Отсутствует '{name}'"),
            })
        };

        let mut config = Seq2SeqConfig::new(
            required(raw_config.input_vocab_size, "input_vocab_size")?,
            required(raw_config.output_vocab_size, "output_vocab_size")?,
            required(raw_config.hidden_size, "hidden_size")?,
        );
        config.max_length = raw_config.max_length.unwrap_or(DEFAULT_MAX_LENGTH);
        config.sos_token = raw_config.sos_token_id.unwrap_or(DEFAULT_SOS_TOKEN);
        config.eos_token = raw_config.eos_token_id.unwrap_or(DEFAULT_EOS_TOKEN);
        if let Some(dropout_p) = raw_config.dropout_p {
            config.dropout_p = dropout_p;
        }
        Ok(config)
    }
}
