use std::collections::HashMap; // Для поля `extra_fields`

use serde::Deserialize;

/// "Сырая" конфигурация модели, как она десериализуется напрямую из `config.json`.
///
/// Все поля опциональны: отсутствие обязательных полей обнаруживает
/// `ModelConfigValidator`, а не serde, чтобы сообщить обо всех сразу.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawModelConfig {
    /// Тип модели (например, `"seq2seq"`).
    pub model_type: Option<String>,
    /// Размер входного словаря.
    pub input_vocab_size: Option<usize>,
    /// Размер выходного словаря.
    pub output_vocab_size: Option<usize>,
    /// Размерность скрытого состояния.
    pub hidden_size: Option<usize>,
    /// Длина буфера выходов энкодера.
    pub max_length: Option<usize>,
    /// Вероятность дропаута в декодере.
    pub dropout_p: Option<f64>,
    /// ID токена начала последовательности.
    pub sos_token_id: Option<usize>,
    /// ID токена конца последовательности.
    pub eos_token_id: Option<usize>,

    /// Все остальные поля JSON. Игнорируются, но не ломают парсинг.
    #[serde(flatten)]
    pub extra_fields: HashMap<String, serde_json::Value>,
}

/// Поддерживаемые типы моделей.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelType {
    /// GRU-энкодер с декодером с вниманием.
    Seq2SeqAttention,
    /// Любой другой (неподдерживаемый) тип.
    Other,
}

impl From<&str> for ModelType {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "seq2seq" | "seq2seq-attention" | "attn-seq2seq" => Self::Seq2SeqAttention,
            _ => Self::Other,
        }
    }
}
