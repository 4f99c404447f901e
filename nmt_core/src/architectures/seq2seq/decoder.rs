// nmt_core/src/architectures/seq2seq/decoder.rs

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![deny(unsafe_code, clippy::unwrap_used, clippy::expect_used)]

//! GRU-декодер с механизмом внимания по выходам энкодера.
//!
//! Скоры внимания считаются линейной проекцией конкатенации эмбеддинга входного
//! токена и предыдущего скрытого состояния декодера в `max_length` позиций.
//! Поэтому декодер жестко привязан к размеру буфера выходов энкодера.

use burn::{
    module::Module,
    nn::{
        gru::{Gru, GruConfig},
        Dropout, DropoutConfig, Embedding, EmbeddingConfig, Linear, LinearConfig,
    },
    tensor::{
        activation::{log_softmax, relu, softmax},
        backend::Backend,
        Tensor,
    },
};

use super::{ensure_dims, token_tensor, zero_hidden};
use crate::NmtCoreError;

/// Вероятность дропаута эмбеддинга по умолчанию.
pub const DEFAULT_DROPOUT_P: f64 = 0.1;

/// Конфигурация для `AttnDecoderRnn`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AttnDecoderRnnConfig {
    /// Размерность эмбеддинга и скрытого состояния GRU.
    pub hidden_size: usize,
    /// Размер выходного словаря.
    pub output_vocab_size: usize,
    /// Число позиций буфера выходов энкодера (ширина проекции внимания).
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Вероятность дропаута эмбеддинга. Работает только на autodiff-бэкенде (обучение).
    #[serde(default = "default_dropout_p")]
    pub dropout_p: f64,
}

const fn default_max_length() -> usize {
    crate::architectures::DEFAULT_MAX_LENGTH
}

const fn default_dropout_p() -> f64 {
    DEFAULT_DROPOUT_P
}

impl AttnDecoderRnnConfig {
    /// Создает конфигурацию с `max_length` и `dropout_p` по умолчанию.
    pub const fn new(hidden_size: usize, output_vocab_size: usize) -> Self {
        Self {
            hidden_size,
            output_vocab_size,
            max_length: default_max_length(),
            dropout_p: default_dropout_p(),
        }
    }

    /// Устанавливает `max_length`.
    #[must_use]
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Устанавливает вероятность дропаута.
    #[must_use]
    pub const fn with_dropout_p(mut self, dropout_p: f64) -> Self {
        self.dropout_p = dropout_p;
        self
    }

    /// Создает новый экземпляр `AttnDecoderRnn`.
    ///
    /// # Аргументы
    /// * `device`: Устройство Burn, на котором будут инициализированы веса.
    ///
    /// # Ошибки
    /// `NmtCoreError::InvalidConfig` для нулевых размерностей или `dropout_p` вне `[0, 1)`.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Result<AttnDecoderRnn<B>, NmtCoreError> {
        if self.hidden_size == 0 || self.output_vocab_size == 0 || self.max_length == 0 {
            return Err(NmtCoreError::InvalidConfig(format!(
                "hidden_size ({}), output_vocab_size ({}) и max_length ({}) должны быть больше нуля.",
                self.hidden_size, self.output_vocab_size, self.max_length
            )));
        }
        if !(0.0..1.0).contains(&self.dropout_p) {
            return Err(NmtCoreError::InvalidConfig(format!(
                "dropout_p ({}) должна лежать в [0, 1).",
                self.dropout_p
            )));
        }

        let hidden = self.hidden_size;
        Ok(AttnDecoderRnn {
            embedding: EmbeddingConfig::new(self.output_vocab_size, hidden).init(device),
            attn: LinearConfig::new(hidden * 2, self.max_length).init(device),
            attn_combine: LinearConfig::new(hidden * 2, hidden).init(device),
            dropout: DropoutConfig::new(self.dropout_p).init(),
            gru: GruConfig::new(hidden, hidden, true).init(device),
            out: LinearConfig::new(hidden, self.output_vocab_size).init(device),
            hidden_size: hidden,
            output_vocab_size: self.output_vocab_size,
            max_length: self.max_length,
        })
    }
}

/// Результат одного шага декодера.
#[derive(Debug, Clone)]
pub struct AttnDecoderOutput<B: Backend> {
    /// Логарифмы вероятностей по выходному словарю, форма `[1, output_vocab_size]`.
    pub log_probs: Tensor<B, 2>,
    /// Новое скрытое состояние, форма `[1, 1, hidden_size]`.
    pub hidden: Tensor<B, 3>,
    /// Веса внимания по позициям энкодера, форма `[1, 1, max_length]`.
    pub attn_weights: Tensor<B, 3>,
}

/// Декодер seq2seq-модели с вниманием.
#[derive(Debug, Module)]
pub struct AttnDecoderRnn<B: Backend> {
    /// Таблица эмбеддингов выходного словаря.
    embedding: Embedding<B>,
    /// Проекция `[embedded; hidden]` в скоры внимания по `max_length` позициям.
    attn: Linear<B>,
    /// Проекция `[embedded; context]` обратно в `hidden_size`.
    attn_combine: Linear<B>,
    /// Дропаут эмбеддинга.
    dropout: Dropout,
    /// Рекуррентная ячейка.
    gru: Gru<B>,
    /// Выходная проекция в словарь.
    out: Linear<B>,
    /// Размерность скрытого состояния.
    hidden_size: usize,
    /// Размер выходного словаря.
    output_vocab_size: usize,
    /// Число позиций буфера выходов энкодера.
    max_length: usize,
}

impl<B: Backend> AttnDecoderRnn<B> {
    /// Выполняет один шаг декодера.
    ///
    /// # Аргументы
    /// * `token`: Предыдущий выходной токен в `[0, output_vocab_size)`.
    /// * `hidden`: Предыдущее скрытое состояние декодера, форма `[1, 1, hidden_size]`.
    /// * `encoder_outputs`: Буфер выходов энкодера, форма ровно `[max_length, hidden_size]`.
    ///
    /// # Ошибки
    /// `TokenOutOfRange` для индекса вне словаря; `IncompatibleShape`, если `hidden`
    /// или `encoder_outputs` имеют другую форму. Буфер короче `max_length` не дополняется.
    pub fn forward(
        &self,
        token: usize,
        hidden: Tensor<B, 3>,
        encoder_outputs: Tensor<B, 2>,
    ) -> Result<AttnDecoderOutput<B>, NmtCoreError> {
        let h = self.hidden_size;
        ensure_dims("hidden", hidden.dims(), [1, 1, h])?;
        ensure_dims(
            "encoder_outputs",
            encoder_outputs.dims(),
            [self.max_length, h],
        )?;
        let device = hidden.device();

        // 1. Эмбеддинг и дропаут (тождественен вне режима обучения).
        let input = token_tensor::<B>(token, self.output_vocab_size, &device)?;
        let embedded = self.dropout.forward(self.embedding.forward(input));
        let embedded = embedded.reshape([1, h]);
        let prev_hidden = hidden.reshape([1, h]);

        // 2-3. Скоры внимания и их нормализация: [1, max_length].
        let attn_scores = self
            .attn
            .forward(Tensor::cat(vec![embedded.clone(), prev_hidden.clone()], 1));
        let attn_weights = softmax(attn_scores, 1).unsqueeze::<3>(); // [1, 1, max_length]

        // 4. Контекст: [1, 1, L] x [1, L, H] -> [1, 1, H].
        let context = attn_weights
            .clone()
            .matmul(encoder_outputs.unsqueeze::<3>())
            .reshape([1, h]);

        // 5. Комбинирование эмбеддинга и контекста.
        let combined = self
            .attn_combine
            .forward(Tensor::cat(vec![embedded, context], 1));
        let combined = relu(combined).reshape([1, 1, h]);

        // 6. Шаг GRU от предыдущего скрытого состояния.
        let new_hidden = self.gru.forward(combined, Some(prev_hidden)); // [1, 1, H]

        // 7. Логарифмы вероятностей по словарю.
        let logits = self.out.forward(new_hidden.clone().reshape([1, h]));
        let log_probs = log_softmax(logits, 1);

        Ok(AttnDecoderOutput {
            log_probs,
            hidden: new_hidden,
            attn_weights,
        })
    }

    /// Нулевое скрытое состояние `[1, 1, hidden_size]`.
    pub fn init_hidden(&self, device: &B::Device) -> Tensor<B, 3> {
        zero_hidden(self.hidden_size, device)
    }

    /// Размерность скрытого состояния.
    pub const fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Размер выходного словаря.
    pub const fn output_vocab_size(&self) -> usize {
        self.output_vocab_size
    }

    /// Число позиций буфера выходов энкодера.
    pub const fn max_length(&self) -> usize {
        self.max_length
    }
}
