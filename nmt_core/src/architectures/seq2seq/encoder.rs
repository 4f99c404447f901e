// nmt_core/src/architectures/seq2seq/encoder.rs

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![deny(unsafe_code, clippy::unwrap_used, clippy::expect_used)]

//! GRU-энкодер: эмбеддинг входного токена и один шаг рекуррентной ячейки.

use burn::{
    module::Module,
    nn::{
        gru::{Gru, GruConfig},
        Embedding, EmbeddingConfig,
    },
    tensor::{backend::Backend, Tensor},
};

use super::{ensure_dims, token_tensor, zero_hidden};
use crate::NmtCoreError;

/// Конфигурация для `EncoderRnn`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EncoderRnnConfig {
    /// Размер входного словаря.
    pub input_vocab_size: usize,
    /// Размерность эмбеддинга и скрытого состояния GRU.
    pub hidden_size: usize,
}

impl EncoderRnnConfig {
    /// Создает конфигурацию энкодера.
    pub const fn new(input_vocab_size: usize, hidden_size: usize) -> Self {
        Self {
            input_vocab_size,
            hidden_size,
        }
    }

    /// Создает новый экземпляр `EncoderRnn`.
    ///
    /// # Аргументы
    /// * `device`: Устройство Burn, на котором будут инициализированы веса.
    ///
    /// # Ошибки
    /// `NmtCoreError::InvalidConfig`, если размер словаря или `hidden_size` равны нулю.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Result<EncoderRnn<B>, NmtCoreError> {
        if self.input_vocab_size == 0 || self.hidden_size == 0 {
            return Err(NmtCoreError::InvalidConfig(format!(
                "input_vocab_size ({}) и hidden_size ({}) должны быть больше нуля.",
                self.input_vocab_size, self.hidden_size
            )));
        }

        let embedding = EmbeddingConfig::new(self.input_vocab_size, self.hidden_size).init(device);
        // Однослойная однонаправленная GRU со смещениями, вход и состояние одной размерности.
        let gru = GruConfig::new(self.hidden_size, self.hidden_size, true).init(device);

        Ok(EncoderRnn {
            embedding,
            gru,
            input_vocab_size: self.input_vocab_size,
            hidden_size: self.hidden_size,
        })
    }
}

/// Энкодер seq2seq-модели.
///
/// Обрабатывает входную последовательность по одному токену, возвращая выход шага
/// и новое скрытое состояние. Для однослойной однонаправленной GRU это один и тот же тензор.
#[derive(Debug, Module)]
pub struct EncoderRnn<B: Backend> {
    /// Таблица эмбеддингов входного словаря.
    embedding: Embedding<B>,
    /// Рекуррентная ячейка.
    gru: Gru<B>,
    /// Размер входного словаря.
    input_vocab_size: usize,
    /// Размерность скрытого состояния.
    hidden_size: usize,
}

impl<B: Backend> EncoderRnn<B> {
    /// Выполняет один шаг энкодера.
    ///
    /// # Аргументы
    /// * `token`: Индекс входного токена в `[0, input_vocab_size)`.
    /// * `hidden`: Предыдущее скрытое состояние, форма `[1, 1, hidden_size]`.
    ///
    /// # Возвращает
    /// Кортеж `(output, hidden)`, оба формы `[1, 1, hidden_size]`.
    ///
    /// # Ошибки
    /// `TokenOutOfRange` для индекса вне словаря, `IncompatibleShape` для скрытого
    /// состояния неверной формы.
    pub fn forward(
        &self,
        token: usize,
        hidden: Tensor<B, 3>,
    ) -> Result<(Tensor<B, 3>, Tensor<B, 3>), NmtCoreError> {
        ensure_dims("hidden", hidden.dims(), [1, 1, self.hidden_size])?;
        let device = hidden.device();

        let input = token_tensor::<B>(token, self.input_vocab_size, &device)?;
        let embedded = self.embedding.forward(input); // [1, 1, hidden_size]

        // Gru в Burn принимает состояние в форме [batch_size, hidden_size].
        let state = hidden.reshape([1, self.hidden_size]);
        let output = self.gru.forward(embedded, Some(state)); // [1, 1, hidden_size]

        Ok((output.clone(), output))
    }

    /// Нулевое скрытое состояние `[1, 1, hidden_size]` для начала новой последовательности.
    pub fn init_hidden(&self, device: &B::Device) -> Tensor<B, 3> {
        zero_hidden(self.hidden_size, device)
    }

    /// Размерность скрытого состояния.
    pub const fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Размер входного словаря.
    pub const fn input_vocab_size(&self) -> usize {
        self.input_vocab_size
    }
}
