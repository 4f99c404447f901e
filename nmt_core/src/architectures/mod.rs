// nmt_core/src/architectures/mod.rs

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![deny(unsafe_code, clippy::unwrap_used, clippy::expect_used)]

//! Корневой модуль архитектур и общая конфигурация seq2seq-модели.
//!
//! `Seq2SeqConfig` хранит `max_length` в одном месте: от него зависят и буфер
//! выходов энкодера, и ширина проекции внимания декодера.

pub mod seq2seq;

use burn::tensor::backend::Backend;
use serde::{Deserialize, Serialize};

use crate::{
    architectures::seq2seq::{AttnDecoderRnnConfig, EncoderRnnConfig, DEFAULT_DROPOUT_P},
    translator::Translator,
    NmtCoreError,
};

/// Длина буфера выходов энкодера по умолчанию.
pub const DEFAULT_MAX_LENGTH: usize = 10;
/// Индекс токена начала последовательности по умолчанию.
pub const DEFAULT_SOS_TOKEN: usize = 0;
/// Индекс токена конца последовательности по умолчанию.
pub const DEFAULT_EOS_TOKEN: usize = 1;

/// Полная конфигурация seq2seq-модели.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seq2SeqConfig {
    /// Размер входного словаря (энкодер).
    pub input_vocab_size: usize,
    /// Размер выходного словаря (декодер).
    pub output_vocab_size: usize,
    /// Размерность эмбеддингов и скрытых состояний.
    pub hidden_size: usize,
    /// Число позиций буфера выходов энкодера и шагов жадного декодирования.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Вероятность дропаута в декодере.
    #[serde(default = "default_dropout_p")]
    pub dropout_p: f64,
    /// Токен начала последовательности (первый вход декодера).
    #[serde(default = "default_sos_token")]
    pub sos_token: usize,
    /// Токен конца последовательности (останавливает декодирование).
    #[serde(default = "default_eos_token")]
    pub eos_token: usize,
}

const fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}
const fn default_dropout_p() -> f64 {
    DEFAULT_DROPOUT_P
}
const fn default_sos_token() -> usize {
    DEFAULT_SOS_TOKEN
}
const fn default_eos_token() -> usize {
    DEFAULT_EOS_TOKEN
}

impl Seq2SeqConfig {
    /// Создает конфигурацию с остальными параметрами по умолчанию.
    pub const fn new(input_vocab_size: usize, output_vocab_size: usize, hidden_size: usize) -> Self {
        Self {
            input_vocab_size,
            output_vocab_size,
            hidden_size,
            max_length: DEFAULT_MAX_LENGTH,
            dropout_p: DEFAULT_DROPOUT_P,
            sos_token: DEFAULT_SOS_TOKEN,
            eos_token: DEFAULT_EOS_TOKEN,
        }
    }

    /// Проверяет согласованность параметров.
    ///
    /// # Ошибки
    /// `NmtCoreError::InvalidConfig` со списком всех найденных проблем.
    pub fn validate(&self) -> Result<(), NmtCoreError> {
        let mut problems = Vec::new();

        for (name, value) in [
            ("input_vocab_size", self.input_vocab_size),
            ("output_vocab_size", self.output_vocab_size),
            ("hidden_size", self.hidden_size),
            ("max_length", self.max_length),
        ] {
            if value == 0 {
                problems.push(format!("'{name}' должно быть больше нуля"));
            }
        }
        if !(0.0..1.0).contains(&self.dropout_p) {
            problems.push(format!("'dropout_p' ({}) должна лежать в [0, 1)", self.dropout_p));
        }
        for (name, token) in [("sos_token", self.sos_token), ("eos_token", self.eos_token)] {
            if token >= self.output_vocab_size {
                problems.push(format!(
                    "'{name}' ({token}) вне выходного словаря ({})",
                    self.output_vocab_size
                ));
            }
        }
        if self.sos_token == self.eos_token {
            problems.push(format!(
                "'sos_token' и 'eos_token' совпадают ({})",
                self.sos_token
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(NmtCoreError::InvalidConfig(problems.join("; ")))
        }
    }

    /// Конфигурация энкодера.
    pub const fn encoder_config(&self) -> EncoderRnnConfig {
        EncoderRnnConfig::new(self.input_vocab_size, self.hidden_size)
    }

    /// Конфигурация декодера.
    pub const fn decoder_config(&self) -> AttnDecoderRnnConfig {
        AttnDecoderRnnConfig::new(self.hidden_size, self.output_vocab_size)
            .with_max_length(self.max_length)
            .with_dropout_p(self.dropout_p)
    }

    /// Инициализирует энкодер и декодер и собирает из них `Translator`.
    ///
    /// # Ошибки
    /// Любая ошибка `validate` или инициализации модулей.
    pub fn init_translator<B: Backend>(
        &self,
        device: &B::Device,
    ) -> Result<Translator<B>, NmtCoreError> {
        self.validate()?;
        let encoder = self.encoder_config().init(device)?;
        let decoder = self.decoder_config().init(device)?;
        tracing::info!(
            hidden_size = self.hidden_size,
            max_length = self.max_length,
            input_vocab = self.input_vocab_size,
            output_vocab = self.output_vocab_size,
            "Seq2seq-модель инициализирована."
        );
        Translator::new(encoder, decoder, self.sos_token, self.eos_token)
    }
}
