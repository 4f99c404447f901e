// nmt_core/src/translator.rs

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![deny(unsafe_code, clippy::unwrap_used, clippy::expect_used)]

//! Жадный перевод одной последовательности.
//!
//! Сначала энкодер проходит весь вход и заполняет буфер `[max_length, hidden_size]`,
//! затем декодер шаг за шагом выбирает токен с максимальной вероятностью,
//! пока не встретит `eos_token` или не исчерпает `max_length` шагов.

use burn::tensor::{backend::Backend, ElementConversion, Tensor};
use tracing::{debug, trace};

use crate::{
    architectures::seq2seq::{AttnDecoderRnn, EncoderRnn},
    NmtCoreError,
};

/// Результат прохода энкодера по входной последовательности.
#[derive(Debug, Clone)]
pub struct EncodedSequence<B: Backend> {
    /// Буфер выходов энкодера `[max_length, hidden_size]`; строки после `input_len` нулевые.
    pub outputs: Tensor<B, 2>,
    /// Последнее скрытое состояние энкодера `[1, 1, hidden_size]`.
    pub hidden: Tensor<B, 3>,
    /// Длина входной последовательности.
    pub input_len: usize,
}

/// Результат жадного декодирования.
#[derive(Debug, Clone)]
pub struct Translation<B: Backend> {
    /// Выбранные токены; при `reached_eos` последним идет `eos_token`.
    pub tokens: Vec<usize>,
    /// Веса внимания по шагам, форма `[tokens.len(), max_length]`.
    pub attentions: Tensor<B, 2>,
    /// Был ли сгенерирован `eos_token`.
    pub reached_eos: bool,
}

/// Энкодер и декодер, собранные для инференса.
#[derive(Debug, Clone)]
pub struct Translator<B: Backend> {
    encoder: EncoderRnn<B>,
    decoder: AttnDecoderRnn<B>,
    sos_token: usize,
    eos_token: usize,
}

impl<B: Backend> Translator<B> {
    /// Собирает переводчик из готовых модулей.
    ///
    /// # Ошибки
    /// `InvalidConfig`, если размерности скрытых состояний модулей различаются;
    /// `TokenOutOfRange`, если `sos_token` или `eos_token` вне выходного словаря;
    /// `InvalidConfig`, если `sos_token` и `eos_token` совпадают.
    pub fn new(
        encoder: EncoderRnn<B>,
        decoder: AttnDecoderRnn<B>,
        sos_token: usize,
        eos_token: usize,
    ) -> Result<Self, NmtCoreError> {
        if encoder.hidden_size() != decoder.hidden_size() {
            return Err(NmtCoreError::InvalidConfig(format!(
                "hidden_size энкодера ({}) и декодера ({}) различаются.",
                encoder.hidden_size(),
                decoder.hidden_size()
            )));
        }
        let vocab_size = decoder.output_vocab_size();
        for token in [sos_token, eos_token] {
            if token >= vocab_size {
                return Err(NmtCoreError::TokenOutOfRange { token, vocab_size });
            }
        }
        if sos_token == eos_token {
            return Err(NmtCoreError::InvalidConfig(format!(
                "sos_token и eos_token совпадают ({sos_token})."
            )));
        }

        Ok(Self {
            encoder,
            decoder,
            sos_token,
            eos_token,
        })
    }

    /// Энкодер.
    pub const fn encoder(&self) -> &EncoderRnn<B> {
        &self.encoder
    }

    /// Декодер.
    pub const fn decoder(&self) -> &AttnDecoderRnn<B> {
        &self.decoder
    }

    /// Длина буфера выходов энкодера.
    pub const fn max_length(&self) -> usize {
        self.decoder.max_length()
    }

    /// Прогоняет энкодер по всей входной последовательности.
    ///
    /// # Ошибки
    /// `InvalidInput` для пустого входа, `SequenceTooLong`, если вход длиннее
    /// `max_length`, и ошибки шага энкодера.
    pub fn encode(
        &self,
        input: &[usize],
        device: &B::Device,
    ) -> Result<EncodedSequence<B>, NmtCoreError> {
        let max_length = self.max_length();
        let hidden_size = self.encoder.hidden_size();
        if input.is_empty() {
            return Err(NmtCoreError::InvalidInput(
                "пустая входная последовательность".to_string(),
            ));
        }
        if input.len() > max_length {
            return Err(NmtCoreError::SequenceTooLong {
                len: input.len(),
                max_length,
            });
        }

        let mut hidden = self.encoder.init_hidden(device);
        let mut rows = Vec::with_capacity(max_length);
        for (position, &token) in input.iter().enumerate() {
            let (output, next_hidden) = self.encoder.forward(token, hidden)?;
            trace!(position, token, "Шаг энкодера.");
            rows.push(output.reshape([1, hidden_size]));
            hidden = next_hidden;
        }
        if input.len() < max_length {
            rows.push(Tensor::zeros([max_length - input.len(), hidden_size], device));
        }

        Ok(EncodedSequence {
            outputs: Tensor::cat(rows, 0),
            hidden,
            input_len: input.len(),
        })
    }

    /// Жадно декодирует выход энкодера.
    ///
    /// Декодер стартует с `sos_token` и последнего скрытого состояния энкодера.
    ///
    /// # Ошибки
    /// Ошибки шага декодера (например, буфер неверной формы).
    pub fn greedy_decode(
        &self,
        encoded: &EncodedSequence<B>,
    ) -> Result<Translation<B>, NmtCoreError> {
        let max_length = self.max_length();
        let mut token = self.sos_token;
        let mut hidden = encoded.hidden.clone();
        let mut tokens = Vec::with_capacity(max_length);
        let mut attentions = Vec::with_capacity(max_length);
        let mut reached_eos = false;

        for step in 0..max_length {
            let output = self
                .decoder
                .forward(token, hidden, encoded.outputs.clone())?;
            attentions.push(output.attn_weights.reshape([1, max_length]));
            hidden = output.hidden;

            let best = output.log_probs.argmax(1).into_scalar().elem::<i64>();
            let next = usize::try_from(best).map_err(|_| {
                NmtCoreError::InvalidInput(format!("argmax вернул отрицательный индекс {best}"))
            })?;
            trace!(step, token = next, "Шаг декодера.");
            tokens.push(next);

            if next == self.eos_token {
                reached_eos = true;
                break;
            }
            token = next;
        }

        debug!(
            input_len = encoded.input_len,
            output_len = tokens.len(),
            reached_eos,
            "Декодирование завершено."
        );
        Ok(Translation {
            tokens,
            attentions: Tensor::cat(attentions, 0),
            reached_eos,
        })
    }

    /// Полный перевод: `encode` и затем `greedy_decode`.
    ///
    /// # Ошибки
    /// Любая ошибка `encode` или `greedy_decode`.
    pub fn translate(
        &self,
        input: &[usize],
        device: &B::Device,
    ) -> Result<Translation<B>, NmtCoreError> {
        let encoded = self.encode(input, device)?;
        self.greedy_decode(&encoded)
    }
}
