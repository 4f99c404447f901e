// nmt_core/src/architectures/seq2seq/mod.rs

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![deny(unsafe_code, clippy::unwrap_used, clippy::expect_used)]

//! Рекуррентная seq2seq-архитектура: GRU-энкодер и GRU-декодер с вниманием.
//!
//! Оба модуля работают пошагово: один токен за вызов, скрытое состояние
//! передается явно и имеет форму `[1, 1, hidden_size]`.

pub mod decoder; // Декодер с вниманием
pub mod encoder; // GRU-энкодер

pub use decoder::{AttnDecoderOutput, AttnDecoderRnn, AttnDecoderRnnConfig, DEFAULT_DROPOUT_P};
pub use encoder::{EncoderRnn, EncoderRnnConfig};

use burn::tensor::{backend::Backend, Int, Tensor};

use crate::NmtCoreError;

/// Строит тензор индексов `[1, 1]` для одного токена, проверяя границы словаря.
pub(crate) fn token_tensor<B: Backend>(
    token: usize,
    vocab_size: usize,
    device: &B::Device,
) -> Result<Tensor<B, 2, Int>, NmtCoreError> {
    let out_of_range = || NmtCoreError::TokenOutOfRange { token, vocab_size };
    if token >= vocab_size {
        return Err(out_of_range());
    }
    let index = i32::try_from(token).map_err(|_| out_of_range())?;
    Ok(Tensor::<B, 2, Int>::from_ints([[index]], device))
}

/// Сравнивает форму тензора с ожидаемой.
pub(crate) fn ensure_dims<const D: usize>(
    name: &'static str,
    actual: [usize; D],
    expected: [usize; D],
) -> Result<(), NmtCoreError> {
    if actual == expected {
        Ok(())
    } else {
        Err(NmtCoreError::IncompatibleShape {
            name,
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        })
    }
}

/// Нулевое скрытое состояние `[1, 1, hidden_size]` для начала последовательности.
pub(crate) fn zero_hidden<B: Backend>(hidden_size: usize, device: &B::Device) -> Tensor<B, 3> {
    Tensor::zeros([1, 1, hidden_size], device)
}
