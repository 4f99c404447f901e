// nmt_core/src/lib.rs

// Включаем строгие правила линтинга для всего крейта.
#![warn(
    missing_docs, // Предупреждать об отсутствующей документации для публичных элементов.
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
// Запрещаем использование небезопасных конструкций и потенциально проблемных методов.
#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! # `nmt_core`
//!
//! Ядро seq2seq-модели перевода на фреймворке [Burn](https://burn.dev/):
//! GRU-энкодер, GRU-декодер с механизмом внимания и жадный переводчик,
//! который связывает их в один проход инференса.
//!
//! ## Структура
//!
//! - `architectures`: `Seq2SeqConfig` и модули `seq2seq` (энкодер, декодер).
//! - `translator`: прогон энкодера по входу и жадное декодирование.
//! - `error`: тип ошибки `NmtCoreError`.
//!
//! Обучение, функция потерь, оптимизатор, токенизация и сохранение весов
//! находятся вне этого крейта.

pub mod architectures;
pub mod error;
pub mod translator;

// Ошибки
pub use error::NmtCoreError;

// Архитектуры и их конфигурации
pub use architectures::seq2seq::{
    AttnDecoderOutput, AttnDecoderRnn, AttnDecoderRnnConfig, EncoderRnn, EncoderRnnConfig,
};
pub use architectures::{Seq2SeqConfig, DEFAULT_EOS_TOKEN, DEFAULT_MAX_LENGTH, DEFAULT_SOS_TOKEN};

// Инференс
pub use translator::{EncodedSequence, Translation, Translator};
