// nmt_core/src/error.rs

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![deny(unsafe_code, clippy::unwrap_used, clippy::expect_used)]

/// Перечисление всех возможных ошибок, которые могут возникнуть в крейте `nmt_core`.
///
/// Прямой проход Burn на неверных индексах или формах паникует внутри бэкенда,
/// поэтому модули проверяют входы заранее и возвращают одну из этих ошибок.
/// Любая такая ошибка фатальна для текущего прямого прохода.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NmtCoreError {
    /// Некорректная конфигурация модели или ее компонентов
    /// (нулевые размерности, вероятность дропаута вне `[0, 1)` и т.д.).
    #[error("Некорректная конфигурация: {0}")]
    InvalidConfig(String),

    /// Индекс токена выходит за пределы словаря `[0, vocab_size)`.
    #[error("Индекс токена {token} вне словаря размера {vocab_size}")]
    TokenOutOfRange {
        /// Переданный индекс токена.
        token: usize,
        /// Размер словаря модуля.
        vocab_size: usize,
    },

    /// Несовместимые размеры тензора (например, `encoder_outputs` не `[max_length, hidden_size]`).
    #[error("Несовместимая форма тензора '{name}': ожидалась {expected:?}, получена {actual:?}")]
    IncompatibleShape {
        /// Имя проверяемого тензора.
        name: &'static str,
        /// Ожидаемая форма.
        expected: Vec<usize>,
        /// Фактическая форма.
        actual: Vec<usize>,
    },

    /// Входная последовательность длиннее буфера выходов энкодера.
    #[error("Длина входной последовательности {len} превышает max_length {max_length}")]
    SequenceTooLong {
        /// Длина входной последовательности.
        len: usize,
        /// Размер буфера выходов энкодера.
        max_length: usize,
    },

    /// Некорректный вход, не покрытый вариантами выше (например, пустая последовательность).
    #[error("Некорректный вход: {0}")]
    InvalidInput(String),
}
