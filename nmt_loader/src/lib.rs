//! `nmt_loader` читает гиперпараметры seq2seq-модели из `config.json`,
//! валидирует их и собирает `nmt_core::Translator`.
//!
//! Веса модели этим крейтом не загружаются: модули инициализируются заново.

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![deny(unsafe_code, clippy::unwrap_used, clippy::expect_used)]

pub mod error; // Ошибки загрузчика
pub mod loader; // Основная логика загрузки
pub mod types; // "Сырая" конфигурация и тип модели
pub mod validation; // Валидация конфигураций

pub use error::ModelLoaderError;
pub use loader::{ModelLoader, CONFIG_FILE_NAME};
pub use types::{ModelType, RawModelConfig};
pub use validation::ModelConfigValidator;
