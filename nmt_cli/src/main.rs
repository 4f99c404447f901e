//! `nmt-translate`: загружает конфигурацию модели, инициализирует seq2seq-модель
//! на CPU и печатает результат жадного декодирования для заданных индексов токенов.
//!
//! Веса не загружаются, поэтому модель инициализирована случайно: бинарник
//! проверяет сквозную связку конфигурации, логирования и инференса.

#![deny(unsafe_code, clippy::unwrap_used, clippy::expect_used)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use burn::backend::{ndarray::NdArrayDevice, NdArray};
use clap::Parser;
use nmt_loader::ModelLoader;
use nmt_utils::{init_tracing_logger, AppConfig};
use tracing::info;

/// Аргументы командной строки.
#[derive(Parser, Debug)]
#[command(name = "nmt-translate", version, about = "Жадный перевод seq2seq-моделью")]
struct Cli {
    /// Путь к TOML-конфигурации приложения.
    #[arg(long, default_value = "nmt.toml")]
    config: PathBuf,

    /// Директория модели с config.json (переопределяет `model_config.model_dir`).
    #[arg(long)]
    model_dir: Option<PathBuf>,

    /// Индексы входных токенов через запятую, например `3,4,5`.
    #[arg(long, value_delimiter = ',', required = true)]
    tokens: Vec<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_config = AppConfig::load_from_toml(&cli.config)
        .with_context(|| format!("не удалось загрузить {}", cli.config.display()))?;
    let level = app_config.logging_config.tracing_level()?;
    let log_dir = app_config.logging_config.log_dir.as_deref().map(Path::new);
    init_tracing_logger(env!("CARGO_PKG_NAME"), level, level, log_dir)?;

    let model_dir = cli
        .model_dir
        .unwrap_or_else(|| app_config.model_config.model_dir_path());
    let device = NdArrayDevice::default();
    let (translator, config) = ModelLoader::load_translator::<NdArray>(&model_dir, &device)
        .await
        .with_context(|| format!("не удалось загрузить модель из {}", model_dir.display()))?;

    let translation = translator.translate(&cli.tokens, &device)?;
    info!(
        steps = translation.tokens.len(),
        reached_eos = translation.reached_eos,
        "Перевод завершен."
    );

    let rendered: Vec<String> = translation
        .tokens
        .iter()
        .map(|&token| {
            if token == config.eos_token {
                "<EOS>".to_string()
            } else {
                token.to_string()
            }
        })
        .collect();
    println!("{}", rendered.join(" "));
    Ok(())
}
