use std::fs;
use std::path::Path;

use burn::backend::NdArray;
use nmt_core::Seq2SeqConfig;
use nmt_loader::{ModelLoader, ModelLoaderError, CONFIG_FILE_NAME};
use tempfile::tempdir;

type TestBackend = NdArray;

fn write_config(dir: &Path, content: &str) {
    fs::write(dir.join(CONFIG_FILE_NAME), content).unwrap();
}

#[tokio::test]
async fn test_load_full_config() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"{
            "model_type": "seq2seq",
            "input_vocab_size": 4345,
            "output_vocab_size": 2803,
            "hidden_size": 256,
            "max_length": 10,
            "dropout_p": 0.1,
            "sos_token_id": 0,
            "eos_token_id": 1,
            "source_language": "fra"
        }"#,
    );

    let config = ModelLoader::load_config(dir.path()).await.unwrap();
    assert_eq!(config, Seq2SeqConfig::new(4345, 2803, 256));
}

#[tokio::test]
async fn test_load_config_applies_defaults() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"{"input_vocab_size": 20, "output_vocab_size": 30, "hidden_size": 16, "max_length": 7}"#,
    );

    let config = ModelLoader::load_config(dir.path()).await.unwrap();
    assert_eq!(config.max_length, 7);
    assert_eq!(config.sos_token, nmt_core::DEFAULT_SOS_TOKEN);
    assert_eq!(config.eos_token, nmt_core::DEFAULT_EOS_TOKEN);
}

#[tokio::test]
async fn test_missing_config_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = ModelLoader::load_config(dir.path()).await;
    assert!(matches!(result, Err(ModelLoaderError::Io { .. })));
}

#[tokio::test]
async fn test_malformed_json_is_parsing_error() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "{ \"hidden_size\": ");

    let result = ModelLoader::load_config(dir.path()).await;
    assert!(matches!(result, Err(ModelLoaderError::ConfigParsing { .. })));
}

#[tokio::test]
async fn test_missing_fields_are_reported_together() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), r#"{"hidden_size": 8}"#);

    match ModelLoader::load_config(dir.path()).await {
        Err(ModelLoaderError::InvalidConfig { message }) => {
            assert!(message.contains("input_vocab_size"));
            assert!(message.contains("output_vocab_size"));
        }
        other => panic!("Ожидалась InvalidConfig, получено {other:?}"),
    }
}

#[tokio::test]
async fn test_eos_outside_vocab_is_invalid() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"{"input_vocab_size": 5, "output_vocab_size": 5, "hidden_size": 4, "eos_token_id": 5}"#,
    );

    let result = ModelLoader::load_config(dir.path()).await;
    assert!(matches!(result, Err(ModelLoaderError::InvalidConfig { .. })));
}

#[tokio::test]
async fn test_load_translator_runs_inference() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"{"input_vocab_size": 9, "output_vocab_size": 11, "hidden_size": 6, "max_length": 4}"#,
    );
    let device = Default::default();

    let (translator, config) = ModelLoader::load_translator::<TestBackend>(dir.path(), &device)
        .await
        .unwrap();
    let translation = translator.translate(&[2, 3, 4], &device).unwrap();

    assert_eq!(translator.max_length(), config.max_length);
    assert!(!translation.tokens.is_empty());
    assert!(translation.tokens.len() <= config.max_length);
}
