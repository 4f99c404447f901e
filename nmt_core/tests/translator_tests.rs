use approx::assert_relative_eq;
use burn::{backend::NdArray, tensor::Tensor};
use nmt_core::{
    AttnDecoderRnnConfig, EncoderRnnConfig, NmtCoreError, Seq2SeqConfig, Translator,
};

type TestBackend = NdArray;

fn small_config() -> Seq2SeqConfig {
    let mut config = Seq2SeqConfig::new(7, 9, 6);
    config.max_length = 5;
    config
}

fn to_vec<const D: usize>(tensor: Tensor<TestBackend, D>) -> Vec<f32> {
    tensor.into_data().to_vec::<f32>().unwrap()
}

#[test]
fn encode_pads_buffer_with_zero_rows() {
    let device = Default::default();
    let translator = small_config()
        .init_translator::<TestBackend>(&device)
        .unwrap();

    let encoded = translator.encode(&[2, 3], &device).unwrap();

    assert_eq!(encoded.input_len, 2);
    assert_eq!(encoded.outputs.dims(), [5, 6]);
    assert_eq!(encoded.hidden.dims(), [1, 1, 6]);

    let rows = to_vec(encoded.outputs);
    assert!(rows[2 * 6..].iter().all(|&v| v == 0.0));
}

#[test]
fn encode_rows_match_manual_encoder_steps() {
    let device = Default::default();
    let translator = small_config()
        .init_translator::<TestBackend>(&device)
        .unwrap();
    let encoder = translator.encoder();

    let (first, hidden) = encoder.forward(4, encoder.init_hidden(&device)).unwrap();
    let (second, last_hidden) = encoder.forward(1, hidden).unwrap();

    let encoded = translator.encode(&[4, 1], &device).unwrap();
    let rows = to_vec(encoded.outputs);

    assert_eq!(&rows[..6], to_vec(first).as_slice());
    assert_eq!(&rows[6..12], to_vec(second).as_slice());
    assert_eq!(to_vec(encoded.hidden), to_vec(last_hidden));
}

#[test]
fn encode_rejects_too_long_and_empty_input() {
    let device = Default::default();
    let translator = small_config()
        .init_translator::<TestBackend>(&device)
        .unwrap();

    assert_eq!(
        translator.encode(&[1, 2, 3, 4, 5, 6], &device).unwrap_err(),
        NmtCoreError::SequenceTooLong {
            len: 6,
            max_length: 5
        }
    );
    assert!(matches!(
        translator.encode(&[], &device),
        Err(NmtCoreError::InvalidInput(_))
    ));
}

#[test]
fn encode_propagates_token_errors() {
    let device = Default::default();
    let translator = small_config()
        .init_translator::<TestBackend>(&device)
        .unwrap();

    assert!(matches!(
        translator.encode(&[1, 70], &device),
        Err(NmtCoreError::TokenOutOfRange { token: 70, vocab_size: 7 })
    ));
}

#[test]
fn translate_respects_step_limit_and_eos() {
    let device = Default::default();
    let config = small_config();
    let translator = config.init_translator::<TestBackend>(&device).unwrap();

    let translation = translator.translate(&[3, 5, 2], &device).unwrap();
    let steps = translation.tokens.len();

    assert!((1..=config.max_length).contains(&steps));
    assert!(translation.tokens.iter().all(|&t| t < config.output_vocab_size));
    assert_eq!(translation.attentions.dims(), [steps, config.max_length]);

    let eos_position = translation.tokens.iter().position(|&t| t == config.eos_token);
    if translation.reached_eos {
        assert_eq!(eos_position, Some(steps - 1));
    } else {
        assert_eq!(eos_position, None);
        assert_eq!(steps, config.max_length);
    }

    for row in to_vec(translation.attentions).chunks(config.max_length) {
        assert_relative_eq!(row.iter().sum::<f32>(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn translate_is_deterministic() {
    let device = Default::default();
    let translator = small_config()
        .init_translator::<TestBackend>(&device)
        .unwrap();

    let first = translator.translate(&[1, 2, 3], &device).unwrap();
    let second = translator.translate(&[1, 2, 3], &device).unwrap();

    assert_eq!(first.tokens, second.tokens);
    assert_eq!(first.reached_eos, second.reached_eos);
}

#[test]
fn translator_rejects_mismatched_modules() {
    let device = Default::default();
    let encoder = EncoderRnnConfig::new(5, 4)
        .init::<TestBackend>(&device)
        .unwrap();
    let decoder = AttnDecoderRnnConfig::new(6, 5)
        .init::<TestBackend>(&device)
        .unwrap();

    assert!(matches!(
        Translator::new(encoder, decoder, 0, 1),
        Err(NmtCoreError::InvalidConfig(_))
    ));
}

#[test]
fn translator_rejects_special_tokens_outside_vocab() {
    let device = Default::default();
    let encoder = EncoderRnnConfig::new(5, 4)
        .init::<TestBackend>(&device)
        .unwrap();
    let decoder = AttnDecoderRnnConfig::new(4, 3)
        .init::<TestBackend>(&device)
        .unwrap();

    assert_eq!(
        Translator::new(encoder, decoder, 0, 3).unwrap_err(),
        NmtCoreError::TokenOutOfRange {
            token: 3,
            vocab_size: 3
        }
    );
}

#[test]
fn translator_rejects_equal_sos_and_eos() {
    let device = Default::default();
    let encoder = EncoderRnnConfig::new(5, 4)
        .init::<TestBackend>(&device)
        .unwrap();
    let decoder = AttnDecoderRnnConfig::new(4, 5)
        .init::<TestBackend>(&device)
        .unwrap();

    assert!(matches!(
        Translator::new(encoder, decoder, 2, 2),
        Err(NmtCoreError::InvalidConfig(_))
    ));
}
