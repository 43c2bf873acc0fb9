//! End-to-end pipeline test: synthesize, frame, encode, decode, verify.

use audiochat_cli::generate::{generate_artifact, GenerateOptions};
use audiochat_record::codec;
use audiochat_record::message::{MessageContent, Role};

fn base_options(dir: &std::path::Path) -> GenerateOptions {
    GenerateOptions {
        frequency: 440.0,
        duration: 2.0,
        sample_rate: 44100,
        id: "audio_qa_example_001".to_string(),
        params: None,
        output: dir.join("example_audio_qa.msgpack"),
    }
}

#[test]
fn test_end_to_end_scenario() {
    let dir = tempfile::tempdir().expect("temp dir");
    let opts = base_options(dir.path());

    let report = generate_artifact(&opts).expect("pipeline should succeed");

    // 2.0 s at 44.1 kHz.
    assert_eq!(report.num_samples, 88200);
    assert_eq!(report.num_messages, 3);
    assert_eq!(report.id, "audio_qa_example_001");

    // Mono 16-bit PCM WAV: 44-byte header plus two bytes per sample.
    assert_eq!(report.audio.num_bytes, 44 + 88200 * 2);
    assert_eq!(report.audio.format, "wav");
    assert_eq!(report.audio.sample_rate, 44100);
    assert_eq!(report.audio.duration, 2.0);

    // The artifact on disk is the complete encoded record.
    let bytes = std::fs::read(&opts.output).expect("artifact exists");
    assert_eq!(bytes.len(), report.encoded_len);

    let record = codec::decode(&bytes).expect("artifact decodes");
    assert_eq!(record.id, "audio_qa_example_001");
    assert_eq!(record.kind, "audio_chat");
    assert_eq!(record.messages.len(), 3);
    assert_eq!(record.messages[0].role, Role::System);
    assert_eq!(record.messages[2].role, Role::Assistant);

    // The user turn carries a text part followed by the audio part.
    let user = &record.messages[1];
    assert_eq!(user.role, Role::User);
    match &user.content {
        MessageContent::Parts(parts) => {
            assert_eq!(parts.len(), 2);
            assert!(!parts[0].is_audio());
            assert!(parts[1].is_audio());
        }
        MessageContent::Text(_) => panic!("user turn should be multimodal"),
    }

    assert!(record.metadata.contains_key("created_at"));
    assert_eq!(
        record.metadata.get("source").map(String::as_str),
        Some("example")
    );
}

#[test]
fn test_generate_is_repeatable_audio() {
    let dir = tempfile::tempdir().expect("temp dir");

    let mut first = base_options(dir.path());
    first.output = dir.path().join("a.msgpack");
    let mut second = base_options(dir.path());
    second.output = dir.path().join("b.msgpack");

    let report_a = generate_artifact(&first).expect("pipeline should succeed");
    let report_b = generate_artifact(&second).expect("pipeline should succeed");

    // Synthesis is deterministic, so the audio content hash matches even
    // though record metadata carries a fresh timestamp.
    assert_eq!(report_a.pcm_hash, report_b.pcm_hash);
}

#[test]
fn test_invalid_duration_fails_without_artifact() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut opts = base_options(dir.path());
    // Shorter than the default envelope; rejected before synthesis.
    opts.duration = 0.2;

    assert!(generate_artifact(&opts).is_err());
    assert!(!opts.output.exists(), "no partial artifact may remain");
}

#[test]
fn test_params_file_overrides_preset() {
    let dir = tempfile::tempdir().expect("temp dir");

    let params_path = dir.path().join("tone.json");
    let json = r#"{
        "base_freq": 220.0,
        "duration_seconds": 1.0,
        "sample_rate": 22050,
        "harmonics": [
            { "index": 1, "amplitude": 1.0 },
            { "index": 2, "amplitude": 0.5 }
        ],
        "envelope": { "attack": 0.05, "decay": 0.05, "sustain": 0.6, "release": 0.1 }
    }"#;
    std::fs::write(&params_path, json).expect("write params");

    let mut opts = base_options(dir.path());
    opts.params = Some(params_path);

    let report = generate_artifact(&opts).expect("pipeline should succeed");
    assert_eq!(report.num_samples, 22050);
    assert_eq!(report.audio.sample_rate, 22050);
    assert_eq!(report.audio.duration, 1.0);
}
