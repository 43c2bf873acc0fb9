//! Generate command implementation.
//!
//! Runs the whole pipeline for one audio chat example and prints a
//! human-readable summary of the artifact.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use colored::Colorize;
use tempfile::NamedTempFile;

use audiochat_record::codec::{self, AudioSummary};
use audiochat_record::record::{ChatTexts, RecordBuilder};
use audiochat_synth::tone::{synthesize, ToneParams};
use audiochat_synth::wav::WavAudio;

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Base frequency of the synthesized tone in Hz.
    pub frequency: f64,
    /// Tone duration in seconds.
    pub duration: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Record identifier embedded in the artifact.
    pub id: String,
    /// Optional JSON tone parameter file overriding the preset.
    pub params: Option<PathBuf>,
    /// Output path for the encoded artifact.
    pub output: PathBuf,
}

/// What a generation run produced, for reporting and tests.
#[derive(Debug)]
pub struct GenerateReport {
    /// Record identifier as read back from the artifact.
    pub id: String,
    /// Number of synthesized samples.
    pub num_samples: usize,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
    /// Size of the encoded artifact in bytes.
    pub encoded_len: usize,
    /// Number of conversation turns in the decoded record.
    pub num_messages: usize,
    /// Verified audio part of the decoded record.
    pub audio: AudioSummary,
}

/// Runs the generate command and prints a summary.
pub fn run(opts: &GenerateOptions) -> Result<ExitCode> {
    println!(
        "{} {}",
        "Generating audio chat example:".cyan().bold(),
        opts.id
    );

    let report = generate_artifact(opts)?;

    println!(
        "{} {}",
        "Wrote:".cyan().bold(),
        opts.output.display()
    );
    println!("  {} {}", "id:".dimmed(), report.id);
    println!("  {} {}", "messages:".dimmed(), report.num_messages);
    println!("  {} {}", "samples:".dimmed(), report.num_samples);
    println!(
        "  {} {} bytes ({})",
        "audio:".dimmed(),
        report.audio.num_bytes,
        report.audio.format
    );
    println!("  {} {} bytes", "artifact:".dimmed(), report.encoded_len);
    println!("  {} {}", "pcm hash:".dimmed(), &report.pcm_hash[..16]);
    println!("{}", "Round-trip verification passed".green());

    Ok(ExitCode::SUCCESS)
}

/// Runs the pipeline: synthesize, frame, assemble, encode, write
/// atomically, decode back, verify.
pub fn generate_artifact(opts: &GenerateOptions) -> Result<GenerateReport> {
    let params = load_params(opts)?;

    let samples = synthesize(&params).context("tone synthesis failed")?;
    let audio = WavAudio::from_mono(&samples, params.sample_rate);

    let record = RecordBuilder::audio_chat(
        &opts.id,
        &ChatTexts::default(),
        audio.wav_data.clone(),
        params.sample_rate,
        params.duration_seconds,
    )
    .metadata(
        "created_at",
        chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    )
    .metadata("source", "example")
    .metadata(
        "description",
        "Example audio QA conversation with violin-like tone",
    )
    .build();

    let encoded = codec::encode(&record).context("record encoding failed")?;
    write_atomic(&opts.output, &encoded)
        .with_context(|| format!("failed to write artifact to {}", opts.output.display()))?;

    // Read the artifact back and check the embedded audio against what
    // was framed; a mismatch is a contract violation, not a retry case.
    let readback = fs::read(&opts.output)
        .with_context(|| format!("failed to read back {}", opts.output.display()))?;
    let decoded = codec::decode(&readback).context("artifact failed to decode")?;
    let verified = codec::verify_audio(&decoded, audio.wav_data.len(), "wav")
        .context("round-trip verification failed")?;

    Ok(GenerateReport {
        id: decoded.id,
        num_samples: samples.len(),
        pcm_hash: audio.pcm_hash,
        encoded_len: encoded.len(),
        num_messages: decoded.messages.len(),
        audio: verified,
    })
}

/// Resolves tone parameters from the options.
///
/// With `--params`, the JSON file is used as-is; otherwise the violin
/// preset is shaped by the frequency/duration/sample-rate flags.
fn load_params(opts: &GenerateOptions) -> Result<ToneParams> {
    match &opts.params {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read parameter file {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("invalid parameter file {}", path.display()))
        }
        None => Ok(ToneParams::violin(opts.frequency)
            .with_duration(opts.duration)
            .with_sample_rate(opts.sample_rate)),
    }
}

/// Writes bytes to `path` through a temp file in the same directory, so
/// the final path only ever holds a complete artifact.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(bytes)?;
    tmp.persist(path)?;
    Ok(())
}
