//! Audiochat CLI - generates audio chat example artifacts.
//!
//! Running with no arguments synthesizes a 2-second violin-like tone at
//! 440 Hz, embeds it into a three-turn conversational record, and writes
//! the MessagePack-encoded artifact to `example_audio_qa.msgpack`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use audiochat_cli::generate::{self, GenerateOptions};

/// Audiochat - Audio QA example generator
#[derive(Parser)]
#[command(name = "audiochat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base frequency of the synthesized tone in Hz
    #[arg(long, default_value_t = 440.0)]
    frequency: f64,

    /// Tone duration in seconds
    #[arg(long, default_value_t = 2.0)]
    duration: f64,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 44100)]
    sample_rate: u32,

    /// Record identifier embedded in the artifact
    #[arg(long, default_value = "audio_qa_example_001")]
    id: String,

    /// Tone parameter file (JSON) overriding the built-in preset
    #[arg(long)]
    params: Option<PathBuf>,

    /// Output path for the encoded artifact
    #[arg(short, long, default_value = "example_audio_qa.msgpack")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let opts = GenerateOptions {
        frequency: cli.frequency,
        duration: cli.duration,
        sample_rate: cli.sample_rate,
        id: cli.id,
        params: cli.params,
        output: cli.output,
    };

    match generate::run(&opts) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
