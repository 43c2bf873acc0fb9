//! Audiochat Synthesis Backend
//!
//! Deterministic procedural synthesis of a bowed-string-like tone:
//! additive harmonic summation, ADSR envelope shaping, fixed-target peak
//! normalization, and mono 16-bit PCM WAV framing.
//!
//! # Determinism
//!
//! Synthesis is a pure function of its parameters. Given the same
//! [`tone::ToneParams`], the output samples and the framed WAV bytes are
//! identical across runs; the BLAKE3 PCM hash in [`wav::WavAudio`] can be
//! used to validate content.
//!
//! # Example
//!
//! ```
//! use audiochat_synth::tone::{synthesize, ToneParams, PEAK_TARGET};
//! use audiochat_synth::wav::WavAudio;
//!
//! let params = ToneParams::violin(440.0).with_duration(1.0);
//! let samples = synthesize(&params).unwrap();
//! assert_eq!(samples.len(), 44100);
//!
//! let peak = samples.iter().fold(0.0_f64, |a, &s| a.max(s.abs()));
//! assert!((peak - PEAK_TARGET).abs() < 1e-6);
//!
//! let audio = WavAudio::from_mono(&samples, params.sample_rate);
//! assert!(!audio.wav_data.is_empty());
//! ```
//!
//! # Crate Structure
//!
//! - [`tone`] - Harmonic parameters and the synthesis entry point
//! - [`envelope`] - ADSR envelope rendering
//! - [`wav`] - Deterministic WAV framing and PCM hashing
//! - [`error`] - Error types

pub mod envelope;
pub mod error;
pub mod tone;
pub mod wav;

// Re-export main types at crate root
pub use envelope::Envelope;
pub use error::{SynthError, SynthResult};
pub use tone::{normalize_peak, synthesize, Harmonic, ToneParams, PEAK_TARGET};
pub use wav::{WavAudio, WavFormat};
