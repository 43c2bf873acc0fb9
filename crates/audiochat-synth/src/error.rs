//! Error types for the synthesis backend.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur during tone synthesis.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Invalid base frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid harmonic entry.
    #[error("invalid harmonic {index}: {message}")]
    InvalidHarmonic {
        /// Harmonic index as given in the parameter list.
        index: u32,
        /// Error message.
        message: String,
    },

    /// Invalid envelope parameters.
    #[error("invalid envelope: {message}")]
    InvalidEnvelope {
        /// Error message.
        message: String,
    },

    /// The accumulated signal is identically zero, so peak normalization
    /// is undefined.
    #[error("degenerate signal: accumulated waveform is identically zero")]
    DegenerateSignal,
}

impl SynthError {
    /// Creates an invalid harmonic error.
    pub fn invalid_harmonic(index: u32, message: impl Into<String>) -> Self {
        Self::InvalidHarmonic {
            index,
            message: message.into(),
        }
    }

    /// Creates an invalid envelope error.
    pub fn invalid_envelope(message: impl Into<String>) -> Self {
        Self::InvalidEnvelope {
            message: message.into(),
        }
    }
}
