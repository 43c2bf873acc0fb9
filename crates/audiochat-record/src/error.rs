//! Error types for record construction, (de)serialization, and
//! verification.

use thiserror::Error;

/// Result type for record operations.
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors that can occur while encoding, decoding, or verifying a
/// conversational record.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The record could not be serialized.
    #[error("failed to encode record: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    /// The byte stream could not be deserialized (malformed, truncated,
    /// or carrying an unrecognized type tag).
    #[error("failed to decode record: {0}")]
    Decode(#[from] rmp_serde::decode::Error),

    /// The decoded record carries no audio content part.
    #[error("record contains no audio content part")]
    MissingAudioPart,

    /// The decoded audio payload length differs from what was embedded.
    /// Indicates a contract violation in the synthesizer or the codec;
    /// always fatal.
    #[error("embedded audio is {found} bytes, expected {expected}")]
    AudioLengthMismatch {
        /// Byte length embedded before encoding.
        expected: usize,
        /// Byte length found after decoding.
        found: usize,
    },

    /// The decoded audio format tag differs from what was embedded.
    /// Indicates a contract violation; always fatal.
    #[error("embedded audio format is {found:?}, expected {expected:?}")]
    AudioFormatMismatch {
        /// Format tag embedded before encoding.
        expected: String,
        /// Format tag found after decoding.
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_messages() {
        let err = RecordError::AudioLengthMismatch {
            expected: 100,
            found: 42,
        };
        assert!(err.to_string().contains("42"));
        assert!(err.to_string().contains("100"));

        let err = RecordError::AudioFormatMismatch {
            expected: "wav".to_string(),
            found: "ogg".to_string(),
        };
        assert!(err.to_string().contains("wav"));
        assert!(err.to_string().contains("ogg"));
    }
}
