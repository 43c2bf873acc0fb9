//! MessagePack encoding, decoding, and post-round-trip verification.
//!
//! Records are serialized as string-keyed maps with named fields
//! (`rmp_serde::to_vec_named`), so every nested map, sequence, string,
//! and binary blob carries its own type tag and the audio payload is
//! stored as a raw `bin` value without any re-encoding.

use crate::error::{RecordError, RecordResult};
use crate::message::ContentPart;
use crate::record::ConversationRecord;

/// Summary of the audio part found during verification.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSummary {
    /// Byte length of the embedded audio payload.
    pub num_bytes: usize,
    /// Container format tag.
    pub format: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Clip duration in seconds.
    pub duration: f64,
}

/// Serializes a record to MessagePack bytes.
pub fn encode(record: &ConversationRecord) -> RecordResult<Vec<u8>> {
    Ok(rmp_serde::to_vec_named(record)?)
}

/// Deserializes a record from MessagePack bytes.
///
/// Malformed, truncated, or tag-corrupted input fails with
/// [`RecordError::Decode`]; a partially populated record is never
/// returned.
pub fn decode(bytes: &[u8]) -> RecordResult<ConversationRecord> {
    Ok(rmp_serde::from_slice(bytes)?)
}

/// Checks a decoded record against the audio that was embedded.
///
/// Scans the conversation turns in order for the first audio content
/// part and compares its byte length and format tag with what the
/// builder embedded. A mismatch means the synthesizer or the codec
/// violated its contract and is always fatal.
pub fn verify_audio(
    record: &ConversationRecord,
    expected_len: usize,
    expected_format: &str,
) -> RecordResult<AudioSummary> {
    for message in &record.messages {
        for part in message.parts() {
            if let ContentPart::Audio {
                audio,
                format,
                sample_rate,
                duration,
            } = part
            {
                if audio.len() != expected_len {
                    return Err(RecordError::AudioLengthMismatch {
                        expected: expected_len,
                        found: audio.len(),
                    });
                }
                if format != expected_format {
                    return Err(RecordError::AudioFormatMismatch {
                        expected: expected_format.to_string(),
                        found: format.clone(),
                    });
                }
                return Ok(AudioSummary {
                    num_bytes: audio.len(),
                    format: format.clone(),
                    sample_rate: *sample_rate,
                    duration: *duration,
                });
            }
        }
    }

    Err(RecordError::MissingAudioPart)
}
