//! Top-level conversational record and its builder.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::message::{ContentPart, Message};

/// Record kind tag for audio chat exchanges.
pub const AUDIO_CHAT_KIND: &str = "audio_chat";

/// A complete multi-turn exchange, including embedded audio, ready for
/// binary serialization.
///
/// The record tree is constructed once and not mutated afterwards;
/// message order is conversational turn order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecord {
    /// Globally unique identifier of this example.
    pub id: String,

    /// Record kind tag (e.g. "audio_chat").
    #[serde(rename = "type")]
    pub kind: String,

    /// Ordered conversation turns.
    pub messages: Vec<Message>,

    /// Provenance metadata (creation timestamp, source, description).
    pub metadata: BTreeMap<String, String>,
}

impl ConversationRecord {
    /// Creates a new record builder.
    pub fn builder(id: impl Into<String>, kind: impl Into<String>) -> RecordBuilder {
        RecordBuilder::new(id, kind)
    }
}

/// Prompt and reply text for an audio chat exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTexts {
    /// System instruction turn.
    pub system: String,
    /// User question accompanying the audio clip.
    pub user: String,
    /// Assistant reply describing the audio.
    pub assistant: String,
}

impl Default for ChatTexts {
    fn default() -> Self {
        Self {
            system: "You are a helpful music assistant that can analyze and describe audio."
                .to_string(),
            user: "Please describe this audio. What instrument does it sound like?".to_string(),
            assistant: "This audio contains a sustained tone at approximately 440 Hz (A4 pitch).\
                        \n\nKey characteristics:\
                        \n- Instrument: Bowed string instrument (likely violin)\
                        \n- Harmonic structure: Rich overtones\
                        \n- Attack: Smooth\
                        \n- Release: Gradual\
                        \n\nThe tone is typical of legato bowing technique."
                .to_string(),
        }
    }
}

/// Builder for constructing [`ConversationRecord`] instances.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    id: String,
    kind: String,
    messages: Vec<Message>,
    metadata: BTreeMap<String, String>,
}

impl RecordBuilder {
    /// Creates a new record builder.
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            messages: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// Creates a builder pre-seeded with the three-turn audio chat
    /// structure: a system text turn, a user turn of [text, audio], and
    /// an assistant text turn. The audio part carries the framed WAV
    /// bytes verbatim.
    pub fn audio_chat(
        id: impl Into<String>,
        texts: &ChatTexts,
        wav_bytes: Vec<u8>,
        sample_rate: u32,
        duration: f64,
    ) -> Self {
        Self::new(id, AUDIO_CHAT_KIND)
            .message(Message::system(&texts.system))
            .message(Message::user_parts(vec![
                ContentPart::text(&texts.user),
                ContentPart::audio(wav_bytes, "wav", sample_rate, duration),
            ]))
            .message(Message::assistant(&texts.assistant))
    }

    /// Appends a conversation turn.
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Sets a metadata entry.
    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Builds the record.
    pub fn build(self) -> ConversationRecord {
        ConversationRecord {
            id: self.id,
            kind: self.kind,
            messages: self.messages,
            metadata: self.metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{MessageContent, Role};

    #[test]
    fn test_builder_basic() {
        let record = ConversationRecord::builder("rec-1", "audio_chat")
            .message(Message::system("be helpful"))
            .message(Message::user("what is this?"))
            .metadata("source", "test")
            .build();

        assert_eq!(record.id, "rec-1");
        assert_eq!(record.kind, "audio_chat");
        assert_eq!(record.messages.len(), 2);
        assert_eq!(record.metadata.get("source").map(String::as_str), Some("test"));
    }

    #[test]
    fn test_audio_chat_structure() {
        let texts = ChatTexts::default();
        let record =
            RecordBuilder::audio_chat("rec-2", &texts, vec![0u8; 64], 44100, 2.0).build();

        assert_eq!(record.kind, AUDIO_CHAT_KIND);
        assert_eq!(record.messages.len(), 3);
        assert_eq!(record.messages[0].role, Role::System);
        assert_eq!(record.messages[1].role, Role::User);
        assert_eq!(record.messages[2].role, Role::Assistant);

        // The user turn is multimodal: text part first, audio second.
        let parts = record.messages[1].parts();
        assert_eq!(parts.len(), 2);
        assert!(!parts[0].is_audio());
        assert!(parts[1].is_audio());

        // The system and assistant turns stay plain strings.
        assert!(matches!(
            record.messages[0].content,
            MessageContent::Text(_)
        ));
        assert!(matches!(
            record.messages[2].content,
            MessageContent::Text(_)
        ));
    }

    #[test]
    fn test_metadata_order_is_stable() {
        let record = ConversationRecord::builder("rec-3", "audio_chat")
            .metadata("source", "test")
            .metadata("created_at", "2026-01-01T00:00:00Z")
            .metadata("description", "ordering")
            .build();

        let keys: Vec<&str> = record.metadata.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["created_at", "description", "source"]);
    }
}
