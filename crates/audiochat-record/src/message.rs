//! Conversation message types.
//!
//! A message is one turn of the exchange. Simple turns carry a plain
//! string; multimodal turns carry an ordered list of content parts, each
//! tagged as text or audio. The two content kinds are closed variants,
//! so consumers match exhaustively instead of inspecting types at
//! runtime. Wire field names (`role`, `content`, `type`, `text`,
//! `audio`, `format`, `sample_rate`, `duration`) follow the artifact
//! format consumed downstream.

use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;

/// Speaker role of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instruction turn establishing assistant behavior.
    System,
    /// Turn authored by the querying side; may be multimodal.
    User,
    /// Reply turn authored by the assistant.
    Assistant,
}

impl Role {
    /// Returns the role as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of a multimodal turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Plain text.
    Text {
        /// The text content.
        text: String,
    },
    /// An embedded audio clip.
    Audio {
        /// Framed audio bytes, stored as a raw binary blob.
        audio: ByteBuf,
        /// Container format tag (e.g. "wav").
        format: String,
        /// Sample rate in Hz.
        sample_rate: u32,
        /// Clip duration in seconds.
        duration: f64,
    },
}

impl ContentPart {
    /// Creates a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Creates an audio part from framed audio bytes.
    pub fn audio(
        bytes: Vec<u8>,
        format: impl Into<String>,
        sample_rate: u32,
        duration: f64,
    ) -> Self {
        Self::Audio {
            audio: ByteBuf::from(bytes),
            format: format.into(),
            sample_rate,
            duration,
        }
    }

    /// Returns true for audio parts.
    pub fn is_audio(&self) -> bool {
        matches!(self, Self::Audio { .. })
    }
}

/// Content of a conversation turn: a plain string or an ordered list of
/// parts. Part order is semantically meaningful and survives
/// serialization unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Text-only turn.
    Text(String),
    /// Multimodal turn.
    Parts(Vec<ContentPart>),
}

/// A single conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Speaker role.
    pub role: Role,
    /// Turn content.
    pub content: MessageContent,
}

impl Message {
    /// Creates a text-only system turn.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Creates a text-only user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Creates a multimodal user turn from ordered parts.
    pub fn user_parts(parts: Vec<ContentPart>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Parts(parts),
        }
    }

    /// Creates a text-only assistant turn.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Content parts of a multimodal turn; empty for text-only turns.
    pub fn parts(&self) -> &[ContentPart] {
        match &self.content {
            MessageContent::Parts(parts) => parts,
            MessageContent::Text(_) => &[],
        }
    }
}
