//! Audiochat Record Library
//!
//! This crate provides the conversational record schema for audio chat
//! examples, a builder for assembling records, and a MessagePack codec
//! with a post-round-trip verification pass.
//!
//! # Overview
//!
//! A [`record::ConversationRecord`] is an ordered multi-turn exchange.
//! Turn content is a closed tagged variant: a plain string, or an
//! ordered list of [`message::ContentPart`] values (text or audio). The
//! audio part embeds framed WAV bytes as a raw binary blob together with
//! its format tag, sample rate, and duration.
//!
//! # Example
//!
//! ```
//! use audiochat_record::codec;
//! use audiochat_record::record::{ChatTexts, RecordBuilder};
//!
//! let record = RecordBuilder::audio_chat(
//!     "audio_qa_example_001",
//!     &ChatTexts::default(),
//!     vec![0u8; 128], // framed audio bytes
//!     44100,
//!     2.0,
//! )
//! .metadata("source", "example")
//! .build();
//!
//! let bytes = codec::encode(&record).unwrap();
//! let decoded = codec::decode(&bytes).unwrap();
//! assert_eq!(decoded, record);
//!
//! let summary = codec::verify_audio(&decoded, 128, "wav").unwrap();
//! assert_eq!(summary.sample_rate, 44100);
//! ```
//!
//! # Modules
//!
//! - [`message`]: Roles, content parts, and conversation turns
//! - [`record`]: The top-level record type and its builder
//! - [`codec`]: MessagePack encode/decode and audio verification
//! - [`error`]: Error types

pub mod codec;
pub mod error;
pub mod message;
pub mod record;

// Re-export commonly used types at the crate root
pub use codec::{decode, encode, verify_audio, AudioSummary};
pub use error::{RecordError, RecordResult};
pub use message::{ContentPart, Message, MessageContent, Role};
pub use record::{ChatTexts, ConversationRecord, RecordBuilder, AUDIO_CHAT_KIND};
