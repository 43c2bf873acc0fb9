//! Audiochat CLI library.
//!
//! The binary in `main.rs` parses arguments and delegates to
//! [`generate`], which runs the full pipeline: synthesize the tone,
//! frame it as WAV, assemble the conversational record, write the
//! MessagePack artifact atomically, then decode it back and verify the
//! embedded audio.

pub mod generate;
