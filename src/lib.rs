//! # phrasebook-tts
//!
//! A small library (and CLI) that converts a phrase list into spoken audio
//! using a cloud text-to-speech engine.
//!
//! Input is newline-delimited text. Each line holds one phrase, optionally
//! followed by a parenthesized translation:
//!
//! ```text
//! Guten Morgen (Good morning)
//! Danke
//! ```
//!
//! For every line the phrase is synthesized to one audio file named after the
//! phrase, and a `phrase<TAB>translation` record is appended to `output.txt`.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! phrasebook-tts = { version = "0.1", features = ["google"] }
//! ```
//!
//! ```ignore
//! use phrasebook_tts::engines::google::{GoogleEngine, VoiceConfig};
//! use phrasebook_tts::SynthesisEngine;
//!
//! // Reads the API key from the GOOGLE_API_KEY environment variable.
//! let engine = GoogleEngine::new(VoiceConfig::default())?;
//! engine.synthesize_to_file("Guten Morgen", std::path::Path::new("Guten-Morgen.mp3"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod engines;
pub mod phrase;
pub mod run;

use std::path::Path;

use serde::Serialize;

/// Audio container/codec for synthesized output.
///
/// Variant names serialize to the wire names the synthesis REST API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioEncoding {
    Mp3,
    Linear16,
    OggOpus,
}

impl AudioEncoding {
    /// File extension (without dot) conventionally used for this encoding.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Linear16 => "wav",
            Self::OggOpus => "ogg",
        }
    }
}

/// The result of a synthesis (text-to-speech) operation.
///
/// Holds the provider-encoded audio bytes verbatim; no transcoding happens
/// on this side.
#[derive(Debug)]
pub struct SynthesisResult {
    /// Encoded audio bytes as returned by the engine
    pub audio: Vec<u8>,
    /// Encoding of the audio bytes
    pub encoding: AudioEncoding,
}

impl SynthesisResult {
    /// Write the audio bytes to a file, replacing any existing file at `path`.
    pub fn write_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        std::fs::write(path, &self.audio)?;
        Ok(())
    }
}

/// Common interface for text-to-speech synthesis engines.
pub trait SynthesisEngine {
    /// Synthesize speech from the given text.
    fn synthesize(&self, text: &str) -> Result<SynthesisResult, Box<dyn std::error::Error>>;

    /// Synthesize speech from the given text and write it to a file.
    ///
    /// Default implementation calls `synthesize()` then `SynthesisResult::write_to()`.
    fn synthesize_to_file(&self, text: &str, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        self.synthesize(text)?.write_to(path)
    }
}
