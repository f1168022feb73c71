//! Google Cloud Text-to-Speech engine implementation.
//!
//! This engine synthesizes speech remotely through the Cloud TTS REST API
//! (`v1/text:synthesize`). One blocking HTTP request is issued per phrase;
//! there is no retry, batching, or local caching.
//!
//! # Credentials
//!
//! An API key is required. Either export it as `GOOGLE_API_KEY` or pass it
//! explicitly via [`GoogleTtsClient::with_api_key`]. Keys are created in the
//! Google Cloud console with the Text-to-Speech API enabled:
//! <https://cloud.google.com/text-to-speech/docs/before-you-begin>
//!
//! # Voice selection
//!
//! The voice is fixed per client and described by a [`VoiceConfig`]: a BCP-47
//! language code, an SSML gender, and the output audio encoding. The default
//! configuration is `de-DE`, female, MP3.
//!
//! ```ignore
//! use phrasebook_tts::engines::google::{GoogleEngine, VoiceConfigBuilder};
//!
//! let voice = VoiceConfigBuilder::default()
//!     .language_code("en-GB")
//!     .build()?;
//! let engine = GoogleEngine::new(voice)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod client;
mod engine;

pub use client::{GoogleTtsClient, GoogleTtsError, SsmlGender, VoiceConfig, VoiceConfigBuilder};
pub use engine::GoogleEngine;
