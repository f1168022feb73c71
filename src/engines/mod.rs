//! Speech synthesis engines.
//!
//! This module contains implementations of text-to-speech engines.
//!
//! # Available Engines
//!
//! Enable engines via Cargo features:
//! - `google` - Google Cloud Text-to-Speech (REST API, requires an API key)

#[cfg(feature = "google")]
pub mod google;
