use crate::{AudioEncoding, SynthesisEngine, SynthesisResult};

use super::client::{GoogleTtsClient, GoogleTtsError, VoiceConfig};

/// Google Cloud text-to-speech engine.
///
/// Thin [`SynthesisEngine`] wrapper over [`GoogleTtsClient`]. The voice is
/// fixed at construction; one blocking API request is issued per call.
///
/// ```ignore
/// use phrasebook_tts::{SynthesisEngine, engines::google::{GoogleEngine, VoiceConfig}};
///
/// let engine = GoogleEngine::new(VoiceConfig::default())?;
/// let result = engine.synthesize("Guten Morgen")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct GoogleEngine {
    client: GoogleTtsClient,
    encoding: AudioEncoding,
}

impl GoogleEngine {
    /// Create an engine for the given voice, reading the API key from the
    /// environment. Fails before any synthesis when the key is missing.
    pub fn new(voice: VoiceConfig) -> Result<Self, GoogleTtsError> {
        let encoding = voice.encoding;
        let client = GoogleTtsClient::new(voice)?;
        Ok(Self { client, encoding })
    }

    /// Wrap an already-configured client.
    pub fn with_client(client: GoogleTtsClient) -> Self {
        let encoding = client.voice().encoding;
        Self { client, encoding }
    }
}

impl SynthesisEngine for GoogleEngine {
    fn synthesize(&self, text: &str) -> Result<SynthesisResult, Box<dyn std::error::Error>> {
        let audio = self.client.synthesize(text)?;
        log::debug!("synthesized {} bytes for {text:?}", audio.len());
        Ok(SynthesisResult {
            audio,
            encoding: self.encoding,
        })
    }
}
