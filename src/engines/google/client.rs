use base64::Engine as _;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::AudioEncoding;

/// Production endpoint for the Cloud TTS v1 API.
pub const API_BASE_URL: &str = "https://texttospeech.googleapis.com/v1";

/// Environment variable consulted when no API key is passed explicitly.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

#[derive(thiserror::Error, Debug)]
pub enum GoogleTtsError {
    #[error("no API key found. Set the GOOGLE_API_KEY environment variable or pass a key explicitly.")]
    MissingApiKey,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("TTS API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("invalid base64 in audioContent: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// SSML voice gender, as understood by the `voice.ssmlGender` request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SsmlGender {
    Female,
    Male,
    Neutral,
}

/// Fixed voice configuration for a client.
///
/// Established once at construction and reused for every synthesis request.
#[derive(Debug, Clone, Builder)]
#[builder(default, setter(into))]
pub struct VoiceConfig {
    /// BCP-47 language/locale code, e.g. `"de-DE"`.
    pub language_code: String,
    pub gender: SsmlGender,
    pub encoding: AudioEncoding,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            language_code: "de-DE".to_string(),
            gender: SsmlGender::Female,
            encoding: AudioEncoding::Mp3,
        }
    }
}

// Request/response wire types for v1/text:synthesize.

#[derive(Serialize)]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelectionParams<'a>,
    #[serde(rename = "audioConfig")]
    audio_config: AudioConfig,
}

#[derive(Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelectionParams<'a> {
    language_code: &'a str,
    ssml_gender: SsmlGender,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: AudioEncoding,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorStatus,
}

#[derive(Deserialize)]
struct ErrorStatus {
    message: String,
}

/// Blocking client for the Cloud TTS REST API.
///
/// Holds one HTTP connection pool and one [`VoiceConfig`] for its whole
/// lifetime; every call to [`synthesize`](Self::synthesize) is a single
/// request with the provider client's default timeout.
pub struct GoogleTtsClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    voice: VoiceConfig,
}

impl GoogleTtsClient {
    /// Create a client using the API key from the `GOOGLE_API_KEY`
    /// environment variable.
    pub fn new(voice: VoiceConfig) -> Result<Self, GoogleTtsError> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| GoogleTtsError::MissingApiKey)?;
        Self::with_api_key(voice, api_key)
    }

    /// Create a client with an explicit API key.
    pub fn with_api_key(
        voice: VoiceConfig,
        api_key: impl Into<String>,
    ) -> Result<Self, GoogleTtsError> {
        let http = reqwest::blocking::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: API_BASE_URL.to_string(),
            api_key: api_key.into(),
            voice,
        })
    }

    /// Point the client at a different API base URL. Used by tests to target
    /// a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The voice configuration this client was built with.
    pub fn voice(&self) -> &VoiceConfig {
        &self.voice
    }

    /// Synthesize `text` with the configured voice, returning the encoded
    /// audio bytes.
    pub fn synthesize(&self, text: &str) -> Result<Vec<u8>, GoogleTtsError> {
        let body = SynthesizeRequest {
            input: SynthesisInput { text },
            voice: VoiceSelectionParams {
                language_code: &self.voice.language_code,
                ssml_gender: self.voice.gender,
            },
            audio_config: AudioConfig {
                audio_encoding: self.voice.encoding,
            },
        };

        let response = self
            .http
            .post(format!(
                "{}/text:synthesize",
                self.base_url.trim_end_matches('/')
            ))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().unwrap_or_default();
            // The API reports failures as {"error":{"code":..,"message":..}};
            // fall back to the raw body when it doesn't.
            let message = serde_json::from_str::<ErrorBody>(&raw)
                .map(|b| b.error.message)
                .unwrap_or(raw);
            return Err(GoogleTtsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SynthesizeResponse = response.json()?;
        let audio = base64::engine::general_purpose::STANDARD.decode(parsed.audio_content)?;
        Ok(audio)
    }
}

#[cfg(test)]
mod tests {
    use super::{GoogleTtsClient, GoogleTtsError, VoiceConfig};
    use mockito::Matcher;

    fn test_client(server: &mockito::Server) -> GoogleTtsClient {
        GoogleTtsClient::with_api_key(VoiceConfig::default(), "test-key")
            .expect("client should build")
            .with_base_url(server.url())
    }

    #[test]
    fn decodes_audio_content() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/text:synthesize")
            .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
            .match_body(Matcher::PartialJson(serde_json::json!({
                "input": { "text": "Guten Morgen" },
                "voice": { "languageCode": "de-DE", "ssmlGender": "FEMALE" },
                "audioConfig": { "audioEncoding": "MP3" },
            })))
            .with_status(200)
            .with_body(r#"{"audioContent":"aGVsbG8="}"#)
            .create();

        let client = test_client(&server);
        let audio = client.synthesize("Guten Morgen").expect("synthesis should succeed");
        assert_eq!(audio, b"hello");
        mock.assert();
    }

    #[test]
    fn surfaces_api_error_message() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/text:synthesize")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body(r#"{"error":{"code":403,"message":"quota exceeded","status":"PERMISSION_DENIED"}}"#)
            .create();

        let client = test_client(&server);
        let err = client.synthesize("Danke").unwrap_err();
        match err {
            GoogleTtsError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn keeps_raw_body_when_error_is_not_structured() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/text:synthesize")
            .match_query(Matcher::Any)
            .with_status(502)
            .with_body("bad gateway")
            .create();

        let client = test_client(&server);
        let err = client.synthesize("Danke").unwrap_err();
        match err {
            GoogleTtsError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "bad gateway");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_base64() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/text:synthesize")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"audioContent":"not base64!"}"#)
            .create();

        let client = test_client(&server);
        let err = client.synthesize("Danke").unwrap_err();
        assert!(matches!(err, GoogleTtsError::Decode(_)));
    }
}
