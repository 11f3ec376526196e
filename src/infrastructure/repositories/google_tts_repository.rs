use super::tts_repository::{SynthesisResult, TtsRepository};
use crate::domain::tts::{voices, GoogleVoice, ProviderError, ProviderKind, SynthesisRequest};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::path::Path;

const PROVIDER: ProviderKind = ProviderKind::Google;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest<'a> {
    audio_config: AudioConfig,
    voice: GoogleVoice,
    input: SynthesisInput<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
    speaking_rate: f64,
    /// Semitones, the API default is 0.0
    pitch: f64,
    sample_rate_hertz: u32,
    effects_profile_id: Vec<&'static str>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            audio_encoding: "MP3",
            speaking_rate: 1.0,
            pitch: 2.0,
            sample_rate_hertz: 44100,
            effects_profile_id: vec!["small-bluetooth-speaker-class-device"],
        }
    }
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: Option<String>,
}

/// Google Cloud Text-to-Speech implementation of TTS repository
pub struct GoogleTtsRepository {
    http_client: reqwest::Client,
    url: String,
    api_key: String,
}

impl GoogleTtsRepository {
    pub fn new(http_client: reqwest::Client, url: String, api_key: String) -> Self {
        Self {
            http_client,
            url,
            api_key,
        }
    }

    fn build_body(text: &str, voice: GoogleVoice) -> SynthesizeRequest<'_> {
        SynthesizeRequest {
            audio_config: AudioConfig::default(),
            voice,
            input: SynthesisInput { text },
        }
    }

    fn decode_audio(body: &[u8]) -> Result<Vec<u8>, ProviderError> {
        let response: SynthesizeResponse =
            serde_json::from_slice(body).map_err(|e| ProviderError::InvalidResponse {
                provider: PROVIDER,
                message: format!("response is not valid JSON: {}", e),
            })?;

        let audio_content = response
            .audio_content
            .ok_or_else(|| ProviderError::InvalidResponse {
                provider: PROVIDER,
                message: "response has no audioContent".to_string(),
            })?;

        STANDARD
            .decode(audio_content.trim())
            .map_err(|e| ProviderError::InvalidResponse {
                provider: PROVIDER,
                message: format!("audioContent is not valid base64: {}", e),
            })
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    fn kind(&self) -> ProviderKind {
        PROVIDER
    }

    async fn synthesize(
        &self,
        request: &SynthesisRequest,
        _staging: &Path,
    ) -> Result<SynthesisResult, ProviderError> {
        let language = request.language();
        let voice = voices::google_voice(language).ok_or(ProviderError::UnsupportedLanguage {
            provider: PROVIDER,
            language,
        })?;

        tracing::info!(
            provider = "google",
            language_code = voice.language_code,
            voice = voice.name,
            text_length = request.text().len(),
            "Calling Google text:synthesize"
        );

        let response = self
            .http_client
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(&Self::build_body(request.text(), voice))
            .send()
            .await
            .map_err(|source| ProviderError::Transport {
                provider: PROVIDER,
                source: source.without_url(),
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ProviderError::Transport {
                provider: PROVIDER,
                source: source.without_url(),
            })?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                provider: PROVIDER,
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let audio = Self::decode_audio(&body)?;
        if audio.is_empty() {
            return Err(ProviderError::EmptyOutput { provider: PROVIDER });
        }

        tracing::debug!(audio_size = audio.len(), "Google audio decoded");

        Ok(SynthesisResult::Audio(audio))
    }
}
