use super::tts_repository::{SynthesisResult, TtsRepository};
use crate::domain::tts::{voices, ProviderError, ProviderKind, SynthesisRequest};
use async_trait::async_trait;
use reqwest::{header, StatusCode};
use serde::Serialize;
use std::path::Path;

const PROVIDER: ProviderKind = ProviderKind::ElevenLabs;

#[derive(Debug, Serialize)]
struct TextToSpeechRequest<'a> {
    text: &'a str,
    voice_settings: VoiceSettings,
    model_id: &'static str,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f64,
    similarity_boost: f64,
}

/// ElevenLabs implementation of TTS repository.
///
/// Every language goes to the same multilingual voice; the language table
/// only decides eligibility.
pub struct ElevenLabsTtsRepository {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ElevenLabsTtsRepository {
    pub fn new(http_client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            voices::ELEVENLABS_VOICE_ID
        )
    }

    fn build_body(text: &str) -> TextToSpeechRequest<'_> {
        TextToSpeechRequest {
            text,
            voice_settings: VoiceSettings {
                stability: 0.5,
                similarity_boost: 0.7,
            },
            model_id: voices::ELEVENLABS_MODEL_ID,
        }
    }
}

#[async_trait]
impl TtsRepository for ElevenLabsTtsRepository {
    fn kind(&self) -> ProviderKind {
        PROVIDER
    }

    async fn synthesize(
        &self,
        request: &SynthesisRequest,
        _staging: &Path,
    ) -> Result<SynthesisResult, ProviderError> {
        let language = request.language();
        if voices::elevenlabs_voice(language).is_none() {
            return Err(ProviderError::UnsupportedLanguage {
                provider: PROVIDER,
                language,
            });
        }

        tracing::info!(
            provider = "elevenlabs",
            language = %language,
            voice_id = voices::ELEVENLABS_VOICE_ID,
            model_id = voices::ELEVENLABS_MODEL_ID,
            text_length = request.text().len(),
            "Calling ElevenLabs text-to-speech"
        );

        let response = self
            .http_client
            .post(self.endpoint())
            .header("xi-api-key", &self.api_key)
            .header(header::ACCEPT, "audio/mpeg")
            .json(&Self::build_body(request.text()))
            .send()
            .await
            .map_err(|source| ProviderError::Transport {
                provider: PROVIDER,
                source,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ProviderError::Transport {
                provider: PROVIDER,
                source,
            })?;

        if status != StatusCode::OK {
            let body = String::from_utf8_lossy(&body).into_owned();
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                "ElevenLabs API request failed"
            );
            return Err(ProviderError::Status {
                provider: PROVIDER,
                status: status.as_u16(),
                body,
            });
        }

        if body.is_empty() {
            return Err(ProviderError::EmptyOutput { provider: PROVIDER });
        }

        Ok(SynthesisResult::Audio(body.to_vec()))
    }
}
