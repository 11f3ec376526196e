use super::error::ProviderError;
use super::language::LanguageCode;
use super::request::{ProviderSelection, SynthesisRequest};
use super::validator;
use crate::error::AppResult;
use crate::infrastructure::output::{self, StagedOutput};
use crate::infrastructure::repositories::{ProviderFactory, SynthesisResult};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

pub struct TtsService {
    providers: Arc<dyn ProviderFactory>,
}

impl TtsService {
    pub fn new(providers: Arc<dyn ProviderFactory>) -> Self {
        Self { providers }
    }

    /// Validate the inputs and synthesize `text` into a new file at `output`
    pub async fn synthesize_to_file(
        &self,
        text: impl Into<String>,
        output: impl Into<PathBuf>,
        language: LanguageCode,
        selection: &ProviderSelection,
    ) -> AppResult<PathBuf> {
        let request = validator::build_request(text, output, language, selection)?;
        self.synthesize(request).await
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize a validated request into its output file
    ///
    /// This operation:
    /// - Refuses to run when the output file already exists
    /// - Calls the selected provider exactly once, without retries
    /// - Stages the audio and moves it into place only on success
    ///
    /// Returns the path of the written file
    async fn synthesize(&self, request: SynthesisRequest) -> AppResult<PathBuf>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(&self, request: SynthesisRequest) -> AppResult<PathBuf> {
        let start_time = std::time::Instant::now();

        // 1. Never touch an existing file
        output::ensure_absent(request.output())?;

        tracing::info!(
            output = %request.output().display(),
            provider = %request.provider().kind(),
            language = %request.language(),
            text_length = request.text().len(),
            "Generating speech"
        );

        // 2. Stage next to the destination
        let provider = self.providers.create(request.provider())?;
        let mut staged = StagedOutput::create(request.output())?;

        // 3. Synthesize
        let result = provider
            .synthesize(&request, staged.path())
            .await
            .map_err(|err| {
                tracing::error!(provider = %err.provider(), error = %err, "TTS synthesis failed");
                err
            })?;

        // 4. Persist
        match result {
            SynthesisResult::Audio(audio) => staged.write_audio(&audio)?,
            SynthesisResult::Rendered => {
                if staged.size_bytes()? == 0 {
                    return Err(ProviderError::EmptyOutput {
                        provider: provider.kind(),
                    }
                    .into());
                }
            }
        }
        let audio_size_bytes = staged.size_bytes()?;
        let written = staged.commit()?;

        let duration = start_time.elapsed();
        tracing::info!(
            provider = %provider.kind(),
            output = %written.display(),
            latency_ms = duration.as_millis(),
            audio_size_bytes = audio_size_bytes,
            "TTS synthesis completed"
        );

        Ok(written)
    }
}
