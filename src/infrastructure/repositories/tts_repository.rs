use crate::domain::tts::{ProviderError, ProviderKind, SynthesisRequest};
use async_trait::async_trait;
use std::path::Path;

/// What a provider hands back after synthesis
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisResult {
    /// MP3 bytes still to be written
    Audio(Vec<u8>),
    /// The provider's tooling already wrote the MP3 to the staging path
    Rendered,
}

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (macOS `say`, Amazon Polly, Google, ElevenLabs)
///
/// Implementations are responsible for:
/// - Provider-specific voice selection
/// - Building the provider's request (process arguments or HTTP payload)
/// - Turning every failure into a [`ProviderError`]; nothing is retried
#[async_trait]
pub trait TtsRepository: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Synthesize the request's text to MP3
    ///
    /// # Arguments
    /// * `request` - The validated request
    /// * `staging` - Path that becomes the output file once synthesis succeeds.
    ///   Providers driving external tools write there directly.
    async fn synthesize(
        &self,
        request: &SynthesisRequest,
        staging: &Path,
    ) -> Result<SynthesisResult, ProviderError>;
}
