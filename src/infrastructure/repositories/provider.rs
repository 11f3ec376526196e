use super::elevenlabs_tts_repository::ElevenLabsTtsRepository;
use super::google_tts_repository::GoogleTtsRepository;
use super::polly_tts_repository::PollyTtsRepository;
use super::say_tts_repository::SayTtsRepository;
use super::tts_repository::{SynthesisResult, TtsRepository};
use crate::domain::tts::{ProviderChoice, ProviderError, ProviderKind, SynthesisRequest};
use crate::infrastructure::config::Config;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// One variant per supported provider
pub enum Provider {
    Say(SayTtsRepository),
    Amazon(PollyTtsRepository),
    Google(GoogleTtsRepository),
    ElevenLabs(ElevenLabsTtsRepository),
}

impl Provider {
    pub fn from_choice(choice: &ProviderChoice, config: &Config) -> Result<Self, ProviderError> {
        let provider = match choice {
            ProviderChoice::Say => Provider::Say(SayTtsRepository::new(config)),
            ProviderChoice::Amazon => Provider::Amazon(PollyTtsRepository::new(config)),
            ProviderChoice::Google { api_key } => Provider::Google(GoogleTtsRepository::new(
                http_client(ProviderKind::Google, config)?,
                config.google_tts_url.clone(),
                api_key.clone(),
            )),
            ProviderChoice::ElevenLabs { api_key } => {
                Provider::ElevenLabs(ElevenLabsTtsRepository::new(
                    http_client(ProviderKind::ElevenLabs, config)?,
                    config.elevenlabs_tts_url.clone(),
                    api_key.clone(),
                ))
            }
        };
        Ok(provider)
    }

    fn repository(&self) -> &dyn TtsRepository {
        match self {
            Provider::Say(repo) => repo,
            Provider::Amazon(repo) => repo,
            Provider::Google(repo) => repo,
            Provider::ElevenLabs(repo) => repo,
        }
    }
}

fn http_client(provider: ProviderKind, config: &Config) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .map_err(|source| ProviderError::Transport { provider, source })
}

#[async_trait]
impl TtsRepository for Provider {
    fn kind(&self) -> ProviderKind {
        self.repository().kind()
    }

    async fn synthesize(
        &self,
        request: &SynthesisRequest,
        staging: &Path,
    ) -> Result<SynthesisResult, ProviderError> {
        self.repository().synthesize(request, staging).await
    }
}

/// Builds the repository for a validated provider choice
pub trait ProviderFactory: Send + Sync {
    fn create(&self, choice: &ProviderChoice) -> Result<Arc<dyn TtsRepository>, ProviderError>;
}

/// Factory backed by the process configuration
pub struct ConfiguredProviders {
    config: Arc<Config>,
}

impl ConfiguredProviders {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

impl ProviderFactory for ConfiguredProviders {
    fn create(&self, choice: &ProviderChoice) -> Result<Arc<dyn TtsRepository>, ProviderError> {
        Ok(Arc::new(Provider::from_choice(choice, &self.config)?))
    }
}
