use super::language::LanguageCode;
use super::request::ProviderKind;
use super::voices;
use std::time::Duration;

/// Invalid invocation, detected before any provider is contacted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("You have to provide one of the arguments `--use-say`, `--use-amazon`, `--use-google-key`, or `--use-elevenlabs-key`")]
    NoProviderSelected,
    #[error("Only one text-to-speech engine can be used at a time, got: {}", flags(.0))]
    ConflictingProviders(Vec<ProviderKind>),
    #[error(
        "Language `{language}` is not supported by the {provider} text-to-speech engine (supported: {})",
        languages(.provider)
    )]
    LanguageUnsupported {
        provider: ProviderKind,
        language: LanguageCode,
    },
    #[error("The API key passed to `{}` is empty", .0.flag())]
    EmptyCredential(ProviderKind),
}

fn flags(providers: &[ProviderKind]) -> String {
    providers
        .iter()
        .map(|provider| format!("`{}`", provider.flag()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn languages(provider: &ProviderKind) -> String {
    voices::supported_languages(*provider)
        .iter()
        .map(LanguageCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure of the selected provider while synthesizing
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{provider} request failed: {source}")]
    Transport {
        provider: ProviderKind,
        #[source]
        source: reqwest::Error,
    },
    #[error("{provider} API request failed with status {status}: {body}")]
    Status {
        provider: ProviderKind,
        status: u16,
        body: String,
    },
    #[error("{provider} returned an invalid response: {message}")]
    InvalidResponse {
        provider: ProviderKind,
        message: String,
    },
    #[error("{provider}: could not start `{program}`: {source}")]
    Spawn {
        provider: ProviderKind,
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{provider}: `{program}` exited with {status}: {stderr}")]
    Process {
        provider: ProviderKind,
        program: String,
        status: String,
        stderr: String,
    },
    #[error("{provider}: `{program}` did not finish within {}s", .timeout.as_secs())]
    Timeout {
        provider: ProviderKind,
        program: String,
        timeout: Duration,
    },
    #[error("{provider} has no voice for language `{language}`")]
    UnsupportedLanguage {
        provider: ProviderKind,
        language: LanguageCode,
    },
    #[error("{provider} produced no audio")]
    EmptyOutput { provider: ProviderKind },
    #[error("{provider}: {source}")]
    Io {
        provider: ProviderKind,
        #[source]
        source: std::io::Error,
    },
}

impl ProviderError {
    pub fn provider(&self) -> ProviderKind {
        match self {
            ProviderError::Transport { provider, .. }
            | ProviderError::Status { provider, .. }
            | ProviderError::InvalidResponse { provider, .. }
            | ProviderError::Spawn { provider, .. }
            | ProviderError::Process { provider, .. }
            | ProviderError::Timeout { provider, .. }
            | ProviderError::UnsupportedLanguage { provider, .. }
            | ProviderError::EmptyOutput { provider }
            | ProviderError::Io { provider, .. } => *provider,
        }
    }
}
