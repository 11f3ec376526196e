use super::language::LanguageCode;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// macOS `say` followed by an ffmpeg transcode
    Say,
    /// Amazon Polly through the AWS CLI
    Amazon,
    Google,
    ElevenLabs,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Say => "say",
            ProviderKind::Amazon => "amazon-polly",
            ProviderKind::Google => "google",
            ProviderKind::ElevenLabs => "elevenlabs",
        }
    }

    /// Command line flag selecting this provider
    pub fn flag(&self) -> &'static str {
        match self {
            ProviderKind::Say => "--use-say",
            ProviderKind::Amazon => "--use-amazon",
            ProviderKind::Google => "--use-google-key",
            ProviderKind::ElevenLabs => "--use-elevenlabs-key",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw provider selectors as they arrive from the command line.
/// Nothing here guarantees that exactly one is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderSelection {
    pub use_say: bool,
    pub use_amazon: bool,
    pub google_key: Option<String>,
    pub elevenlabs_key: Option<String>,
}

impl ProviderSelection {
    pub fn say() -> Self {
        Self {
            use_say: true,
            ..Self::default()
        }
    }

    pub fn amazon() -> Self {
        Self {
            use_amazon: true,
            ..Self::default()
        }
    }

    pub fn google(api_key: impl Into<String>) -> Self {
        Self {
            google_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn elevenlabs(api_key: impl Into<String>) -> Self {
        Self {
            elevenlabs_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Providers whose selector is present, in flag order
    pub fn selected(&self) -> Vec<ProviderKind> {
        let mut selected = Vec::new();
        if self.use_say {
            selected.push(ProviderKind::Say);
        }
        if self.use_amazon {
            selected.push(ProviderKind::Amazon);
        }
        if self.google_key.is_some() {
            selected.push(ProviderKind::Google);
        }
        if self.elevenlabs_key.is_some() {
            selected.push(ProviderKind::ElevenLabs);
        }
        selected
    }
}

/// The single provider a request runs against, with its credential
#[derive(Clone, PartialEq, Eq)]
pub enum ProviderChoice {
    Say,
    Amazon,
    Google { api_key: String },
    ElevenLabs { api_key: String },
}

impl ProviderChoice {
    pub fn kind(&self) -> ProviderKind {
        match self {
            ProviderChoice::Say => ProviderKind::Say,
            ProviderChoice::Amazon => ProviderKind::Amazon,
            ProviderChoice::Google { .. } => ProviderKind::Google,
            ProviderChoice::ElevenLabs { .. } => ProviderKind::ElevenLabs,
        }
    }
}

// Keys stay out of logs
impl std::fmt::Debug for ProviderChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderChoice::Say | ProviderChoice::Amazon => write!(f, "{}", self.kind()),
            ProviderChoice::Google { .. } | ProviderChoice::ElevenLabs { .. } => {
                write!(f, "{} {{ api_key: <redacted> }}", self.kind())
            }
        }
    }
}

/// A validated synthesis request. Only [`super::validator::validate`] builds
/// one, so the provider is known to support the language.
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    text: String,
    language: LanguageCode,
    provider: ProviderChoice,
    output: PathBuf,
}

impl SynthesisRequest {
    pub(super) fn new(
        text: String,
        language: LanguageCode,
        provider: ProviderChoice,
        output: PathBuf,
    ) -> Self {
        Self {
            text,
            language,
            provider,
            output,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> LanguageCode {
        self.language
    }

    pub fn provider(&self) -> &ProviderChoice {
        &self.provider
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}
