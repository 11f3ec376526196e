use super::error::UsageError;
use super::language::LanguageCode;
use super::request::{ProviderChoice, ProviderKind, ProviderSelection, SynthesisRequest};
use super::voices;
use std::path::PathBuf;

/// Resolve the selection to exactly one provider that can speak `language`.
///
/// Pure: never touches the network, a process or the filesystem.
pub fn validate(
    selection: &ProviderSelection,
    language: LanguageCode,
) -> Result<ProviderChoice, UsageError> {
    let selected = selection.selected();
    let provider = match selected.len() {
        0 => return Err(UsageError::NoProviderSelected),
        1 => selected[0],
        _ => return Err(UsageError::ConflictingProviders(selected)),
    };

    if voices::voice_for(provider, language).is_none() {
        return Err(UsageError::LanguageUnsupported { provider, language });
    }

    match provider {
        ProviderKind::Say => Ok(ProviderChoice::Say),
        ProviderKind::Amazon => Ok(ProviderChoice::Amazon),
        ProviderKind::Google => credential(provider, selection.google_key.as_deref())
            .map(|api_key| ProviderChoice::Google { api_key }),
        ProviderKind::ElevenLabs => credential(provider, selection.elevenlabs_key.as_deref())
            .map(|api_key| ProviderChoice::ElevenLabs { api_key }),
    }
}

fn credential(provider: ProviderKind, key: Option<&str>) -> Result<String, UsageError> {
    match key.map(str::trim) {
        Some(key) if !key.is_empty() => Ok(key.to_string()),
        _ => Err(UsageError::EmptyCredential(provider)),
    }
}

/// Validate and bundle everything one run needs
pub fn build_request(
    text: impl Into<String>,
    output: impl Into<PathBuf>,
    language: LanguageCode,
    selection: &ProviderSelection,
) -> Result<SynthesisRequest, UsageError> {
    let provider = validate(selection, language)?;
    Ok(SynthesisRequest::new(
        text.into(),
        language,
        provider,
        output.into(),
    ))
}
