//! Per-provider voice tables.
//!
//! A language missing from a provider's table cannot be synthesized by that
//! provider and is rejected during validation.

use super::language::LanguageCode;
use super::request::ProviderKind;
use serde::Serialize;

/// Google voice selection, serialized as the `voice` object of the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleVoice {
    pub language_code: &'static str,
    /// Empty lets the API pick its default voice for the locale
    #[serde(skip_serializing_if = "str::is_empty")]
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceDescriptor {
    Name(&'static str),
    Google(GoogleVoice),
}

/// macOS `say` voices
pub fn say_voice(language: LanguageCode) -> Option<&'static str> {
    match language {
        LanguageCode::German => Some("Anna"),
        LanguageCode::English => Some("Samantha"),
        LanguageCode::French => Some("Thomas"),
        LanguageCode::Dutch => Some("Xander"),
        LanguageCode::Spanish => Some("Monica"),
        LanguageCode::Czech => Some("Zuzana"),
        LanguageCode::Italian => Some("Alice"),
    }
}

/// Amazon Polly voice ids
/// See: https://docs.aws.amazon.com/polly/latest/dg/voicelist.html
pub fn polly_voice(language: LanguageCode) -> Option<&'static str> {
    match language {
        LanguageCode::German => Some("Vicki"),
        LanguageCode::English => Some("Joanna"),
        LanguageCode::French => Some("Celine"),
        LanguageCode::Dutch => Some("Lotte"),
        LanguageCode::Spanish => Some("Lucia"),
        LanguageCode::Italian => Some("Carla"),
        LanguageCode::Czech => None,
    }
}

pub fn google_voice(language: LanguageCode) -> Option<GoogleVoice> {
    let (language_code, name) = match language {
        LanguageCode::German => ("de-DE", "de-DE-Wavenet-C"),
        LanguageCode::English => ("en-US", "en-US-Wavenet-C"),
        LanguageCode::French => ("fr-FR", "fr-FR-Wavenet-C"),
        LanguageCode::Dutch => ("nl-NL", "nl-NL-Wavenet-A"),
        LanguageCode::Spanish => ("es-ES", ""),
        LanguageCode::Czech => ("cs-CZ", "cs-CZ-Wavenet-A"),
        LanguageCode::Italian => ("it-IT", "it-IT-Standard-B"),
    };
    Some(GoogleVoice {
        language_code,
        name,
    })
}

/// ElevenLabs library voices per language.
///
/// Only eligibility is read from this table; synthesis always goes through
/// [`ELEVENLABS_VOICE_ID`], which speaks every language via the
/// multilingual model.
/// See: https://elevenlabs.io/app/voice-library
pub fn elevenlabs_voice(language: LanguageCode) -> Option<&'static str> {
    match language {
        LanguageCode::German => Some("Ewvy14akxdhONg4fmNry"),  // Finnegan Fairytale
        LanguageCode::English => Some("NOpBlnGInO9m6vDvFkFC"), // Grandpa Spuds Oxley
        LanguageCode::French => Some("FvmvwvObRqIHojkEGh5N"),  // Adina
        LanguageCode::Dutch => Some("YUdpWWny7k5yb4QCeweX"),   // Ruth
        LanguageCode::Spanish => Some("KHCvMklQZZo0O30ERnVn"), // Sara Martin
        LanguageCode::Italian => Some("3DPhHWXDY263XJ1d2EPN"), // Linda Fiore
        LanguageCode::Czech => None,
    }
}

pub const ELEVENLABS_VOICE_ID: &str = "uvysWDLbKpA4XvpD3GI6";
pub const ELEVENLABS_MODEL_ID: &str = "eleven_multilingual_v2";

/// Look up the voice a provider uses for a language
pub fn voice_for(provider: ProviderKind, language: LanguageCode) -> Option<VoiceDescriptor> {
    match provider {
        ProviderKind::Say => say_voice(language).map(VoiceDescriptor::Name),
        ProviderKind::Amazon => polly_voice(language).map(VoiceDescriptor::Name),
        ProviderKind::Google => google_voice(language).map(VoiceDescriptor::Google),
        ProviderKind::ElevenLabs => elevenlabs_voice(language).map(VoiceDescriptor::Name),
    }
}

pub fn supported_languages(provider: ProviderKind) -> Vec<LanguageCode> {
    LanguageCode::ALL
        .into_iter()
        .filter(|language| voice_for(provider, *language).is_some())
        .collect()
}
