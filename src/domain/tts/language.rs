use clap::ValueEnum;

/// Language tags accepted on the command line.
///
/// Czech keeps the historical `cz` tag rather than ISO 639-1 `cs`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum LanguageCode {
    #[default]
    #[value(name = "de")]
    German,
    #[value(name = "en")]
    English,
    #[value(name = "fr")]
    French,
    #[value(name = "nl")]
    Dutch,
    #[value(name = "es")]
    Spanish,
    #[value(name = "cz")]
    Czech,
    #[value(name = "it")]
    Italian,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 7] = [
        LanguageCode::German,
        LanguageCode::English,
        LanguageCode::French,
        LanguageCode::Dutch,
        LanguageCode::Spanish,
        LanguageCode::Czech,
        LanguageCode::Italian,
    ];

    /// Get the language tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::German => "de",
            LanguageCode::English => "en",
            LanguageCode::French => "fr",
            LanguageCode::Dutch => "nl",
            LanguageCode::Spanish => "es",
            LanguageCode::Czech => "cz",
            LanguageCode::Italian => "it",
        }
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
