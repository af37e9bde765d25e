//! Supported display languages.

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[allow(missing_docs)]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
    Hi,
    Zh,
    Ja,
    It,
}

/// All languages in picker order (index 0 = English).
pub const ALL_LANGUAGES: [Language; 8] = [
    Language::En,
    Language::Es,
    Language::Fr,
    Language::De,
    Language::Hi,
    Language::Zh,
    Language::Ja,
    Language::It,
];

const CODES: [&str; 8] = ["en", "es", "fr", "de", "hi", "zh", "ja", "it"];

const ENGLISH_NAMES: [&str; 8] = [
    "English", "Spanish", "French", "German", "Hindi", "Chinese", "Japanese", "Italian",
];

const NATIVE_NAMES: [&str; 8] = [
    "English",
    "Español",
    "Français",
    "Deutsch",
    "हिन्दी",
    "中文",
    "日本語",
    "Italiano",
];

impl Language {
    /// 0-based index into the per-language string tables.
    pub const fn index(self) -> usize {
        match self {
            Self::En => 0,
            Self::Es => 1,
            Self::Fr => 2,
            Self::De => 3,
            Self::Hi => 4,
            Self::Zh => 5,
            Self::Ja => 6,
            Self::It => 7,
        }
    }

    /// ISO 639-1 code, e.g. `"fr"`.
    pub fn code(self) -> &'static str {
        CODES[self.index()]
    }

    /// English name of the language.
    pub fn name(self) -> &'static str {
        ENGLISH_NAMES[self.index()]
    }

    /// Name of the language in that language.
    pub fn native_name(self) -> &'static str {
        NATIVE_NAMES[self.index()]
    }

    /// Look up a language by its ISO 639-1 code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        CODES
            .iter()
            .position(|c| c.eq_ignore_ascii_case(code))
            .map(|i| ALL_LANGUAGES[i])
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Pick a supported language from a device locale tag.
///
/// Only the primary subtag is considered (`"fr-CA"` and `"fr_FR"` are both
/// French). Unsupported or empty tags fall back to English.
pub fn detect_language(locale_tag: &str) -> Language {
    let primary = locale_tag
        .split(['-', '_', '.'])
        .next()
        .unwrap_or_default();
    Language::from_code(primary).unwrap_or_default()
}
